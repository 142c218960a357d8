use super::{DrawContext, WidgetBehavior};
use trellis_ui_graphics::Color;

/// Filled background with an optional border.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f32,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            color: None,
            border_color: None,
            border_width: 1.0,
        }
    }
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_border(mut self, color: Color, width: f32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }
}

impl WidgetBehavior for Panel {
    fn draw(&self, cx: &mut DrawContext<'_>) {
        let theme = cx.measure.theme;
        let rect = cx.rect;
        cx.rect(rect, self.color.unwrap_or(theme.panel_background));
        if self.border_width > 0.0 {
            cx.outline(
                rect,
                self.border_color.unwrap_or(theme.panel_border),
                self.border_width,
            );
        }
    }
}
