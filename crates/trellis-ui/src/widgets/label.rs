use super::{DrawContext, WidgetBehavior};
use crate::resources::MeasureContext;
use trellis_ui_graphics::{Color, Point, Size};
use trellis_ui_layout::BoxAlignment;

/// Static text. Its minimum size is the measured text box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Label {
    pub text: String,
    /// `None` uses the configured default font size.
    pub font_size: Option<f32>,
    /// `None` uses the theme's text color.
    pub color: Option<Color>,
    pub horizontal_alignment: BoxAlignment,
    pub vertical_alignment: BoxAlignment,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_alignment(mut self, horizontal: BoxAlignment, vertical: BoxAlignment) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl WidgetBehavior for Label {
    fn minimum_size(&self, cx: &MeasureContext<'_>) -> Size {
        cx.measure_text(&self.text, self.font_size)
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        if self.text.is_empty() {
            return;
        }
        let measured = cx.measure.measure_text(&self.text, self.font_size);
        let rect = cx.rect;
        let position = Point::new(
            rect.x + self.horizontal_alignment.offset(rect.width, measured.width),
            rect.y + self.vertical_alignment.offset(rect.height, measured.height),
        );
        let color = self.color.unwrap_or(cx.measure.theme.text);
        cx.text(&self.text, position, self.font_size, color);
    }
}
