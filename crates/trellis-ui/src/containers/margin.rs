use super::{max_minimum, visible, ChildInfo, LayoutPolicy, Placement};
use crate::resources::MeasureContext;
use crate::widgets::DrawContext;
use trellis_ui_graphics::{Color, EdgeInsets, Rect, Size};

fn inset_children(size: Size, insets: EdgeInsets, children: &[ChildInfo]) -> Vec<Placement> {
    let area = Rect::from_size(size).inset(insets);
    visible(children)
        .map(|child| Placement::new(child.id, area))
        .collect()
}

/// Insets every visible child by fixed margins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarginContainer {
    pub margins: EdgeInsets,
}

impl MarginContainer {
    pub fn new(margins: EdgeInsets) -> Self {
        Self { margins }
    }
}

impl LayoutPolicy for MarginContainer {
    fn minimum_size(&self, children: &[ChildInfo], _cx: &MeasureContext<'_>) -> Size {
        max_minimum(visible(children)) + self.margins.extent()
    }

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        _cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        inset_children(size, self.margins, children)
    }
}

/// A themed panel drawn behind children inset by its padding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelContainer {
    /// `None` uses the theme's panel padding.
    pub padding: Option<EdgeInsets>,
    pub color: Option<Color>,
}

impl PanelContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    fn padding(&self, cx: &MeasureContext<'_>) -> EdgeInsets {
        self.padding.unwrap_or(cx.theme.panel_padding)
    }
}

impl LayoutPolicy for PanelContainer {
    fn minimum_size(&self, children: &[ChildInfo], cx: &MeasureContext<'_>) -> Size {
        max_minimum(visible(children)) + self.padding(cx).extent()
    }

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        inset_children(size, self.padding(cx), children)
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        let theme = cx.measure.theme;
        let rect = cx.rect;
        cx.rect(rect, self.color.unwrap_or(theme.panel_background));
        cx.outline(rect, theme.panel_border, 1.0);
    }
}
