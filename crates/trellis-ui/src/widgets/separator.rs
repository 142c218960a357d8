use super::{DrawContext, WidgetBehavior};
use crate::resources::MeasureContext;
use trellis_ui_graphics::{Rect, Size};
use trellis_ui_layout::Axis;

/// A thin line. A horizontal separator divides stacked content and so has
/// a minimum height; a vertical one has a minimum width.
#[derive(Clone, Debug, PartialEq)]
pub struct Separator {
    pub axis: Axis,
    /// `None` uses the theme's separator thickness.
    pub thickness: Option<f32>,
}

impl Separator {
    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            thickness: None,
        }
    }

    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            thickness: None,
        }
    }

    fn thickness(&self, cx: &MeasureContext<'_>) -> f32 {
        self.thickness.unwrap_or(cx.theme.separator_thickness)
    }
}

impl WidgetBehavior for Separator {
    fn minimum_size(&self, cx: &MeasureContext<'_>) -> Size {
        self.axis.size(0.0, self.thickness(cx))
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        let thickness = self.thickness(&cx.measure);
        let rect = cx.rect;
        let line = match self.axis {
            Axis::Horizontal => Rect::new(
                rect.x,
                rect.y + (rect.height - thickness) * 0.5,
                rect.width,
                thickness,
            ),
            Axis::Vertical => Rect::new(
                rect.x + (rect.width - thickness) * 0.5,
                rect.y,
                thickness,
                rect.height,
            ),
        };
        let color = cx.measure.theme.separator;
        cx.rect(line, color);
    }
}
