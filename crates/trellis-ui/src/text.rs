//! Text measurement seam
//!
//! Shaping is out of scope; widgets only need a bounding box for their
//! minimum size and for alignment.

use trellis_ui_graphics::Size;

pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

/// Fixed-advance measurer: every glyph is `advance * font_size` wide and
/// each line `line_height * font_size` tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.0,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        Size::new(
            widest as f32 * self.advance * font_size,
            lines as f32 * self.line_height * font_size,
        )
    }
}
