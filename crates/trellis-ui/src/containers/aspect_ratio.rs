use super::{max_minimum, visible, ChildInfo, LayoutPolicy, Placement};
use crate::resources::MeasureContext;
use trellis_ui_graphics::{Rect, Size};
use trellis_ui_layout::{align_in, fit_aspect, BoxAlignment, StretchMode};

/// Resizes children to a target width/height ratio, then aligns them in
/// the leftover space.
#[derive(Clone, Debug, PartialEq)]
pub struct AspectRatioContainer {
    pub ratio: f32,
    pub stretch_mode: StretchMode,
    pub alignment_horizontal: BoxAlignment,
    pub alignment_vertical: BoxAlignment,
}

impl Default for AspectRatioContainer {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            stretch_mode: StretchMode::Fit,
            alignment_horizontal: BoxAlignment::Center,
            alignment_vertical: BoxAlignment::Center,
        }
    }
}

impl AspectRatioContainer {
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio,
            ..Self::default()
        }
    }

    pub fn with_stretch_mode(mut self, mode: StretchMode) -> Self {
        self.stretch_mode = mode;
        self
    }

    pub fn with_alignment(mut self, horizontal: BoxAlignment, vertical: BoxAlignment) -> Self {
        self.alignment_horizontal = horizontal;
        self.alignment_vertical = vertical;
        self
    }
}

impl LayoutPolicy for AspectRatioContainer {
    fn minimum_size(&self, children: &[ChildInfo], _cx: &MeasureContext<'_>) -> Size {
        max_minimum(visible(children))
    }

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        _cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        visible(children)
            .map(|child| {
                let fitted = fit_aspect(size, self.ratio, self.stretch_mode, child.minimum);
                let origin = align_in(
                    size,
                    fitted,
                    self.alignment_horizontal,
                    self.alignment_vertical,
                );
                Placement::new(child.id, Rect::from_origin_size(origin, fitted))
            })
            .collect()
    }
}
