use super::{max_minimum, visible, ChildInfo, LayoutPolicy, Placement};
use crate::resources::MeasureContext;
use trellis_ui_graphics::{Point, Rect, Size};

/// Keeps children at their minimum size, centered or pinned top-left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CenterContainer {
    pub use_top_left: bool,
}

impl CenterContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_left() -> Self {
        Self { use_top_left: true }
    }
}

impl LayoutPolicy for CenterContainer {
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
                let origin = if self.use_top_left {
                    Point::ZERO
                } else {
                    ((size - child.minimum) * 0.5).to_point()
                };
                Placement::new(child.id, Rect::from_origin_size(origin, child.minimum))
            })
            .collect()
    }
}
