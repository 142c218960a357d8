use super::{visible, ChildInfo, LayoutPolicy, Placement};
use crate::resources::MeasureContext;
use smallvec::SmallVec;
use trellis_ui_graphics::{Rect, Size};
use trellis_ui_layout::{distribute_linear, linear_minimum, Axis, BoxAlignment, LinearItem};

/// Stacks children along one axis.
///
/// Every child gets its minimum along the main axis; leftover space goes
/// to expanding children by stretch ratio, or shifts the whole group by
/// `alignment` when nothing expands.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxContainer {
    pub axis: Axis,
    pub alignment: BoxAlignment,
    pub separation: f32,
}

impl BoxContainer {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            alignment: BoxAlignment::Begin,
            separation: 4.0,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn with_separation(mut self, separation: f32) -> Self {
        self.separation = separation;
        self
    }

    pub fn with_alignment(mut self, alignment: BoxAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn items<'a>(&self, children: impl Iterator<Item = &'a ChildInfo>) -> SmallVec<[LinearItem; 8]> {
        children
            .map(|child| {
                let flags = child.flags(self.axis);
                LinearItem {
                    min: self.axis.main(child.minimum),
                    expand: flags.expand,
                    stretch_ratio: flags.stretch_ratio,
                }
            })
            .collect()
    }
}

impl LayoutPolicy for BoxContainer {
    fn minimum_size(&self, children: &[ChildInfo], _cx: &MeasureContext<'_>) -> Size {
        let items = self.items(visible(children));
        let main = linear_minimum(&items, self.separation);
        let cross = visible(children)
            .map(|child| self.axis.cross(child.minimum))
            .fold(0.0, f32::max);
        self.axis.size(main, cross)
    }

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        _cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        let shown: SmallVec<[&ChildInfo; 8]> = visible(children).collect();
        let items = self.items(shown.iter().copied());
        let slots = distribute_linear(&items, self.axis.main(size), self.separation, self.alignment);
        let cross_extent = self.axis.cross(size);
        let cross_axis = self.axis.cross_axis();

        shown
            .iter()
            .zip(slots.iter())
            .map(|(child, slot)| {
                let main_flags = child.flags(self.axis);
                let cross_flags = child.flags(cross_axis);

                let min_main = self.axis.main(child.minimum);
                let (main_offset, main_extent) = if main_flags.fill {
                    (slot.offset, slot.extent)
                } else {
                    (
                        slot.offset + main_flags.shrink.offset(slot.extent, min_main),
                        min_main,
                    )
                };

                let min_cross = self.axis.cross(child.minimum);
                let (cross_offset, cross_size) = if cross_flags.fill {
                    (0.0, cross_extent)
                } else {
                    (cross_flags.shrink.offset(cross_extent, min_cross), min_cross)
                };

                let rect = Rect::from_origin_size(
                    self.axis.point(main_offset, cross_offset),
                    self.axis.size(main_extent, cross_size),
                );
                Placement::new(child.id, rect)
            })
            .collect()
    }
}
