use super::{visible, ChildInfo, LayoutPolicy, Placement};
use crate::resources::MeasureContext;
use smallvec::SmallVec;
use trellis_ui_graphics::Size;
use trellis_ui_layout::{flow_lines, Axis};

/// Greedy line-wrapping packer.
///
/// Children keep their minimum size and are packed along the main axis;
/// a child that would overflow starts a new line. Lines are never
/// rebalanced.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowContainer {
    pub axis: Axis,
    pub h_separation: f32,
    pub v_separation: f32,
    line_extent: f32,
    minimum_changed: bool,
}

impl FlowContainer {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            h_separation: 4.0,
            v_separation: 4.0,
            line_extent: 0.0,
            minimum_changed: false,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn with_separation(mut self, horizontal: f32, vertical: f32) -> Self {
        self.h_separation = horizontal;
        self.v_separation = vertical;
        self
    }

    fn separations(&self) -> (f32, f32) {
        match self.axis {
            Axis::Horizontal => (self.h_separation, self.v_separation),
            Axis::Vertical => (self.v_separation, self.h_separation),
        }
    }

    /// Cross-axis extent of all lines at the last sort.
    pub fn cross_extent(&self) -> f32 {
        self.line_extent
    }
}

impl LayoutPolicy for FlowContainer {
    /// The widest child along the main axis, and the cross extent the
    /// lines took at the last sort.
    fn minimum_size(&self, children: &[ChildInfo], _cx: &MeasureContext<'_>) -> Size {
        let main = visible(children)
            .map(|child| self.axis.main(child.minimum))
            .fold(0.0, f32::max);
        self.axis.size(main, self.line_extent)
    }

    fn sort_children(
        &mut self,
        size: Size,
        children: &[ChildInfo],
        _cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        let shown: SmallVec<[&ChildInfo; 8]> = visible(children).collect();
        let items: SmallVec<[Size; 8]> = shown.iter().map(|child| child.minimum).collect();
        let (main_separation, cross_separation) = self.separations();
        let layout = flow_lines(
            &items,
            self.axis,
            self.axis.main(size),
            main_separation,
            cross_separation,
        );

        let cross = self.axis.cross(layout.extent);
        if cross != self.line_extent {
            self.line_extent = cross;
            self.minimum_changed = true;
        }

        shown
            .iter()
            .zip(layout.rects)
            .map(|(child, rect)| Placement::new(child.id, rect))
            .collect()
    }

    fn take_minimum_changed(&mut self) -> bool {
        std::mem::take(&mut self.minimum_changed)
    }
}
