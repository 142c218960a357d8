use super::{max_minimum, visible, ChildInfo, LayoutPolicy, Placement};
use crate::resources::MeasureContext;
use trellis_ui_graphics::{Rect, Size};
use trellis_ui_layout::{grid_cell_origin, grid_extent};

/// Uniform cells filled row-major. Every cell is as large as the largest
/// visible child's minimum.
#[derive(Clone, Debug, PartialEq)]
pub struct GridContainer {
    pub columns: usize,
    pub h_separation: f32,
    pub v_separation: f32,
}

impl GridContainer {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            h_separation: 4.0,
            v_separation: 4.0,
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.set_spacing(spacing);
        self
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.h_separation = spacing;
        self.v_separation = spacing;
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }
}

impl LayoutPolicy for GridContainer {
    fn minimum_size(&self, children: &[ChildInfo], _cx: &MeasureContext<'_>) -> Size {
        let cell = max_minimum(visible(children));
        let count = visible(children).count();
        grid_extent(count, self.columns, cell, self.h_separation, self.v_separation)
    }

    fn sort_children(
        &mut self,
        _size: Size,
        children: &[ChildInfo],
        _cx: &MeasureContext<'_>,
    ) -> Vec<Placement> {
        let cell = max_minimum(visible(children));
        visible(children)
            .enumerate()
            .map(|(index, child)| {
                let origin = grid_cell_origin(
                    index,
                    self.columns,
                    cell,
                    self.h_separation,
                    self.v_separation,
                );
                Placement::new(child.id, Rect::from_origin_size(origin, cell))
            })
            .collect()
    }
}
