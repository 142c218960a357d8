//! Uniform-cell grid placement

use trellis_ui_graphics::{Point, Size};

/// Columns actually used and rows needed for `count` cells.
pub fn grid_dimensions(count: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    if count == 0 {
        return (0, 0);
    }
    (count.min(columns), count.div_ceil(columns))
}

/// Top-left corner of the cell at `index`, filled row-major.
pub fn grid_cell_origin(index: usize, columns: usize, cell: Size, h_separation: f32, v_separation: f32) -> Point {
    let columns = columns.max(1);
    let row = index / columns;
    let column = index % columns;
    Point::new(
        column as f32 * (cell.width + h_separation),
        row as f32 * (cell.height + v_separation),
    )
}

/// Total size of a grid of `count` uniform cells.
pub fn grid_extent(count: usize, columns: usize, cell: Size, h_separation: f32, v_separation: f32) -> Size {
    let (used_columns, rows) = grid_dimensions(count, columns);
    if rows == 0 {
        return Size::ZERO;
    }
    Size::new(
        used_columns as f32 * cell.width + (used_columns as f32 - 1.0) * h_separation,
        rows as f32 * cell.height + (rows as f32 - 1.0) * v_separation,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_cells_in_four_columns_make_two_rows() {
        assert_eq!(grid_dimensions(6, 4), (4, 2));
        let origin = grid_cell_origin(5, 4, Size::new(50.0, 50.0), 4.0, 4.0);
        assert_eq!(origin, Point::new(54.0, 54.0));
    }

    #[test]
    fn extent_counts_only_used_columns() {
        let extent = grid_extent(2, 4, Size::new(10.0, 10.0), 2.0, 3.0);
        assert_eq!(extent, Size::new(22.0, 10.0));
        assert_eq!(grid_extent(0, 4, Size::new(10.0, 10.0), 2.0, 3.0), Size::ZERO);
    }

    #[test]
    fn zero_columns_behaves_like_one() {
        assert_eq!(grid_dimensions(3, 0), (1, 3));
    }
}
