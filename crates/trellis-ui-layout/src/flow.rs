//! Greedy line wrapping for flow layouts

use crate::Axis;
use trellis_ui_graphics::{Point, Rect, Size};

/// Result of packing children into lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowLayout {
    /// One rect per input item, in input order.
    pub rects: Vec<Rect>,
    /// Number of lines produced.
    pub lines: usize,
    /// Bounding size of the packed items.
    pub extent: Size,
}

/// Packs `items` along `axis`, wrapping to a new line whenever the next
/// item would cross `limit`. Each line advances by the largest cross
/// extent seen on it plus `cross_separation`. No backtracking: lines are
/// filled greedily in order.
pub fn flow_lines(
    items: &[Size],
    axis: Axis,
    limit: f32,
    main_separation: f32,
    cross_separation: f32,
) -> FlowLayout {
    let mut layout = FlowLayout {
        rects: Vec::with_capacity(items.len()),
        ..FlowLayout::default()
    };
    if items.is_empty() {
        return layout;
    }

    let mut main = 0.0_f32;
    let mut cross = 0.0_f32;
    let mut line_cross = 0.0_f32;
    let mut max_main = 0.0_f32;
    layout.lines = 1;

    for item in items {
        let item_main = axis.main(*item);
        let item_cross = axis.cross(*item);
        if main > 0.0 && main + item_main > limit {
            cross += line_cross + cross_separation;
            main = 0.0;
            line_cross = 0.0;
            layout.lines += 1;
        }
        let origin: Point = axis.point(main, cross);
        layout.rects.push(Rect::from_origin_size(origin, *item));
        max_main = max_main.max(main + item_main);
        line_cross = line_cross.max(item_cross);
        main += item_main + main_separation;
    }

    layout.extent = axis.size(max_main, cross + line_cross);
    layout
}
