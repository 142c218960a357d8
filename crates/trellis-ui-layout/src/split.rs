//! Divider math for two-pane splits

/// Clamps a requested split offset into
/// `[minimum, extent - dragger - minimum]`.
///
/// Negative requests are measured back from the far end, so `-20` asks
/// for the divider to sit 20 pixels before the end. When the extent is too
/// small for both minimums the lower bound wins.
pub fn clamp_split_offset(requested: f32, extent: f32, dragger: f32, minimum: f32) -> f32 {
    let minimum = minimum.max(0.0);
    let wrapped = if requested < 0.0 {
        extent - dragger + requested
    } else {
        requested
    };
    let upper = (extent - dragger - minimum).max(minimum);
    wrapped.clamp(minimum, upper)
}

/// Main-axis spans of the two panes of a split.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitPanes {
    pub first_offset: f32,
    pub first_extent: f32,
    pub dragger_offset: f32,
    pub second_offset: f32,
    pub second_extent: f32,
}

/// Lays out both panes around a divider at `offset` (already clamped).
/// A collapsed split hides the first pane and gives the second the whole
/// extent.
pub fn split_panes(extent: f32, offset: f32, dragger: f32, collapsed: bool) -> SplitPanes {
    if collapsed {
        return SplitPanes {
            first_offset: 0.0,
            first_extent: 0.0,
            dragger_offset: 0.0,
            second_offset: 0.0,
            second_extent: extent.max(0.0),
        };
    }
    let second_offset = offset + dragger;
    SplitPanes {
        first_offset: 0.0,
        first_extent: offset,
        dragger_offset: offset,
        second_offset,
        second_extent: (extent - second_offset).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_clamped_into_range() {
        let extent = 300.0;
        let dragger = 8.0;
        let minimum = 20.0;
        for requested in [-1000.0, -292.0, -50.0, -1.0, 0.0, 10.0, 150.0, 272.0, 280.0, 5000.0] {
            let applied = clamp_split_offset(requested, extent, dragger, minimum);
            assert!(applied >= minimum, "{requested} -> {applied}");
            assert!(applied <= extent - dragger - minimum, "{requested} -> {applied}");
        }
    }

    #[test]
    fn negative_offsets_wrap_from_end() {
        assert_eq!(clamp_split_offset(-50.0, 300.0, 8.0, 0.0), 242.0);
    }

    #[test]
    fn collapsed_split_gives_second_pane_everything() {
        let panes = split_panes(300.0, 100.0, 8.0, true);
        assert_eq!(panes.first_extent, 0.0);
        assert_eq!(panes.second_offset, 0.0);
        assert_eq!(panes.second_extent, 300.0);
    }

    #[test]
    fn panes_surround_dragger() {
        let panes = split_panes(300.0, 100.0, 8.0, false);
        assert_eq!(panes.first_extent, 100.0);
        assert_eq!(panes.second_offset, 108.0);
        assert_eq!(panes.second_extent, 192.0);
    }
}
