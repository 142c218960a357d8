//! Anchor/margin resolution and the named anchor presets.

use trellis_ui_graphics::{EdgeInsets, Point, Size};

/// Normalized (0..=1) parent-relative positions tracked by each edge of a
/// control.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchors {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Anchors {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const FULL_RECT: Anchors = Anchors::new(0.0, 0.0, 1.0, 1.0);

    #[inline]
    pub fn stretches_horizontally(&self) -> bool {
        self.left != self.right
    }

    #[inline]
    pub fn stretches_vertically(&self) -> bool {
        self.top != self.bottom
    }

    /// True when neither axis stretches with the parent.
    #[inline]
    pub fn is_point(&self) -> bool {
        !self.stretches_horizontally() && !self.stretches_vertically()
    }
}

/// Output of [`resolve_anchors`], relative to the parent's content origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRect {
    pub position: Point,
    pub size: Size,
}

/// Resolves a control's rect against its parent's size.
///
/// The leading edges are `anchor * parent + margin` and the trailing edges
/// `anchor * parent - margin`. When either axis stretches, both axes take
/// their size from the trailing edges; point anchors keep `current` size.
/// Sizes never go negative.
pub fn resolve_anchors(
    anchors: Anchors,
    margins: EdgeInsets,
    parent: Size,
    current: Size,
) -> ResolvedRect {
    let begin = Point::new(
        anchors.left * parent.width + margins.left,
        anchors.top * parent.height + margins.top,
    );
    let end = Point::new(
        anchors.right * parent.width - margins.right,
        anchors.bottom * parent.height - margins.bottom,
    );

    let size = if anchors.is_point() {
        current
    } else {
        Size::new(end.x - begin.x, end.y - begin.y)
    };

    ResolvedRect {
        position: begin,
        size: size.non_negative(),
    }
}

/// Leading margins that place a control at `position` inside a parent of
/// size `parent`. When the anchors stretch, the trailing margins shift by
/// the same amount so the resolved size is unchanged.
pub fn margins_for_position(
    anchors: Anchors,
    margins: EdgeInsets,
    parent: Size,
    position: Point,
) -> EdgeInsets {
    let left = position.x - anchors.left * parent.width;
    let top = position.y - anchors.top * parent.height;
    if anchors.is_point() {
        return EdgeInsets {
            left,
            top,
            ..margins
        };
    }
    EdgeInsets {
        left,
        top,
        right: margins.right - (left - margins.left),
        bottom: margins.bottom - (top - margins.top),
    }
}

/// Margins for which [`resolve_anchors`] reproduces `position` and `size`
/// on every axis, stretching or not.
pub fn margins_for_rect(anchors: Anchors, parent: Size, position: Point, size: Size) -> EdgeInsets {
    EdgeInsets {
        left: position.x - anchors.left * parent.width,
        top: position.y - anchors.top * parent.height,
        right: anchors.right * parent.width - (position.x + size.width),
        bottom: anchors.bottom * parent.height - (position.y + size.height),
    }
}

/// Content minimum size grown by the absolute margins on each axis.
pub fn combined_minimum_size(minimum: Size, margins: EdgeInsets) -> Size {
    minimum + margins.abs_extent()
}

/// Named anchor combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutPreset {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    CenterLeft,
    CenterTop,
    CenterRight,
    CenterBottom,
    Center,
    LeftWide,
    TopWide,
    RightWide,
    BottomWide,
    VCenterWide,
    HCenterWide,
    FullRect,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 16] = [
        LayoutPreset::TopLeft,
        LayoutPreset::TopRight,
        LayoutPreset::BottomLeft,
        LayoutPreset::BottomRight,
        LayoutPreset::CenterLeft,
        LayoutPreset::CenterTop,
        LayoutPreset::CenterRight,
        LayoutPreset::CenterBottom,
        LayoutPreset::Center,
        LayoutPreset::LeftWide,
        LayoutPreset::TopWide,
        LayoutPreset::RightWide,
        LayoutPreset::BottomWide,
        LayoutPreset::VCenterWide,
        LayoutPreset::HCenterWide,
        LayoutPreset::FullRect,
    ];

    pub const fn anchors(self) -> Anchors {
        match self {
            LayoutPreset::TopLeft => Anchors::new(0.0, 0.0, 0.0, 0.0),
            LayoutPreset::TopRight => Anchors::new(1.0, 0.0, 1.0, 0.0),
            LayoutPreset::BottomLeft => Anchors::new(0.0, 1.0, 0.0, 1.0),
            LayoutPreset::BottomRight => Anchors::new(1.0, 1.0, 1.0, 1.0),
            LayoutPreset::CenterLeft => Anchors::new(0.0, 0.5, 0.0, 0.5),
            LayoutPreset::CenterTop => Anchors::new(0.5, 0.0, 0.5, 0.0),
            LayoutPreset::CenterRight => Anchors::new(1.0, 0.5, 1.0, 0.5),
            LayoutPreset::CenterBottom => Anchors::new(0.5, 1.0, 0.5, 1.0),
            LayoutPreset::Center => Anchors::new(0.5, 0.5, 0.5, 0.5),
            LayoutPreset::LeftWide => Anchors::new(0.0, 0.0, 0.0, 1.0),
            LayoutPreset::TopWide => Anchors::new(0.0, 0.0, 1.0, 0.0),
            LayoutPreset::RightWide => Anchors::new(1.0, 0.0, 1.0, 1.0),
            LayoutPreset::BottomWide => Anchors::new(0.0, 1.0, 1.0, 1.0),
            LayoutPreset::VCenterWide => Anchors::new(0.5, 0.0, 0.5, 1.0),
            LayoutPreset::HCenterWide => Anchors::new(0.0, 0.5, 1.0, 0.5),
            LayoutPreset::FullRect => Anchors::new(0.0, 0.0, 1.0, 1.0),
        }
    }

    /// Margins that keep a control of `size` fully inside the parent at
    /// this preset: a right anchor pulls the control left by its width, a
    /// centered anchor by half of it. Stretching axes get zero margins; the
    /// point axis of a wide preset gets a trailing margin that keeps `size`.
    pub fn margins_for(self, size: Size) -> EdgeInsets {
        let anchors = self.anchors();
        let mixed = !anchors.is_point();
        let mut margins = EdgeInsets::ZERO;
        if !anchors.stretches_horizontally() {
            margins.left = -size.width * anchors.left;
            if mixed {
                margins.right = -size.width * (1.0 - anchors.right);
            }
        }
        if !anchors.stretches_vertically() {
            margins.top = -size.height * anchors.top;
            if mixed {
                margins.bottom = -size.height * (1.0 - anchors.bottom);
            }
        }
        margins
    }
}

#[cfg(test)]
#[path = "tests/anchors_tests.rs"]
mod tests;
