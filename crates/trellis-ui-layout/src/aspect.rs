//! Aspect-ratio fitting

use crate::BoxAlignment;
use trellis_ui_graphics::{Point, Size};

/// How a child is resized to honour a target aspect ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StretchMode {
    /// Width follows the container, height is derived.
    WidthControlsHeight,
    /// Height follows the container, width is derived.
    HeightControlsWidth,
    /// Largest size that fits inside the container (letterbox).
    #[default]
    Fit,
    /// Smallest size that covers the container (crop).
    Cover,
}

/// Size of a child with aspect `ratio` (width / height) inside `available`,
/// never smaller than `child_min`.
pub fn fit_aspect(available: Size, ratio: f32, mode: StretchMode, child_min: Size) -> Size {
    let ratio = if ratio > 0.0 { ratio } else { 1.0 };
    let (width, height) = match mode {
        StretchMode::WidthControlsHeight => (available.width, available.width / ratio),
        StretchMode::HeightControlsWidth => (available.height * ratio, available.height),
        StretchMode::Fit => {
            let height = available.width / ratio;
            if height > available.height {
                (available.height * ratio, available.height)
            } else {
                (available.width, height)
            }
        }
        StretchMode::Cover => {
            let height = available.width / ratio;
            if height < available.height {
                (available.height * ratio, available.height)
            } else {
                (available.width, height)
            }
        }
    };
    Size::new(width, height).max(child_min)
}

/// Offset of a child of `child` size inside `available`, per axis.
/// Unlike box alignment this may go negative so covering children stay
/// centered on the container.
pub fn align_in(available: Size, child: Size, horizontal: BoxAlignment, vertical: BoxAlignment) -> Point {
    Point::new(
        (available.width - child.width) * horizontal.factor(),
        (available.height - child.height) * vertical.factor(),
    )
}
