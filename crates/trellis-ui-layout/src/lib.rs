//! Layout math for Trellis
//!
//! Everything here is a pure function over sizes and offsets. The UI crate
//! feeds these with the live tree's minimum sizes and writes the results
//! back into controls.

mod alignment;
mod anchors;
mod arrangement;
mod aspect;
mod axis;
mod flow;
mod grid;
mod split;

pub use alignment::*;
pub use anchors::*;
pub use arrangement::*;
pub use aspect::*;
pub use axis::*;
pub use flow::*;
pub use grid::*;
pub use split::*;

pub mod prelude {
    pub use crate::alignment::BoxAlignment;
    pub use crate::anchors::{Anchors, LayoutPreset};
    pub use crate::arrangement::{LinearItem, LinearSlot};
    pub use crate::aspect::StretchMode;
    pub use crate::axis::Axis;
}
