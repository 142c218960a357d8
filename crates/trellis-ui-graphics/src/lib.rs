//! Pure math/data for drawing in Trellis
//!
//! This crate contains geometry primitives, color definitions, texture
//! handles and the 2D drawing facade the UI core renders through.

mod color;
mod draw;
mod geometry;
mod texture;

pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use texture::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, RecordingRenderer, Renderer2D};
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::texture::TextureHandle;
}
