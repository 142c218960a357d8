use crate::Size;

/// Opaque reference to a texture owned by the GPU backend.
///
/// The UI core never loads or binds textures; it only carries the id and
/// the pixel size the backend reported, which is what minimum-size and
/// stretch computations need.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    pub id: u64,
    pub width: u32,
    pub height: u32,
}

impl TextureHandle {
    pub const fn new(id: u64, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}
