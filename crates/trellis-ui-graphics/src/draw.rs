//! The 2D drawing facade the UI core renders through.

use crate::{Color, Point, Rect, TextureHandle};

/// Column-major 4x4 matrix handed to the backend when a scene begins.
pub type Mat4 = [[f32; 4]; 4];

pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Drawing facade implemented by the GPU backend.
///
/// Every rect and position is already resolved to global pixel
/// coordinates. Calls arrive in pre-order tree walk order; the core makes
/// no other ordering or batching promise.
pub trait Renderer2D {
    fn begin_scene(&mut self, _view_projection: &Mat4) {}
    fn end_scene(&mut self) {}
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_rect_outline(&mut self, rect: Rect, color: Color, width: f32);
    fn draw_texture(&mut self, texture: TextureHandle, rect: Rect, tint: Color);
    fn draw_text(&mut self, text: &str, position: Point, font_size: f32, color: Color);
    /// Restricts subsequent draws to `clip`, or lifts the restriction.
    fn set_clip(&mut self, clip: Option<Rect>);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        color: Color,
        clip: Option<Rect>,
    },
    RectOutline {
        rect: Rect,
        color: Color,
        width: f32,
        clip: Option<Rect>,
    },
    Texture {
        texture: TextureHandle,
        rect: Rect,
        tint: Color,
        clip: Option<Rect>,
    },
    Text {
        text: String,
        position: Point,
        font_size: f32,
        color: Color,
        clip: Option<Rect>,
    },
}

impl DrawPrimitive {
    pub fn clip(&self) -> Option<Rect> {
        match self {
            DrawPrimitive::Rect { clip, .. }
            | DrawPrimitive::RectOutline { clip, .. }
            | DrawPrimitive::Texture { clip, .. }
            | DrawPrimitive::Text { clip, .. } => *clip,
        }
    }
}

/// Renderer that records primitives instead of issuing GPU work.
///
/// Used by headless hosts and tests to inspect what a frame drew.
#[derive(Default)]
pub struct RecordingRenderer {
    primitives: Vec<DrawPrimitive>,
    clip: Option<Rect>,
    clip_changes: usize,
    scenes: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
        self.clip = None;
        self.clip_changes = 0;
    }

    /// Clip active right now; `None` after a balanced frame.
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip
    }

    pub fn clip_changes(&self) -> usize {
        self.clip_changes
    }

    pub fn scenes_begun(&self) -> usize {
        self.scenes
    }

    /// Texts drawn this frame, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|primitive| match primitive {
                DrawPrimitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer2D for RecordingRenderer {
    fn begin_scene(&mut self, _view_projection: &Mat4) {
        self.scenes += 1;
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.primitives.push(DrawPrimitive::Rect {
            rect,
            color,
            clip: self.clip,
        });
    }

    fn draw_rect_outline(&mut self, rect: Rect, color: Color, width: f32) {
        self.primitives.push(DrawPrimitive::RectOutline {
            rect,
            color,
            width,
            clip: self.clip,
        });
    }

    fn draw_texture(&mut self, texture: TextureHandle, rect: Rect, tint: Color) {
        self.primitives.push(DrawPrimitive::Texture {
            texture,
            rect,
            tint,
            clip: self.clip,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, font_size: f32, color: Color) {
        self.primitives.push(DrawPrimitive::Text {
            text: text.to_owned(),
            position,
            font_size,
            color,
            clip: self.clip,
        });
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
        self.clip_changes += 1;
    }
}
