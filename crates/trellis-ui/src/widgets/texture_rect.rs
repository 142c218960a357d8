use super::{DrawContext, WidgetBehavior};
use crate::resources::MeasureContext;
use trellis_ui_graphics::{Color, Rect, Size, TextureHandle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureStretch {
    /// Stretch to the control's rect.
    #[default]
    Scale,
    /// Natural size at the top-left corner.
    Keep,
    /// Natural size centered.
    KeepCentered,
    /// Largest aspect-preserving size, top-left.
    KeepAspect,
    /// Largest aspect-preserving size, centered.
    KeepAspectCentered,
    /// Smallest aspect-preserving size covering the rect, centered.
    KeepAspectCovered,
}

/// Draws a texture inside the control's rect.
///
/// Flipped axes are emitted with a negative extent; the backend maps that
/// to mirrored texture coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextureRect {
    pub texture: Option<TextureHandle>,
    /// When set the texture's size no longer contributes to the minimum.
    pub expand: bool,
    pub stretch: TextureStretch,
    pub flip_h: bool,
    pub flip_v: bool,
    pub tint: Option<Color>,
}

impl TextureRect {
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            ..Self::default()
        }
    }

    pub fn with_stretch(mut self, stretch: TextureStretch) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Target rect for a texture of `natural` size inside `area`.
    pub fn fitted_rect(&self, area: Rect, natural: Size) -> Rect {
        let centered = |size: Size| {
            Rect::new(
                area.x + (area.width - size.width) * 0.5,
                area.y + (area.height - size.height) * 0.5,
                size.width,
                size.height,
            )
        };
        let scale_to = |cover: bool| {
            if natural.width <= 0.0 || natural.height <= 0.0 {
                return Size::ZERO;
            }
            let sx = area.width / natural.width;
            let sy = area.height / natural.height;
            let scale = if cover { sx.max(sy) } else { sx.min(sy) };
            natural * scale
        };
        match self.stretch {
            TextureStretch::Scale => area,
            TextureStretch::Keep => Rect::from_origin_size(area.origin(), natural),
            TextureStretch::KeepCentered => centered(natural),
            TextureStretch::KeepAspect => Rect::from_origin_size(area.origin(), scale_to(false)),
            TextureStretch::KeepAspectCentered => centered(scale_to(false)),
            TextureStretch::KeepAspectCovered => centered(scale_to(true)),
        }
    }
}

impl WidgetBehavior for TextureRect {
    fn minimum_size(&self, _cx: &MeasureContext<'_>) -> Size {
        match self.texture {
            Some(texture) if !self.expand => texture.size(),
            _ => Size::ZERO,
        }
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        let Some(texture) = self.texture else {
            return;
        };
        let mut target = self.fitted_rect(cx.rect, texture.size());
        if self.flip_h {
            target.x += target.width;
            target.width = -target.width;
        }
        if self.flip_v {
            target.y += target.height;
            target.height = -target.height;
        }
        cx.renderer
            .draw_texture(texture, target, self.tint.unwrap_or(Color::WHITE));
    }
}
