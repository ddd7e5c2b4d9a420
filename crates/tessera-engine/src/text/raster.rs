use crate::coords::{CornerRadius, Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawError, DrawList, TextureId};

use super::{BitmapFont, GlyphQuad, TextConfig};

/// Turns one positioned glyph into draw-list geometry.
///
/// `quad` is in baked-pixel units; multiply by `display_scale` to get
/// destination pixels.
pub trait TextRasterizer {
    fn draw_glyph(&self, list: &mut DrawList, font: &BitmapFont, quad: &GlyphQuad, display_scale: f32, color: Color);
}

/// One flat-colored rect per covered atlas pixel.
///
/// Needs no texture binding, at the cost of up to `w × h` quads per glyph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PerPixelQuads {
    /// Pixels with coverage at or below this are skipped.
    pub threshold: u8,
}

impl Default for PerPixelQuads {
    fn default() -> Self {
        Self { threshold: 32 }
    }
}

impl TextRasterizer for PerPixelQuads {
    fn draw_glyph(&self, list: &mut DrawList, font: &BitmapFont, quad: &GlyphQuad, s: f32, color: Color) {
        let origin = Vec2::new(quad.x0 * s, quad.y0 * s);

        for py in 0..quad.atlas_h {
            for px in 0..quad.atlas_w {
                let alpha = font.pixel_alpha(i64::from(quad.atlas_x + px), i64::from(quad.atlas_y + py));
                if alpha <= self.threshold {
                    continue;
                }

                let rect = Rect::new(origin.x + px as f32 * s, origin.y + py as f32 * s, s, s);
                list.fill_rect(rect, color * (f32::from(alpha) / 255.0), CornerRadius::zero());
            }
        }
    }
}

/// One textured quad per glyph, sampling the font's atlas texture.
///
/// Every cached font owns one atlas: the atlas in cache slot `i` must be
/// uploaded as `TextureId(base + i)` (see [`texture_for_slot`](Self::texture_for_slot)).
/// The backend is expected to multiply the vertex tint by sampled coverage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TexturedGlyphQuads {
    base: TextureId,
}

impl TexturedGlyphQuads {
    pub fn new(base: TextureId) -> Result<Self, DrawError> {
        if base.is_none() {
            return Err(DrawError::MissingTexture);
        }
        Ok(Self { base })
    }

    /// Texture id of the atlas in cache slot 0.
    #[inline]
    pub fn base_texture(&self) -> TextureId {
        self.base
    }

    #[inline]
    pub fn texture_for_slot(&self, slot: u32) -> TextureId {
        TextureId::new(self.base.0 + u64::from(slot))
    }
}

impl TextRasterizer for TexturedGlyphQuads {
    fn draw_glyph(&self, list: &mut DrawList, font: &BitmapFont, quad: &GlyphQuad, s: f32, color: Color) {
        if quad.atlas_w == 0 || quad.atlas_h == 0 {
            return;
        }

        let rect = Rect::new(
            quad.x0 * s,
            quad.y0 * s,
            (quad.x1 - quad.x0) * s,
            (quad.y1 - quad.y0) * s,
        );
        let (a, b) = (quad.uv_min, quad.uv_max);
        let uvs = [a, Vec2::new(b.x, a.y), b, Vec2::new(a.x, b.y)];

        let previous = list.texture();
        list.set_texture(self.texture_for_slot(font.atlas_slot()));
        list.add_quad_raw(rect.corners(), uvs, color);
        list.set_texture(previous);
    }
}

/// How [`Context::draw_text`](crate::core::Context::draw_text) turns glyphs into geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TextMode {
    /// [`PerPixelQuads`] with the configured coverage threshold.
    #[default]
    PerPixel,
    /// [`TexturedGlyphQuads`]; atlas slot `i` is uploaded under `base + i`.
    Textured(TextureId),
}

impl TextMode {
    pub fn rasterizer(self, config: &TextConfig) -> Result<Box<dyn TextRasterizer>, DrawError> {
        Ok(match self {
            TextMode::PerPixel => Box::new(PerPixelQuads { threshold: config.coverage_threshold }),
            TextMode::Textured(texture) => Box::new(TexturedGlyphQuads::new(texture)?),
        })
    }
}
