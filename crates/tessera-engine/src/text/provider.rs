use core::ops::Range;

use super::{BakedGlyph, CoverageAtlas, FontLoadError};

/// Rasterizes a font into a coverage atlas.
///
/// Given raw font-file bytes and a pixel size, implementations write every
/// character of `chars` into `atlas` and return one [`BakedGlyph`] per
/// character, in order. Characters that cannot be placed still get an entry
/// (with an empty atlas rect) so indices stay aligned with `chars`.
pub trait GlyphAtlasProvider {
    fn bake(
        &self,
        font_bytes: &[u8],
        pixel_size: f32,
        atlas: &mut CoverageAtlas,
        chars: Range<u32>,
    ) -> Result<Vec<BakedGlyph>, FontLoadError>;
}

/// Pixels between glyphs in the atlas.
const GLYPH_PADDING: u32 = 1;

/// Row-based ("shelf") placement, left to right then top to bottom.
struct ShelfPacker {
    width: u32,
    height: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_bottom: u32,
}

impl ShelfPacker {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_bottom: GLYPH_PADDING,
        }
    }

    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        // Wider than an empty row: wrapping would not help.
        if 2 * GLYPH_PADDING + w >= self.width {
            return None;
        }
        // Advance to a new shelf row when the glyph doesn't fit horizontally.
        if self.cursor_x + w + GLYPH_PADDING >= self.width {
            self.cursor_y = self.row_bottom;
            self.cursor_x = GLYPH_PADDING;
        }
        if self.cursor_y + h + GLYPH_PADDING >= self.height {
            return None;
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_bottom = self.row_bottom.max(self.cursor_y + h + GLYPH_PADDING);
        Some(pos)
    }
}

/// [`GlyphAtlasProvider`] backed by `fontdue`.
#[derive(Debug, Default, Copy, Clone)]
pub struct FontdueProvider;

impl GlyphAtlasProvider for FontdueProvider {
    fn bake(
        &self,
        font_bytes: &[u8],
        pixel_size: f32,
        atlas: &mut CoverageAtlas,
        chars: Range<u32>,
    ) -> Result<Vec<BakedGlyph>, FontLoadError> {
        let settings = fontdue::FontSettings { scale: pixel_size, ..fontdue::FontSettings::default() };
        let font = fontdue::Font::from_bytes(font_bytes, settings)
            .map_err(|e| FontLoadError(e.to_string()))?;

        atlas.clear();
        let mut packer = ShelfPacker::new(atlas.width(), atlas.height());
        let mut dropped = 0usize;
        let mut glyphs = Vec::with_capacity(chars.len());

        for code in chars {
            let Some(ch) = char::from_u32(code) else {
                glyphs.push(BakedGlyph::default());
                continue;
            };

            let (metrics, bitmap) = font.rasterize(ch, pixel_size);
            let (w, h) = (metrics.width as u32, metrics.height as u32);
            let xoff = metrics.xmin as f32;
            // fontdue's ymin is the bitmap's bottom edge relative to the
            // baseline with +Y up; we want the top edge with +Y down.
            let yoff = -(metrics.ymin as f32 + h as f32);

            let (x0, y0) = match packer.place(w, h) {
                Some(pos) => {
                    atlas.blit(pos.0, pos.1, w, h, &bitmap);
                    pos
                }
                None => {
                    dropped += 1;
                    glyphs.push(BakedGlyph { xoff, yoff, xadvance: metrics.advance_width, ..BakedGlyph::default() });
                    continue;
                }
            };

            glyphs.push(BakedGlyph {
                x0,
                y0,
                x1: x0 + w,
                y1: y0 + h,
                xoff,
                yoff,
                xadvance: metrics.advance_width,
            });
        }

        if dropped > 0 {
            log::warn!(
                "glyph atlas {}x{} too small for {pixel_size}px; {dropped} glyphs will not render",
                atlas.width(),
                atlas.height()
            );
        }

        Ok(glyphs)
    }
}
