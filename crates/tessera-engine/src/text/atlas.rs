use crate::coords::Vec2;

/// Single-channel 8-bit coverage bitmap holding every baked glyph of one font/size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageAtlas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CoverageAtlas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![0; width as usize * height as usize] }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels, `width` bytes per row. Ready for an `R8` texture upload.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Coverage at `(x, y)`; 0 outside the atlas.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> u8 {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return 0;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Copies a `w × h` row-major bitmap to `(x, y)`. Rows or columns falling
    /// outside the atlas are dropped.
    pub fn blit(&mut self, x: u32, y: u32, w: u32, h: u32, bitmap: &[u8]) {
        if x >= self.width {
            return;
        }
        let stride = self.width as usize;
        for row in 0..h {
            let dst_y = y + row;
            if dst_y >= self.height {
                break;
            }
            let visible = w.min(self.width.saturating_sub(x)) as usize;
            let src = row as usize * w as usize;
            let dst = dst_y as usize * stride + x as usize;
            if let Some(src_row) = bitmap.get(src..src + visible) {
                self.pixels[dst..dst + visible].copy_from_slice(src_row);
            }
        }
    }
}

/// Baked metrics of one glyph.
///
/// `x0..x1 × y0..y1` is the glyph's atlas rect. `xoff`/`yoff` place the rect
/// relative to the pen on the baseline (`yoff` is negative above it).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BakedGlyph {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
    pub xoff: f32,
    pub yoff: f32,
    pub xadvance: f32,
}

impl BakedGlyph {
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }
}

/// A glyph positioned on screen, in baked-pixel units.
///
/// `x0, y0` is the top-left of the glyph box; `atlas_*` is the source rect
/// in atlas pixels and `uv_*` the same rect normalized to the atlas size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphQuad {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub atlas_x: u32,
    pub atlas_y: u32,
    pub atlas_w: u32,
    pub atlas_h: u32,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

/// One font baked at one pixel size: atlas plus per-character metrics.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    atlas: CoverageAtlas,
    glyphs: Vec<BakedGlyph>,
    first_char: u32,
    pixel_size: f32,
    atlas_slot: u32,
}

impl BitmapFont {
    pub fn new(atlas: CoverageAtlas, glyphs: Vec<BakedGlyph>, first_char: u32, pixel_size: f32) -> Self {
        Self { atlas, glyphs, first_char, pixel_size, atlas_slot: 0 }
    }

    /// Places the atlas in slot `slot` of the owning cache.
    #[inline]
    pub fn with_atlas_slot(mut self, slot: u32) -> Self {
        self.atlas_slot = slot;
        self
    }

    /// Cache slot of this font's atlas; textured text samples the texture
    /// uploaded for this slot.
    #[inline]
    pub fn atlas_slot(&self) -> u32 {
        self.atlas_slot
    }

    #[inline]
    pub fn atlas(&self) -> &CoverageAtlas {
        &self.atlas
    }

    /// Size the glyphs were baked at.
    #[inline]
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    pub fn glyph(&self, ch: char) -> Option<&BakedGlyph> {
        let index = u32::from(ch).checked_sub(self.first_char)?;
        self.glyphs.get(index as usize)
    }

    /// Coverage byte at atlas `(x, y)`; 0 out of bounds.
    #[inline]
    pub fn pixel_alpha(&self, x: i64, y: i64) -> u8 {
        self.atlas.get(x, y)
    }

    /// `true` when the atlas pixel is more than half covered.
    #[inline]
    pub fn pixel(&self, x: i64, y: i64) -> bool {
        self.pixel_alpha(x, y) > 128
    }

    /// Positions `ch` at `pen` (baseline, baked-pixel units) and advances the pen.
    ///
    /// The glyph box is snapped to whole pixels. Returns `None` for characters
    /// that were not baked; the pen is left untouched in that case.
    pub fn baked_quad(&self, ch: char, pen: &mut Vec2) -> Option<GlyphQuad> {
        let g = *self.glyph(ch)?;

        let x0 = (pen.x + g.xoff + 0.5).floor();
        let y0 = (pen.y + g.yoff + 0.5).floor();
        let (w, h) = (g.width(), g.height());
        let inv_w = 1.0 / self.atlas.width().max(1) as f32;
        let inv_h = 1.0 / self.atlas.height().max(1) as f32;

        pen.x += g.xadvance;

        Some(GlyphQuad {
            x0,
            y0,
            x1: x0 + w as f32,
            y1: y0 + h as f32,
            atlas_x: g.x0,
            atlas_y: g.y0,
            atlas_w: w,
            atlas_h: h,
            uv_min: Vec2::new(g.x0 as f32 * inv_w, g.y0 as f32 * inv_h),
            uv_max: Vec2::new(g.x1 as f32 * inv_w, g.y1 as f32 * inv_h),
        })
    }

    /// Size of `text` laid out at `font_size`: widest line by line count.
    pub fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        if self.pixel_size <= 0.0 {
            return Vec2::zero();
        }
        let scale = font_size / self.pixel_size;
        let mut widest = 0.0f32;
        let mut lines = 0;
        for line in text.split('\n') {
            let advance: f32 = line.chars().filter_map(|c| self.glyph(c)).map(|g| g.xadvance).sum();
            widest = widest.max(advance * scale);
            lines += 1;
        }
        Vec2::new(widest, lines as f32 * font_size)
    }
}
