/// Glyph baking and text rasterization settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextConfig {
    pub atlas_width: u32,
    pub atlas_height: u32,
    /// First baked code point (inclusive).
    pub first_char: u32,
    /// Number of consecutive code points baked from `first_char`.
    pub char_count: u32,
    /// Fonts are baked at `font_size * oversample` and scaled down on display.
    pub oversample: f32,
    /// Atlas pixels with coverage at or below this value are not drawn by the
    /// per-pixel rasterizer.
    pub coverage_threshold: u8,
    /// Font/size combinations kept baked at once. Each owns one atlas.
    pub max_cached_fonts: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            atlas_width: 512,
            atlas_height: 512,
            first_char: 32,
            char_count: 96,
            oversample: 2.0,
            coverage_threshold: 32,
            max_cached_fonts: 8,
        }
    }
}

impl TextConfig {
    /// Baked code points as a range.
    #[inline]
    pub fn char_range(&self) -> core::ops::Range<u32> {
        self.first_char..self.first_char + self.char_count
    }
}
