use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::render::{FrameData, FrameSink};
use crate::scene::{DrawError, DrawList, TessellationConfig};
use crate::text::{FontCache, FontLoadError, GlyphAtlasProvider, TextConfig, TextMode, TextRasterizer};

/// Settings a [`Context`] is created with.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ContextConfig {
    pub tessellation: TessellationConfig,
    pub text: TextConfig,
    pub text_mode: TextMode,
}

/// Explicit per-window drawing state.
///
/// Frame lifecycle:
/// 1. [`new_frame`](Self::new_frame) with the elapsed time
/// 2. draw through [`draw_list_mut`](Self::draw_list_mut) and [`draw_text`](Self::draw_text)
/// 3. [`submit`](Self::submit) to a [`FrameSink`]
pub struct Context {
    list: DrawList,
    fonts: FontCache,
    text_mode: TextMode,
    rasterizer: Box<dyn TextRasterizer>,

    display_size: Viewport,
    scale_factor: f32,

    delta_time: f32,
    time: f64,
    frame_index: u64,
}

impl Context {
    /// Fails only when `text_mode` is `Textured` with [`TextureId::NONE`](crate::scene::TextureId::NONE).
    pub fn new(config: ContextConfig) -> Result<Self, DrawError> {
        Self::from_parts(config, FontCache::new(config.text))
    }

    /// Like [`new`](Self::new), baking fonts through `provider` instead of fontdue.
    pub fn with_font_provider(config: ContextConfig, provider: Box<dyn GlyphAtlasProvider>) -> Result<Self, DrawError> {
        Self::from_parts(config, FontCache::with_provider(config.text, provider))
    }

    fn from_parts(config: ContextConfig, fonts: FontCache) -> Result<Self, DrawError> {
        let rasterizer = config.text_mode.rasterizer(&config.text)?;
        Ok(Self {
            list: DrawList::with_config(config.tessellation),
            fonts,
            text_mode: config.text_mode,
            rasterizer,
            display_size: Viewport::default(),
            scale_factor: 1.0,
            delta_time: 0.0,
            time: 0.0,
            frame_index: 0,
        })
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Starts a frame: records `dt`, advances time and clears the draw list.
    ///
    /// Fonts resolved in the previous frame become evictable again.
    pub fn new_frame(&mut self, dt: f32) {
        self.delta_time = dt;
        self.time += f64::from(dt);
        self.frame_index = self.frame_index.wrapping_add(1);
        self.list.clear();
        self.fonts.begin_frame();

        log::trace!("frame {} (dt {:.4}s, t {:.3}s)", self.frame_index, dt, self.time);
    }

    /// Borrowed view of everything drawn since the last `new_frame`.
    #[inline]
    pub fn frame(&self) -> FrameData<'_> {
        self.list.frame(self.display_size).with_scale_factor(self.scale_factor)
    }

    pub fn submit(&self, sink: &mut dyn FrameSink) -> anyhow::Result<()> {
        sink.submit(&self.frame())
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    #[inline]
    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        &mut self.list
    }

    /// Draws `text` with its baseline starting at `position`.
    ///
    /// `font_bytes` is the raw font file; it is baked on first use and again
    /// only when the bytes or `font_size` change.
    pub fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        color: Color,
        font_bytes: &[u8],
        font_size: f32,
    ) -> Result<(), FontLoadError> {
        if text.is_empty() || font_size <= 0.0 {
            return Ok(());
        }
        let font = self.fonts.resolve(font_bytes, font_size)?;
        self.list.draw_text(text, position, color, font, font_size, self.rasterizer.as_ref());
        Ok(())
    }

    /// Width of the widest line and total height of `text` at `font_size`.
    pub fn measure_text(&mut self, text: &str, font_bytes: &[u8], font_size: f32) -> Result<Vec2, FontLoadError> {
        if font_size <= 0.0 {
            return Ok(Vec2::zero());
        }
        let font = self.fonts.resolve(font_bytes, font_size)?;
        Ok(font.measure_text(text, font_size))
    }

    #[inline]
    pub fn fonts(&self) -> &FontCache {
        &self.fonts
    }

    #[inline]
    pub fn fonts_mut(&mut self) -> &mut FontCache {
        &mut self.fonts
    }

    #[inline]
    pub fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    /// Switches text rasterization. On error the current mode is kept.
    pub fn set_text_mode(&mut self, mode: TextMode) -> Result<(), DrawError> {
        self.rasterizer = mode.rasterizer(self.fonts.config())?;
        self.text_mode = mode;
        Ok(())
    }

    // ── display / time ────────────────────────────────────────────────────

    #[inline]
    pub fn set_display_size(&mut self, size: Viewport) {
        self.display_size = size;
    }

    #[inline]
    pub fn display_size(&self) -> Viewport {
        self.display_size
    }

    #[inline]
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Seconds passed to the latest `new_frame`.
    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Sum of all `dt`s so far.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of `new_frame` calls so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadius, Rect};
    use crate::render::RecordingSink;
    use crate::scene::TextureId;
    use crate::text::test_util::FakeProvider;

    fn ctx(mode: TextMode) -> Context {
        let config = ContextConfig { text_mode: mode, ..ContextConfig::default() };
        Context::with_font_provider(config, Box::new(FakeProvider)).unwrap()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn new_frame_advances_time_and_clears() {
        let mut c = ctx(TextMode::PerPixel);
        c.draw_list_mut().fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE, CornerRadius::zero());

        c.new_frame(0.5);
        c.new_frame(0.25);

        assert!(c.draw_list().is_empty());
        assert_eq!(c.delta_time(), 0.25);
        assert_eq!(c.time(), 0.75);
        assert_eq!(c.frame_index(), 2);
    }

    #[test]
    fn textured_mode_without_texture_is_rejected() {
        let config = ContextConfig { text_mode: TextMode::Textured(TextureId::NONE), ..ContextConfig::default() };
        assert!(Context::new(config).is_err());

        let mut c = ctx(TextMode::PerPixel);
        assert_eq!(c.set_text_mode(TextMode::Textured(TextureId::NONE)), Err(DrawError::MissingTexture));
        assert_eq!(c.text_mode(), TextMode::PerPixel);
    }

    #[test]
    fn submit_hands_frame_with_display_size_to_sink() {
        let mut c = ctx(TextMode::PerPixel);
        c.set_display_size(Viewport::new(320.0, 240.0));
        c.new_frame(1.0 / 60.0);
        c.draw_list_mut().fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE, CornerRadius::zero());

        let mut sink = RecordingSink::new();
        c.submit(&mut sink).unwrap();

        assert_eq!(c.frame().viewport, Viewport::new(320.0, 240.0));
        assert_eq!(sink.last_stats().draws, 1);
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_text_bakes_once_across_frames() {
        let mut c = ctx(TextMode::PerPixel);
        for _ in 0..3 {
            c.new_frame(0.016);
            c.draw_text("AB", Vec2::new(0.0, 10.0), Color::WHITE, b"fake", 8.0).unwrap();
        }
        assert_eq!(c.fonts().bake_count(), 1);
        // Two glyphs, three visible pixels each.
        assert_eq!(c.draw_list().vertices().len(), 2 * 3 * 4);
    }

    #[test]
    fn textured_text_uses_atlas_texture() {
        let atlas = TextureId::new(11);
        let mut c = ctx(TextMode::Textured(atlas));
        c.draw_text("A", Vec2::zero(), Color::WHITE, b"fake", 8.0).unwrap();

        assert_eq!(c.draw_list().vertices().len(), 4);
        assert_eq!(c.draw_list().commands()[0].texture, atlas);
        assert_eq!(c.draw_list().texture(), TextureId::NONE);
    }

    #[test]
    fn two_sizes_in_one_frame_keep_their_own_atlas_textures() {
        let base = TextureId::new(20);
        let mut c = ctx(TextMode::Textured(base));
        for _ in 0..3 {
            c.new_frame(0.016);
            c.draw_text("A", Vec2::new(0.0, 40.0), Color::WHITE, b"fake", 28.0).unwrap();
            c.draw_text("A", Vec2::new(0.0, 80.0), Color::WHITE, b"fake", 14.0).unwrap();
        }

        assert_eq!(c.fonts().bake_count(), 2);
        assert_eq!(c.fonts().len(), 2);
        let textures: Vec<_> = c.draw_list().commands().iter().map(|cmd| cmd.texture).collect();
        assert_eq!(textures, vec![base, TextureId::new(21)]);
    }

    #[test]
    fn degenerate_text_is_a_noop_and_bad_font_errors() {
        let mut c = ctx(TextMode::PerPixel);
        c.draw_text("", Vec2::zero(), Color::WHITE, b"bad", 8.0).unwrap();
        c.draw_text("A", Vec2::zero(), Color::WHITE, b"bad", 0.0).unwrap();
        assert_eq!(c.fonts().bake_count(), 0);

        assert!(c.draw_text("A", Vec2::zero(), Color::WHITE, b"bad", 8.0).is_err());
        assert!(c.draw_list().is_empty());
    }

    #[test]
    fn measure_text_scales_baked_advance() {
        let mut c = ctx(TextMode::PerPixel);
        let size = c.measure_text("AAAA", b"fake", 8.0).unwrap();
        assert_eq!(size, Vec2::new(6.0, 8.0));
    }
}
