use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::{BitmapFont, CoverageAtlas, FontLoadError, FontdueProvider, GlyphAtlasProvider, TextConfig};

/// Identity of a baked font: content hash of the font file plus bake size.
///
/// Hashing the bytes (not their address) means a reloaded copy of the same
/// file hits the cache, and a different file in a reused buffer does not.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub hash: u64,
    /// `f32::to_bits` of the bake pixel size.
    pub size_bits: u32,
}

impl FontKey {
    pub fn new(font_bytes: &[u8], pixel_size: f32) -> Self {
        let mut hasher = DefaultHasher::new();
        font_bytes.len().hash(&mut hasher);
        font_bytes.hash(&mut hasher);
        Self { hash: hasher.finish(), size_bits: pixel_size.to_bits() }
    }
}

struct CacheEntry {
    key: FontKey,
    font: BitmapFont,
    /// Frame in which the entry was last resolved.
    last_used: u64,
}

/// Bounded cache of baked fonts, one atlas per font/size.
///
/// Owned by the caller (usually a [`Context`](crate::core::Context)); nothing
/// here is global. Each entry keeps its atlas slot for its whole lifetime, so
/// glyph quads emitted earlier in a frame stay valid when another font or
/// size is resolved later in the same frame.
///
/// When full, the least recently used entry is evicted and its slot reused.
/// Entries used in the current frame (see [`begin_frame`](Self::begin_frame))
/// are never evicted; resolving one more font than fits is an error.
pub struct FontCache {
    provider: Box<dyn GlyphAtlasProvider>,
    config: TextConfig,
    entries: Vec<CacheEntry>,
    frame: u64,
    bakes: u64,
}

impl FontCache {
    pub fn new(config: TextConfig) -> Self {
        Self::with_provider(config, Box::new(FontdueProvider))
    }

    pub fn with_provider(config: TextConfig, provider: Box<dyn GlyphAtlasProvider>) -> Self {
        Self { provider, config, entries: Vec::new(), frame: 0, bakes: 0 }
    }

    /// Starts a new frame: entries used so far become evictable.
    pub fn begin_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Returns the font baked for `(font_bytes, font_size)`, baking it first
    /// if it is not cached.
    ///
    /// Glyphs are baked at `font_size * oversample`. On failure the cache is
    /// left unchanged.
    pub fn resolve(&mut self, font_bytes: &[u8], font_size: f32) -> Result<&BitmapFont, FontLoadError> {
        let pixel_size = font_size * self.config.oversample;
        let key = FontKey::new(font_bytes, pixel_size);

        let index = match self.entries.iter().position(|e| e.key == key) {
            Some(index) => index,
            None => self.bake(key, font_bytes, pixel_size)?,
        };

        let entry = &mut self.entries[index];
        entry.last_used = self.frame;
        Ok(&entry.font)
    }

    fn bake(&mut self, key: FontKey, font_bytes: &[u8], pixel_size: f32) -> Result<usize, FontLoadError> {
        let capacity = self.config.max_cached_fonts.max(1);
        let index = if self.entries.len() < capacity {
            None
        } else {
            let lru = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.last_used != self.frame)
                .min_by_key(|(_, e)| e.last_used)
                .map(|(i, _)| i);
            match lru {
                Some(i) => Some(i),
                None => {
                    return Err(FontLoadError(format!(
                        "font cache full: {capacity} fonts already used this frame"
                    )));
                }
            }
        };

        let mut atlas = CoverageAtlas::new(self.config.atlas_width, self.config.atlas_height);
        let glyphs = self.provider.bake(font_bytes, pixel_size, &mut atlas, self.config.char_range())?;
        self.bakes += 1;

        let slot = index.unwrap_or(self.entries.len());
        log::debug!(
            "baked font {:016x} at {pixel_size}px into {}x{} atlas slot {slot} ({} glyphs)",
            key.hash,
            atlas.width(),
            atlas.height(),
            glyphs.len()
        );

        let font = BitmapFont::new(atlas, glyphs, self.config.first_char, pixel_size).with_atlas_slot(slot as u32);
        let entry = CacheEntry { key, font, last_used: self.frame };
        match index {
            Some(i) => {
                log::debug!("evicted font {:016x} from slot {i}", self.entries[i].key.hash);
                self.entries[i] = entry;
            }
            None => self.entries.push(entry),
        }
        Ok(slot)
    }

    /// Drops every cached bake; the next `resolve` bakes again.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn contains(&self, key: FontKey) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached fonts with their atlases, in slot order. Backends using
    /// textured text upload `font.atlas()` for each slot, again whenever
    /// [`bake_count`](Self::bake_count) changes.
    pub fn fonts(&self) -> impl Iterator<Item = &BitmapFont> {
        self.entries.iter().map(|e| &e.font)
    }

    /// Number of successful bakes since creation.
    #[inline]
    pub fn bake_count(&self) -> u64 {
        self.bakes
    }

    #[inline]
    pub fn config(&self) -> &TextConfig {
        &self.config
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use core::ops::Range;

    use crate::text::{BakedGlyph, CoverageAtlas, FontLoadError, GlyphAtlasProvider};

    /// Bakes every character as the same 2×2 glyph with coverage
    /// `[255, 32, 100, 33]`, sitting 2px above the baseline, advance 3.
    /// Bytes starting with `b"bad"` fail to load.
    pub(crate) struct FakeProvider;

    pub(crate) const COVERAGE: [u8; 4] = [255, 32, 100, 33];

    impl GlyphAtlasProvider for FakeProvider {
        fn bake(
            &self,
            font_bytes: &[u8],
            _pixel_size: f32,
            atlas: &mut CoverageAtlas,
            chars: Range<u32>,
        ) -> Result<Vec<BakedGlyph>, FontLoadError> {
            if font_bytes.starts_with(b"bad") {
                return Err(FontLoadError("not a font".to_string()));
            }
            atlas.clear();
            atlas.blit(1, 1, 2, 2, &COVERAGE);
            let glyph = BakedGlyph { x0: 1, y0: 1, x1: 3, y1: 3, xoff: 0.0, yoff: -2.0, xadvance: 3.0 };
            Ok(chars.map(|_| glyph).collect())
        }
    }
}
