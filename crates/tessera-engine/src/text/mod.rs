//! Bitmap-font text.
//!
//! - `provider`: rasterizes a font file into a [`CoverageAtlas`]
//! - `cache`: caller-owned [`FontCache`] keeping one baked atlas per font and size
//! - `raster`: strategies turning baked glyphs into draw-list geometry
//!
//! Layout itself lives on [`DrawList::draw_text`](crate::scene::DrawList::draw_text).

mod atlas;
mod cache;
mod config;
mod error;
mod provider;
mod raster;

pub use atlas::{BakedGlyph, BitmapFont, CoverageAtlas, GlyphQuad};
pub use cache::{FontCache, FontKey};
pub use config::TextConfig;
pub use error::FontLoadError;
pub use provider::{FontdueProvider, GlyphAtlasProvider};
pub use raster::{PerPixelQuads, TextMode, TextRasterizer, TexturedGlyphQuads};

#[cfg(test)]
pub(crate) use cache::test_util;
