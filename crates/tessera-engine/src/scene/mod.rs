//! Draw-list engine.
//!
//! Responsibilities:
//! - accumulate vertices and indices for the current frame
//! - batch triangles into commands keyed by (clip rect, texture)
//! - keep shape-specific tessellation isolated per file under `scene::shapes`

mod cmd;
mod config;
mod error;
mod list;
mod vertex;

pub mod shapes;

pub use cmd::{DrawCommand, TextureId};
pub use config::TessellationConfig;
pub use error::DrawError;
pub use list::DrawList;
pub use vertex::DrawVertex;

#[cfg(test)]
pub(crate) use list::test_util;
