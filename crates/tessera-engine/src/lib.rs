//! Tessera engine crate.
//!
//! Immediate-mode 2D vector drawing: shapes and text are tessellated into a
//! per-frame draw list of vertices, indices and batched commands, which a
//! [`render::FrameSink`] hands to whatever rasterizes them.

pub mod coords;
pub mod core;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod tess;
pub mod text;
pub mod time;
