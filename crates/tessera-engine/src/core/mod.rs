//! Per-window drawing context.
//!
//! A [`Context`] owns everything one window draws with in a frame: the draw
//! list, the font cache and the text rasterization strategy. There is no
//! global "current" context; callers hold one per window and pass it
//! explicitly.

mod ctx;

pub use ctx::{Context, ContextConfig};
