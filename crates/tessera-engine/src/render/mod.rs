//! Frame hand-off to a rasterization backend.
//!
//! The engine never talks to a GPU. A finished [`DrawList`](crate::scene::DrawList)
//! is exposed as [`FrameData`] and passed to a [`FrameSink`]. Sinks that issue
//! draw calls can implement [`DrawBackend`] and let [`replay`] walk the
//! command list with the scissor/texture rules applied.
//!
//! Convention:
//! - geometry is in destination pixels (top-left origin, +Y down)
//! - the backend maps pixels to clip space using the frame viewport

mod frame;
mod recording;
mod scissor;
mod sink;

pub use frame::FrameData;
pub use recording::{BackendOp, RecordingSink};
pub use scissor::{ScissorRect, clip_to_scissor};
pub use sink::{DrawBackend, FrameSink, ReplayStats, replay};
