//! Frame timing.
//!
//! [`Context::new_frame`](crate::core::Context::new_frame) takes an explicit
//! delta time; [`FrameClock`] is the usual way to produce it from wall time.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
