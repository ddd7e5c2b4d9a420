//! Shape emitters.
//!
//! Each file extends [`DrawList`](super::DrawList) with one shape family.
//! Extending the engine:
//! - add a module here
//! - implement the emitter on `DrawList` using `begin_shape` / `push_vertex` /
//!   `push_triangle` (or `fan_to_mid` for convex fills)
//! - never touch `commands` directly; batching happens per triangle

mod circle;
mod image;
mod line;
mod polyline;
mod rounded_rect;
mod text;
mod triangle;
