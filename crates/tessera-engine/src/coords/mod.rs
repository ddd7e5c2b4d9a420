//! Coordinate and geometry types shared by the tessellator, the draw list and
//! frame sinks.
//!
//! Canonical space:
//! - destination pixels, no implicit transform
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod vec4;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use vec4::{BorderThickness, CornerRadius, Padding, Vec4};
pub use viewport::Viewport;
