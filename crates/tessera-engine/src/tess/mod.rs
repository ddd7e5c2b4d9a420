//! Tessellation helpers.
//!
//! Pure functions shared by the shape emitters in `scene::shapes`:
//! segment-count heuristics, stroke offsets and rounded-corner geometry.

mod circle;
mod corner;

pub use circle::{circle_point, circle_segment_count, MAX_CIRCLE_SEGMENTS, MIN_CIRCLE_SEGMENTS};
pub use corner::{
    clamp_corner_radius, corner_arc_centers, is_corner_radius_zero, CornerArcCenters,
    CORNER_START_ANGLES,
};

use crate::coords::Vec2;

/// Rotates `direction` by 90° and normalizes it.
///
/// A zero-length direction yields the zero vector, so a degenerate segment
/// produces a zero-width quad instead of NaN vertices.
#[inline]
pub fn perpendicular_normalized(direction: Vec2) -> Vec2 {
    Vec2::new(-direction.y, direction.x).normalized()
}
