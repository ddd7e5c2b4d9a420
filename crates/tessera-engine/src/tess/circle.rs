use crate::coords::Vec2;

pub const MIN_CIRCLE_SEGMENTS: u32 = 12;
pub const MAX_CIRCLE_SEGMENTS: u32 = 128;

/// Default segment count for a full circle: `clamp(floor(sqrt(radius) * 4), 12, 128)`.
///
/// Negative or NaN radii fall through to the minimum.
#[inline]
pub fn circle_segment_count(radius: f32) -> u32 {
    let segments = (radius.sqrt() * 4.0) as i64;
    segments.clamp(i64::from(MIN_CIRCLE_SEGMENTS), i64::from(MAX_CIRCLE_SEGMENTS)) as u32
}

/// Point on the circle at `angle` radians (0 = +X, π/2 = +Y which is down on screen).
#[inline]
pub fn circle_point(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}
