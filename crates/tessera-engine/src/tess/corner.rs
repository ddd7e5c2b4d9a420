use core::f32::consts::{FRAC_PI_2, PI};

use crate::coords::{CornerRadius, Rect, Vec2};

/// Starting angle of each quarter-turn corner arc, in TL, TR, BR, BL order.
///
/// Each arc sweeps +π/2 from its start, so walking the corners in this order
/// traces the perimeter clockwise on screen (+Y down).
pub const CORNER_START_ANGLES: [f32; 4] = [PI, PI + FRAC_PI_2, 0.0, FRAC_PI_2];

/// Pivot points for the four corner arcs of a rounded rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerArcCenters {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerArcCenters {
    /// Centers in TL, TR, BR, BL order, matching [`CORNER_START_ANGLES`].
    #[inline]
    pub fn to_array(self) -> [Vec2; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

/// Clamps every corner radius into `[0, min(width, height) / 2]`.
///
/// Negative radii become square corners.
#[inline]
pub fn clamp_corner_radius(rect: Rect, radius: CornerRadius) -> CornerRadius {
    let max_radius = rect.width().min(rect.height()) * 0.5;
    let clamp = |r: f32| r.min(max_radius).max(0.0);
    CornerRadius::new(clamp(radius.x), clamp(radius.y), clamp(radius.z), clamp(radius.w))
}

#[inline]
pub fn is_corner_radius_zero(radius: CornerRadius) -> bool {
    radius.x <= 0.0 && radius.y <= 0.0 && radius.z <= 0.0 && radius.w <= 0.0
}

/// Arc centers inset from each corner by that corner's own radius.
///
/// `rounding` is expected to be clamped already.
#[inline]
pub fn corner_arc_centers(rect: Rect, rounding: CornerRadius) -> CornerArcCenters {
    CornerArcCenters {
        top_left: Vec2::new(rect.left() + rounding.x, rect.top() + rounding.x),
        top_right: Vec2::new(rect.right() - rounding.y, rect.top() + rounding.y),
        bottom_right: Vec2::new(rect.right() - rounding.z, rect.bottom() - rounding.z),
        bottom_left: Vec2::new(rect.left() + rounding.w, rect.bottom() - rounding.w),
    }
}
