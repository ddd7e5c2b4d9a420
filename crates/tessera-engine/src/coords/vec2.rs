use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

/// 2D vector in destination pixels.
///
/// `#[repr(C)]` so it can be embedded directly in [`DrawVertex`](crate::scene::DrawVertex).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction, or the zero vector when `self` has no length.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { Self::zero() }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_3_4_is_5() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2::new(3.0, 4.0).length_squared(), 25.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec2::new(10.0, 0.0).normalized();
        assert_eq!(n, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normalized_zero_is_zero_not_nan() {
        let n = Vec2::zero().normalized();
        assert_eq!(n, Vec2::zero());
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(2.0, 3.0));
        v -= Vec2::new(2.0, 3.0);
        assert_eq!(v, Vec2::zero());
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(2.0, 4.0);
        assert_eq!(a * 0.5, Vec2::new(1.0, 2.0));
        assert_eq!(a / 2.0, Vec2::new(1.0, 2.0));
        assert_eq!(-a, Vec2::new(-2.0, -4.0));
        assert_eq!(a - a, Vec2::zero());
    }
}
