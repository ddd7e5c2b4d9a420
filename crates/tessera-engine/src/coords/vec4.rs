/// Four independent components used for four-sided properties.
///
/// The meaning of each component depends on the use site:
/// - padding / border thickness: left, top, right, bottom
/// - corner radius: top-left, top-right, bottom-right, bottom-left
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

pub type Padding = Vec4;
pub type BorderThickness = Vec4;
pub type CornerRadius = Vec4;

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Same value on all four sides / corners.
    #[inline]
    pub const fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// `xy` for `x` and `z`, `zw` for `y` and `w`.
    #[inline]
    pub const fn pair(xy: f32, zw: f32) -> Self {
        Self::new(xy, zw, xy, zw)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// `x + z` (left + right).
    #[inline]
    pub fn horizontal(self) -> f32 {
        self.x + self.z
    }

    /// `y + w` (top + bottom).
    #[inline]
    pub fn vertical(self) -> f32 {
        self.y + self.w
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<f32> for Vec4 {
    #[inline]
    fn from(v: f32) -> Self {
        Self::all(v)
    }
}
