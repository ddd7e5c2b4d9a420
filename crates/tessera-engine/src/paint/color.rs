use core::ops::Mul;

/// Straight-alpha RGBA color, each channel nominally in `[0, 1]`.
///
/// Defaults to opaque white.
///
/// Packing truncates each channel to 8 bits with `floor(channel * 255)`.
/// Channels outside `[0, 1]` are a caller contract violation; they are not
/// validated and pack with Rust's saturating float-to-int cast.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Decodes a packed `0xRRGGBBAA` value.
    #[inline]
    pub fn from_rgba_u32(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::from_u8(r, g, b, a)
    }

    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Packs as `0xRRGGBBAA`.
    #[inline]
    pub fn to_rgba_u32(self) -> u32 {
        u32::from_be_bytes([
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ])
    }

    /// Packs as `0xAABBGGRR`, the vertex color encoding.
    ///
    /// On little-endian targets the bytes land in memory as R, G, B, A, which
    /// is what an `Unorm8x4` vertex attribute expects.
    #[inline]
    pub fn to_abgr_u32(self) -> u32 {
        u32::from_be_bytes([
            channel_to_u8(self.a),
            channel_to_u8(self.b),
            channel_to_u8(self.g),
            channel_to_u8(self.r),
        ])
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(rgba: u32) -> Self {
        Self::from_rgba_u32(rgba)
    }
}

/// Scales all four channels. Used for coverage tinting.
impl Mul<f32> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    (value * 255.0) as u8
}
