use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Vertex wire format shared with every frame sink.
///
/// Layout (20-byte stride, little-endian):
/// - `pos`:   2 × f32 at offset 0
/// - `uv`:    2 × f32 at offset 8
/// - `color`: u32 at offset 16, packed ABGR (bytes R, G, B, A in memory)
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct DrawVertex {
    pub pos: Vec2,
    pub uv: Vec2,
    pub color: u32,
}

impl DrawVertex {
    pub const STRIDE: usize = core::mem::size_of::<DrawVertex>();
    pub const POS_OFFSET: usize = core::mem::offset_of!(DrawVertex, pos);
    pub const UV_OFFSET: usize = core::mem::offset_of!(DrawVertex, uv);
    pub const COLOR_OFFSET: usize = core::mem::offset_of!(DrawVertex, color);

    #[inline]
    pub const fn new(pos: Vec2, uv: Vec2, color: u32) -> Self {
        Self { pos, uv, color }
    }
}
