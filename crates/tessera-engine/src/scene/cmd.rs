use crate::coords::Rect;

/// Opaque texture handle understood by the frame sink.
///
/// `TextureId::NONE` means "flat color only".
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub u64);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// One batch: a contiguous run of indices sharing clip rect and texture.
///
/// Index values are absolute into the frame's vertex array, so
/// `vertex_offset` is always 0. Sinks must not rebase indices per command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCommand {
    pub index_count: u32,
    /// Offset of the first index in the shared index array.
    pub index_offset: u32,
    pub vertex_offset: u32,
    /// Scissor rect in destination pixels. `None` = unclipped.
    pub clip_rect: Option<Rect>,
    pub texture: TextureId,
}

impl DrawCommand {
    #[inline]
    pub(crate) fn open(index_offset: u32, clip_rect: Option<Rect>, texture: TextureId) -> Self {
        Self { index_count: 0, index_offset, vertex_offset: 0, clip_rect, texture }
    }

    /// One past the last index covered by this command.
    #[inline]
    pub fn index_end(&self) -> u32 {
        self.index_offset + self.index_count
    }

    #[inline]
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}
