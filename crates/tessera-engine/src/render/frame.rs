use crate::coords::Viewport;
use crate::scene::{DrawCommand, DrawList, DrawVertex};

/// Borrowed view of one finished frame.
///
/// Valid until the owning draw list is cleared or drawn into again; the
/// borrow checker enforces this.
#[derive(Debug, Copy, Clone)]
pub struct FrameData<'a> {
    pub vertices: &'a [DrawVertex],
    pub indices: &'a [u32],
    pub commands: &'a [DrawCommand],
    /// Display size in logical pixels.
    pub viewport: Viewport,
    /// Physical pixels per logical pixel, applied to scissor rects.
    pub scale_factor: f32,
}

impl<'a> FrameData<'a> {
    pub fn new(list: &'a DrawList, viewport: Viewport) -> Self {
        Self {
            vertices: list.vertices(),
            indices: list.indices(),
            commands: list.commands(),
            viewport,
            scale_factor: 1.0,
        }
    }

    #[inline]
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Vertex buffer contents, ready for upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Index buffer contents (`u32` indices), ready for upload.
    #[inline]
    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.indices)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl DrawList {
    /// Exposes the accumulated buffers for a sink.
    #[inline]
    pub fn frame(&self, viewport: Viewport) -> FrameData<'_> {
        FrameData::new(self, viewport)
    }
}
