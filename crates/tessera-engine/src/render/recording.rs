use crate::scene::TextureId;

use super::{DrawBackend, FrameData, FrameSink, ReplayStats, ScissorRect, replay};

/// One backend call captured by [`RecordingSink`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BackendOp {
    SetScissor(ScissorRect),
    BindTexture(TextureId),
    DrawIndexed { index_count: u32, index_offset: u32, vertex_offset: u32 },
}

/// Headless [`FrameSink`] that replays every frame into a list of
/// [`BackendOp`]s instead of a GPU.
///
/// Keeps the ops and stats of the most recent frame only.
#[derive(Debug, Default)]
pub struct RecordingSink {
    ops: Vec<BackendOp>,
    stats: ReplayStats,
    vertex_bytes: usize,
    index_bytes: usize,
    frames: u64,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ops(&self) -> &[BackendOp] {
        &self.ops
    }

    #[inline]
    pub fn last_stats(&self) -> ReplayStats {
        self.stats
    }

    /// Bytes that would have been uploaded for the last frame: `(vertices, indices)`.
    #[inline]
    pub fn last_upload(&self) -> (usize, usize) {
        (self.vertex_bytes, self.index_bytes)
    }

    #[inline]
    pub fn frames_submitted(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for RecordingSink {
    fn submit(&mut self, frame: &FrameData<'_>) -> anyhow::Result<()> {
        self.ops.clear();
        self.vertex_bytes = frame.vertex_bytes().len();
        self.index_bytes = frame.index_bytes().len();
        self.stats = replay(frame, self)?;
        self.frames += 1;

        log::debug!(
            "frame {}: {} vertices, {} indices, {} commands -> {} draws",
            self.frames,
            frame.vertices.len(),
            frame.indices.len(),
            frame.commands.len(),
            self.stats.draws
        );
        Ok(())
    }
}

impl DrawBackend for RecordingSink {
    fn set_scissor(&mut self, scissor: ScissorRect) -> anyhow::Result<()> {
        self.ops.push(BackendOp::SetScissor(scissor));
        Ok(())
    }

    fn bind_texture(&mut self, texture: TextureId) -> anyhow::Result<()> {
        self.ops.push(BackendOp::BindTexture(texture));
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32, index_offset: u32, vertex_offset: u32) -> anyhow::Result<()> {
        self.ops.push(BackendOp::DrawIndexed { index_count, index_offset, vertex_offset });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadius, Rect, Viewport};
    use crate::paint::Color;
    use crate::scene::DrawList;

    const VP: Viewport = Viewport::new(200.0, 100.0);

    fn full() -> ScissorRect {
        ScissorRect { x: 0, y: 0, width: 200, height: 100 }
    }

    fn square(list: &mut DrawList) {
        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, CornerRadius::zero());
    }

    // ── replay contract ───────────────────────────────────────────────────

    #[test]
    fn single_command_replays_as_scissor_bind_draw() {
        let mut list = DrawList::new();
        square(&mut list);

        let mut sink = RecordingSink::new();
        sink.submit(&list.frame(VP)).unwrap();

        assert_eq!(
            sink.ops(),
            &[
                BackendOp::SetScissor(full()),
                BackendOp::BindTexture(TextureId::NONE),
                BackendOp::DrawIndexed { index_count: 6, index_offset: 0, vertex_offset: 0 },
            ]
        );
        assert_eq!(sink.last_upload(), (4 * 20, 6 * 4));
    }

    #[test]
    fn texture_is_rebound_only_on_change() {
        let mut list = DrawList::new();
        square(&mut list);
        list.set_clip_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
        square(&mut list);
        list.draw_image(Rect::new(0.0, 0.0, 8.0, 8.0), TextureId::new(3), Color::WHITE, CornerRadius::zero())
            .unwrap();

        let mut sink = RecordingSink::new();
        sink.submit(&list.frame(VP)).unwrap();

        let binds: Vec<_> = sink
            .ops()
            .iter()
            .filter_map(|op| match op {
                BackendOp::BindTexture(t) => Some(*t),
                _ => None,
            })
            .collect();
        assert_eq!(binds, vec![TextureId::NONE, TextureId::new(3)]);
        assert_eq!(sink.last_stats().draws, 3);
        assert_eq!(sink.last_stats().texture_binds, 2);
    }

    #[test]
    fn zero_area_clip_skips_command() {
        let mut list = DrawList::new();
        list.set_clip_rect(Rect::new(10.0, 10.0, 0.0, 0.0));
        square(&mut list);
        list.reset_clip_rect();
        square(&mut list);

        let mut sink = RecordingSink::new();
        sink.submit(&list.frame(VP)).unwrap();

        let stats = sink.last_stats();
        assert_eq!((stats.draws, stats.skipped, stats.triangles), (1, 1, 2));
        assert!(sink.ops().contains(&BackendOp::DrawIndexed { index_count: 6, index_offset: 6, vertex_offset: 0 }));
    }

    #[test]
    fn each_submit_replaces_previous_frame() {
        let mut list = DrawList::new();
        let mut sink = RecordingSink::new();

        square(&mut list);
        square(&mut list);
        sink.submit(&list.frame(VP)).unwrap();

        list.clear();
        sink.submit(&list.frame(VP)).unwrap();

        assert!(sink.ops().is_empty());
        assert_eq!(sink.frames_submitted(), 2);
        assert_eq!(sink.last_stats(), ReplayStats::default());
    }
}
