use crate::scene::TextureId;

use super::{FrameData, ScissorRect, clip_to_scissor};

/// Receives one finished frame.
///
/// Called once per frame, after drawing and before the draw list is cleared.
/// Implementations upload [`FrameData::vertex_bytes`] / [`FrameData::index_bytes`]
/// and issue one draw per command, usually through [`replay`].
pub trait FrameSink {
    fn submit(&mut self, frame: &FrameData<'_>) -> anyhow::Result<()>;
}

/// The three operations a rasterizer needs to execute a command list.
pub trait DrawBackend {
    fn set_scissor(&mut self, scissor: ScissorRect) -> anyhow::Result<()>;

    /// `TextureId::NONE` means flat color.
    fn bind_texture(&mut self, texture: TextureId) -> anyhow::Result<()>;

    /// Draws `index_count` indices starting at `index_offset`. Index values
    /// are added to `vertex_offset` (always 0 for draw-list frames).
    fn draw_indexed(&mut self, index_count: u32, index_offset: u32, vertex_offset: u32) -> anyhow::Result<()>;
}

/// What [`replay`] did with a frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub draws: u32,
    /// Commands dropped because their scissor had zero area.
    pub skipped: u32,
    pub texture_binds: u32,
    pub triangles: u32,
}

/// Executes `frame`'s commands in order on `backend`.
///
/// Per command: the clip rect becomes a scissor (`None` = full viewport),
/// a zero-area scissor skips the command, the texture is bound only when it
/// differs from the last one bound, then the indices are drawn.
pub fn replay<B: DrawBackend + ?Sized>(frame: &FrameData<'_>, backend: &mut B) -> anyhow::Result<ReplayStats> {
    let mut stats = ReplayStats::default();
    let mut bound: Option<TextureId> = None;

    if !frame.viewport.is_valid() && !frame.is_empty() {
        log::warn!("replaying into invalid viewport {:?}; unclipped commands get a 1x1 scissor, clipped ones are skipped", frame.viewport);
    }

    for cmd in frame.commands {
        if cmd.index_count == 0 {
            continue;
        }

        let Some(scissor) = clip_to_scissor(cmd.clip_rect, frame.viewport, frame.scale_factor) else {
            stats.skipped += 1;
            continue;
        };
        backend.set_scissor(scissor)?;

        if bound != Some(cmd.texture) {
            backend.bind_texture(cmd.texture)?;
            bound = Some(cmd.texture);
            stats.texture_binds += 1;
        }

        backend.draw_indexed(cmd.index_count, cmd.index_offset, cmd.vertex_offset)?;
        stats.draws += 1;
        stats.triangles += cmd.triangle_count();
    }

    log::trace!(
        "replayed {} commands: {} draws, {} skipped, {} texture binds, {} triangles",
        frame.commands.len(),
        stats.draws,
        stats.skipped,
        stats.texture_binds,
        stats.triangles
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadius, Rect, Viewport};
    use crate::paint::Color;
    use crate::scene::DrawList;

    #[derive(Default)]
    struct FailingBackend {
        draws: u32,
    }

    impl DrawBackend for FailingBackend {
        fn set_scissor(&mut self, _: ScissorRect) -> anyhow::Result<()> {
            Ok(())
        }

        fn bind_texture(&mut self, _: TextureId) -> anyhow::Result<()> {
            Ok(())
        }

        fn draw_indexed(&mut self, _: u32, _: u32, _: u32) -> anyhow::Result<()> {
            self.draws += 1;
            anyhow::bail!("device lost")
        }
    }

    #[test]
    fn backend_error_stops_replay() {
        let mut list = DrawList::new();
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        list.fill_rect(r, Color::WHITE, CornerRadius::zero());
        list.set_clip_rect(r);
        list.fill_rect(r, Color::WHITE, CornerRadius::zero());

        let mut backend = FailingBackend::default();
        let err = replay(&list.frame(Viewport::new(64.0, 64.0)), &mut backend).unwrap_err();
        assert_eq!(err.to_string(), "device lost");
        assert_eq!(backend.draws, 1);
    }
}
