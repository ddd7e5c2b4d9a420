use crate::coords::{Rect, Viewport};

/// Scissor rect in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScissorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Converts a logical-pixel clip rect to a physical scissor rect.
///
/// `clip = None` means "no scissor": returns the full viewport.
/// Returns `None` when the clamped rect has zero area; the command must be skipped.
pub fn clip_to_scissor(clip: Option<Rect>, viewport: Viewport, scale: f32) -> Option<ScissorRect> {
    let phys_vw = (viewport.width * scale).max(1.0) as u32;
    let phys_vh = (viewport.height * scale).max(1.0) as u32;

    let (x, y, width, height) = match clip {
        None => (0, 0, phys_vw, phys_vh),
        Some(r) => {
            let r = r.intersect(viewport.rect())?;
            let x = ((r.left() * scale).max(0.0) as u32).min(phys_vw);
            let y = ((r.top() * scale).max(0.0) as u32).min(phys_vh);
            let x2 = ((r.right() * scale).max(0.0) as u32).min(phys_vw);
            let y2 = ((r.bottom() * scale).max(0.0) as u32).min(phys_vh);
            (x, y, x2.saturating_sub(x), y2.saturating_sub(y))
        }
    };

    if width == 0 || height == 0 {
        None
    } else {
        Some(ScissorRect { x, y, width, height })
    }
}
