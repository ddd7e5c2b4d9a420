use std::path::PathBuf;

use anyhow::Context as _;
use tessera_engine::coords::{CornerRadius, Rect, Vec2, Viewport};
use tessera_engine::core::{Context, ContextConfig};
use tessera_engine::logging::{LoggingConfig, init_logging};
use tessera_engine::paint::Color;
use tessera_engine::render::RecordingSink;
use tessera_engine::time::FrameClock;

const FRAMES: u32 = 3;
const DISPLAY: Viewport = Viewport::new(820.0, 560.0);

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let font = load_font(std::env::args_os().nth(1).map(PathBuf::from))?;
    if font.is_none() {
        log::warn!("no font found; text is skipped (pass a .ttf path as the first argument)");
    }

    let mut ctx = Context::new(ContextConfig::default())?;
    ctx.set_display_size(DISPLAY);

    let mut clock = FrameClock::new();
    let mut sink = RecordingSink::new();

    for _ in 0..FRAMES {
        let tick = clock.tick();
        ctx.new_frame(tick.dt);
        draw_scene(&mut ctx, font.as_deref())?;
        ctx.submit(&mut sink)?;

        let stats = sink.last_stats();
        let (vertex_bytes, index_bytes) = sink.last_upload();
        log::info!(
            "frame {}: {} draws ({} skipped), {} triangles, {} texture binds, upload {} + {} bytes",
            ctx.frame_index(),
            stats.draws,
            stats.skipped,
            stats.triangles,
            stats.texture_binds,
            vertex_bytes,
            index_bytes
        );
    }

    log::info!("{} frames submitted, {} font bakes", sink.frames_submitted(), ctx.fonts().bake_count());
    Ok(())
}

fn draw_scene(ctx: &mut Context, font: Option<&[u8]>) -> anyhow::Result<()> {
    let t = ctx.time() as f32;
    let list = ctx.draw_list_mut();

    // ── panels ────────────────────────────────────────────────────────────
    let panel = Rect::new(20.0, 20.0, 380.0, 240.0);
    list.fill_rect(panel, Color::from_rgba_u32(0x1E2230FF), CornerRadius::all(12.0));
    list.stroke_rect(panel, Color::from_rgba_u32(0x5A6A8AFF), 2.0, CornerRadius::all(12.0));
    list.fill_rect(Rect::new(420.0, 20.0, 380.0, 240.0), Color::from_rgba_u32(0x2A1E30FF), CornerRadius::zero());

    // ── shapes ────────────────────────────────────────────────────────────
    let center = Vec2::new(210.0, 140.0);
    list.fill_circle(center, 60.0, Color::rgb(0.9, 0.4, 0.2), 0);
    list.stroke_circle(center, 80.0 + t.sin() * 4.0, Color::WHITE, 1.5, 0);
    list.fill_triangle(
        Vec2::new(500.0, 200.0),
        Vec2::new(600.0, 60.0),
        Vec2::new(700.0, 200.0),
        Color::rgb(0.3, 0.8, 0.5),
    );
    list.stroke_triangle(
        Vec2::new(500.0, 200.0),
        Vec2::new(600.0, 60.0),
        Vec2::new(700.0, 200.0),
        Color::WHITE,
        2.0,
    );

    let wave: Vec<Vec2> = (0..24)
        .map(|i| {
            let x = 40.0 + i as f32 * 32.0;
            Vec2::new(x, 400.0 + (x * 0.02 + t).sin() * 40.0)
        })
        .collect();
    list.polyline(&wave, Color::rgb(0.4, 0.7, 1.0), 4.0, true);

    // ── clipped region ────────────────────────────────────────────────────
    list.set_clip_rect(Rect::new(420.0, 300.0, 380.0, 120.0));
    for i in 0..8 {
        let x = 400.0 + i as f32 * 60.0;
        list.add_line(Vec2::new(x, 280.0), Vec2::new(x + 80.0, 440.0), Color::rgb(1.0, 0.8, 0.2), 3.0);
    }
    list.reset_clip_rect();

    // ── text ──────────────────────────────────────────────────────────────
    if let Some(bytes) = font {
        ctx.draw_text("tessera", Vec2::new(40.0, 500.0), Color::WHITE, bytes, 28.0)
            .context("drawing title")?;
        ctx.draw_text("immediate-mode\ndraw lists", Vec2::new(420.0, 480.0), Color::rgb(0.7, 0.7, 0.8), bytes, 14.0)
            .context("drawing caption")?;
    }

    Ok(())
}

/// Reads `path`, or the first system font found when no path is given.
fn load_font(path: Option<PathBuf>) -> anyhow::Result<Option<Vec<u8>>> {
    if let Some(path) = path {
        let bytes = std::fs::read(&path).with_context(|| format!("reading font {}", path.display()))?;
        return Ok(Some(bytes));
    }

    Ok([
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok()))
}
