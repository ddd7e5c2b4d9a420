use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::text::{BitmapFont, TextRasterizer};

impl DrawList {
    /// Lays out `text` with `font` and hands every glyph to `rasterizer`.
    ///
    /// `position` is the baseline origin of the first line. `\n` starts a new
    /// line `font_size` below; characters outside the baked range are skipped
    /// without advancing.
    pub fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        color: Color,
        font: &BitmapFont,
        font_size: f32,
        rasterizer: &dyn TextRasterizer,
    ) {
        if font_size <= 0.0 || font.pixel_size() <= 0.0 {
            return;
        }

        let scale = font_size / font.pixel_size();
        let mut x = position.x;
        let mut y = position.y;

        for ch in text.chars() {
            if ch == '\n' {
                x = position.x;
                y += font_size;
                continue;
            }
            if !(' '..='\u{7f}').contains(&ch) {
                continue;
            }

            // Pen in baked-pixel units.
            let mut pen = Vec2::new(x / scale, y / scale);
            let Some(quad) = font.baked_quad(ch, &mut pen) else {
                continue;
            };
            rasterizer.draw_glyph(self, font, &quad, scale, color);
            x = pen.x * scale;
        }
    }
}
