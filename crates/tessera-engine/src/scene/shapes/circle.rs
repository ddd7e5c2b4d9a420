use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::tess::{circle_point, circle_segment_count};

#[inline]
fn resolve_segments(radius: f32, segments: u32) -> u32 {
    if segments == 0 { circle_segment_count(radius) } else { segments }
}

impl DrawList {
    /// Outlines a full circle with `segments` straight lines.
    ///
    /// `segments == 0` picks [`circle_segment_count`] for `radius`.
    pub fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        thickness: f32,
        segments: u32,
    ) {
        if !(radius > 0.0) {
            return;
        }
        let segments = resolve_segments(radius, segments);
        self.stroke_arc(center, radius, 0.0, TAU, segments, color, thickness);
    }

    /// Fills a circle as a fan around its center.
    ///
    /// Pushes the center plus `segments + 1` perimeter vertices (the last one
    /// closes the loop). `segments == 0` picks [`circle_segment_count`].
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, segments: u32) {
        if !(radius > 0.0) {
            return;
        }
        let segments = resolve_segments(radius, segments);
        let step = TAU / segments as f32;

        let center_idx = self.begin_shape(color);
        self.push_vertex(center, Vec2::new(0.5, 0.5));
        for i in 0..=segments {
            let angle = i as f32 * step;
            let uv = Vec2::new(0.5 + angle.cos() * 0.5, 0.5 + angle.sin() * 0.5);
            self.push_vertex(circle_point(center, radius, angle), uv);
        }
        self.fan_to_mid(center_idx);
    }

    /// Strokes `segments` lines along the arc from `start_angle` sweeping `sweep` radians.
    pub(crate) fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        sweep: f32,
        segments: u32,
        color: Color,
        thickness: f32,
    ) {
        let segments = segments.max(1);
        let step = sweep / segments as f32;
        for i in 0..segments {
            let a0 = start_angle + i as f32 * step;
            let a1 = start_angle + (i + 1) as f32 * step;
            self.add_line(
                circle_point(center, radius, a0),
                circle_point(center, radius, a1),
                color,
                thickness,
            );
        }
    }
}
