use core::f32::consts::FRAC_PI_2;

use crate::coords::{CornerRadius, Rect, Vec2};
use crate::paint::Color;
use crate::scene::DrawList;
use crate::scene::list::QUAD_UVS;
use crate::tess::{
    circle_point, clamp_corner_radius, corner_arc_centers, is_corner_radius_zero,
    CORNER_START_ANGLES,
};

/// UV of `p` inside `rect`, so textured rounded fills sample the same image
/// region as the plain quad.
#[inline]
fn uv_in_rect(rect: Rect, p: Vec2) -> Vec2 {
    let u = if rect.width() != 0.0 { (p.x - rect.left()) / rect.width() } else { 0.5 };
    let v = if rect.height() != 0.0 { (p.y - rect.top()) / rect.height() } else { 0.5 };
    Vec2::new(u, v)
}

impl DrawList {
    /// Outlines `rect`, optionally with rounded corners.
    ///
    /// Radii are clamped to half the shorter side. With no rounding this is a
    /// closed four-point loop; otherwise four quarter-turn arcs plus the four
    /// straight edges between their tangent points.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32, rounding: CornerRadius) {
        let rounding = clamp_corner_radius(rect, rounding);

        if is_corner_radius_zero(rounding) {
            self.line_loop(&rect.corners(), color, thickness);
            return;
        }

        let segments = self.config().corner_segments;
        let centers = corner_arc_centers(rect, rounding).to_array();
        let radii = rounding.to_array();
        for i in 0..4 {
            self.stroke_arc(
                centers[i],
                radii[i],
                CORNER_START_ANGLES[i],
                FRAC_PI_2,
                segments,
                color,
                thickness,
            );
        }

        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let edges = [
            (Vec2::new(l + rounding.x, t), Vec2::new(r - rounding.y, t)),
            (Vec2::new(r, t + rounding.y), Vec2::new(r, b - rounding.z)),
            (Vec2::new(r - rounding.z, b), Vec2::new(l + rounding.w, b)),
            (Vec2::new(l, b - rounding.w), Vec2::new(l, t + rounding.x)),
        ];
        for (start, end) in edges {
            self.add_line(start, end, color, thickness);
        }
    }

    /// Fills `rect`, optionally with rounded corners.
    ///
    /// Without rounding: 4 vertices (TL, TR, BR, BL) and 2 triangles.
    /// With rounding: a center vertex followed by `corner_segments + 1` arc
    /// vertices per corner in TL, TR, BR, BL order, triangulated as a fan.
    /// Empty rects draw nothing.
    pub fn fill_rect(&mut self, rect: Rect, color: Color, rounding: CornerRadius) {
        if rect.is_empty() {
            return;
        }

        let rounding = clamp_corner_radius(rect, rounding);

        if is_corner_radius_zero(rounding) {
            self.add_quad_raw(rect.corners(), QUAD_UVS, color);
            return;
        }

        let segments = self.config().corner_segments.max(1);
        let step = FRAC_PI_2 / segments as f32;
        let centers = corner_arc_centers(rect, rounding).to_array();
        let radii = rounding.to_array();

        let center_idx = self.begin_shape(color);
        self.push_vertex(rect.center(), Vec2::new(0.5, 0.5));
        for i in 0..4 {
            for s in 0..=segments {
                let angle = CORNER_START_ANGLES[i] + s as f32 * step;
                let p = circle_point(centers[i], radii[i], angle);
                self.push_vertex(p, uv_in_rect(rect, p));
            }
        }
        self.fan_to_mid(center_idx);
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::{CornerRadius, Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::list::test_util::{assert_commands_cover_indices, signed_area};
    use crate::scene::{DrawList, TessellationConfig};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_without_rounding_is_plain_quad() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::WHITE, CornerRadius::zero());

        let pos: Vec<Vec2> = list.vertices().iter().map(|v| v.pos).collect();
        assert_eq!(
            pos,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(100.0, 0.0),
                Vec2::new(100.0, 50.0),
                Vec2::new(0.0, 50.0),
            ]
        );
        assert_eq!(list.indices().len(), 6);
    }

    #[test]
    fn fill_rounded_vertex_and_triangle_counts() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::WHITE, CornerRadius::all(10.0));

        let segments = TessellationConfig::default().corner_segments as usize;
        let perimeter = 4 * (segments + 1);
        assert_eq!(list.vertices().len(), 1 + perimeter);
        assert_eq!(list.indices().len(), perimeter * 3);
        assert_eq!(list.vertices()[0].pos, Vec2::new(50.0, 25.0));

        // Closing triangle: center, last perimeter vertex, first perimeter vertex.
        let n = list.indices().len();
        assert_eq!(&list.indices()[n - 3..], &[0, perimeter as u32, 1]);
        assert_commands_cover_indices(&list);
    }

    #[test]
    fn fill_rounded_perimeter_starts_on_left_edge_and_walks_clockwise() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        list.fill_rect(rect, Color::WHITE, CornerRadius::all(10.0));
        let v = list.vertices();
        let per_corner = TessellationConfig::default().corner_segments as usize + 1;

        // TL arc: left edge -> top edge
        assert!(close(v[1].pos, Vec2::new(0.0, 10.0)));
        assert!(close(v[per_corner].pos, Vec2::new(10.0, 0.0)));
        // TR arc starts on the top edge
        assert!(close(v[1 + per_corner].pos, Vec2::new(90.0, 0.0)));
        // BR arc starts on the right edge
        assert!(close(v[1 + 2 * per_corner].pos, Vec2::new(100.0, 40.0)));
        // BL arc ends on the left edge
        assert!(close(v[4 * per_corner].pos, Vec2::new(0.0, 40.0)));
    }

    #[test]
    fn fill_rounded_winding_is_uniform_including_closing_triangle() {
        let radii = [
            CornerRadius::all(10.0),
            CornerRadius::new(3.0, 12.0, 0.0, 25.0),
            CornerRadius::new(25.0, 25.0, 25.0, 20.0),
            CornerRadius::new(0.0, 0.0, 7.0, 0.0),
        ];
        for segments in [1, 2, 7, 8] {
            for r in radii {
                let mut list =
                    DrawList::with_config(TessellationConfig { corner_segments: segments, ..Default::default() });
                list.fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::WHITE, r);

                let triangles = list.indices().len() / 3;
                for t in 0..triangles {
                    let area = signed_area(&list, t);
                    assert!(area >= -1e-3, "segments {segments} radii {r:?}: triangle {t} area {area}");
                }
                let closing = signed_area(&list, triangles - 1);
                assert!(closing > 0.0, "closing triangle must not be degenerate: {closing}");
            }
        }
    }

    #[test]
    fn fill_uvs_map_into_rect() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(10.0, 10.0, 40.0, 20.0), Color::WHITE, CornerRadius::all(5.0));
        for v in list.vertices() {
            assert!((-1e-4..=1.0001).contains(&v.uv.x) && (-1e-4..=1.0001).contains(&v.uv.y));
        }
        assert_eq!(list.vertices()[0].uv, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn fill_empty_rect_is_noop() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 0.0, 10.0), Color::WHITE, CornerRadius::zero());
        list.fill_rect(Rect::new(0.0, 0.0, -5.0, 10.0), Color::WHITE, CornerRadius::all(2.0));
        assert!(list.vertices().is_empty());
    }

    #[test]
    fn fill_oversized_radius_is_clamped() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0), Color::WHITE, CornerRadius::all(500.0));
        for v in list.vertices() {
            assert!(v.pos.x >= -1e-3 && v.pos.x <= 20.001);
            assert!(v.pos.y >= -1e-3 && v.pos.y <= 20.001);
        }
    }

    #[test]
    fn negative_radius_corner_stays_square_and_inside() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        list.fill_rect(rect, Color::WHITE, CornerRadius::new(-10.0, 5.0, 5.0, 5.0));

        let per_corner = TessellationConfig::default().corner_segments as usize + 1;
        for v in &list.vertices()[1..=per_corner] {
            assert!(close(v.pos, Vec2::new(0.0, 0.0)), "{:?}", v.pos);
        }
        for v in list.vertices() {
            assert!(v.pos.x >= -1e-3 && v.pos.x <= 100.001, "{:?}", v.pos);
            assert!(v.pos.y >= -1e-3 && v.pos.y <= 50.001, "{:?}", v.pos);
        }
    }

    // ── stroke ────────────────────────────────────────────────────────────

    #[test]
    fn stroke_negative_radius_stays_within_half_thickness() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let thickness = 1.0;
        list.stroke_rect(rect, Color::WHITE, thickness, CornerRadius::new(-10.0, 5.0, 5.0, 5.0));

        let slack = thickness * 0.5 + 1e-3;
        for v in list.vertices() {
            assert!(v.pos.x >= -slack && v.pos.x <= 100.0 + slack, "{:?}", v.pos);
            assert!(v.pos.y >= -slack && v.pos.y <= 50.0 + slack, "{:?}", v.pos);
        }
    }

    #[test]
    fn stroke_without_rounding_is_four_lines() {
        let mut list = DrawList::new();
        list.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, 1.0, CornerRadius::zero());
        assert_eq!(list.vertices().len(), 4 * 4);
    }

    #[test]
    fn stroke_rounded_is_arcs_plus_edges() {
        let mut list = DrawList::new();
        list.stroke_rect(Rect::new(600.0, 100.0, 200.0, 100.0), Color::WHITE, 3.0, CornerRadius::all(4.0));
        let segments = TessellationConfig::default().corner_segments as usize;
        assert_eq!(list.vertices().len(), (4 * segments + 4) * 4);
        assert_commands_cover_indices(&list);
    }

    #[test]
    fn stroke_rounded_left_edge_joins_top_left_arc() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        list.stroke_rect(rect, Color::WHITE, 2.0, CornerRadius::new(4.0, 9.0, 9.0, 9.0));

        // The last quad is the left edge; its end must meet the TL arc start (0, 4).
        let n = list.vertices().len();
        let left = &list.vertices()[n - 4..];
        let end_mid = (left[1].pos + left[2].pos) * 0.5;
        assert!(close(end_mid, Vec2::new(0.0, 4.0)), "{end_mid:?}");
    }

    #[test]
    fn stroke_zero_thickness_is_noop() {
        let mut list = DrawList::new();
        list.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, 0.0, CornerRadius::all(2.0));
        assert!(list.is_empty());
    }
}
