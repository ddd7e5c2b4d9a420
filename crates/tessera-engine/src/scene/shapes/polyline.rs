use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::DrawList;

impl DrawList {
    /// Draws a line through consecutive `points`.
    ///
    /// With `rounded` and more than two points, every interior joint also gets
    /// a filled circle of radius `thickness / 2` to hide the seams.
    /// Fewer than two points draws nothing.
    pub fn polyline(&mut self, points: &[Vec2], color: Color, thickness: f32, rounded: bool) {
        if points.len() < 2 {
            return;
        }

        for pair in points.windows(2) {
            self.add_line(pair[0], pair[1], color, thickness);
        }

        if rounded && points.len() > 2 {
            let radius = thickness * 0.5;
            let segments = self.config().round_join_segments;
            for &joint in &points[1..points.len() - 1] {
                self.fill_circle(joint, radius, color, segments);
            }
        }
    }

    /// Closed outline through `points`, including the segment back to the first.
    pub(crate) fn line_loop(&mut self, points: &[Vec2], color: Color, thickness: f32) {
        let n = points.len();
        for i in 0..n {
            self.add_line(points[i], points[(i + 1) % n], color, thickness);
        }
    }
}
