use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::DrawList;

const TRIANGLE_UVS: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)];

impl DrawList {
    /// Outlines the triangle as a closed loop of three lines.
    pub fn stroke_triangle(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, color: Color, thickness: f32) {
        self.line_loop(&[p1, p2, p3], color, thickness);
    }

    /// Fills the triangle directly; no fan is needed.
    pub fn fill_triangle(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, color: Color) {
        self.add_triangle_raw([p1, p2, p3], TRIANGLE_UVS, color);
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::DrawList;

    #[test]
    fn fill_is_a_single_triangle() {
        let mut list = DrawList::new();
        let (a, b, c) = (Vec2::new(800.0, 100.0), Vec2::new(900.0, 100.0), Vec2::new(850.0, 200.0));
        list.fill_triangle(a, b, c, Color::WHITE);

        let pos: Vec<Vec2> = list.vertices().iter().map(|v| v.pos).collect();
        assert_eq!(pos, vec![a, b, c]);
        assert_eq!(list.indices(), &[0, 1, 2]);
        assert_eq!(list.vertices()[2].uv, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn stroke_is_three_lines() {
        let mut list = DrawList::new();
        list.stroke_triangle(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 8.0),
            Color::WHITE,
            1.0,
        );
        assert_eq!(list.vertices().len(), 12);
        assert_eq!(list.indices().len(), 18);
        assert_eq!(list.commands().len(), 1);
    }
}
