use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::DrawList;
use crate::scene::list::QUAD_UVS;
use crate::tess::perpendicular_normalized;

impl DrawList {
    /// Draws a straight segment as a quad `thickness` wide.
    ///
    /// Vertices are `start + o, end + o, end - o, start - o` where `o` is the
    /// half-thickness perpendicular offset. Non-positive thickness draws nothing.
    pub fn add_line(&mut self, start: Vec2, end: Vec2, color: Color, thickness: f32) {
        if !(thickness > 0.0) {
            return;
        }

        let offset = perpendicular_normalized(end - start) * (thickness * 0.5);
        let pos = [start + offset, end + offset, end - offset, start - offset];
        self.add_quad_raw(pos, QUAD_UVS, color);
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::DrawList;
    use crate::scene::list::test_util::assert_commands_cover_indices;

    #[test]
    fn horizontal_line_offsets_along_y() {
        let mut list = DrawList::new();
        list.add_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Color::WHITE, 2.0);

        let pos: Vec<Vec2> = list.vertices().iter().map(|v| v.pos).collect();
        assert_eq!(
            pos,
            vec![
                Vec2::new(0.0, 1.0),
                Vec2::new(10.0, 1.0),
                Vec2::new(10.0, -1.0),
                Vec2::new(0.0, -1.0),
            ]
        );
        assert_eq!(list.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_commands_cover_indices(&list);
    }

    #[test]
    fn non_positive_thickness_is_noop() {
        let mut list = DrawList::new();
        list.add_line(Vec2::zero(), Vec2::new(10.0, 0.0), Color::WHITE, 1.0);
        let before = list.commands().to_vec();

        list.add_line(Vec2::zero(), Vec2::new(10.0, 0.0), Color::WHITE, 0.0);
        list.add_line(Vec2::zero(), Vec2::new(10.0, 0.0), Color::WHITE, -3.0);
        list.add_line(Vec2::zero(), Vec2::new(10.0, 0.0), Color::WHITE, f32::NAN);

        assert_eq!(list.vertices().len(), 4);
        assert_eq!(list.indices().len(), 6);
        assert_eq!(list.commands(), before.as_slice());
    }

    #[test]
    fn zero_length_segment_stays_finite() {
        let mut list = DrawList::new();
        let p = Vec2::new(3.0, 3.0);
        list.add_line(p, p, Color::WHITE, 4.0);
        assert!(list.vertices().iter().all(|v| v.pos == p));
    }
}
