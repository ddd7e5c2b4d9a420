use super::Vec2;

/// Axis-aligned rectangle in destination pixels (top-left origin, +Y down).
///
/// Zero or negative sizes are valid values. Geometry built from them is
/// degenerate, and clipping treats them as empty.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn top_left(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn top_right(self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    #[inline]
    pub fn bottom_right(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn bottom_left(self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    /// Corners in fill winding order: TL, TR, BR, BL.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [self.top_left(), self.top_right(), self.bottom_right(), self.bottom_left()]
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.bottom_right()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.left() && p.y >= r.top() && p.x < r.right() && p.y < r.bottom()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let clipped = self.clip(other);
        if clipped.is_empty() { None } else { Some(clipped) }
    }

    /// Intersection of `self` with `clip`, collapsed to a zero-size rect
    /// (never negative) when they do not overlap.
    #[inline]
    pub fn clip(self, clip: Rect) -> Rect {
        let a = self.normalized();
        let b = clip.normalized();

        let x0 = a.left().max(b.left());
        let y0 = a.top().max(b.top());
        let x1 = a.right().min(b.right()).max(x0);
        let y1 = a.bottom().min(b.bottom()).max(y0);

        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}
