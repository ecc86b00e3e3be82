//! Core geometry types: points, line segments, rectangles.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
///
/// Degenerate segments (both endpoints equal) are allowed; they show up
/// when a hatch candidate grazes a rectangle corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// An axis-aligned rectangle spanned by its bottom-left and top-right corners.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`. Zero width or height
/// is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

/// A closed sequence of points. Only its bounding corners are consumed
/// by the hatch generator.
pub type Contour = Vec<Point>;

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Get the start point of the line.
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Get the end point of the line.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Get the midpoint of the line.
    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.x1 + self.x2) / 2.0,
            (self.y1 + self.y2) / 2.0,
        )
    }

    /// Length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

impl Rect {
    /// Create a rectangle from its bottom-left and top-right corners.
    ///
    /// The caller is responsible for `min <= max` on both axes; use
    /// [`Rect::from_corners`] when the ordering is not known.
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from two opposite corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Bounding rectangle of a point sequence, or `None` if it is empty.
    pub fn bounding(points: &[Point]) -> Option<Rect> {
        if points.is_empty() {
            return None;
        }

        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some(Rect::new(Point::new(min_x, min_y), Point::new(max_x, max_y)))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Diagonal length of the rectangle.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        let w = self.width();
        let h = self.height();
        (w * w + h * h).sqrt()
    }

    /// Check if a point lies inside the rectangle. Boundary points count
    /// as inside.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }

    /// The four corners in contour order: bottom-left, bottom-right,
    /// top-right, top-left.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// The four border edges, each running to the next corner in contour
    /// order.
    pub fn edges(&self) -> [Line; 4] {
        let c = self.corners();
        [
            Line::new(c[0].x, c[0].y, c[1].x, c[1].y),
            Line::new(c[1].x, c[1].y, c[2].x, c[2].y),
            Line::new(c[2].x, c[2].y, c[3].x, c[3].y),
            Line::new(c[3].x, c[3].y, c[0].x, c[0].y),
        ]
    }
}
