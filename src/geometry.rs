//! Geometric primitives for rasterization.
//!
//! Provides the straight-edged value types: points, line segments and
//! axis-aligned rectangles (plus the two rectangle renderings, [`Border`]
//! and [`Fill`]). All of them are `Copy` descriptors; only the grid they
//! are drawn into holds state.
//!
//! Coordinates follow the grid convention: `x` grows to the right, `y`
//! grows downwards, `(0, 0)` is the top-left cell.

use std::fmt;
use std::ops::{Add, Sub};

use crate::render::Bounder;

/// Default tolerance used to classify a line as vertical or horizontal.
///
/// Tunable through [`crate::grid::RasterConfig`]. Long, nearly axis-aligned
/// segments are sensitive to this value.
pub const ORIENTATION_EPSILON: f64 = 1e-5;

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate (column).
    pub x: f64,
    /// Y coordinate (row).
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset the point by `x` and `y`.
    #[must_use]
    pub fn add_xy(self, x: f64, y: f64) -> Self {
        Self::new(self.x + x, self.y + y)
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Calculate the Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other`.
    ///
    /// `factor` 0 yields `self`, 1 yields `other`; values outside `[0, 1]`
    /// extrapolate along the same line.
    #[must_use]
    pub fn between(self, other: Self, factor: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * factor,
            self.y + (other.y - self.y) * factor,
        )
    }

    /// Project onto the nearest integer cell.
    ///
    /// Uses [`f64::round`], so ties round half away from zero
    /// (`0.5 -> 1`, `-0.5 -> -1`).
    #[must_use]
    pub fn round(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add_xy(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

/// Rasterization strategy selected for a line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Constant y; walked one column at a time.
    Horizontal,
    /// Constant x; walked one row at a time.
    Vertical,
    /// Anything else; walked parametrically.
    Angled,
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub a: Point,
    /// End point.
    pub b: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn mid(&self) -> Point {
        self.a.between(self.b, 0.5)
    }

    /// Classify the segment using [`ORIENTATION_EPSILON`].
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation_with(ORIENTATION_EPSILON)
    }

    /// Classify the segment with an explicit tolerance.
    ///
    /// The vertical test runs first, so coincident endpoints are vertical.
    #[must_use]
    pub fn orientation_with(&self, epsilon: f64) -> Orientation {
        if (self.a.x - self.b.x).abs() < epsilon {
            Orientation::Vertical
        } else if (self.a.y - self.b.y).abs() < epsilon {
            Orientation::Horizontal
        } else {
            Orientation::Angled
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.a, self.b)
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// The corners are not reordered: callers must pass `min <= max` on both
/// axes, otherwise edges and fills come out inverted (a fill of an inverted
/// rectangle plots nothing).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub min: Point,
    /// Bottom-right corner.
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from its two corners.
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from corner coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Create a rectangle covering `width` by `height` cells starting at `origin`.
    #[must_use]
    pub fn from_size(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin, origin.add_xy(width - 1.0, height - 1.0))
    }

    /// Horizontal extent (`max.x - min.x`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent (`max.y - min.y`).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.min.between(self.max, 0.5)
    }

    /// Whether `other`'s bounds lie entirely inside this rectangle (edges inclusive).
    #[must_use]
    pub fn contains<B: Bounder + ?Sized>(&self, other: &B) -> bool {
        let bounds = other.bounds();
        bounds.min.x >= self.min.x
            && bounds.min.y >= self.min.y
            && bounds.max.x <= self.max.x
            && bounds.max.y <= self.max.y
    }

    /// Expand by `n` units on every side.
    #[must_use]
    pub fn grow(&self, n: f64) -> Self {
        let amount = Point::new(n, n);
        Self::new(self.min - amount, self.max + amount)
    }

    /// Contract by `n` units on every side.
    #[must_use]
    pub fn shrink(&self, n: f64) -> Self {
        self.grow(-n)
    }

    /// Top-left corner (`min`).
    #[must_use]
    pub fn top_left(&self) -> Point {
        self.min
    }

    /// Top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(self.max.x, self.min.y)
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.min.x, self.max.y)
    }

    /// Bottom-right corner (`max`).
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.max
    }

    /// Top edge, left to right.
    #[must_use]
    pub fn top(&self) -> Line {
        Line::new(self.top_left(), self.top_right())
    }

    /// Bottom edge, left to right.
    #[must_use]
    pub fn bottom(&self) -> Line {
        Line::new(self.bottom_left(), self.bottom_right())
    }

    /// Left edge, top to bottom.
    #[must_use]
    pub fn left(&self) -> Line {
        Line::new(self.top_left(), self.bottom_left())
    }

    /// Right edge, top to bottom.
    #[must_use]
    pub fn right(&self) -> Line {
        Line::new(self.top_right(), self.bottom_right())
    }

    /// The four edges in drawing order: top, bottom, left, right.
    #[must_use]
    pub fn edges(&self) -> [Line; 4] {
        [self.top(), self.bottom(), self.left(), self.right()]
    }

    /// Render this rectangle as a [`Border`].
    #[must_use]
    pub const fn border(self) -> Border {
        Border(self)
    }

    /// Render this rectangle as a solid [`Fill`].
    #[must_use]
    pub const fn fill(self) -> Fill {
        Fill(self)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {})", self.min, self.max)
    }
}

/// A rectangle outline with fixed edge glyphs.
///
/// Horizontal edges use [`Border::HORIZONTAL`], vertical edges use
/// [`Border::VERTICAL`]; the glyph handed to `draw` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Border(pub Rect);

impl Border {
    /// Glyph for the top and bottom edges.
    pub const HORIZONTAL: u8 = b'-';
    /// Glyph for the left and right edges.
    pub const VERTICAL: u8 = b'|';

    /// The outlined rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.0
    }
}

/// A solid rectangle covering every integer cell in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fill(pub Rect);

impl Fill {
    /// The filled rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_relative_eq!(p1.distance(p2), 5.0);
    }

    #[test]
    fn test_point_between() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(10.0, 10.0);
        assert_eq!(p1.between(p2, 0.0), p1);
        assert_eq!(p1.between(p2, 1.0), p2);

        let mid = p1.between(p2, 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 5.0);
    }

    #[test]
    fn test_point_between_extrapolates() {
        let p = Point::new(1.0, 1.0).between(Point::new(2.0, 3.0), 2.0);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 5.0);
    }

    #[test]
    fn test_point_round_ties_away_from_zero() {
        assert_eq!(Point::new(0.5, 1.5).round(), (1, 2));
        assert_eq!(Point::new(-0.5, 2.49).round(), (-1, 2));
    }

    #[test]
    fn test_point_min_max_ops() {
        let a = Point::new(1.0, 5.0);
        let b = Point::new(3.0, 2.0);
        assert_eq!(a.min(b), Point::new(1.0, 2.0));
        assert_eq!(a.max(b), Point::new(3.0, 5.0));
        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "Point(1.5, -2)");
    }

    #[test]
    fn test_line_length_and_mid() {
        let line = Line::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_relative_eq!(line.length(), 5.0);
        assert_eq!(line.mid(), Point::new(1.5, 2.0));
    }

    #[test]
    fn test_line_orientation() {
        assert_eq!(Line::from_coords(2.0, 0.0, 2.0, 9.0).orientation(), Orientation::Vertical);
        assert_eq!(Line::from_coords(0.0, 4.0, 9.0, 4.0).orientation(), Orientation::Horizontal);
        assert_eq!(Line::from_coords(0.0, 0.0, 3.0, 1.0).orientation(), Orientation::Angled);
        // Coincident endpoints land in the vertical bucket.
        assert_eq!(Line::from_coords(1.0, 1.0, 1.0, 1.0).orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_line_orientation_with_custom_epsilon() {
        let line = Line::from_coords(0.0, 0.0, 0.01, 10.0);
        assert_eq!(line.orientation(), Orientation::Angled);
        assert_eq!(line.orientation_with(0.1), Orientation::Vertical);
    }

    #[test]
    fn test_rect_corners_and_edges() {
        let rect = Rect::from_coords(1.0, 2.0, 5.0, 7.0);
        assert_eq!(rect.top_right(), Point::new(5.0, 2.0));
        assert_eq!(rect.bottom_left(), Point::new(1.0, 7.0));
        assert_eq!(rect.top(), Line::from_coords(1.0, 2.0, 5.0, 2.0));
        assert_eq!(rect.right(), Line::from_coords(5.0, 2.0, 5.0, 7.0));
        assert_eq!(rect.edges().len(), 4);
    }

    #[test]
    fn test_rect_grow_shrink() {
        let rect = Rect::from_coords(2.0, 2.0, 4.0, 4.0);
        assert_eq!(rect.grow(1.0), Rect::from_coords(1.0, 1.0, 5.0, 5.0));
        assert_eq!(rect.grow(1.0).shrink(1.0), rect);
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains(&Point::new(5.0, 5.0)));
        assert!(outer.contains(&Rect::from_coords(0.0, 0.0, 10.0, 10.0)));
        assert!(!outer.contains(&Point::new(15.0, 5.0)));
        assert!(!outer.contains(&Rect::from_coords(2.0, 2.0, 4.0, 11.0)));
    }

    #[test]
    fn test_rect_center_and_size() {
        let rect = Rect::from_size(Point::new(1.0, 1.0), 4.0, 3.0);
        assert_eq!(rect.max, Point::new(4.0, 3.0));
        assert_relative_eq!(rect.width(), 3.0);
        assert_relative_eq!(rect.height(), 2.0);
        assert_eq!(rect.center(), Point::new(2.5, 2.0));
    }
}
