//! Curved primitives and text.
//!
//! Circles and spirals are sampled parametrically. Character cells are
//! roughly twice as tall as they are wide, so both stretch their horizontal
//! axis by an aspect ratio ([`ASPECT_RATIO`] unless overridden). A circle of
//! radius `r` therefore spans `4r` columns and `2r` rows.

use std::f64::consts::PI;

use crate::geometry::Point;

/// Default horizontal stretch for curved primitives.
///
/// Tuned for terminal fonts whose cells are about twice as tall as wide.
pub const ASPECT_RATIO: f64 = 2.0;

/// A circle outline, stretched horizontally by its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Vertical radius in cells. Must be positive to draw.
    pub radius: f64,
    /// Horizontal stretch factor.
    pub aspect: f64,
}

impl Circle {
    /// Create a circle with the default [`ASPECT_RATIO`].
    #[must_use]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius, aspect: ASPECT_RATIO }
    }

    /// Override the horizontal stretch.
    #[must_use]
    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = aspect;
        self
    }

    /// Circumference of the unstretched circle (`2πr`).
    ///
    /// Used as the sampling density, so stretched circles are sampled more
    /// sparsely along their wide sides than along their narrow ones.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Point on the perimeter at `phase` radians.
    ///
    /// Phase 0 is straight below the center; `±π` is straight above.
    #[must_use]
    pub fn point(&self, phase: f64) -> Point {
        Point::new(
            self.center.x + phase.sin() * (self.radius * self.aspect),
            self.center.y + phase.cos() * self.radius,
        )
    }

    /// Point on the perimeter at a revolution fraction in `[0, 1]`.
    ///
    /// Fraction 0 maps to phase `-π`, fraction 1 to phase `π`.
    #[must_use]
    pub fn point_at_fraction(&self, fraction: f64) -> Point {
        self.point(-PI + fraction * 2.0 * PI)
    }
}

/// An inward spiral arm: one point per step, shrinking by `delta` each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spiral {
    /// Center point.
    pub center: Point,
    /// Starting (outermost) radius.
    pub radius: f64,
    /// Radius lost per step. Non-positive values act as 1.
    pub delta: f64,
    /// Horizontal stretch factor.
    pub aspect: f64,
}

impl Spiral {
    /// Create a spiral with the default [`ASPECT_RATIO`].
    #[must_use]
    pub const fn new(center: Point, radius: f64, delta: f64) -> Self {
        Self { center, radius, delta, aspect: ASPECT_RATIO }
    }

    /// Override the horizontal stretch.
    #[must_use]
    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = aspect;
        self
    }

    /// Radius decrement actually applied per step.
    #[must_use]
    pub fn effective_delta(&self) -> f64 {
        if self.delta > 0.0 {
            self.delta
        } else {
            1.0
        }
    }

    /// The circle traced at `radius`, sharing this spiral's center and stretch.
    #[must_use]
    pub fn circle_at(&self, radius: f64) -> Circle {
        Circle::new(self.center, radius).with_aspect(self.aspect)
    }

    /// Every point the spiral plots, outermost first.
    ///
    /// Each step plots a single point at the current radius and revolution
    /// fraction, then advances the fraction by one over that radius's
    /// circumference and shrinks the radius by [`Spiral::effective_delta`].
    /// The fraction carries across radius steps and only restarts at 0 once
    /// it passes 1. Sampling ends when the radius reaches zero, so a
    /// non-positive starting radius yields nothing.
    pub fn samples(&self) -> impl Iterator<Item = Point> {
        let spiral = *self;
        let delta = self.effective_delta();
        let mut radius = self.radius;
        let mut fraction = 0.0;

        std::iter::from_fn(move || {
            if !(radius > 0.0 && radius.is_finite()) {
                return None;
            }
            let circle = spiral.circle_at(radius);
            let point = circle.point_at_fraction(fraction);

            fraction += 1.0 / circle.circumference();
            if fraction > 1.0 {
                fraction = 0.0;
            }
            // A delta below the float spacing at this radius cannot shrink it.
            let next = radius - delta;
            radius = if next < radius { next } else { 0.0 };
            Some(point)
        })
    }

    /// Whether each step actually shrinks the starting radius.
    ///
    /// False when `delta` is lost to rounding against `radius`.
    #[must_use]
    pub fn converges(&self) -> bool {
        self.radius - self.effective_delta() < self.radius
    }
}

/// Text placed cell by cell, starting at `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Top-left cell of the first line.
    pub origin: Point,
    /// Content; split on `'\n'` unless created with [`Text::single_line`].
    pub text: String,
    multiline: bool,
}

impl Text {
    /// Create multi-line text; each `'\n'` starts a new row.
    #[must_use]
    pub fn new(origin: Point, text: impl Into<String>) -> Self {
        Self { origin, text: text.into(), multiline: true }
    }

    /// Create text that is always laid out on a single row.
    #[must_use]
    pub fn single_line(origin: Point, text: impl Into<String>) -> Self {
        Self { origin, text: text.into(), multiline: false }
    }

    /// The rows this text occupies.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        if self.multiline {
            self.text.split('\n').collect()
        } else {
            vec![self.text.as_str()]
        }
    }

    /// `(width, height)` in cells: longest line's byte length and line count.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        let lines = self.lines();
        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        (width, lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_circumference_ignores_aspect() {
        let circle = Circle::new(Point::ZERO, 1.0);
        assert_relative_eq!(circle.circumference(), 2.0 * PI);
        assert_relative_eq!(circle.with_aspect(5.0).circumference(), 2.0 * PI);
    }

    #[test]
    fn test_circle_point_is_stretched() {
        let circle = Circle::new(Point::new(10.0, 10.0), 3.0);

        let below = circle.point(0.0);
        assert_relative_eq!(below.x, 10.0);
        assert_relative_eq!(below.y, 13.0);

        let right = circle.point(PI / 2.0);
        assert_relative_eq!(right.x, 16.0);
        assert_relative_eq!(right.y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_at_fraction_spans_full_turn() {
        let circle = Circle::new(Point::ZERO, 2.0);
        let start = circle.point_at_fraction(0.0);
        let end = circle.point_at_fraction(1.0);
        assert_relative_eq!(start.x, end.x, epsilon = 1e-9);
        assert_relative_eq!(start.y, -2.0);
    }

    #[test]
    fn test_spiral_effective_delta() {
        assert_relative_eq!(Spiral::new(Point::ZERO, 5.0, 2.0).effective_delta(), 2.0);
        assert_relative_eq!(Spiral::new(Point::ZERO, 5.0, 0.0).effective_delta(), 1.0);
        assert_relative_eq!(Spiral::new(Point::ZERO, 5.0, -3.0).effective_delta(), 1.0);
    }

    #[test]
    fn test_spiral_non_positive_radius_is_empty() {
        assert!(Spiral::new(Point::ZERO, 0.0, 1.0).samples().next().is_none());
        assert!(Spiral::new(Point::ZERO, -4.0, 1.0).samples().next().is_none());
    }

    #[test]
    fn test_spiral_samples_shrink_inwards() {
        let spiral = Spiral::new(Point::new(20.0, 10.0), 3.0, 1.0);
        let samples: Vec<Point> = spiral.samples().collect();

        // One sample per radius: 3, 2, 1.
        assert_eq!(samples.len(), 3);

        // First sample sits on the outer radius, straight above center.
        assert_relative_eq!(samples[0].x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(samples[0].y, 7.0);

        // Nothing strays past the outer radius's stretched extent.
        for p in &samples {
            assert!((p.x - 20.0).abs() <= 6.0 + 1e-9);
            assert!((p.y - 10.0).abs() <= 3.0 + 1e-9);
        }

        // The final sample belongs to radius 1.
        let last = samples[samples.len() - 1];
        assert!(last.distance(Point::new(20.0, 10.0)) <= 2.0 + 1e-9);
    }

    #[test]
    fn test_spiral_carries_fraction_across_radius_steps() {
        let spiral = Spiral::new(Point::new(20.0, 10.0), 3.0, 1.0);
        let samples: Vec<Point> = spiral.samples().collect();

        let second = 1.0 / spiral.circle_at(3.0).circumference();
        let third = second + 1.0 / spiral.circle_at(2.0).circumference();
        let expected = [
            spiral.circle_at(3.0).point_at_fraction(0.0),
            spiral.circle_at(2.0).point_at_fraction(second),
            spiral.circle_at(1.0).point_at_fraction(third),
        ];

        assert_eq!(samples.len(), expected.len());
        for (got, want) in samples.iter().zip(expected) {
            assert_relative_eq!(got.x, want.x);
            assert_relative_eq!(got.y, want.y);
        }
    }

    #[test]
    fn test_spiral_fraction_resets_past_one() {
        // Small radii advance the fraction by more than a full turn.
        let spiral = Spiral::new(Point::new(5.0, 5.0), 0.3, 0.1);
        let samples: Vec<Point> = spiral.samples().collect();
        assert_eq!(samples.len(), 3);

        let middle = 1.0 / spiral.circle_at(0.3).circumference();
        assert!(middle + 1.0 / spiral.circle_at(0.3 - 0.1).circumference() > 1.0);

        let restarted = spiral.circle_at(0.3 - 0.1 - 0.1).point_at_fraction(0.0);
        assert_relative_eq!(samples[1].x, spiral.circle_at(0.3 - 0.1).point_at_fraction(middle).x);
        assert_relative_eq!(samples[2].x, restarted.x);
        assert_relative_eq!(samples[2].y, restarted.y);
    }

    #[test]
    fn test_spiral_vanishing_delta_terminates() {
        let spiral = Spiral::new(Point::new(20.0, 10.0), 5.0, 1e-20);
        assert!(!spiral.converges());
        assert_eq!(spiral.samples().count(), 1);
        assert!(Spiral::new(Point::ZERO, 5.0, 0.5).converges());
    }

    #[test]
    fn test_text_lines_and_dims() {
        let text = Text::new(Point::ZERO, "ab\nlonger\nc");
        assert_eq!(text.lines(), vec!["ab", "longer", "c"]);
        assert_eq!(text.dims(), (6, 3));
    }

    #[test]
    fn test_single_line_text_keeps_newlines_together() {
        let text = Text::single_line(Point::ZERO, "ab\ncd");
        assert_eq!(text.lines().len(), 1);
        assert_eq!(text.dims(), (5, 1));
    }

    #[test]
    fn test_empty_text_dims() {
        assert_eq!(Text::new(Point::ZERO, "").dims(), (0, 1));
    }
}
