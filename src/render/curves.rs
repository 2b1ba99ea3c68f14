//! Rasterization of circles and spirals.

use std::f64::consts::PI;

use tracing::trace;

use super::{Bounder, Drawer};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::grid::{Glyph, Grid};
use crate::shapes::{Circle, Spiral};

/// Bounds of a stretched circle: `aspect * r` horizontally, `r` vertically.
fn stretched_bounds(center: Point, radius: f64, aspect: f64) -> Rect {
    let extent = Point::new(radius * aspect, radius);
    Rect::new(center - extent, center + extent)
}

fn ensure_sampleable(center: Point, aspect: f64) -> Result<()> {
    if center.x.is_finite() && center.y.is_finite() && aspect.is_finite() {
        Ok(())
    } else {
        Err(Error::DegenerateGeometry("non-finite center or aspect ratio".to_string()))
    }
}

// ============================================================================
// Circle
// ============================================================================

impl Drawer for Circle {
    /// Sweep phase over `[-π, π]` in steps of `1 / circumference`.
    ///
    /// The step comes from the unstretched radius, so the wide sides of a
    /// stretched circle are sampled less densely than the narrow ones.
    fn draw(&self, grid: &mut Grid, glyph: Glyph) -> Result<()> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(Error::DegenerateGeometry(format!(
                "circle radius must be positive, got {}",
                self.radius
            )));
        }
        ensure_sampleable(self.center, self.aspect)?;

        let step = 1.0 / self.circumference();
        trace!(center = %self.center, radius = self.radius, step, "rasterizing circle");

        let mut phase = -PI;
        while phase <= PI {
            self.point(phase).draw(grid, glyph)?;
            phase += step;
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "circle"
    }
}

impl Bounder for Circle {
    fn bounds(&self) -> Rect {
        stretched_bounds(self.center, self.radius, self.aspect)
    }
}

// ============================================================================
// Spiral
// ============================================================================

impl Drawer for Spiral {
    /// Plot [`Spiral::samples`] in order.
    ///
    /// A non-positive starting radius draws nothing and succeeds. A radius
    /// that is not a number, or a delta too small to ever shrink it, is
    /// degenerate.
    fn draw(&self, grid: &mut Grid, glyph: Glyph) -> Result<()> {
        ensure_sampleable(self.center, self.aspect)?;
        if self.radius.is_nan() || self.radius == f64::INFINITY {
            return Err(Error::DegenerateGeometry(format!(
                "spiral radius must be finite, got {}",
                self.radius
            )));
        }
        if self.radius > 0.0 && !self.converges() {
            return Err(Error::DegenerateGeometry(format!(
                "spiral delta {} cannot shrink radius {}",
                self.delta, self.radius
            )));
        }

        trace!(
            center = %self.center,
            radius = self.radius,
            delta = self.effective_delta(),
            "rasterizing spiral"
        );

        for point in self.samples() {
            point.draw(grid, glyph)?;
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "spiral"
    }
}

impl Bounder for Spiral {
    /// Bounds of the starting radius; just the center if it is not positive.
    fn bounds(&self) -> Rect {
        stretched_bounds(self.center, self.radius.max(0.0), self.aspect)
    }
}

// ============================================================================
// Tests
// ============================================================================
