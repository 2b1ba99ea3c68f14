//! Rasterization of straight-edged primitives.
//!
//! Points, lines, rectangle outlines, borders and fills.

use tracing::trace;

use super::{Bounder, Drawer};
use crate::error::{Error, Result};
use crate::geometry::{Border, Fill, Line, Orientation, Point, Rect};
use crate::grid::{Glyph, Grid};

/// Reject coordinates that would make a walk loop forever or never land.
pub(super) fn ensure_finite(points: &[Point], what: &str) -> Result<()> {
    if points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
        Ok(())
    } else {
        Err(Error::DegenerateGeometry(format!("{what} has non-finite coordinates")))
    }
}

// ============================================================================
// Point
// ============================================================================

impl Drawer for Point {
    /// Plot exactly one cell at the rounded coordinate.
    fn draw(&self, grid: &mut Grid, glyph: Glyph) -> Result<()> {
        ensure_finite(&[*self], "point")?;
        let (x, y) = self.round();
        grid.set(x, y, glyph)
    }

    fn kind(&self) -> &'static str {
        "point"
    }
}

impl Bounder for Point {
    fn bounds(&self) -> Rect {
        Rect::new(*self, *self)
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Unit steps from `from` up to and including `to`.
fn unit_steps(from: f64, to: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(from), |v| Some(v + 1.0)).take_while(move |&v| v <= to)
}

impl Drawer for Line {
    /// Rasterize the segment; both rounded endpoints are always plotted.
    ///
    /// Axis-aligned segments (per the grid's orientation epsilon) step one
    /// cell at a time along the varying axis, holding `a`'s other coordinate
    /// fixed. When `a` and `b` round to neighbouring columns (or rows), `b`
    /// still lands on its own rounded cell, one step beside the walk but
    /// diagonally connected to it. Angled segments are walked
    /// parametrically with a step of `1 / length`, which keeps the path
    /// connected but may hit the same cell more than once.
    fn draw(&self, grid: &mut Grid, glyph: Glyph) -> Result<()> {
        ensure_finite(&[self.a, self.b], "line")?;

        let epsilon = grid.raster().orientation_epsilon;
        let orientation = self.orientation_with(epsilon);
        trace!(line = %self, ?orientation, "rasterizing line");

        match orientation {
            Orientation::Vertical => {
                let min = self.a.min(self.b);
                let max = self.a.max(self.b);
                for y in unit_steps(min.y, max.y) {
                    Point::new(self.a.x, y).draw(grid, glyph)?;
                }
            }
            Orientation::Horizontal => {
                let min = self.a.min(self.b);
                let max = self.a.max(self.b);
                for x in unit_steps(min.x, max.x) {
                    Point::new(x, self.a.y).draw(grid, glyph)?;
                }
            }
            Orientation::Angled => {
                let length = self.length();
                if length < epsilon {
                    return Err(Error::DegenerateGeometry(format!("{self} has zero length")));
                }
                let step = 1.0 / length;
                let mut factor = 0.0;
                while factor < 1.0 {
                    self.a.between(self.b, factor).draw(grid, glyph)?;
                    factor += step;
                }
            }
        }

        // Accumulated float error (or fractional endpoints on the
        // axis-aligned walks) can stop short of the ends.
        self.a.draw(grid, glyph)?;
        self.b.draw(grid, glyph)
    }

    fn kind(&self) -> &'static str {
        "line"
    }
}

impl Bounder for Line {
    fn bounds(&self) -> Rect {
        Rect::new(self.a.min(self.b), self.a.max(self.b))
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

impl Drawer for Rect {
    /// Draw the four edges with `glyph`. Corners are plotted twice.
    fn draw(&self, grid: &mut Grid, glyph: Glyph) -> Result<()> {
        for edge in self.edges() {
            edge.draw(grid, glyph)?;
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "rect"
    }
}

impl Bounder for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

impl Drawer for Border {
    /// Draw horizontal edges with `'-'` and vertical edges with `'|'`.
    ///
    /// The glyph argument is ignored. Vertical edges go last, so corners
    /// end up as `'|'`.
    fn draw(&self, grid: &mut Grid, _glyph: Glyph) -> Result<()> {
        let rect = self.rect();
        rect.top().draw(grid, Border::HORIZONTAL)?;
        rect.bottom().draw(grid, Border::HORIZONTAL)?;
        rect.left().draw(grid, Border::VERTICAL)?;
        rect.right().draw(grid, Border::VERTICAL)
    }

    fn kind(&self) -> &'static str {
        "border"
    }
}

impl Bounder for Border {
    fn bounds(&self) -> Rect {
        self.rect()
    }
}

impl Drawer for Fill {
    /// Plot every integer step in `[min, max]` on both axes.
    ///
    /// Cost is proportional to the area. An inverted rectangle plots nothing.
    fn draw(&self, grid: &mut Grid, glyph: Glyph) -> Result<()> {
        let Rect { min, max } = self.rect();
        ensure_finite(&[min, max], "fill")?;

        for x in unit_steps(min.x, max.x) {
            for y in unit_steps(min.y, max.y) {
                Point::new(x, y).draw(grid, glyph)?;
            }
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "fill"
    }
}

impl Bounder for Fill {
    fn bounds(&self) -> Rect {
        self.rect()
    }
}

// ============================================================================
// Tests
// ============================================================================
