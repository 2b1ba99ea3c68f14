//! Direct glyph placement for text.

use super::primitives::ensure_finite;
use super::{Bounder, Drawer};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::grid::{Glyph, Grid};
use crate::shapes::Text;

impl Drawer for Text {
    /// Write each line's bytes starting at the rounded origin, one row per line.
    ///
    /// Text carries its own glyphs, so the glyph argument is ignored.
    fn draw(&self, grid: &mut Grid, _glyph: Glyph) -> Result<()> {
        ensure_finite(&[self.origin], "text")?;

        let (x0, y0) = self.origin.round();
        let (width, height) = (grid.width(), grid.height());
        // Offsets past i64::MAX cannot land inside any grid.
        let past_edge = || Error::OutOfBounds { x: x0, y: y0, width, height };

        for (dy, line) in self.lines().into_iter().enumerate() {
            let y = offset(y0, dy).ok_or_else(past_edge)?;
            for (dx, byte) in line.bytes().enumerate() {
                let x = offset(x0, dx).ok_or_else(past_edge)?;
                grid.set(x, y, byte)?;
            }
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "text"
    }
}

fn offset(base: i64, by: usize) -> Option<i64> {
    i64::try_from(by).ok().and_then(|by| base.checked_add(by))
}

impl Bounder for Text {
    /// Anchored at the origin, spanning the longest line and every row.
    fn bounds(&self) -> Rect {
        let (width, height) = self.dims();
        Rect::new(
            self.origin,
            self.origin + Point::new(width as f64 - 1.0, height as f64 - 1.0),
        )
    }
}
