//! Rendering contracts and rasterization.
//!
//! Every primitive implements one or both of two capabilities:
//!
//! - [`Drawer`]: rasterize itself into a [`Grid`] given a glyph.
//! - [`Bounder`]: report its axis-aligned bounding [`Rect`].
//!
//! [`Grid::draw`] is generic over any `Drawer`, so new primitive kinds plug
//! in without touching grid code. [`Shape`] wraps the built-in primitives in
//! a closed enum for heterogeneous collections.
//!
//! # Algorithms
//!
//! - **Axis-aligned lines**: unit steps along the varying axis, endpoints inclusive
//! - **Angled lines**: parametric walk with step `1 / length`, endpoint forced
//! - **Circles**: phase sweep over `[-π, π]` with step `1 / circumference`
//! - **Spirals**: one sample per step, radius shrinking every step

mod curves;
mod primitives;
mod shape;
mod text;

pub use shape::Shape;

use crate::error::Result;
use crate::geometry::{Border, Rect};
use crate::grid::{Glyph, Grid};

/// Margin, in cells, that [`highlight`] adds around a primitive's bounds.
pub const HIGHLIGHT_MARGIN: f64 = 1.0;

/// Trait for primitives that can rasterize themselves.
pub trait Drawer {
    /// Draw this primitive into `grid`.
    ///
    /// Fails with [`crate::Error::OutOfBounds`] at the first cell outside the
    /// grid, or [`crate::Error::DegenerateGeometry`] before touching any cell
    /// when the primitive cannot be sampled.
    fn draw(&self, grid: &mut Grid, glyph: Glyph) -> Result<()>;

    /// Short name used in trace output.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Trait for primitives that know their bounding rectangle.
pub trait Bounder {
    /// Axis-aligned bounds. Pure; never touches a grid.
    fn bounds(&self) -> Rect;
}

/// A [`Border`] drawn [`HIGHLIGHT_MARGIN`] cells outside `item`'s bounds.
///
/// ```
/// use ascii_draw::prelude::*;
///
/// let mut grid = Grid::new(5, 5).unwrap();
/// let point = Point::new(2.0, 2.0);
/// grid.draw(&point, b'*').unwrap();
/// grid.draw(&highlight(&point), 0).unwrap();
/// assert_eq!(grid.to_string(), "     \n |-| \n |*| \n |-| \n     ");
/// ```
#[must_use]
pub fn highlight<B: Bounder + ?Sized>(item: &B) -> Border {
    item.bounds().grow(HIGHLIGHT_MARGIN).border()
}
