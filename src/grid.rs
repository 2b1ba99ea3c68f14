//! Core glyph grid that primitives rasterize into.
//!
//! Provides a fixed-size character buffer stored as one contiguous,
//! row-major `Vec<Glyph>` indexed by `y * width + x`.
//!
//! # Bounds contract
//!
//! Every cell access goes through [`Grid::index`], the single enforcement
//! point for coordinates. Out-of-range coordinates return
//! [`Error::OutOfBounds`]; nothing is clamped or clipped. A draw call stops
//! at the first offending cell and leaves the cells it already wrote in
//! place.
//!
//! # Threading
//!
//! A grid has no internal locking. Draw calls take `&mut self`, so sharing
//! one grid across threads requires the caller to serialize access.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, ORIENTATION_EPSILON};
use crate::render::{Bounder, Drawer};

/// The value stored in a single grid cell.
///
/// Glyphs are raw bytes so that text can be placed byte for byte.
pub type Glyph = u8;

/// The empty cell value; serialized as the blank character.
pub const BLANK: Glyph = 0;

/// Tunables consulted while rasterizing into a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct RasterConfig {
    /// Tolerance for classifying lines as vertical or horizontal.
    pub orientation_epsilon: f64,
    /// Horizontal stretch applied to circles and spirals built via
    /// [`RasterConfig::circle`] and [`RasterConfig::spiral`].
    pub aspect_ratio: f64,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            orientation_epsilon: ORIENTATION_EPSILON,
            aspect_ratio: crate::shapes::ASPECT_RATIO,
        }
    }
}

impl RasterConfig {
    /// Build a circle stretched by the configured aspect ratio.
    #[must_use]
    pub fn circle(&self, center: Point, radius: f64) -> crate::shapes::Circle {
        crate::shapes::Circle::new(center, radius).with_aspect(self.aspect_ratio)
    }

    /// Build a spiral stretched by the configured aspect ratio.
    #[must_use]
    pub fn spiral(&self, center: Point, radius: f64, delta: f64) -> crate::shapes::Spiral {
        crate::shapes::Spiral::new(center, radius, delta).with_aspect(self.aspect_ratio)
    }
}

/// Fixed-size 2D buffer of glyphs.
///
/// `(0, 0)` is the top-left cell. All cells start out [`BLANK`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Width in cells.
    width: usize,
    /// Height in cells.
    height: usize,
    /// Glyphs in row-major order.
    cells: Vec<Glyph>,
    /// Rasterization tunables.
    raster: RasterConfig,
}

impl Grid {
    /// Create a new blank grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ascii_draw::grid::Grid;
    ///
    /// let grid = Grid::new(80, 40).unwrap();
    /// assert_eq!(grid.width(), 80);
    /// assert_eq!(grid.height(), 40);
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_raster(width, height, RasterConfig::default())
    }

    /// Create a new blank grid with explicit rasterization tunables.
    pub fn with_raster(width: usize, height: usize, raster: RasterConfig) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(Error::InvalidDimensions { width, height })?;

        debug!(width, height, "creating grid");

        Ok(Self { width, height, cells: vec![BLANK; size], raster })
    }

    /// Get the width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Rasterization tunables for this grid.
    #[must_use]
    pub const fn raster(&self) -> &RasterConfig {
        &self.raster
    }

    /// Rectangle covering every cell: `(0, 0)` to `(width - 1, height - 1)`.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_coords(0.0, 0.0, self.width as f64 - 1.0, self.height as f64 - 1.0)
    }

    /// Center of [`Grid::bounds`].
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Whether `(x, y)` addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_ok()
    }

    /// Get the glyph at a cell.
    pub fn get(&self, x: i64, y: i64) -> Result<Glyph> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Set the glyph at a cell.
    pub fn set(&mut self, x: i64, y: i64, glyph: Glyph) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = glyph;
        Ok(())
    }

    /// Whether the cell holds [`BLANK`].
    pub fn is_blank(&self, x: i64, y: i64) -> Result<bool> {
        Ok(self.get(x, y)? == BLANK)
    }

    /// Get the raw cells as a slice (row-major).
    #[must_use]
    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    /// Get a row of cells as a slice.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[Glyph]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.cells.chunks_exact(self.width)
    }

    /// Count cells holding `glyph`.
    #[must_use]
    pub fn count_glyph(&self, glyph: Glyph) -> usize {
        self.cells.iter().filter(|&&g| g == glyph).count()
    }

    /// Reset every cell to [`BLANK`].
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Rasterize `drawer` into this grid with `glyph`.
    ///
    /// The primitive decides how (and whether) to use the glyph.
    pub fn draw<D: Drawer + ?Sized>(&mut self, drawer: &D, glyph: Glyph) -> Result<()> {
        trace!(kind = drawer.kind(), glyph = %char::from(glyph), "draw");
        drawer.draw(self, glyph)
    }

    /// Draw several primitives in order, stopping at the first failure.
    pub fn draw_all<'a, I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a dyn Drawer, Glyph)>,
    {
        for (drawer, glyph) in items {
            self.draw(drawer, glyph)?;
        }
        Ok(())
    }

    /// Calculate the buffer index for a cell coordinate.
    #[inline]
    fn index(&self, x: i64, y: i64) -> Result<usize> {
        let out_of_bounds =
            || Error::OutOfBounds { x, y, width: self.width, height: self.height };
        let col = usize::try_from(x).map_err(|_| out_of_bounds())?;
        let row = usize::try_from(y).map_err(|_| out_of_bounds())?;
        if col >= self.width || row >= self.height {
            return Err(out_of_bounds());
        }
        Ok(row * self.width + col)
    }
}

impl Bounder for Grid {
    fn bounds(&self) -> Rect {
        Grid::bounds(self)
    }
}
