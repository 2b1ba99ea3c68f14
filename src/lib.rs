//! # ascii-draw
//!
//! Deterministic rasterization of simple vector geometry onto a fixed-size
//! character grid.
//!
//! Primitives (points, lines, circles, spirals, rectangles, text) are small
//! `Copy`/`Clone` value descriptors. Each one knows how to draw itself into a
//! [`grid::Grid`] ([`render::Drawer`]) and, where it makes sense, how to report
//! its bounding rectangle ([`render::Bounder`]). The grid is the only state.
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_draw::prelude::*;
//!
//! let mut grid = Grid::new(40, 12)?;
//! let circle = Circle::new(grid.center(), 4.0);
//!
//! grid.draw(&circle, b'*')?;
//! grid.draw(&highlight(&circle), 0)?;
//! grid.draw(&Text::new(Point::new(1.0, 0.0), "circle"), 0)?;
//!
//! let output = TextEncoder::new().frame(Some('|')).render(&grid);
//! assert_eq!(output.lines().count(), 12);
//! # Ok::<(), ascii_draw::Error>(())
//! ```
//!
//! ## Bounds
//!
//! Nothing is clipped. A primitive that reaches outside the grid fails with
//! [`Error::OutOfBounds`] at the first offending cell.
//!
//! ## Feature Flags
//!
//! - `config` (default): YAML configuration via serde

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Core glyph grid.
pub mod grid;

/// Straight-edged primitives (points, lines, rectangles).
pub mod geometry;

/// Curved primitives and text.
pub mod shapes;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Drawer/Bounder contracts and rasterization.
pub mod render;

/// Output encoders.
pub mod output;

/// YAML configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for ascii-draw operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use ascii_draw::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "config")]
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Border, Fill, Line, Orientation, Point, Rect};
    pub use crate::grid::{Glyph, Grid, RasterConfig, BLANK};
    pub use crate::output::TextEncoder;
    pub use crate::render::{highlight, Bounder, Drawer, Shape};
    pub use crate::shapes::{Circle, Spiral, Text};
}
