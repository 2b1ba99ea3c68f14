//! Error types for ascii-draw operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, drawing into, or serializing a grid.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while writing serialized output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid dimensions for a grid.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: usize,
        /// Height value.
        height: usize,
    },

    /// A rasterized coordinate fell outside the grid.
    ///
    /// Drawing never clips: the first offending cell aborts the draw call.
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// Geometry that cannot be rasterized (zero radius, zero-length angled line).
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// A configuration value was parsed but is not usable.
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The offending key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}
