//! YAML configuration for grids and output.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```yaml
//! grid:
//!   width: 80
//!   height: 40
//! raster:
//!   orientation_epsilon: 0.00001
//!   aspect_ratio: 2.0
//! output:
//!   frame: "|"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Grid, RasterConfig};

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width in cells.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Height in cells.
    #[serde(default = "default_height")]
    pub height: usize,
}

fn default_width() -> usize {
    80
}
fn default_height() -> usize {
    40
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height() }
    }
}

/// Serialization options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Character framing every row, if any.
    #[serde(default)]
    pub frame: Option<char>,
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Grid dimensions.
    #[serde(default)]
    pub grid: GridConfig,

    /// Rasterization tunables.
    #[serde(default)]
    pub raster: RasterConfig,

    /// Serialization options.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Reject values that would make grids or rasterization unusable.
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(invalid("grid", "width and height must be positive"));
        }
        let epsilon = self.raster.orientation_epsilon;
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            return Err(invalid("raster.orientation_epsilon", "must be a positive number"));
        }
        let aspect = self.raster.aspect_ratio;
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(invalid("raster.aspect_ratio", "must be a positive number"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid { key: key.to_string(), message: message.to_string() }
}

impl Grid {
    /// Create a blank grid sized and tuned by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_raster(config.grid.width, config.grid.height, config.raster)
    }
}
