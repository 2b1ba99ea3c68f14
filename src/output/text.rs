//! Plain-text output encoder.
//!
//! Serializes a grid as one line per row, rows joined by `'\n'` with no
//! trailing newline. Blank cells become a configurable blank character
//! (a space by default). An optional frame character prefixes and suffixes
//! every row to make the grid boundary visible.

use std::fmt;
use std::io::{BufWriter, Write};

use tracing::debug;

use crate::error::Result;
use crate::grid::{Grid, BLANK};

/// Text encoder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEncoder {
    frame: Option<char>,
    blank: char,
}

impl Default for TextEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEncoder {
    /// Create a new encoder: no frame, blank cells as spaces.
    #[must_use]
    pub fn new() -> Self {
        Self { frame: None, blank: ' ' }
    }

    /// Create an encoder from a loaded configuration.
    #[cfg(feature = "config")]
    #[must_use]
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new().frame(config.output.frame)
    }

    /// Set the character drawn before and after every row.
    #[must_use]
    pub fn frame(mut self, frame: Option<char>) -> Self {
        self.frame = frame;
        self
    }

    /// Set the character used for blank cells.
    #[must_use]
    pub fn blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    /// Render a grid to a string.
    #[must_use]
    pub fn render(&self, grid: &Grid) -> String {
        let mut output = String::with_capacity((grid.width() + 3) * grid.height());
        for (y, row) in grid.rows().enumerate() {
            if y > 0 {
                output.push('\n');
            }
            self.push_row(&mut output, row);
        }
        output
    }

    /// Write a grid to `writer`, buffered.
    pub fn write_to<W: Write>(&self, grid: &Grid, writer: W) -> Result<()> {
        debug!(width = grid.width(), height = grid.height(), "writing grid");
        let mut writer = BufWriter::new(writer);
        writer.write_all(self.render(grid).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write output directly to stdout.
    pub fn print(&self, grid: &Grid) -> Result<()> {
        self.write_to(grid, std::io::stdout().lock())
    }

    fn push_row(&self, output: &mut String, row: &[u8]) {
        if let Some(frame) = self.frame {
            output.push(frame);
        }

        // Text may spread multi-byte UTF-8 sequences across adjacent cells,
        // so decode each run between blanks as a whole.
        for (i, run) in row.split(|&g| g == BLANK).enumerate() {
            if i > 0 {
                output.push(self.blank);
            }
            output.push_str(&String::from_utf8_lossy(run));
        }

        if let Some(frame) = self.frame {
            output.push(frame);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TextEncoder::new().render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Line, Point};
    use crate::shapes::Text;

    #[test]
    fn test_render_blank_grid() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(TextEncoder::new().render(&grid), "   \n   ");
    }

    #[test]
    fn test_render_line_scenario() {
        let mut grid = Grid::new(5, 3).unwrap();
        grid.draw(&Line::from_coords(0.0, 0.0, 4.0, 0.0), b'x').unwrap();
        assert_eq!(grid.to_string(), "xxxxx\n     \n     ");
    }

    #[test]
    fn test_render_with_frame() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.draw(&Point::new(1.0, 1.0), b'*').unwrap();

        let output = TextEncoder::new().frame(Some('|')).render(&grid);
        assert_eq!(output, "|   |\n| * |");
    }

    #[test]
    fn test_custom_blank() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.draw(&Point::new(0.0, 0.0), b'a').unwrap();
        assert_eq!(TextEncoder::new().blank('.').render(&grid), "a..");
    }

    #[test]
    fn test_multibyte_text_survives() {
        let mut grid = Grid::new(6, 1).unwrap();
        grid.draw(&Text::new(Point::new(1.0, 0.0), "é!"), 0).unwrap();
        assert_eq!(grid.to_string(), " é!  ");
    }

    #[test]
    fn test_write_to_matches_render() {
        let mut grid = Grid::new(4, 2).unwrap();
        grid.draw(&Line::from_coords(0.0, 1.0, 3.0, 1.0), b'=').unwrap();

        let encoder = TextEncoder::new().frame(Some('#'));
        let mut buf = Vec::new();
        encoder.write_to(&grid, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), encoder.render(&grid));
    }
}
