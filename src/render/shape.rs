//! Closed set of built-in primitives.

use super::{Bounder, Drawer};
use crate::error::Result;
use crate::geometry::{Border, Fill, Line, Point, Rect};
use crate::grid::{Glyph, Grid};
use crate::shapes::{Circle, Spiral, Text};

/// Any built-in primitive, for storing mixed primitives in one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A single cell.
    Point(Point),
    /// A line segment.
    Line(Line),
    /// A stretched circle outline.
    Circle(Circle),
    /// An inward spiral.
    Spiral(Spiral),
    /// A rectangle outline in the caller's glyph.
    Rect(Rect),
    /// A rectangle outline in fixed edge glyphs.
    Border(Border),
    /// A solid rectangle.
    Fill(Fill),
    /// Self-colored text.
    Text(Text),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Shape::Point($inner) => $body,
            Shape::Line($inner) => $body,
            Shape::Circle($inner) => $body,
            Shape::Spiral($inner) => $body,
            Shape::Rect($inner) => $body,
            Shape::Border($inner) => $body,
            Shape::Fill($inner) => $body,
            Shape::Text($inner) => $body,
        }
    };
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(value: $variant) -> Self {
                    Shape::$variant(value)
                }
            }
        )*
    };
}

impl_from!(Point, Line, Circle, Spiral, Rect, Border, Fill, Text);

impl Drawer for Shape {
    fn draw(&self, grid: &mut Grid, glyph: Glyph) -> Result<()> {
        dispatch!(self, inner => inner.draw(grid, glyph))
    }

    fn kind(&self) -> &'static str {
        dispatch!(self, inner => inner.kind())
    }
}

impl Bounder for Shape {
    fn bounds(&self) -> Rect {
        dispatch!(self, inner => inner.bounds())
    }
}
