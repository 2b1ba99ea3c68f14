//! Showcase
//!
//! Draws a framed circle, a spiral, a filled block and a labelled line, then
//! writes the grid to stdout.
//!
//! Run with: `cargo run --example showcase [config.yaml]`
//! Set `RUST_LOG=ascii_draw=trace` to see every draw call.

use ascii_draw::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    tracing::info!(width = config.grid.width, height = config.grid.height, "starting showcase");

    let mut grid = Grid::from_config(&config)?;
    let center = grid.center();

    grid.draw(&grid.bounds().border(), 0)?;

    let radius = (grid.height() as f64 / 2.0 - 4.0).max(1.0);
    let circle = config.raster.circle(center, radius);
    grid.draw(&circle, b'*')?;
    grid.draw(&highlight(&circle), 0)?;

    grid.draw(&config.raster.spiral(center, radius / 2.0, 1.0), b'.')?;

    let block = Rect::from_size(Point::new(2.0, 2.0), 4.0, 2.0);
    grid.draw(&block.fill(), b'#')?;

    let label = Text::new(Point::new(2.0, grid.height() as f64 - 2.0), "ascii-draw");
    grid.draw(&label, 0)?;
    grid.draw(&Line::new(label.bounds().top_right().add_xy(2.0, 0.0), center), b'~')?;

    TextEncoder::from_config(&config).print(&grid)?;
    println!();
    Ok(())
}
