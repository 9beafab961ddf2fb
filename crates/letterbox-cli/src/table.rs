use anyhow::Result;
use crossterm::style::{Color, Stylize};
use letterbox_core::CompressionResult;

use crate::cli::TableMode;

/// Terminal rendering of the pixel coordinate table
pub struct PixelTable<'a> {
    result: &'a CompressionResult,
}

impl<'a> PixelTable<'a> {
    pub fn new(result: &'a CompressionResult) -> Self {
        Self { result }
    }

    /// Print a `cols`×`rows` window of the table starting at (x, y).
    ///
    /// The window is clipped to the canvas edge.
    pub fn print_region(
        &self,
        x: u32,
        y: u32,
        cols: u32,
        rows: u32,
        mode: TableMode,
    ) -> Result<()> {
        let size = self.result.target_size;
        if x >= size || y >= size {
            anyhow::bail!(
                "Region origin ({}, {}) is outside the {}x{} canvas",
                x,
                y,
                size,
                size
            );
        }

        let x_end = x.saturating_add(cols).min(size);
        let y_end = y.saturating_add(rows).min(size);
        let width = cell_width(mode);

        print!("{:>5}", "y\\x");
        for col in x..x_end {
            print!(" {:>width$}", col, width = width);
        }
        println!();

        for row in y..y_end {
            print!("{:>5}", row);
            for col in x..x_end {
                let pixel = self.result.pixel_at(col, row)?;
                match mode {
                    TableMode::Rgba => {
                        print!(" {:>width$}", pixel.to_string(), width = width);
                    }
                    TableMode::Hex => {
                        print!(" {:>width$}", pixel.to_hex(), width = width);
                    }
                    TableMode::Color => {
                        let swatch = "   ".on(Color::Rgb {
                            r: pixel.r,
                            g: pixel.g,
                            b: pixel.b,
                        });
                        print!(" {}", swatch);
                    }
                }
            }
            println!();
        }

        println!();
        println!(
            "Showing ({}, {}) to ({}, {}) of {} pixels",
            x,
            y,
            x_end - 1,
            y_end - 1,
            size as u64 * size as u64
        );

        Ok(())
    }
}

fn cell_width(mode: TableMode) -> usize {
    match mode {
        TableMode::Rgba => 15,
        TableMode::Hex => 9,
        TableMode::Color => 3,
    }
}
