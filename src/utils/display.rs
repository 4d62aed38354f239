//! Console formatting for grids

use crate::life::grid::ALIVE;
use crate::life::Grid;
use itertools::Itertools;

/// Render grids for terminal output.
pub struct GridFormatter;

impl GridFormatter {
    /// One character per cell, one line per row.
    pub fn compact(grid: &Grid) -> String {
        grid.rows()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == ALIVE { '█' } else { '·' })
                    .collect::<String>()
            })
            .join("\n")
    }

    /// Compact rendering framed with row and column numbers.
    pub fn with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for &cell in row {
                output.push_str(if cell == ALIVE { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line shape and population summary.
    pub fn stats(grid: &Grid) -> String {
        let (width, height) = grid.dimensions();
        let total = width * height;
        let density = if total == 0 {
            0.0
        } else {
            grid.live_count() as f64 / total as f64 * 100.0
        };
        format!(
            "{}x{} grid, {} living cells ({:.1}% density)",
            width,
            height,
            grid.live_count(),
            density
        )
    }
}

/// ANSI color helpers for status lines.
pub struct ColorOutput;

impl ColorOutput {
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    // Honors NO_COLOR and dumb terminals.
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && std::env::var("TERM").map(|term| term != "dumb").unwrap_or(true)
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
