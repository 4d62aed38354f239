//! Generation advancement for Game of Life

use super::grid::{Grid, ALIVE, DEAD};

/// Stateless rules engine deriving each generation from the last.
///
/// `next_generation` is a pure function over the grid's extent: it borrows
/// the current grid, never mutates it, and hands ownership of the freshly
/// built successor to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the next generation of `current`.
    ///
    /// Every cell is evaluated against the unmodified input: live cells
    /// survive with 2 or 3 live neighbors, dead cells come alive with
    /// exactly 3, everything else dies. Neighborhoods are bounded at the
    /// grid edges, never wrapped.
    pub fn next_generation(&self, current: &Grid) -> Grid {
        let (width, height) = current.dimensions();
        let mut cells = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let neighbors = current.count_neighbors(x, y);
                cells.push(next_state(current.cell(x, y), neighbors));
            }
        }

        Grid::from_flat(width, height, cells)
    }

    /// Advance `grid` by `generations` steps.
    pub fn advance(&self, mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = self.next_generation(&grid);
        }
        grid
    }
}

/// Conway's rule for a single cell.
pub fn next_state(cell: u8, live_neighbors: u8) -> u8 {
    match (cell, live_neighbors) {
        (ALIVE, 2) | (ALIVE, 3) | (DEAD, 3) => ALIVE,
        _ => DEAD,
    }
}
