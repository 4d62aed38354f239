//! Session facade: seed selection, grid ownership, turn advancement

use crate::life::{Engine, Grid, GridError};

/// How the initial grid should be constructed. Exactly one path per call;
/// the choice is the caller's, made in the type rather than inferred from
/// option keys at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Parse already-split seed lines.
    FromText(Vec<String>),
    /// Random fill at the given dimensions (each must be at least 3).
    FromDimensions { width: usize, height: usize },
    /// Use an explicit cell matrix.
    FromMatrix(Vec<Vec<u8>>),
}

/// A running game session: the current grid plus the engine that advances it.
#[derive(Debug)]
pub struct Game {
    grid: Grid,
    engine: Engine,
    generation: usize,
}

impl Game {
    /// Build the initial grid from `seed`. The engine is stateless and
    /// cheap, so it is constructed here unconditionally.
    pub fn new(seed: Seed) -> Result<Self, GridError> {
        let grid = match seed {
            Seed::FromText(lines) => Grid::from_lines(lines)?,
            Seed::FromDimensions { width, height } => Grid::random(width, height)?,
            Seed::FromMatrix(rows) => Grid::from_rows(rows)?,
        };

        Ok(Self { grid, engine: Engine::new(), generation: 0 })
    }

    /// Replace the current grid with the next generation.
    pub fn take_turn(&mut self) -> &Grid {
        self.grid = self.engine.next_generation(&self.grid);
        self.generation += 1;
        &self.grid
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of turns taken since the seed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
