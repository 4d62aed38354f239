//! Conway's Game of Life
//!
//! This library provides a validated Game of Life grid (built from seed
//! text, random fill, or an explicit matrix) and a pure rules engine that
//! derives each generation from the unmodified previous one.

pub mod config;
pub mod game;
pub mod life;
pub mod utils;

pub use config::Settings;
pub use game::{Game, Seed};
pub use life::{Engine, Grid, GridError};

/// Build a grid from `seed` and advance it the requested number of
/// generations, returning the final state.
pub fn run_generations(seed: Seed, generations: usize) -> Result<Grid, GridError> {
    let game = Game::new(seed)?;
    Ok(Engine::new().advance(game.into_grid(), generations))
}
