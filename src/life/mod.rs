//! Game of Life core: grid, rules engine, seed io

pub mod engine;
pub mod error;
pub mod grid;
pub mod io;

pub use engine::Engine;
pub use error::{Dimension, GridError, LineDiagnostic, LineError};
pub use grid::Grid;
pub use io::{create_example_seeds, load_grid_from_file, read_seed_lines, save_grid_to_file};
