//! Configuration management for the Game of Life CLI

pub mod settings;

pub use settings::{
    CliOverrides, OutputConfig, OutputFormat, SeedConfig, Settings, SimulationConfig,
};
