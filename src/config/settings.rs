//! Configuration settings for the Game of Life CLI

use crate::game::Seed;
use crate::life::grid::check_dimension;
use crate::life::{read_seed_lines, Dimension};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
}

/// Declarative form of [`Seed`], as it appears in the YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedConfig {
    File { path: PathBuf },
    Random { width: usize, height: usize },
    Cells { rows: Vec<Vec<u8>> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_each_generation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Visual,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig { generations: 10 },
            seed: SeedConfig::Random { width: 10, height: 10 },
            output: OutputConfig { format: OutputFormat::Text, show_each_generation: true },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        match &self.seed {
            SeedConfig::File { path } => {
                if !path.exists() {
                    anyhow::bail!("Seed file does not exist: {}", path.display());
                }
            }
            SeedConfig::Random { width, height } => {
                check_dimension(Dimension::Width, *width)?;
                check_dimension(Dimension::Height, *height)?;
            }
            SeedConfig::Cells { .. } => {}
        }

        Ok(())
    }

    /// Resolve the declared seed into a construction request, reading the
    /// seed file here so the grid parser only ever sees split lines.
    pub fn resolve_seed(&self) -> Result<Seed> {
        match &self.seed {
            SeedConfig::File { path } => {
                let lines = read_seed_lines(path)?;
                Ok(Seed::FromText(lines))
            }
            SeedConfig::Random { width, height } => {
                Ok(Seed::FromDimensions { width: *width, height: *height })
            }
            SeedConfig::Cells { rows } => Ok(Seed::FromMatrix(rows.clone())),
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref seed_file) = cli_overrides.seed_file {
            self.seed = SeedConfig::File { path: seed_file.clone() };
        }
        // A width/height pair always switches to a random seed; a lone
        // dimension only adjusts a seed that is already random.
        match (cli_overrides.width, cli_overrides.height) {
            (Some(width), Some(height)) => self.seed = SeedConfig::Random { width, height },
            (Some(width), None) => {
                if let SeedConfig::Random { height, .. } = self.seed {
                    self.seed = SeedConfig::Random { width, height };
                }
            }
            (None, Some(height)) => {
                if let SeedConfig::Random { width, .. } = self.seed {
                    self.seed = SeedConfig::Random { width, height };
                }
            }
            (None, None) => {}
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub seed_file: Option<PathBuf>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let settings = Settings::default();
        settings.to_file(&path).unwrap();
        let reloaded = Settings::from_file(&path).unwrap();

        assert_eq!(reloaded.simulation.generations, settings.simulation.generations);
        assert_eq!(reloaded.seed, settings.seed);
        assert_eq!(reloaded.output.format, settings.output.format);
    }

    #[test]
    fn test_zero_generations_rejected() {
        let mut settings = Settings::default();
        settings.simulation.generations = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_seed_file_rejected() {
        let mut settings = Settings::default();
        settings.seed = SeedConfig::File { path: PathBuf::from("thisfiledoesnotexist.txt") };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            generations: Some(3),
            width: Some(6),
            height: Some(5),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.generations, 3);
        assert_eq!(settings.seed, SeedConfig::Random { width: 6, height: 5 });
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_undersized_random_seed_rejected() {
        let mut settings = Settings::default();
        settings.seed = SeedConfig::Random { width: 2, height: 2 };
        let err = settings.validate().unwrap_err();
        assert_eq!(err.to_string(), "Width must be an integer of 3 or more, 2 provided");

        settings.seed = SeedConfig::Random { width: 3, height: 2 };
        let err = settings.validate().unwrap_err();
        assert_eq!(err.to_string(), "Height must be an integer of 3 or more, 2 provided");
    }

    #[test]
    fn test_merge_lone_dimension_adjusts_random_seed() {
        let mut settings = Settings::default();
        settings.seed = SeedConfig::Random { width: 10, height: 10 };

        settings.merge_with_cli(&CliOverrides { width: Some(6), ..Default::default() });
        assert_eq!(settings.seed, SeedConfig::Random { width: 6, height: 10 });

        settings.merge_with_cli(&CliOverrides { height: Some(4), ..Default::default() });
        assert_eq!(settings.seed, SeedConfig::Random { width: 6, height: 4 });
    }

    #[test]
    fn test_merge_lone_dimension_leaves_non_random_seed() {
        let mut settings = Settings::default();
        settings.seed = SeedConfig::File { path: PathBuf::from("seeds/glider.txt") };

        settings.merge_with_cli(&CliOverrides { width: Some(6), ..Default::default() });
        assert_eq!(settings.seed, SeedConfig::File { path: PathBuf::from("seeds/glider.txt") });
    }

    #[test]
    fn test_resolve_seed_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("seed.txt");
        std::fs::write(&path, "010\n010\n010\n").unwrap();

        let mut settings = Settings::default();
        settings.seed = SeedConfig::File { path };

        match settings.resolve_seed().unwrap() {
            Seed::FromText(lines) => assert_eq!(lines, vec!["010", "010", "010"]),
            other => panic!("expected FromText, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_seed_from_cells() {
        let mut settings = Settings::default();
        settings.seed = SeedConfig::Cells { rows: vec![vec![0, 1], vec![1, 0]] };

        match settings.resolve_seed().unwrap() {
            Seed::FromMatrix(rows) => assert_eq!(rows, vec![vec![0, 1], vec![1, 0]]),
            other => panic!("expected FromMatrix, got {:?}", other),
        }
    }
}
