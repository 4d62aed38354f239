//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conway_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game::Game,
    life::grid::parse_dimension,
    life::{create_example_seeds, load_grid_from_file, Dimension, Grid},
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conway-life")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation for a number of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed file (overrides config)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Random grid width (overrides config, requires --height)
        #[arg(long)]
        width: Option<String>,

        /// Random grid height (overrides config, requires --width)
        #[arg(long)]
        height: Option<String>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Output format (overrides config)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect a seed file without running the simulation
    Inspect {
        /// Seed file path
        #[arg(short, long)]
        seed: PathBuf,
    },

    /// Create example configuration and seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, seed, width, height, generations, format, verbose } => {
            run_command(config, seed, width, height, generations, format, verbose)
        }
        Commands::Inspect { seed } => inspect_command(seed),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    seed_file: Option<PathBuf>,
    width: Option<String>,
    height: Option<String>,
    generations: Option<usize>,
    format: Option<OutputFormat>,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Dimension overrides arrive as raw text so a bad value is reported
    // with the literal token, width first.
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => (
            Some(parse_dimension(Dimension::Width, &w)?),
            Some(parse_dimension(Dimension::Height, &h)?),
        ),
        (None, None) => (None, None),
        _ => anyhow::bail!("--width and --height must be supplied together"),
    };

    let cli_overrides = CliOverrides { generations, seed_file, width, height, format };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Seed: {:?}", settings.seed);
        println!();
    }

    let seed = settings.resolve_seed()?;
    let mut game = Game::new(seed).context("Failed to create grid")?;

    match settings.output.format {
        OutputFormat::Json => {
            let mut history = vec![game.grid().clone()];
            for _ in 0..settings.simulation.generations {
                history.push(game.take_turn().clone());
            }
            let output = if settings.output.show_each_generation {
                serde_json::to_string_pretty(&history)?
            } else {
                serde_json::to_string_pretty(game.grid())?
            };
            println!("{}", output);
        }
        OutputFormat::Text | OutputFormat::Visual => {
            print_generation(&settings, game.grid(), 0);
            for turn in 1..=settings.simulation.generations {
                game.take_turn();
                if settings.output.show_each_generation || turn == settings.simulation.generations
                {
                    print_generation(&settings, game.grid(), turn);
                }
            }
        }
    }

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Ran {} generation(s), final population {}",
            game.generation(),
            game.grid().live_count()
        ))
    );

    Ok(())
}

fn print_generation(settings: &Settings, grid: &Grid, generation: usize) {
    println!("{}", ColorOutput::info(&format!("Generation {}:", generation)));
    match settings.output.format {
        OutputFormat::Visual => println!("{}", GridFormatter::with_coords(grid)),
        _ => println!("{}\n", GridFormatter::compact(grid)),
    }
}

fn inspect_command(seed_path: PathBuf) -> Result<()> {
    let grid = load_grid_from_file(&seed_path)
        .with_context(|| format!("Failed to load seed from {}", seed_path.display()))?;

    println!("{}", ColorOutput::info(&GridFormatter::stats(&grid)));
    println!("{}", GridFormatter::with_coords(&grid));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let seeds_dir = directory.join("seeds");

    for dir in [&config_dir, &seeds_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.seed = conway_life::config::SeedConfig::File {
            path: seeds_dir.join("glider.txt"),
        };
        default_settings.to_file(&config_path).context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_seeds(&seeds_dir).context("Failed to create example seeds")?;
    println!("Created example seeds in: {}", seeds_dir.display());

    println!("{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "conway-life",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parsing_dimensions() {
        let cli = Cli::try_parse_from([
            "conway-life",
            "run",
            "--width",
            "6",
            "--height",
            "5",
            "--format",
            "visual",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("seeds/glider.txt").exists());
        assert!(temp_dir.path().join("seeds/sample.txt").exists());
    }

    #[test]
    fn test_run_command_rejects_lone_width() {
        let result = run_command(
            PathBuf::from("missing.yaml"),
            None,
            Some("5".to_string()),
            None,
            None,
            None,
            false,
        );
        assert!(result.is_err());
    }
}
