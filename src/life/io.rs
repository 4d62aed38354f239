//! Seed file loading and saving
//!
//! The grid parser works on already-split lines; this module is the external
//! loader that materializes those lines from disk. A failed read surfaces as
//! [`GridError::SourceUnavailable`], kept distinct from the parser's
//! `ParseFailure` so the two stay independently testable.

use super::error::GridError;
use super::grid::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Read a seed file and split it into lines, terminators stripped.
pub fn read_seed_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GridError> {
    let content =
        std::fs::read_to_string(&path).map_err(|cause| GridError::SourceUnavailable {
            path: path.as_ref().display().to_string(),
            cause,
        })?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Load and parse a grid from a seed file.
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid, GridError> {
    Grid::from_lines(read_seed_lines(path)?)
}

/// Write a grid in seed-text form, creating parent directories as needed.
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid.to_string())
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write the bundled example seeds into `output_dir`.
pub fn create_example_seeds<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let seeds: [(&str, &str); 5] = [
        ("glider.txt", "00100\n10100\n01100\n00000\n00000\n"),
        ("blinker.txt", "000\n111\n000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "110000\n110000\n001100\n001100\n"),
        (
            "sample.txt",
            "00100000\n00110010\n00100100\n01100110\n01111011\n00110011\n00101010\n00011001\n",
        ),
    ];

    for (name, content) in seeds {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_grid_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("blinker.txt");
        std::fs::write(&path, "010\n010\n010\n").unwrap();

        let grid = load_grid_from_file(&path).unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = load_grid_from_file("thisfiledoesnotexist.txt").unwrap_err();
        match &err {
            GridError::SourceUnavailable { path, .. } => {
                assert_eq!(path, "thisfiledoesnotexist.txt");
            }
            other => panic!("expected SourceUnavailable, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Failed to create grid from file: thisfiledoesnotexist.txt"
        );
    }

    #[test]
    fn test_malformed_file_is_parse_failure() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.txt");
        std::fs::write(&path, "010\n0a0\n010\n").unwrap();

        let err = load_grid_from_file(&path).unwrap_err();
        assert!(matches!(err, GridError::ParseFailure(_)));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/out.txt");

        let grid = Grid::from_lines(["101", "010", "101"]).unwrap();
        save_grid_to_file(&grid, &path).unwrap();

        assert_eq!(load_grid_from_file(&path).unwrap(), grid);
    }

    #[test]
    fn test_crlf_terminators_are_stripped() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("crlf.txt");
        std::fs::write(&path, "010\r\n010\r\n010\r\n").unwrap();

        let grid = load_grid_from_file(&path).unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
    }

    #[test]
    fn test_create_example_seeds() {
        let temp_dir = tempdir().unwrap();
        create_example_seeds(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt", "sample.txt"] {
            assert!(temp_dir.path().join(name).exists(), "missing {}", name);
        }

        let sample = load_grid_from_file(temp_dir.path().join("sample.txt")).unwrap();
        assert_eq!(sample.dimensions(), (8, 8));

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.live_count(), 5);
    }
}
