//! Error taxonomy for grid construction

use std::fmt;
use std::io;
use thiserror::Error;

/// Which dimension of a requested random grid was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => write!(f, "Width"),
            Dimension::Height => write!(f, "Height"),
        }
    }
}

/// A single-line violation found while scanning seed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("Encountered unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Encountered unexpected cell value: {0}")]
    UnexpectedValue(u8),
    #[error("Line length is {actual}, {expected} expected")]
    LengthMismatch { actual: usize, expected: usize },
}

/// A [`LineError`] tagged with the 1-based line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Seed rejected on line {line} with message \"{diagnostic}\"")]
pub struct LineDiagnostic {
    pub line: usize,
    pub diagnostic: LineError,
}

/// Why a grid could not be constructed.
///
/// The three kinds are deliberately distinguishable by message: callers that
/// need the per-line detail of a `ParseFailure` inspect the error's
/// `source()` chain, not the outer message, which stays stable and generic.
#[derive(Debug, Error)]
pub enum GridError {
    /// The seed source itself could not be read. Raised by the file loader,
    /// never by the parser.
    #[error("Failed to create grid from file: {path}")]
    SourceUnavailable {
        path: String,
        #[source]
        cause: io::Error,
    },

    /// The seed lines violate the cell alphabet or uniform-length invariant.
    #[error("Failed to create grid from seed text")]
    ParseFailure(#[from] LineDiagnostic),

    /// Random construction was asked for a dimension below 3, or one that
    /// was not a non-negative integer to begin with.
    #[error("{dimension} must be an integer of 3 or more, {value} provided")]
    InvalidDimension { dimension: Dimension, value: String },
}

impl GridError {
    pub(crate) fn at_line(line: usize, diagnostic: LineError) -> Self {
        GridError::ParseFailure(LineDiagnostic { line, diagnostic })
    }
}
