//! Grid representation and validated construction

use crate::life::error::{Dimension, GridError, LineError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// Smallest width/height accepted by the random construction path.
pub const MIN_RANDOM_DIMENSION: usize = 3;

/// A rectangular matrix of cell states, row-major.
///
/// Cells are stored as integers 0 (dead) / 1 (alive). A grid is immutable
/// once constructed; advancing a generation produces a new `Grid` so every
/// cell of the next state is derived from the unmodified prior state.
/// Equality is structural: same dimensions and identical cell contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Parse already-split seed lines into a grid.
    ///
    /// Each character must be `'0'` or `'1'`, and every line must match the
    /// first line's length. The first violation wins and is reported with
    /// its 1-based line number.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut width = 0;
        let mut height = 0;
        let mut cells = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let mut row = Vec::with_capacity(width);
            for ch in line.chars() {
                match ch {
                    '0' => row.push(DEAD),
                    '1' => row.push(ALIVE),
                    other => {
                        return Err(GridError::at_line(idx + 1, LineError::UnexpectedCharacter(other)))
                    }
                }
            }
            if idx == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(GridError::at_line(
                    idx + 1,
                    LineError::LengthMismatch { actual: row.len(), expected: width },
                ));
            }
            cells.append(&mut row);
            height += 1;
        }

        Ok(Self { width, height, cells })
    }

    /// Create a grid of the given dimensions with uniformly random cells.
    ///
    /// Both dimensions must be at least [`MIN_RANDOM_DIMENSION`]; width is
    /// checked before height.
    pub fn random(width: usize, height: usize) -> Result<Self, GridError> {
        check_dimension(Dimension::Width, width)?;
        check_dimension(Dimension::Height, height)?;

        let mut rng = rand::thread_rng();
        let cells = (0..width * height)
            .map(|_| if rng.gen_bool(0.5) { ALIVE } else { DEAD })
            .collect();

        Ok(Self { width, height, cells })
    }

    /// Like [`Grid::random`], but takes the dimensions as raw text.
    ///
    /// Text that does not spell a non-negative integer fails with the
    /// literal offending value in the message, width first.
    pub fn random_from_text(width: &str, height: &str) -> Result<Self, GridError> {
        let width = parse_dimension(Dimension::Width, width)?;
        let height = parse_dimension(Dimension::Height, height)?;
        Self::random(width, height)
    }

    /// Build a grid from an explicit cell matrix.
    ///
    /// Rows must be uniform length and cells must be 0 or 1; violations are
    /// reported with the 1-based row number, matching the seed-text parser.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);

        for (idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::at_line(
                    idx + 1,
                    LineError::LengthMismatch { actual: row.len(), expected: width },
                ));
            }
            for &cell in row {
                if cell != DEAD && cell != ALIVE {
                    return Err(GridError::at_line(idx + 1, LineError::UnexpectedValue(cell)));
                }
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { width, height, cells })
    }

    /// Assemble a grid from pre-validated row-major cells.
    pub(crate) fn from_flat(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Cell state at column `x`, row `y`. Out-of-range coordinates are a
    /// programming error and panic.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.cells[y * self.width + x]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of rows, for iteration parity with [`Grid::rows`].
    pub fn row_count(&self) -> usize {
        self.height
    }

    /// Iterate the rows as slices, exactly `row_count()` of them even for a
    /// zero-width grid. Restartable: the grid never changes, so re-iterating
    /// yields the same rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Count live cells among the up-to-8 neighbors of `(x, y)`. Coordinates
    /// outside the grid are dead; border cells never wrap.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx >= 0
                    && ny >= 0
                    && (nx as usize) < self.width
                    && (ny as usize) < self.height
                    && self.cells[ny as usize * self.width + nx as usize] == ALIVE
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Total number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    /// True when no cell is alive.
    pub fn is_lifeless(&self) -> bool {
        self.cells.iter().all(|&cell| cell == DEAD)
    }
}

/// Enforce the random-path minimum, echoing the rejected value.
pub fn check_dimension(dimension: Dimension, value: usize) -> Result<(), GridError> {
    if value < MIN_RANDOM_DIMENSION {
        return Err(GridError::InvalidDimension { dimension, value: value.to_string() });
    }
    Ok(())
}

/// Parse a textual dimension, echoing the literal token on failure.
pub fn parse_dimension(dimension: Dimension, raw: &str) -> Result<usize, GridError> {
    let raw = raw.trim();
    raw.parse::<usize>()
        .map_err(|_| GridError::InvalidDimension { dimension, value: raw.to_string() })
}

impl fmt::Display for Grid {
    /// Seed-text form: one line of `0`/`1` characters per row. Round-trips
    /// through [`Grid::from_lines`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
