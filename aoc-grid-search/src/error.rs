//! Error types for the grid search library

use thiserror::Error;

/// Error type for building a grid from raw rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows without any cells
    #[error("Grid has no cells")]
    Empty,
    /// A row's length differs from the first row's
    #[error("Row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Cell costs must be non-negative
    #[error("Negative cost {value} at ({row}, {col})")]
    NegativeCost { row: usize, col: usize, value: i64 },
    /// Cell cost does not fit the grid's cost type
    #[error("Cost {value} at ({row}, {col}) is too large")]
    CostOverflow { row: usize, col: usize, value: i64 },
    /// Coordinates outside the grid
    #[error("Position ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Error type for invalid search configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A turn can never be allowed before the first move
    #[error("Minimum streak must be at least 1")]
    ZeroMinStreak,
    /// The streak window is empty
    #[error("Maximum streak {max} is below minimum streak {min}")]
    InvertedStreak { min: u32, max: u32 },
    /// An origin policy that lists no directions can never leave the start
    #[error("Origin policy lists no directions")]
    EmptyOrigin,
}

/// Error type for a search that could not run to completion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start position is not a grid cell
    #[error("Start position ({row}, {col}) is outside the grid")]
    StartOutOfBounds { row: usize, col: usize },
    /// The caller's cancellation flag was raised
    #[error("Search cancelled")]
    Cancelled,
}

/// Error type for turning puzzle text into a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Character not valid for the requested cell type
    #[error("Invalid cell {ch:?} at line {line}, column {column}")]
    InvalidCell { line: usize, column: usize, ch: char },
    /// Rows parsed but do not form a rectangular grid
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Error type for tracing the pipe loop through a start tile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopError {
    /// No `S` tile in the sketch
    #[error("Pipe sketch has no 'S' start tile")]
    MissingStart,
    /// Fewer than two neighbours connect back to the start
    #[error("Start tile at ({row}, {col}) has {connections} connecting pipe(s), need 2")]
    OpenStart {
        row: usize,
        col: usize,
        connections: usize,
    },
    /// Every connection from the start runs into a dead end
    #[error("No closed loop passes through the start tile")]
    NoLoop,
}

/// Error type for counting plots over an endlessly repeated garden
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TilingError {
    /// The garden must be square with an odd side of at least 3
    #[error("Garden is {rows}x{cols}, expected an odd-sided square at least 3 wide")]
    NotOddSquare { rows: usize, cols: usize },
    /// The start must sit in the centre cell
    #[error("Start ({row}, {col}) is not the centre of the garden")]
    OffCenter { row: usize, col: usize },
    /// Steps must walk from the centre to the edge of some whole tile ring
    #[error("{steps} steps is not half a side past a whole number of {size}-wide tiles")]
    StepsMisaligned { steps: u64, size: usize },
}
