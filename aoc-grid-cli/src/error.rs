//! Error types for the CLI

use aoc_grid_search::{ConfigError, LoopError, ParseError, SearchError, TilingError};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid search rules
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input could not be read
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Input is not a valid grid
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Search could not run
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Pipe sketch holds no usable loop
    #[error("Loop error: {0}")]
    Loop(#[from] LoopError),

    /// Garden cannot be counted as an endless tiling
    #[error("Tiling error: {0}")]
    Tiling(#[from] TilingError),

    /// Garden map has no start plot
    #[error("Garden map has no 'S' start plot")]
    MissingStart,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}

/// Input-specific errors
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input holds nothing but whitespace
    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },
}
