//! Constrained shortest-path search
//!
//! Finds the cheapest route across a cost grid when movement is limited by
//! streak rules: a walker must take at least `min_streak` consecutive steps
//! in one direction before turning, may take at most `max_streak`, and may
//! never reverse. Because the legal moves depend on how a cell was entered,
//! the search runs over `(cell, heading, run)` states rather than cells.
//!
//! The search is Dijkstra's algorithm with lazy deletion: stale frontier
//! entries are skipped when popped, and the first time a goal cell is popped
//! its cost is the minimum because every edge cost is non-negative.
//!
//! # Example
//!
//! ```rust
//! use aoc_grid_search::{ConstrainedSearch, Grid, Pos, SearchConfig};
//!
//! let grid = Grid::from_rows(vec![vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]).unwrap();
//! let config = SearchConfig::builder().streak(1..=3).build().unwrap();
//! let search = ConstrainedSearch::new(&grid, config);
//!
//! let outcome = search.run(Pos::new(0, 0), |pos| pos == Pos::new(2, 2)).unwrap();
//! assert_eq!(outcome.cost(), Some(4));
//! ```
//!
//! # Origin policies
//!
//! The start has no previous move, so how the first move is chosen is a
//! policy ([`OriginPolicy`]):
//!
//! - [`OriginPolicy::Any`]: any heading, streak rules start after the first move
//! - [`OriginPolicy::Facing`]: stand facing each listed heading with an empty streak
//! - [`OriginPolicy::FirstMove`]: the first move must take one of the listed headings

mod config;
mod engine;
mod parallel;
mod state;

pub use config::{OriginPolicy, SearchConfig, SearchConfigBuilder, TurnSet};
pub use engine::ConstrainedSearch;
pub use state::{Route, SearchOutcome, SearchState};

#[cfg(test)]
mod tests;
