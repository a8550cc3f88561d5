//! Grid search engines for Advent of Code style puzzles
//!
//! This crate collects the grid traversals that keep coming back in daily
//! puzzles, each driven by a state that remembers more than just a cell:
//!
//! - [`search`]: minimum-cost routes under streak and turn rules, searched
//!   over `(cell, heading, run)` states
//! - [`beam`]: beams flooding through mirrors and splitters over
//!   `(cell, heading)` states
//! - [`pipes`]: one closed loop of pipes, walked from its start tile
//! - [`plots`]: breadth-first step counts with parity, on one garden or on
//!   an endlessly repeated one
//!
//! [`parse`] turns puzzle text into a [`Grid`]. Searches never read a cell
//! without bounds-checking it first, and an unreachable goal is reported as
//! [`SearchOutcome::NotReachable`] rather than an error.

pub mod beam;
mod direction;
mod error;
mod grid;
pub mod parse;
pub mod pipes;
pub mod plots;
pub mod search;

pub use direction::Direction;
pub use error::{ConfigError, GridError, LoopError, ParseError, SearchError, TilingError};
pub use grid::{Grid, Pos};
pub use search::{
    ConstrainedSearch, OriginPolicy, Route, SearchConfig, SearchConfigBuilder, SearchOutcome,
    SearchState, TurnSet,
};
