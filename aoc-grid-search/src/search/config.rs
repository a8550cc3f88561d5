//! Movement rules for the constrained search.

use std::ops::RangeInclusive;

use crate::direction::Direction;
use crate::error::ConfigError;

/// Which of the two perpendicular turns a walker may take.
///
/// Reversal is never part of a turn set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnSet {
    left: bool,
    right: bool,
}

impl TurnSet {
    pub const BOTH: TurnSet = TurnSet::new(true, true);
    pub const LEFT_ONLY: TurnSet = TurnSet::new(true, false);
    pub const RIGHT_ONLY: TurnSet = TurnSet::new(false, true);
    /// Straight corridors only.
    pub const NONE: TurnSet = TurnSet::new(false, false);

    pub const fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// Headings reachable by turning away from `from`.
    pub fn headings(self, from: Direction) -> impl Iterator<Item = Direction> {
        [
            self.left.then(|| from.turn_left()),
            self.right.then(|| from.turn_right()),
        ]
        .into_iter()
        .flatten()
    }
}

impl Default for TurnSet {
    fn default() -> Self {
        Self::BOTH
    }
}

/// How the search leaves the start cell, where no previous move exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OriginPolicy {
    /// A single directionless start; the first move may take any heading.
    #[default]
    Any,
    /// The walker stands at the start facing each listed heading with an
    /// empty streak. The first move may go straight or turn, never reverse.
    Facing(Vec<Direction>),
    /// The first move is forced to one of the listed headings and counts as
    /// the first step of that streak.
    FirstMove(Vec<Direction>),
}

/// Validated movement rules for [`ConstrainedSearch`](super::ConstrainedSearch).
///
/// Build one with [`SearchConfig::builder`] or use a puzzle preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub(crate) min_streak: u32,
    pub(crate) max_streak: u32,
    pub(crate) turns: TurnSet,
    pub(crate) origin: OriginPolicy,
    pub(crate) stop_requires_min_streak: bool,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Continue building from these rules.
    pub fn into_builder(self) -> SearchConfigBuilder {
        SearchConfigBuilder { config: self }
    }

    /// At most three blocks in a straight line; the first move goes east or
    /// south from the top-left corner.
    pub fn crucible() -> Self {
        Self {
            min_streak: 1,
            max_streak: 3,
            turns: TurnSet::BOTH,
            origin: OriginPolicy::FirstMove(vec![Direction::East, Direction::South]),
            stop_requires_min_streak: false,
        }
    }

    /// Four to ten blocks between turns, and at least four before stopping.
    pub fn ultra_crucible() -> Self {
        Self {
            min_streak: 4,
            max_streak: 10,
            turns: TurnSet::BOTH,
            origin: OriginPolicy::Facing(vec![Direction::East, Direction::South]),
            stop_requires_min_streak: true,
        }
    }

    pub fn min_streak(&self) -> u32 {
        self.min_streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    pub fn turns(&self) -> TurnSet {
        self.turns
    }

    pub fn origin(&self) -> &OriginPolicy {
        &self.origin
    }

    pub fn stop_requires_min_streak(&self) -> bool {
        self.stop_requires_min_streak
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_streak == 0 {
            return Err(ConfigError::ZeroMinStreak);
        }
        if self.max_streak < self.min_streak {
            return Err(ConfigError::InvertedStreak {
                min: self.min_streak,
                max: self.max_streak,
            });
        }
        match &self.origin {
            OriginPolicy::Facing(dirs) | OriginPolicy::FirstMove(dirs) if dirs.is_empty() => {
                Err(ConfigError::EmptyOrigin)
            }
            _ => Ok(()),
        }
    }
}

/// Unconstrained walking: turn at any time, never reverse.
impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_streak: 1,
            max_streak: u32::MAX,
            turns: TurnSet::BOTH,
            origin: OriginPolicy::Any,
            stop_requires_min_streak: false,
        }
    }
}

/// Builder for [`SearchConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn min_streak(mut self, min: u32) -> Self {
        self.config.min_streak = min;
        self
    }

    pub fn max_streak(mut self, max: u32) -> Self {
        self.config.max_streak = max;
        self
    }

    /// Set both streak bounds from an inclusive range.
    pub fn streak(self, range: RangeInclusive<u32>) -> Self {
        let (min, max) = range.into_inner();
        self.min_streak(min).max_streak(max)
    }

    pub fn turns(mut self, turns: TurnSet) -> Self {
        self.config.turns = turns;
        self
    }

    pub fn origin(mut self, origin: OriginPolicy) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn stop_requires_min_streak(mut self, required: bool) -> Self {
        self.config.stop_requires_min_streak = required;
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
