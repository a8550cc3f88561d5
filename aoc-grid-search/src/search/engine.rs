//! Best-first search over `(cell, heading, run)` states.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use super::config::{OriginPolicy, SearchConfig};
use super::state::{Frontier, FrontierEntry, Route, SearchOutcome, SearchState};
use crate::direction::Direction;
use crate::error::SearchError;
use crate::grid::{Grid, Pos};

/// Finalized states mapped to the state they were reached from.
type Finalized = HashMap<SearchState, Option<SearchState>>;

/// Minimum-cost path search over a cost grid under streak and turn rules.
///
/// Entering a cell costs that cell's value; the start cell is free. Each call
/// to [`run`](Self::run) owns its own frontier and finalized set, so one
/// `ConstrainedSearch` can serve many independent searches, including from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct ConstrainedSearch<'g> {
    grid: &'g Grid<u32>,
    config: SearchConfig,
}

impl<'g> ConstrainedSearch<'g> {
    pub fn new(grid: &'g Grid<u32>, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    pub fn grid(&self) -> &'g Grid<u32> {
        self.grid
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the cheapest route from `start` to any cell satisfying `is_goal`.
    ///
    /// Returns [`SearchOutcome::NotReachable`] when every legal move has been
    /// explored without reaching a goal, and [`SearchError::StartOutOfBounds`]
    /// if `start` is not a grid cell.
    pub fn run(
        &self,
        start: Pos,
        is_goal: impl Fn(Pos) -> bool,
    ) -> Result<SearchOutcome, SearchError> {
        self.explore(start, &is_goal, None)
    }

    /// Like [`run`](Self::run), but checks `cancel` before every extraction
    /// and stops with [`SearchError::Cancelled`] once it is set.
    pub fn run_until(
        &self,
        start: Pos,
        is_goal: impl Fn(Pos) -> bool,
        cancel: &AtomicBool,
    ) -> Result<SearchOutcome, SearchError> {
        self.explore(start, &is_goal, Some(cancel))
    }

    /// Cheapest route from the top-left cell to the bottom-right cell.
    pub fn run_corner_to_corner(&self) -> Result<SearchOutcome, SearchError> {
        let goal = self.grid.bottom_right();
        self.run(Pos::new(0, 0), |pos| pos == goal)
    }

    fn explore(
        &self,
        start: Pos,
        is_goal: &dyn Fn(Pos) -> bool,
        cancel: Option<&AtomicBool>,
    ) -> Result<SearchOutcome, SearchError> {
        if !self.grid.contains(start) {
            return Err(SearchError::StartOutOfBounds {
                row: start.row,
                col: start.col,
            });
        }

        // Standing on a goal costs nothing, whatever the origin policy.
        if is_goal(start) {
            return Ok(SearchOutcome::Reached(Route {
                cost: 0,
                goal: SearchState::origin(start),
                path: vec![start],
            }));
        }

        let mut frontier = Frontier::default();
        let mut finalized = Finalized::new();
        let mut stale = 0usize;
        self.seed(start, &mut frontier);

        loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                debug!(expanded = finalized.len(), "search cancelled");
                return Err(SearchError::Cancelled);
            }

            let Some(FrontierEntry {
                cost,
                state,
                parent,
            }) = frontier.pop_min()
            else {
                break;
            };

            match finalized.entry(state) {
                Entry::Occupied(_) => {
                    stale += 1;
                    continue;
                }
                Entry::Vacant(slot) => {
                    slot.insert(parent);
                }
            }

            if is_goal(state.pos) && self.may_stop(&state) {
                debug!(
                    cost,
                    expanded = finalized.len(),
                    pushed = frontier.pushed(),
                    peak = frontier.peak(),
                    stale,
                    "goal reached"
                );
                return Ok(SearchOutcome::Reached(Route {
                    cost,
                    goal: state,
                    path: reconstruct(&finalized, state),
                }));
            }

            self.expand(state, cost, &finalized, &mut frontier);
        }

        debug!(
            expanded = finalized.len(),
            pushed = frontier.pushed(),
            stale,
            "frontier exhausted without reaching a goal"
        );
        Ok(SearchOutcome::NotReachable)
    }

    fn seed(&self, start: Pos, frontier: &mut Frontier) {
        match &self.config.origin {
            OriginPolicy::Any => frontier.push(FrontierEntry {
                cost: 0,
                state: SearchState::origin(start),
                parent: None,
            }),
            OriginPolicy::Facing(headings) => {
                for &heading in headings {
                    frontier.push(FrontierEntry {
                        cost: 0,
                        state: SearchState {
                            pos: start,
                            heading: Some(heading),
                            run: 0,
                        },
                        parent: None,
                    });
                }
            }
            OriginPolicy::FirstMove(headings) => {
                let origin = SearchState::origin(start);
                for &heading in headings {
                    if let Some(next) = self.grid.step(start, heading) {
                        frontier.push(FrontierEntry {
                            cost: u64::from(self.grid[next]),
                            state: SearchState {
                                pos: next,
                                heading: Some(heading),
                                run: 1,
                            },
                            parent: Some(origin),
                        });
                    }
                }
            }
        }
        trace!(%start, origin = ?self.config.origin, "frontier seeded");
    }

    /// Push every legal successor of `state` that is not finalized yet.
    fn expand(&self, state: SearchState, cost: u64, finalized: &Finalized, frontier: &mut Frontier) {
        let Some(heading) = state.heading else {
            for dir in Direction::ALL {
                self.push_move(state, cost, dir, 1, finalized, frontier);
            }
            return;
        };

        if state.run < self.config.max_streak {
            self.push_move(state, cost, heading, state.run + 1, finalized, frontier);
        }

        if state.is_origin() || state.run >= self.config.min_streak {
            for turn in self.config.turns.headings(heading) {
                self.push_move(state, cost, turn, 1, finalized, frontier);
            }
        }
    }

    fn push_move(
        &self,
        from: SearchState,
        cost: u64,
        dir: Direction,
        run: u32,
        finalized: &Finalized,
        frontier: &mut Frontier,
    ) {
        let Some(next) = self.grid.step(from.pos, dir) else {
            return;
        };
        let state = SearchState {
            pos: next,
            heading: Some(dir),
            run,
        };
        if finalized.contains_key(&state) {
            return;
        }
        frontier.push(FrontierEntry {
            cost: cost + u64::from(self.grid[next]),
            state,
            parent: Some(from),
        });
    }

    fn may_stop(&self, state: &SearchState) -> bool {
        !self.config.stop_requires_min_streak
            || state.is_origin()
            || state.run >= self.config.min_streak
    }
}

/// Walk predecessor links back from `goal`. Origins seeded by a forced
/// first move are never finalized, so the walk also ends at them.
fn reconstruct(finalized: &Finalized, goal: SearchState) -> Vec<Pos> {
    let mut path = vec![goal.pos];
    let mut cursor = finalized.get(&goal).copied().flatten();
    while let Some(state) = cursor {
        path.push(state.pos);
        cursor = finalized.get(&state).copied().flatten();
    }
    path.reverse();
    path
}
