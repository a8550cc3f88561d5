//! Search states, frontier ordering and search results.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::direction::Direction;
use crate::grid::Pos;

/// A node of the expanded search graph.
///
/// Two states on the same cell with different heading or run length are
/// different nodes: what may happen next depends on how the cell was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchState {
    pub pos: Pos,
    /// Heading of the last move, `None` only for a directionless origin.
    pub heading: Option<Direction>,
    /// Consecutive moves taken in `heading` to arrive at `pos`.
    pub run: u32,
}

impl SearchState {
    /// The directionless start state.
    pub const fn origin(pos: Pos) -> Self {
        Self {
            pos,
            heading: None,
            run: 0,
        }
    }

    /// Origin states have not moved yet, so no streak rule applies to them.
    pub const fn is_origin(&self) -> bool {
        self.run == 0
    }
}

/// A frontier value: a state, the cost of reaching it and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) cost: u64,
    pub(crate) state: SearchState,
    pub(crate) parent: Option<SearchState>,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest entry first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
            .then_with(|| other.parent.cmp(&self.parent))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of discovered, not yet finalized states.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: usize,
    peak: usize,
}

impl Frontier {
    pub(crate) fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
        self.pushed += 1;
        self.peak = self.peak.max(self.heap.len());
    }

    pub(crate) fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Entries pushed over the frontier's lifetime.
    pub(crate) fn pushed(&self) -> usize {
        self.pushed
    }

    /// Largest size the frontier reached.
    pub(crate) fn peak(&self) -> usize {
        self.peak
    }
}

/// A cheapest route found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Sum of the costs of every cell entered; the start cell is free.
    pub cost: u64,
    /// The state in which the goal was reached.
    pub goal: SearchState,
    /// Cells visited from start to goal, both included.
    pub path: Vec<Pos>,
}

impl Route {
    /// Straight segments of the route as `(heading, length)` pairs.
    pub fn segments(&self) -> Vec<(Direction, u32)> {
        let mut segments: Vec<(Direction, u32)> = Vec::new();
        for pair in self.path.windows(2) {
            let Some(dir) = pair[0].heading_to(pair[1]) else {
                continue;
            };
            match segments.last_mut() {
                Some((last, len)) if *last == dir => *len += 1,
                _ => segments.push((dir, 1)),
            }
        }
        segments
    }

    /// Number of moves taken.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a completed search. Unreachable goals are a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Reached(Route),
    NotReachable,
}

impl SearchOutcome {
    pub fn cost(&self) -> Option<u64> {
        self.route().map(|route| route.cost)
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Reached(route) => Some(route),
            Self::NotReachable => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            Self::Reached(route) => Some(route),
            Self::NotReachable => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached(_))
    }

    /// The cheaper of two outcomes; reached beats unreachable, ties keep `self`.
    pub fn cheaper(self, other: Self) -> Self {
        match (self.cost(), other.cost()) {
            (Some(a), Some(b)) if b < a => other,
            (None, Some(_)) => other,
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(row: usize, col: usize) -> SearchState {
        SearchState {
            pos: Pos::new(row, col),
            heading: Some(Direction::East),
            run: 1,
        }
    }

    #[test]
    fn test_frontier_pops_cheapest_first() {
        let mut frontier = Frontier::default();
        for (cost, col) in [(7, 0), (2, 1), (9, 2), (2, 3), (0, 4)] {
            frontier.push(FrontierEntry {
                cost,
                state: state(0, col),
                parent: None,
            });
        }

        let costs: Vec<u64> = std::iter::from_fn(|| frontier.pop_min())
            .map(|entry| entry.cost)
            .collect();
        assert_eq!(costs, vec![0, 2, 2, 7, 9]);
        assert_eq!(frontier.pushed(), 5);
        assert_eq!(frontier.peak(), 5);
    }

    #[test]
    fn test_segments_group_straight_moves() {
        let route = Route {
            cost: 0,
            goal: state(2, 2),
            path: vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 2),
                Pos::new(2, 2),
            ],
        };
        assert_eq!(
            route.segments(),
            vec![(Direction::East, 2), (Direction::South, 2)]
        );
        assert_eq!(route.moves(), 4);
    }

    #[test]
    fn test_cheaper_prefers_reached_and_lower_cost() {
        let reached = |cost| {
            SearchOutcome::Reached(Route {
                cost,
                goal: state(0, 0),
                path: vec![Pos::new(0, 0)],
            })
        };
        assert_eq!(
            SearchOutcome::NotReachable.cheaper(reached(5)).cost(),
            Some(5)
        );
        assert_eq!(reached(5).cheaper(reached(3)).cost(), Some(3));
        assert_eq!(reached(3).cheaper(reached(5)).cost(), Some(3));
        assert_eq!(
            SearchOutcome::NotReachable.cheaper(SearchOutcome::NotReachable),
            SearchOutcome::NotReachable
        );
    }
}
