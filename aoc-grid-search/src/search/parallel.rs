//! Independent searches fanned out over a Rayon pool.

use rayon::prelude::*;

use super::engine::ConstrainedSearch;
use super::state::SearchOutcome;
use crate::error::SearchError;
use crate::grid::Pos;

impl ConstrainedSearch<'_> {
    /// Run one search per start position in parallel.
    ///
    /// The grid is shared read-only; every search owns its frontier and
    /// finalized set. Results come back in the order of `starts`. Runs on the
    /// current Rayon pool, so wrap the call in `ThreadPool::install` to bound
    /// the thread count.
    pub fn run_many<G>(&self, starts: &[Pos], is_goal: G) -> Vec<Result<SearchOutcome, SearchError>>
    where
        G: Fn(Pos) -> bool + Sync,
    {
        starts
            .par_iter()
            .map(|&start| self.run(start, &is_goal))
            .collect()
    }

    /// The cheapest outcome over all `starts`, or the first error.
    pub fn best_of_many<G>(&self, starts: &[Pos], is_goal: G) -> Result<SearchOutcome, SearchError>
    where
        G: Fn(Pos) -> bool + Sync,
    {
        self.run_many(starts, is_goal)
            .into_iter()
            .try_fold(SearchOutcome::NotReachable, |best, outcome| {
                Ok(best.cheaper(outcome?))
            })
    }
}
