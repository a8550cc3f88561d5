//! Runs a configured engine against its puzzle input

use crate::config::{Config, Job};
use crate::error::CliError;
use crate::input::read_input;
use crate::output::draw_route;
use aoc_grid_search::beam::{self, Tile};
use aoc_grid_search::parse::{parse_char_grid, parse_digit_grid};
use aoc_grid_search::pipes::{self, Pipe};
use aoc_grid_search::plots::{self, Plot};
use aoc_grid_search::{ConstrainedSearch, Direction, Pos, SearchConfig, SearchOutcome};
use rayon::ThreadPool;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// Numeric answer of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Value(u64),
    /// No legal route reaches the goal
    Unreachable,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Value(value) => write!(f, "{}", value),
            Answer::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Result of a single run
#[derive(Debug)]
pub struct Report {
    /// Job label, e.g. `crucible`
    pub job: String,
    pub answer: Answer,
    pub parse_duration: Duration,
    pub solve_duration: Duration,
    /// Route drawing when `--show-path` was requested and a route exists
    pub drawing: Option<String>,
}

/// Engine runner owning the thread pool for parallel work
pub struct Runner {
    thread_pool: ThreadPool,
}

impl Runner {
    /// Create a runner with `thread_count` worker threads
    pub fn new(thread_count: usize) -> Result<Self, CliError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;
        Ok(Self { thread_pool })
    }

    /// Load the input and run the configured job
    pub fn execute(&self, config: &Config) -> Result<Report, CliError> {
        let input = read_input(&config.input)?;
        info!(
            path = %config.input.display(),
            bytes = input.len(),
            threads = self.thread_pool.current_num_threads(),
            "input loaded"
        );

        let job = config.job.to_string();
        let (answer, parse_duration, solve_duration, drawing) = match &config.job {
            Job::Crucible { search, show_path } => self.crucible(&input, search, *show_path)?,
            Job::Energize { best } => {
                let (answer, parse, solve) = self.energize(&input, *best)?;
                (answer, parse, solve, None)
            }
            Job::Pipes { enclosed } => {
                let (answer, parse, solve) = self.pipes(&input, *enclosed)?;
                (answer, parse, solve, None)
            }
            Job::Plots { steps, tiled } => {
                let (answer, parse, solve) = self.plots(&input, *steps, *tiled)?;
                (answer, parse, solve, None)
            }
        };
        info!(%job, %answer, ?solve_duration, "run finished");

        Ok(Report {
            job,
            answer,
            parse_duration,
            solve_duration,
            drawing,
        })
    }

    fn crucible(
        &self,
        input: &str,
        search: &SearchConfig,
        show_path: bool,
    ) -> Result<(Answer, Duration, Duration, Option<String>), CliError> {
        let (grid, parse_duration) = timed(|| parse_digit_grid(input));
        let grid = grid?;
        info!(rows = grid.rows(), cols = grid.cols(), "cost grid parsed");

        let engine = ConstrainedSearch::new(&grid, search.clone());
        let (outcome, solve_duration) = timed(|| engine.run_corner_to_corner());

        Ok(match outcome? {
            SearchOutcome::Reached(route) => {
                let drawing = show_path.then(|| draw_route(&grid, &route));
                (
                    Answer::Value(route.cost),
                    parse_duration,
                    solve_duration,
                    drawing,
                )
            }
            SearchOutcome::NotReachable => {
                (Answer::Unreachable, parse_duration, solve_duration, None)
            }
        })
    }

    fn energize(&self, input: &str, best: bool) -> Result<(Answer, Duration, Duration), CliError> {
        let (grid, parse_duration) = timed(|| parse_char_grid::<Tile>(input));
        let grid = grid?;

        let (count, solve_duration) = timed(|| {
            if best {
                self.thread_pool.install(|| beam::max_energized(&grid))
            } else {
                beam::energized(&grid, Pos::new(0, 0), Direction::East)
            }
        });
        Ok((Answer::Value(count as u64), parse_duration, solve_duration))
    }

    fn pipes(&self, input: &str, enclosed: bool) -> Result<(Answer, Duration, Duration), CliError> {
        let (grid, parse_duration) = timed(|| parse_char_grid::<Pipe>(input));
        let grid = grid?;

        let (count, solve_duration) = timed(|| {
            pipes::trace_loop(&grid).map(|pipe_loop| {
                if enclosed {
                    pipes::enclosed_tiles(&grid, &pipe_loop)
                } else {
                    pipe_loop.farthest()
                }
            })
        });
        Ok((Answer::Value(count? as u64), parse_duration, solve_duration))
    }

    fn plots(
        &self,
        input: &str,
        steps: u32,
        tiled: bool,
    ) -> Result<(Answer, Duration, Duration), CliError> {
        let (grid, parse_duration) = timed(|| parse_char_grid::<Plot>(input));
        let grid = grid?;
        let start = plots::find_start(&grid).ok_or(CliError::MissingStart)?;

        let (count, solve_duration) = timed(|| {
            if tiled {
                self.thread_pool
                    .install(|| plots::reachable_plots_tiled(&grid, start, u64::from(steps)))
            } else {
                let distances = plots::step_distances(&grid, start);
                Ok(plots::reachable_plots(&distances, steps) as u64)
            }
        });
        Ok((Answer::Value(count?), parse_duration, solve_duration))
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
