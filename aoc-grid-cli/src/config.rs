//! Configuration resolution from CLI args

use crate::cli::{Args, Command, CrucibleArgs, OriginArg, Preset};
use crate::error::CliError;
use aoc_grid_search::{ConfigError, Direction, OriginPolicy, SearchConfig};
use std::fmt;
use std::path::PathBuf;

/// The engine run requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Constrained search from top-left to bottom-right
    Crucible {
        search: SearchConfig,
        show_path: bool,
    },
    /// Beam flood from the top-left, or from every edge
    Energize { best: bool },
    /// Farthest loop distance, or tiles enclosed by the loop
    Pipes { enclosed: bool },
    /// Exact-step reachability from the start plot
    Plots { steps: u32, tiled: bool },
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Job::Crucible { .. } => write!(f, "crucible"),
            Job::Energize { best: false } => write!(f, "energize"),
            Job::Energize { best: true } => write!(f, "energize (best entry)"),
            Job::Pipes { enclosed: false } => write!(f, "pipes"),
            Job::Pipes { enclosed: true } => write!(f, "pipes (enclosed)"),
            Job::Plots {
                steps,
                tiled: false,
            } => write!(f, "plots ({} steps)", steps),
            Job::Plots { steps, tiled: true } => write!(f, "plots ({} steps, tiled)", steps),
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// What to run
    pub job: Job,
    /// Input path, `-` meaning stdin
    pub input: PathBuf,
    /// Number of threads for parallel searches
    pub thread_count: usize,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, validating search rules
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = args.threads.unwrap_or_else(num_cpus);

        let (job, input) = match args.command {
            Command::Crucible(crucible) => {
                let search = resolve_search(&crucible)?;
                (
                    Job::Crucible {
                        search,
                        show_path: crucible.show_path,
                    },
                    crucible.input,
                )
            }
            Command::Energize(energize) => (Job::Energize { best: energize.best }, energize.input),
            Command::Pipes(pipes) => (
                Job::Pipes {
                    enclosed: pipes.enclosed,
                },
                pipes.input,
            ),
            Command::Plots(plots) => (
                Job::Plots {
                    steps: plots.steps,
                    tiled: plots.tiled,
                },
                plots.input,
            ),
        };

        Ok(Config {
            job,
            input,
            thread_count,
            quiet: args.quiet,
        })
    }
}

/// Start from the preset, then apply explicit overrides
fn resolve_search(args: &CrucibleArgs) -> Result<SearchConfig, ConfigError> {
    let preset = match args.preset {
        Preset::Free => SearchConfig::default(),
        Preset::Crucible => SearchConfig::crucible(),
        Preset::Ultra => SearchConfig::ultra_crucible(),
    };

    let mut builder = preset.into_builder();
    if let Some(min) = args.min_streak {
        builder = builder.min_streak(min);
    }
    if let Some(max) = args.max_streak {
        builder = builder.max_streak(max);
    }
    if let Some(origin) = args.origin {
        builder = builder.origin(origin_policy(origin));
    }
    if args.stop_requires_min_streak {
        builder = builder.stop_requires_min_streak(true);
    } else if args.no_stop_requires_min_streak {
        builder = builder.stop_requires_min_streak(false);
    }
    builder.build()
}

/// Runs always start in the top-left corner, so east and south are the
/// headings that lead into the grid.
fn origin_policy(origin: OriginArg) -> OriginPolicy {
    let inward = vec![Direction::East, Direction::South];
    match origin {
        OriginArg::Any => OriginPolicy::Any,
        OriginArg::Facing => OriginPolicy::Facing(inward),
        OriginArg::FirstMove => OriginPolicy::FirstMove(inward),
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use proptest::prelude::*;

    fn config_from(argv: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(argv).expect("arguments parse");
        Config::from_args(args)
    }

    fn search_of(config: &Config) -> &SearchConfig {
        match &config.job {
            Job::Crucible { search, .. } => search,
            other => panic!("expected crucible job, got {other:?}"),
        }
    }

    #[test]
    fn test_crucible_defaults_to_crucible_preset() {
        let config = config_from(&["aoc-grid", "crucible", "input.txt"]).unwrap();
        assert_eq!(search_of(&config), &SearchConfig::crucible());
        assert_eq!(config.input, PathBuf::from("input.txt"));
        assert!(!config.quiet);
        assert!(config.thread_count >= 1);
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let config = config_from(&[
            "aoc-grid",
            "crucible",
            "in.txt",
            "--preset",
            "ultra",
            "--max-streak",
            "7",
            "--origin",
            "any",
            "--show-path",
            "-q",
            "--threads",
            "2",
        ])
        .unwrap();

        let search = search_of(&config);
        assert_eq!(search.min_streak(), 4);
        assert_eq!(search.max_streak(), 7);
        assert_eq!(search.origin(), &OriginPolicy::Any);
        assert!(search.stop_requires_min_streak());
        assert!(matches!(config.job, Job::Crucible { show_path: true, .. }));
        assert!(config.quiet);
        assert_eq!(config.thread_count, 2);
    }

    #[test]
    fn test_stop_rule_can_be_switched_off_over_preset() {
        let config = config_from(&[
            "aoc-grid",
            "crucible",
            "in.txt",
            "--preset",
            "ultra",
            "--no-stop-requires-min-streak",
        ])
        .unwrap();
        let search = search_of(&config);
        assert!(!search.stop_requires_min_streak());
        assert_eq!(search.min_streak(), 4);

        let args = Args::try_parse_from([
            "aoc-grid",
            "crucible",
            "in.txt",
            "--stop-requires-min-streak",
            "--no-stop-requires-min-streak",
        ]);
        assert!(args.is_err());
    }

    #[test]
    fn test_inverted_streak_is_a_config_error() {
        let err = config_from(&["aoc-grid", "crucible", "in.txt", "--min-streak", "5"])
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvertedStreak { min: 5, max: 3 })
        ));
    }

    #[test]
    fn test_other_jobs() {
        let config = config_from(&["aoc-grid", "energize", "-", "--best"]).unwrap();
        assert_eq!(config.job, Job::Energize { best: true });
        assert_eq!(config.input, PathBuf::from("-"));

        let config = config_from(&["aoc-grid", "plots", "garden.txt"]).unwrap();
        assert_eq!(
            config.job,
            Job::Plots {
                steps: 64,
                tiled: false
            }
        );
        assert_eq!(config.job.to_string(), "plots (64 steps)");

        let config =
            config_from(&["aoc-grid", "plots", "garden.txt", "--steps", "16", "--tiled"]).unwrap();
        assert_eq!(config.job.to_string(), "plots (16 steps, tiled)");

        let config = config_from(&["aoc-grid", "pipes", "sketch.txt", "--enclosed"]).unwrap();
        assert_eq!(config.job, Job::Pipes { enclosed: true });
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Any ordered pair of streak overrides is accepted verbatim.
        #[test]
        fn prop_ordered_streak_overrides_accepted(min in 1u32..50, extra in 0u32..50) {
            let max = min + extra;
            let (min_arg, max_arg) = (min.to_string(), max.to_string());
            let config = config_from(&[
                "aoc-grid", "crucible", "in.txt",
                "--min-streak", &min_arg,
                "--max-streak", &max_arg,
            ]).unwrap();
            let search = search_of(&config);
            prop_assert_eq!(search.min_streak(), min);
            prop_assert_eq!(search.max_streak(), max);
        }
    }
}
