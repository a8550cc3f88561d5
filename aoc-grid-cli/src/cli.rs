//! CLI argument parsing using clap

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Streak rules a crucible run starts from
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Preset {
    /// Turn whenever you like, never reverse
    Free,
    /// At most three blocks in a straight line (default)
    #[default]
    Crucible,
    /// Four to ten blocks between turns, four before stopping
    Ultra,
}

/// How the first move from the start cell is chosen
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OriginArg {
    /// Any heading; streak rules begin after the first move
    Any,
    /// Stand facing east and south with an empty streak
    Facing,
    /// First move must go east or south
    FirstMove,
}

/// Grid search engines for Advent of Code puzzles
#[derive(Parser, Debug)]
#[command(name = "aoc-grid", about = "Run grid search engines on puzzle input", version)]
pub struct Args {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode - only output answers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Number of threads for parallel searches
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cheapest path from the top-left to the bottom-right of a digit grid
    Crucible(CrucibleArgs),
    /// Count tiles energized by a beam through mirrors and splitters
    Energize(EnergizeArgs),
    /// Walk the pipe loop through the start tile
    Pipes(PipesArgs),
    /// Count garden plots reachable in an exact number of steps
    Plots(PlotsArgs),
}

#[derive(ClapArgs, Debug)]
pub struct CrucibleArgs {
    /// Puzzle input file, or `-` for stdin
    pub input: PathBuf,

    /// Rule set to start from
    #[arg(long, value_enum, default_value = "crucible")]
    pub preset: Preset,

    /// Override the minimum straight moves before a turn
    #[arg(long)]
    pub min_streak: Option<u32>,

    /// Override the maximum straight moves before a forced turn
    #[arg(long)]
    pub max_streak: Option<u32>,

    /// Override how the first move is chosen
    #[arg(long, value_enum)]
    pub origin: Option<OriginArg>,

    /// Only stop on the goal after at least the minimum streak
    #[arg(long, conflicts_with = "no_stop_requires_min_streak")]
    pub stop_requires_min_streak: bool,

    /// Allow stopping on the goal mid-streak, even under `--preset ultra`
    #[arg(long)]
    pub no_stop_requires_min_streak: bool,

    /// Draw the chosen route over the grid
    #[arg(long)]
    pub show_path: bool,
}

#[derive(ClapArgs, Debug)]
pub struct EnergizeArgs {
    /// Puzzle input file, or `-` for stdin
    pub input: PathBuf,

    /// Try every edge entry and report the best
    #[arg(long)]
    pub best: bool,
}

#[derive(ClapArgs, Debug)]
pub struct PipesArgs {
    /// Puzzle input file, or `-` for stdin
    pub input: PathBuf,

    /// Count tiles enclosed by the loop instead of the farthest distance
    #[arg(long)]
    pub enclosed: bool,
}

#[derive(ClapArgs, Debug)]
pub struct PlotsArgs {
    /// Puzzle input file, or `-` for stdin
    pub input: PathBuf,

    /// Exact number of steps to walk
    #[arg(long, default_value_t = 64)]
    pub steps: u32,

    /// Treat the garden as repeating endlessly in every direction
    #[arg(long)]
    pub tiled: bool,
}
