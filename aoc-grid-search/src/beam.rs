//! Light beams bouncing through a contraption of mirrors and splitters.
//!
//! A beam is a `(cell, heading)` state. Flooding the beam state space from an
//! entry point and counting the distinct cells crossed gives the number of
//! energized tiles.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use crate::direction::Direction;
use crate::grid::{Grid, Pos};

/// One cell of the contraption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `.`
    Empty,
    /// `/`
    MirrorSlash,
    /// `\`
    MirrorBackslash,
    /// `|`
    SplitVertical,
    /// `-`
    SplitHorizontal,
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' => Ok(Tile::Empty),
            '/' => Ok(Tile::MirrorSlash),
            '\\' => Ok(Tile::MirrorBackslash),
            '|' => Ok(Tile::SplitVertical),
            '-' => Ok(Tile::SplitHorizontal),
            other => Err(other),
        }
    }
}

impl Tile {
    /// Headings a beam leaves with after entering this tile heading `dir`.
    pub fn deflect(self, dir: Direction) -> [Option<Direction>; 2] {
        match self {
            Tile::Empty => [Some(dir), None],
            Tile::MirrorSlash => {
                let out = match dir {
                    Direction::North => Direction::East,
                    Direction::East => Direction::North,
                    Direction::South => Direction::West,
                    Direction::West => Direction::South,
                };
                [Some(out), None]
            }
            Tile::MirrorBackslash => {
                let out = match dir {
                    Direction::North => Direction::West,
                    Direction::West => Direction::North,
                    Direction::South => Direction::East,
                    Direction::East => Direction::South,
                };
                [Some(out), None]
            }
            Tile::SplitVertical if !dir.is_vertical() => {
                [Some(Direction::North), Some(Direction::South)]
            }
            Tile::SplitHorizontal if dir.is_vertical() => {
                [Some(Direction::East), Some(Direction::West)]
            }
            // Splitters crossed end-on act like empty space.
            Tile::SplitVertical | Tile::SplitHorizontal => [Some(dir), None],
        }
    }
}

/// Number of cells crossed by a beam entering `entry` heading `heading`.
///
/// The entry cell's own tile acts on the beam. Beams that leave the grid
/// stop; loops end once a `(cell, heading)` state repeats.
pub fn energized(grid: &Grid<Tile>, entry: Pos, heading: Direction) -> usize {
    if !grid.contains(entry) {
        return 0;
    }

    let mut seen: HashSet<(Pos, Direction)> = HashSet::new();
    let mut beams = vec![(entry, heading)];
    while let Some((pos, dir)) = beams.pop() {
        if !seen.insert((pos, dir)) {
            continue;
        }
        for out in grid[pos].deflect(dir).into_iter().flatten() {
            if let Some(next) = grid.step(pos, out) {
                beams.push((next, out));
            }
        }
    }

    seen.iter().map(|&(pos, _)| pos).collect::<HashSet<_>>().len()
}

/// Every way a beam can enter from outside: each edge cell, heading inward.
pub fn edge_entries(grid: &Grid<Tile>) -> Vec<(Pos, Direction)> {
    let last_row = grid.rows() - 1;
    let last_col = grid.cols() - 1;

    let columns = (0..grid.cols()).flat_map(|col| {
        [
            (Pos::new(0, col), Direction::South),
            (Pos::new(last_row, col), Direction::North),
        ]
    });
    let rows = (0..grid.rows()).flat_map(|row| {
        [
            (Pos::new(row, 0), Direction::East),
            (Pos::new(row, last_col), Direction::West),
        ]
    });
    columns.chain(rows).collect()
}

/// The most cells any single edge entry can energize.
///
/// Entries are independent floods over the shared grid and run in parallel
/// on the current Rayon pool.
pub fn max_energized(grid: &Grid<Tile>) -> usize {
    let entries = edge_entries(grid);
    let best = entries
        .par_iter()
        .map(|&(pos, dir)| energized(grid, pos, dir))
        .max()
        .unwrap_or(0);
    debug!(entries = entries.len(), best, "edge entries flooded");
    best
}
