//! A single closed loop of pipes hidden among scrap tiles.
//!
//! The loop is walked as a `(cell, heading)` state: every pipe turns the
//! heading it was entered with into the heading it leaves with, until the
//! walk arrives back on the start tile.

use tracing::debug;

use crate::direction::Direction;
use crate::error::LoopError;
use crate::grid::{Grid, Pos};

/// One tile of the pipe sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipe {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
    /// `.`
    Ground,
    /// `S`, a pipe of unknown shape
    Start,
}

impl TryFrom<char> for Pipe {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '|' => Ok(Pipe::Vertical),
            '-' => Ok(Pipe::Horizontal),
            'L' => Ok(Pipe::NorthEast),
            'J' => Ok(Pipe::NorthWest),
            '7' => Ok(Pipe::SouthWest),
            'F' => Ok(Pipe::SouthEast),
            '.' => Ok(Pipe::Ground),
            'S' => Ok(Pipe::Start),
            other => Err(other),
        }
    }
}

impl Pipe {
    const SHAPES: [Pipe; 6] = [
        Pipe::Vertical,
        Pipe::Horizontal,
        Pipe::NorthEast,
        Pipe::NorthWest,
        Pipe::SouthWest,
        Pipe::SouthEast,
    ];

    /// The two sides a pipe connects. Ground and the start have none.
    pub fn openings(self) -> Option<[Direction; 2]> {
        use Direction::*;
        match self {
            Pipe::Vertical => Some([North, South]),
            Pipe::Horizontal => Some([East, West]),
            Pipe::NorthEast => Some([North, East]),
            Pipe::NorthWest => Some([North, West]),
            Pipe::SouthWest => Some([South, West]),
            Pipe::SouthEast => Some([South, East]),
            Pipe::Ground | Pipe::Start => None,
        }
    }

    pub fn opens(self, side: Direction) -> bool {
        self.openings().is_some_and(|sides| sides.contains(&side))
    }

    /// The pipe shape connecting exactly sides `a` and `b`.
    pub fn with_openings(a: Direction, b: Direction) -> Option<Pipe> {
        if a == b {
            return None;
        }
        Self::SHAPES
            .into_iter()
            .find(|pipe| pipe.opens(a) && pipe.opens(b))
    }

    /// Heading out of this pipe for a walker that entered heading `dir`.
    fn exit(self, dir: Direction) -> Option<Direction> {
        let [a, b] = self.openings()?;
        let entered_from = dir.reverse();
        if a == entered_from {
            Some(b)
        } else if b == entered_from {
            Some(a)
        } else {
            None
        }
    }
}

/// The loop through the start tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeLoop {
    /// Loop tiles in walking order, beginning with the start tile.
    pub tiles: Vec<Pos>,
    /// Shape of the pipe under the start tile.
    pub start_shape: Pipe,
}

impl PipeLoop {
    /// Steps along the loop to the tile farthest from the start.
    pub fn farthest(&self) -> usize {
        self.tiles.len() / 2
    }
}

/// Position of the first `S` tile in row-major order.
pub fn find_start(grid: &Grid<Pipe>) -> Option<Pos> {
    grid.iter()
        .find(|(_, pipe)| **pipe == Pipe::Start)
        .map(|(pos, _)| pos)
}

/// Walk the loop through the start tile.
///
/// Connections from the start are tried in [`Direction::ALL`] order; pipes
/// that merely touch the start without closing a loop are skipped.
pub fn trace_loop(grid: &Grid<Pipe>) -> Result<PipeLoop, LoopError> {
    let start = find_start(grid).ok_or(LoopError::MissingStart)?;

    let exits: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|&dir| {
            grid.step(start, dir)
                .is_some_and(|next| grid[next].opens(dir.reverse()))
        })
        .collect();
    if exits.len() < 2 {
        return Err(LoopError::OpenStart {
            row: start.row,
            col: start.col,
            connections: exits.len(),
        });
    }

    let pipe_loop = exits
        .iter()
        .find_map(|&dir| walk(grid, start, dir))
        .ok_or(LoopError::NoLoop)?;
    debug!(
        %start,
        length = pipe_loop.tiles.len(),
        shape = ?pipe_loop.start_shape,
        "pipe loop traced"
    );
    Ok(pipe_loop)
}

fn walk(grid: &Grid<Pipe>, start: Pos, first: Direction) -> Option<PipeLoop> {
    let mut tiles = vec![start];
    let mut dir = first;
    let mut pos = grid.step(start, first)?;
    while pos != start {
        tiles.push(pos);
        dir = grid[pos].exit(dir)?;
        pos = grid.step(pos, dir)?;
    }

    Some(PipeLoop {
        tiles,
        start_shape: Pipe::with_openings(first, dir.reverse())?,
    })
}

/// Number of tiles strictly inside the loop.
///
/// Each row is scanned west to east. Crossing a loop tile that opens north
/// flips between outside and inside; pipes lying along the row without a
/// north opening do not.
pub fn enclosed_tiles(grid: &Grid<Pipe>, pipe_loop: &PipeLoop) -> usize {
    let mut on_loop = grid.map(|_| false);
    for &pos in &pipe_loop.tiles {
        if let Some(cell) = on_loop.get_mut(pos) {
            *cell = true;
        }
    }

    let mut enclosed = 0;
    for row in 0..grid.rows() {
        let mut inside = false;
        for col in 0..grid.cols() {
            let pos = Pos::new(row, col);
            if on_loop[pos] {
                let pipe = match grid[pos] {
                    Pipe::Start => pipe_loop.start_shape,
                    pipe => pipe,
                };
                if pipe.opens(Direction::North) {
                    inside = !inside;
                }
            } else if inside {
                enclosed += 1;
            }
        }
    }
    enclosed
}
