//! Step counting across a garden with rocks, alone or repeated endlessly.

use std::collections::VecDeque;

use rayon::prelude::*;
use tracing::debug;

use crate::direction::Direction;
use crate::error::TilingError;
use crate::grid::{Grid, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plot {
    Garden,
    Rock,
    /// A garden plot marked as the starting position.
    Start,
}

impl Plot {
    pub fn is_open(self) -> bool {
        !matches!(self, Plot::Rock)
    }
}

impl TryFrom<char> for Plot {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' => Ok(Plot::Garden),
            '#' => Ok(Plot::Rock),
            'S' => Ok(Plot::Start),
            other => Err(other),
        }
    }
}

/// Position of the first `S` plot in row-major order.
pub fn find_start(grid: &Grid<Plot>) -> Option<Pos> {
    grid.iter()
        .find(|(_, plot)| **plot == Plot::Start)
        .map(|(pos, _)| pos)
}

/// Fewest steps from `start` to every open plot, `None` where unreachable.
pub fn step_distances(grid: &Grid<Plot>, start: Pos) -> Grid<Option<u32>> {
    let mut distances = grid.map(|_| None);
    if !grid.get(start).is_some_and(|plot| plot.is_open()) {
        return distances;
    }

    if let Some(slot) = distances.get_mut(start) {
        *slot = Some(0);
    }
    let mut queue = VecDeque::from([(start, 0u32)]);
    while let Some((pos, dist)) = queue.pop_front() {
        for dir in Direction::ALL {
            let Some(next) = grid.step(pos, dir) else {
                continue;
            };
            if !grid[next].is_open() {
                continue;
            }
            if let Some(slot) = distances.get_mut(next)
                && slot.is_none()
            {
                *slot = Some(dist + 1);
                queue.push_back((next, dist + 1));
            }
        }
    }
    distances
}

/// Plots where a walker can stand after exactly `steps` steps.
///
/// Stepping back and forth wastes two steps at a time, so a plot counts when
/// it is at most `steps` away and its distance has the parity of `steps`.
pub fn reachable_plots(distances: &Grid<Option<u32>>, steps: u32) -> usize {
    distances
        .iter()
        .filter_map(|(_, dist)| *dist)
        .filter(|&dist| dist <= steps && dist % 2 == steps % 2)
        .count()
}

/// Plots reachable in exactly `steps` steps when the garden repeats forever
/// in every direction.
///
/// The walk is counted tile by tile instead of simulated. Fully covered
/// tiles alternate parity in rings around the centre; the four tips and the
/// two kinds of diagonal edge tiles are counted from distance maps seeded at
/// the corners and side midpoints where a walker first enters them.
///
/// This holds for gardens whose centre row, centre column and border are
/// free of rocks, so that each tile is entered at its nearest corner or
/// side midpoint. It requires an odd-sided square garden at least three
/// wide, the start in its centre, and `steps` equal to half a side plus at
/// least one whole side.
pub fn reachable_plots_tiled(
    grid: &Grid<Plot>,
    start: Pos,
    steps: u64,
) -> Result<u64, TilingError> {
    let size = grid.rows();
    if grid.cols() != size || size % 2 == 0 || size < 3 {
        return Err(TilingError::NotOddSquare {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    let half = size / 2;
    if start != Pos::new(half, half) {
        return Err(TilingError::OffCenter {
            row: start.row,
            col: start.col,
        });
    }
    let side = size as u64;
    if steps < side || steps % side != half as u64 {
        return Err(TilingError::StepsMisaligned { steps, size });
    }
    let rings = steps / side;

    // Seeds at offsets 0, half and size - 1 on each axis, row-major.
    let seeds: Vec<Pos> = (0..3)
        .flat_map(|u| (0..3).map(move |v| Pos::new(half * u, half * v)))
        .collect();
    let maps: Vec<Grid<Option<u32>>> = seeds
        .par_iter()
        .map(|&seed| step_distances(grid, seed))
        .collect();
    let map = |u: usize, v: usize| &maps[u * 3 + v];
    let within = |distances: &Grid<Option<u32>>, max: usize| {
        reachable_plots(distances, max as u32) as u64
    };

    let parity = steps % 2;
    let by_parity = |bit: u64| {
        map(1, 1)
            .iter()
            .filter_map(|(_, dist)| *dist)
            .filter(|&dist| u64::from(dist) % 2 == bit)
            .count() as u64
    };
    let full = [by_parity(0), by_parity(1)];

    let mut total = full[parity as usize];
    for ring in 1..rings {
        total += full[((ring & 1) ^ parity) as usize] * 4 * ring;
    }

    let tips: u64 = [(0, 1), (1, 0), (2, 1), (1, 2)]
        .into_iter()
        .map(|(u, v)| within(map(u, v), size - 1))
        .sum();
    let corners = [(0, 0), (0, 2), (2, 0), (2, 2)];
    let small: u64 = corners
        .into_iter()
        .map(|(u, v)| within(map(u, v), half - 1))
        .sum();
    let large: u64 = corners
        .into_iter()
        .map(|(u, v)| within(map(u, v), half + size - 1))
        .sum();

    total += tips + small * rings + large * (rings - 1);
    debug!(steps, rings, total, "tiled garden counted");
    Ok(total)
}
