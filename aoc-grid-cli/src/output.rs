//! Output formatting for engine reports

use crate::runner::Report;
use aoc_grid_search::{Grid, Pos, Route};
use std::collections::HashMap;
use std::time::Duration;

/// Output formatter for engine reports
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a report
    pub fn print_report(&self, report: &Report) {
        println!("{}", self.format_report(report));
        if !self.quiet
            && let Some(drawing) = &report.drawing
        {
            println!("{}", drawing);
        }
    }

    /// The answer line: bare answer when quiet, answer with timings otherwise
    fn format_report(&self, report: &Report) -> String {
        if self.quiet {
            return report.answer.to_string();
        }
        format!(
            "{}: {} (parse: {}, solve: {})",
            report.job,
            report.answer,
            format_duration(report.parse_duration),
            format_duration(report.solve_duration)
        )
    }
}

/// Format a Duration for display
pub fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

/// Render the cost grid with each entered cell replaced by the arrow of the
/// move that entered it
pub fn draw_route(grid: &Grid<u32>, route: &Route) -> String {
    let arrows: HashMap<_, _> = route
        .path
        .windows(2)
        .filter_map(|pair| {
            let dir = pair[0].heading_to(pair[1])?;
            Some((pair[1], dir.arrow()))
        })
        .collect();

    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let pos = Pos::new(row, col);
                    arrows.get(&pos).copied().unwrap_or_else(|| {
                        char::from_digit(grid[pos], 10).unwrap_or('#')
                    })
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
