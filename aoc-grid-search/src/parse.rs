//! Puzzle text to grid loaders.
//!
//! Every non-blank line is one row; surrounding whitespace is ignored.
//! Errors report 1-based line and column numbers of the original text.

use crate::error::ParseError;
use crate::grid::Grid;

/// Parse rows of decimal digits into a cost grid.
pub fn parse_digit_grid(input: &str) -> Result<Grid<u32>, ParseError> {
    parse_cells(input, |ch| ch.to_digit(10))
}

/// Parse a grid of any cell type convertible from `char`.
pub fn parse_char_grid<T: TryFrom<char>>(input: &str) -> Result<Grid<T>, ParseError> {
    parse_cells(input, |ch| T::try_from(ch).ok())
}

fn parse_cells<T>(input: &str, cell: impl Fn(char) -> Option<T>) -> Result<Grid<T>, ParseError> {
    let rows = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let indent = line.chars().take_while(|ch| ch.is_whitespace()).count();
            line.trim()
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    cell(ch).ok_or(ParseError::InvalidCell {
                        line: idx + 1,
                        column: indent + col + 1,
                        ch,
                    })
                })
                .collect::<Result<Vec<T>, ParseError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::from_rows(rows)?)
}
