//! Immutable rectangular grids addressed by `(row, col)`.

use std::fmt;
use std::ops::Index;

use crate::direction::Direction;
use crate::error::GridError;

/// A cell coordinate. Row 0 is the top row, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring coordinate one step towards `dir`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are not checked here; use [`Grid::step`] for that.
    pub fn offset(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Heading of a single step from `self` to an adjacent `to`.
    pub fn heading_to(self, to: Pos) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.offset(dir) == Some(to))
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular, row-major matrix of cells.
///
/// Construction validates the shape once; afterwards every row has exactly
/// [`Grid::cols`] cells and the grid holds at least one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from rows of cells.
    ///
    /// Fails with [`GridError::Empty`] when there are no cells and with
    /// [`GridError::Jagged`] when rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::Jagged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Build a `rows x cols` grid by evaluating `cell` at every position.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut cell: impl FnMut(Pos) -> T,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Pos::new(row, col)))
            .map(&mut cell)
            .collect();
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.in_bounds(pos.row, pos.col)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[self.index_of(pos)])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        if self.contains(pos) {
            let idx = self.index_of(pos);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// The in-bounds neighbour of `pos` towards `dir`, if any. No wraparound.
    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        pos.offset(dir).filter(|&next| self.contains(next))
    }

    /// The last cell of the last row.
    pub fn bottom_right(&self) -> Pos {
        Pos::new(self.rows - 1, self.cols - 1)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }

    /// Every `(position, cell)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().zip(self.cells.iter())
    }

    /// A grid of the same shape with `f` applied to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl Grid<u32> {
    /// Cost of entering the cell at `(row, col)`.
    pub fn cost_at(&self, row: usize, col: usize) -> Result<u32, GridError> {
        self.get(Pos::new(row, col))
            .copied()
            .ok_or(GridError::OutOfBounds { row, col })
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid<u32> {
    type Error = GridError;

    /// Validates signed costs: every cell must lie in `0..=u32::MAX`.
    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(col, value)| {
                        if value < 0 {
                            Err(GridError::NegativeCost { row, col, value })
                        } else {
                            u32::try_from(value)
                                .map_err(|_| GridError::CostOverflow { row, col, value })
                        }
                    })
                    .collect::<Result<Vec<u32>, GridError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Pos) -> &T {
        assert!(self.contains(pos), "position {pos} outside grid");
        &self.cells[self.index_of(pos)]
    }
}
