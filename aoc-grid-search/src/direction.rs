//! Axis-aligned headings on a row-major grid.

/// One of the four axis-aligned unit moves. Rows grow southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The opposite heading.
    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Heading after a 90 degree counter-clockwise turn.
    pub const fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// Heading after a 90 degree clockwise turn.
    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// `(row, col)` offset of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    /// Whether the heading moves along a column.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Arrow glyph used when drawing routes.
    pub const fn arrow(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => 'v',
            Self::West => '<',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_are_perpendicular_and_invertible() {
        for dir in Direction::ALL {
            assert_ne!(dir.turn_left().is_vertical(), dir.is_vertical());
            assert_ne!(dir.turn_right().is_vertical(), dir.is_vertical());
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.turn_right().turn_right(), dir.reverse());
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }

    #[test]
    fn test_delta_cancels_with_reverse() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let (rr, rc) = dir.reverse().delta();
            assert_eq!((dr + rr, dc + rc), (0, 0));
        }
    }
}
