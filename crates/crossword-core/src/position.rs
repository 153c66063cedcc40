//! Grid position representation.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate on a crossword grid.
///
/// Positions are zero-based and ordered row-major (by row, then by column),
/// which is also the scan order used for numbering and for finding the first
/// playable cell.
///
/// A `Position` carries no grid bounds; stepping past the right or bottom edge
/// is detected by the [`Puzzle`](crate::Puzzle) that owns the grid.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.next(Direction::Across), Some(Position::new(2, 4)));
/// assert_eq!(pos.prev(Direction::Down), Some(Position::new(1, 3)));
/// assert_eq!(Position::new(0, 0).prev(Direction::Across), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position one step forward in `direction`.
    ///
    /// Returns `None` only on `usize` overflow; grid bounds are not checked.
    #[must_use]
    pub fn next(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => Some(Self::new(self.row, self.col.checked_add(1)?)),
            Direction::Down => Some(Self::new(self.row.checked_add(1)?, self.col)),
        }
    }

    /// Returns the position one step backward in `direction`.
    ///
    /// Returns `None` when already on the first row (down) or first column (across).
    #[must_use]
    pub fn prev(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => Some(Self::new(self.row, self.col.checked_sub(1)?)),
            Direction::Down => Some(Self::new(self.row.checked_sub(1)?, self.col)),
        }
    }

    /// Returns the position `offset` steps forward in `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction, offset: usize) -> Option<Self> {
        match direction {
            Direction::Across => Some(Self::new(self.row, self.col.checked_add(offset)?)),
            Direction::Down => Some(Self::new(self.row.checked_add(offset)?, self.col)),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepping() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.next(Direction::Across), Some(Position::new(1, 2)));
        assert_eq!(pos.next(Direction::Down), Some(Position::new(2, 1)));
        assert_eq!(pos.prev(Direction::Across), Some(Position::new(1, 0)));
        assert_eq!(pos.prev(Direction::Down), Some(Position::new(0, 1)));

        assert_eq!(Position::new(0, 5).prev(Direction::Down), None);
        assert_eq!(Position::new(5, 0).prev(Direction::Across), None);
        assert_eq!(Position::new(0, usize::MAX).next(Direction::Across), None);
    }

    #[test]
    fn test_offset() {
        let pos = Position::new(2, 0);
        assert_eq!(pos.offset(Direction::Across, 0), Some(pos));
        assert_eq!(pos.offset(Direction::Across, 3), Some(Position::new(2, 3)));
        assert_eq!(pos.offset(Direction::Down, 3), Some(Position::new(5, 0)));
    }

    #[test]
    fn test_row_major_ordering() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            [Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]
        );
        assert_eq!(Position::from((3, 4)).to_string(), "(3, 4)");
    }
}
