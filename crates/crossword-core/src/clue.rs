//! Clue metadata and clue paths.

use std::iter::FusedIterator;

use crate::{Direction, Position};

/// The identity of a clue: its direction and starting cell.
///
/// Clue numbers are display labels and may repeat (an across and a down clue
/// starting at the same cell share a number), so lookups go through `ClueId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClueId {
    /// Fill direction.
    pub direction: Direction,
    /// First cell of the answer.
    pub start: Position,
}

/// A crossword clue.
///
/// The clue covers `len()` consecutive cells starting at `start()`, stepping
/// one column (across) or one row (down) at a time. Its length is the number
/// of characters in the answer.
///
/// # Examples
///
/// ```
/// use crossword_core::{Clue, Direction, Position};
///
/// let clue = Clue::new(3, "Fox, in Scotland", Direction::Down, Position::new(0, 2), "TOD");
/// let cells: Vec<_> = clue.cells().collect();
/// assert_eq!(
///     cells,
///     [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
/// );
/// assert!(clue.contains(Position::new(1, 2)));
/// assert!(!clue.contains(Position::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    number: u32,
    text: String,
    direction: Direction,
    start: Position,
    answer: String,
    len: usize,
}

impl Clue {
    /// Creates a clue.
    ///
    /// The clue is not checked against any grid here; [`Puzzle::new`] performs
    /// that validation.
    ///
    /// [`Puzzle::new`]: crate::Puzzle::new
    #[must_use]
    pub fn new(
        number: u32,
        text: impl Into<String>,
        direction: Direction,
        start: Position,
        answer: impl Into<String>,
    ) -> Self {
        let answer = answer.into();
        let len = answer.chars().count();
        Self {
            number,
            text: text.into(),
            direction,
            start,
            answer,
            len,
        }
    }

    /// Returns the display number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the clue prompt.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the fill direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the first cell of the answer.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the canonical answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the number of cells the clue covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the answer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the identity of this clue.
    #[must_use]
    pub fn id(&self) -> ClueId {
        ClueId {
            direction: self.direction,
            start: self.start,
        }
    }

    /// Returns an iterator over the positions on the clue's path, in fill order.
    #[must_use]
    pub fn cells(&self) -> ClueCells {
        ClueCells {
            start: self.start,
            direction: self.direction,
            front: 0,
            back: self.len,
        }
    }

    /// Returns `true` if `pos` lies on the clue's path.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        let (fixed, fixed_start, moving, moving_start) = match self.direction {
            Direction::Across => (pos.row(), self.start.row(), pos.col(), self.start.col()),
            Direction::Down => (pos.col(), self.start.col(), pos.row(), self.start.row()),
        };
        fixed == fixed_start && moving >= moving_start && moving - moving_start < self.len
    }
}

/// Iterator over the positions covered by a [`Clue`].
#[derive(Debug, Clone)]
pub struct ClueCells {
    start: Position,
    direction: Direction,
    front: usize,
    back: usize,
}

impl Iterator for ClueCells {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.start.offset(self.direction, self.front)?;
        self.front += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.saturating_sub(self.front);
        (len, Some(len))
    }
}

impl DoubleEndedIterator for ClueCells {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.start.offset(self.direction, self.back - 1)?;
        self.back -= 1;
        Some(pos)
    }
}

impl ExactSizeIterator for ClueCells {}

impl FusedIterator for ClueCells {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_across_path() {
        let clue = Clue::new(1, "Feline pet", Direction::Across, Position::new(2, 1), "CAT");
        assert_eq!(clue.len(), 3);
        assert!(!clue.is_empty());
        assert_eq!(
            clue.cells().collect::<Vec<_>>(),
            [Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)]
        );
        assert_eq!(
            clue.cells().rev().collect::<Vec<_>>(),
            [Position::new(2, 3), Position::new(2, 2), Position::new(2, 1)]
        );
        assert_eq!(clue.cells().len(), 3);
    }

    #[test]
    fn test_contains_matches_cells() {
        let clue = Clue::new(4, "Position", Direction::Down, Position::new(1, 3), "ANES");
        for row in 0..7 {
            for col in 0..6 {
                let pos = Position::new(row, col);
                assert_eq!(clue.contains(pos), clue.cells().any(|p| p == pos), "{pos}");
            }
        }
    }

    #[test]
    fn test_identity_ignores_number_and_text() {
        let a = Clue::new(1, "Feline pet", Direction::Across, Position::new(0, 0), "CAT");
        let b = Clue::new(7, "Mouser", Direction::Across, Position::new(0, 0), "CAT");
        let c = Clue::new(1, "Automobile", Direction::Down, Position::new(0, 0), "CAR");
        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_empty_answer_has_no_cells() {
        let clue = Clue::new(1, "Nothing", Direction::Across, Position::new(0, 0), "");
        assert!(clue.is_empty());
        assert_eq!(clue.cells().next(), None);
        assert!(!clue.contains(Position::new(0, 0)));
    }
}
