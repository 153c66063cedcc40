//! Crossword cell state.

/// A single grid cell.
///
/// A cell is either a block (no answer, never numbered, never editable) or a
/// letter cell holding its answer, an optional clue-start number, and the
/// player's current input.
///
/// # Examples
///
/// ```
/// use crossword_core::Cell;
///
/// let block = Cell::block();
/// assert!(block.is_black());
/// assert!(!block.is_empty());
///
/// let cell = Cell::letter('C', Some(1));
/// assert!(cell.is_empty());
/// assert!(!cell.is_correct());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    answer: Option<char>,
    number: Option<u32>,
    input: Option<char>,
}

impl Cell {
    /// Creates a block cell.
    #[must_use]
    pub const fn block() -> Self {
        Self {
            answer: None,
            number: None,
            input: None,
        }
    }

    /// Creates an empty letter cell with the given answer and clue-start number.
    #[must_use]
    pub const fn letter(answer: char, number: Option<u32>) -> Self {
        Self {
            answer: Some(answer),
            number,
            input: None,
        }
    }

    /// Returns the answer letter, or `None` for a block.
    #[must_use]
    pub const fn answer(&self) -> Option<char> {
        self.answer
    }

    /// Returns the clue-start number shown in the corner of the cell.
    #[must_use]
    pub const fn number(&self) -> Option<u32> {
        self.number
    }

    /// Returns the player's input.
    #[must_use]
    pub const fn input(&self) -> Option<char> {
        self.input
    }

    /// Returns `true` if this cell is a block.
    #[must_use]
    pub const fn is_black(&self) -> bool {
        self.answer.is_none()
    }

    /// Returns `true` if this is a letter cell without input.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.is_black() && self.input.is_none()
    }

    /// Returns `true` if this is a letter cell whose input matches the answer.
    ///
    /// The comparison is case-sensitive.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        !self.is_black() && self.input == self.answer
    }

    /// Sets the player's input. Blocks ignore input and return `false`.
    pub(crate) fn set_input(&mut self, letter: char) -> bool {
        if self.is_black() {
            return false;
        }
        self.input = Some(letter);
        true
    }

    /// Removes the player's input.
    pub(crate) fn clear(&mut self) {
        self.input = None;
    }

    /// Copies the answer into the input. Blocks are left untouched.
    pub(crate) fn reveal(&mut self) {
        self.input = self.answer;
    }
}
