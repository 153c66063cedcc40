use crossword_core::{ClueId, Direction, Position};

/// An input event handled by a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Replace the session with the puzzle at this catalog index.
    LoadPuzzle(usize),
    /// Load the catalog entry after the current one.
    NewGame,
    /// Select a cell; selecting the selected cell again flips the direction.
    SelectCell(Position),
    /// Jump to the start of a clue.
    SelectClue(ClueId),
    /// Type a letter into the selected cell and advance.
    InputLetter(char),
    /// Erase the selected cell, or step back and erase the previous one.
    Backspace,
    /// Move the selection to the nearest letter cell in a screen direction.
    MoveSelection(MoveDirection),
    /// Flip the fill direction at the selected cell.
    ToggleDirection,
    /// Compare every cell with its answer.
    CheckAnswers,
    /// Fill the active clue with its answer.
    RevealCurrentAnswer,
    /// Erase every cell.
    ClearAll,
    /// Hide the completion dialog.
    DismissCompletionDialog,
}

/// Screen direction for arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl MoveDirection {
    /// Returns the fill direction along the same axis and whether the move is forward along it.
    #[must_use]
    pub fn axis(self) -> (Direction, bool) {
        match self {
            Self::Up => (Direction::Down, false),
            Self::Down => (Direction::Down, true),
            Self::Left => (Direction::Across, false),
            Self::Right => (Direction::Across, true),
        }
    }
}
