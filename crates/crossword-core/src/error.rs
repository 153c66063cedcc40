//! Error types for puzzle construction and cell edits.

use crate::{ClueId, Position};

/// Authoring errors detected when a puzzle is constructed.
///
/// These can only come from malformed puzzle data; a puzzle that was built
/// successfully never produces them during play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A grid row has a different number of cells than the first row.
    #[display("grid row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        /// The offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// A clue has an empty answer.
    #[display("clue {clue:?} has an empty answer")]
    EmptyClue {
        /// The clue.
        clue: ClueId,
    },
    /// A clue's path leaves the grid.
    #[display("clue {clue:?} runs off the grid at {pos}")]
    ClueOutOfBounds {
        /// The clue.
        clue: ClueId,
        /// First position outside the grid.
        pos: Position,
    },
    /// A clue's path covers a block.
    #[display("clue {clue:?} crosses a block at {pos}")]
    ClueCrossesBlock {
        /// The clue.
        clue: ClueId,
        /// The block position.
        pos: Position,
    },
    /// A clue's answer contains something other than uppercase ASCII letters.
    #[display("clue {clue:?} has invalid answer {answer:?}")]
    InvalidAnswer {
        /// The clue.
        clue: ClueId,
        /// The rejected answer.
        answer: String,
    },
    /// A clue's answer letter differs from the grid letter it covers.
    #[display("clue {clue:?} expects {expected:?} at {pos}, grid has {found:?}")]
    AnswerMismatch {
        /// The clue.
        clue: ClueId,
        /// The position of the mismatch.
        pos: Position,
        /// The clue's letter.
        expected: char,
        /// The grid's letter.
        found: char,
    },
}

/// Reasons a single-cell edit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The position is outside the grid.
    #[display("position {_0} is outside the grid")]
    OutOfBounds(#[error(not(source))] Position),
    /// The position is a block.
    #[display("position {_0} is a block")]
    BlackCell(#[error(not(source))] Position),
}
