//! Crossword game session management.
//!
//! A [`Session`] wraps a [`PuzzleProvider`] and the current [`SessionState`]:
//! the loaded puzzle, the selected cell and direction, the active clue, and
//! the completion and check flags. Presentation layers translate user input
//! into [`GameEvent`]s, pass them to [`Session::dispatch`], and render the
//! state that results.
//!
//! Events that make no sense in the current state (no puzzle loaded, a block
//! or out-of-range cell, no active clue) are ignored rather than reported.
//!
//! # Example
//!
//! ```
//! use crossword_catalog::Catalog;
//! use crossword_core::Position;
//! use crossword_game::{CheckResult, Session};
//!
//! let mut session = Session::with_puzzle(Catalog::samples(), 0);
//! assert_eq!(session.state().selected_cell(), Some(Position::new(0, 0)));
//! assert_eq!(session.state().selected_clue().unwrap().text(), "Feline pet");
//!
//! for letter in ['c', 'a', 't'] {
//!     session.input_letter(letter);
//! }
//! assert_eq!(session.state().selected_cell(), Some(Position::new(0, 2)));
//!
//! session.check_answers();
//! assert_eq!(session.state().check_result(), CheckResult::Incorrect);
//! ```
//!
//! [`PuzzleProvider`]: crossword_catalog::PuzzleProvider

pub mod event;
pub mod session;
pub mod state;

pub use self::{
    event::{GameEvent, MoveDirection},
    session::Session,
    state::{CheckResult, SessionState},
};
