use std::sync::Arc;

use crossword_catalog::PuzzleProvider;
use crossword_core::{Clue, Position};

use crate::{GameEvent, MoveDirection, SessionState};

/// A game session: a puzzle source plus the current [`SessionState`].
///
/// Each event replaces the published state. Snapshots taken with
/// [`Session::snapshot`] are never modified by later events.
#[derive(Debug, Clone)]
pub struct Session<P> {
    provider: P,
    state: Arc<SessionState>,
}

impl<P> Session<P>
where
    P: PuzzleProvider,
{
    /// Creates a session with no puzzle loaded.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: Arc::new(SessionState::default()),
        }
    }

    /// Creates a session and loads the puzzle at `index`.
    #[must_use]
    pub fn with_puzzle(provider: P, index: usize) -> Self {
        let mut session = Self::new(provider);
        session.load_puzzle(index);
        session
    }

    /// Returns the puzzle source.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns a shared handle to the current state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SessionState> {
        Arc::clone(&self.state)
    }

    /// Applies an event to the session.
    pub fn dispatch(&mut self, event: GameEvent) {
        log::debug!("event: {event:?}");
        Arc::make_mut(&mut self.state).apply(&self.provider, event);
    }

    /// Loads the puzzle at `index`, wrapping around the catalog.
    pub fn load_puzzle(&mut self, index: usize) {
        self.dispatch(GameEvent::LoadPuzzle(index));
    }

    /// Loads the puzzle after the current one.
    pub fn new_game(&mut self) {
        self.dispatch(GameEvent::NewGame);
    }

    /// Selects a cell, toggling direction if it is already selected.
    pub fn select_cell(&mut self, pos: Position) {
        self.dispatch(GameEvent::SelectCell(pos));
    }

    /// Jumps to the start of `clue`.
    pub fn select_clue(&mut self, clue: &Clue) {
        self.dispatch(GameEvent::SelectClue(clue.id()));
    }

    /// Types `letter` into the selected cell.
    pub fn input_letter(&mut self, letter: char) {
        self.dispatch(GameEvent::InputLetter(letter));
    }

    /// Erases backwards from the selected cell.
    pub fn backspace(&mut self) {
        self.dispatch(GameEvent::Backspace);
    }

    /// Moves the selection with an arrow key.
    pub fn move_selection(&mut self, dir: MoveDirection) {
        self.dispatch(GameEvent::MoveSelection(dir));
    }

    /// Flips the fill direction.
    pub fn toggle_direction(&mut self) {
        self.dispatch(GameEvent::ToggleDirection);
    }

    /// Checks every cell against its answer.
    pub fn check_answers(&mut self) {
        self.dispatch(GameEvent::CheckAnswers);
    }

    /// Reveals the answer of the selected clue.
    pub fn reveal_current_answer(&mut self) {
        self.dispatch(GameEvent::RevealCurrentAnswer);
    }

    /// Erases every cell.
    pub fn clear_all(&mut self) {
        self.dispatch(GameEvent::ClearAll);
    }

    /// Hides the completion dialog.
    pub fn dismiss_completion_dialog(&mut self) {
        self.dispatch(GameEvent::DismissCompletionDialog);
    }
}
