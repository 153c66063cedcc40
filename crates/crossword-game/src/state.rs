use crossword_catalog::PuzzleProvider;
use crossword_core::{Clue, ClueId, Direction, Position, Puzzle};

use crate::{GameEvent, MoveDirection};

/// Outcome of the most recent answer check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CheckResult {
    /// No check is being shown.
    #[default]
    None,
    /// Every letter cell matched its answer.
    Correct,
    /// At least one letter cell was empty or wrong.
    Incorrect,
}

/// Everything the presentation layer needs to render a game.
///
/// A state is a plain value; applying an event produces a new state (see
/// [`SessionState::next`]).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    puzzle: Option<Puzzle>,
    puzzle_index: usize,
    selected_cell: Option<Position>,
    selected_direction: Direction,
    selected_clue: Option<Clue>,
    is_puzzle_complete: bool,
    show_completion_dialog: bool,
    check_result: CheckResult,
}

impl SessionState {
    fn loaded(puzzle: Puzzle, index: usize) -> Self {
        let selected_cell = puzzle.first_open_cell();
        let mut state = Self {
            puzzle: Some(puzzle),
            puzzle_index: index,
            selected_cell,
            ..Self::default()
        };
        state.refresh_selected_clue();
        state
    }

    /// Returns the loaded puzzle, if any.
    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Returns the catalog index the current puzzle was loaded from.
    #[must_use]
    pub fn puzzle_index(&self) -> usize {
        self.puzzle_index
    }

    /// Returns the selected cell. Always a letter cell of the loaded puzzle.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Position> {
        self.selected_cell
    }

    /// Returns the direction letters are entered in.
    #[must_use]
    pub fn selected_direction(&self) -> Direction {
        self.selected_direction
    }

    /// Returns the clue through the selected cell in the selected direction.
    #[must_use]
    pub fn selected_clue(&self) -> Option<&Clue> {
        self.selected_clue.as_ref()
    }

    /// Returns `true` once every letter cell holds some letter.
    #[must_use]
    pub fn is_puzzle_complete(&self) -> bool {
        self.is_puzzle_complete
    }

    /// Returns `true` while the congratulations dialog should be shown.
    #[must_use]
    pub fn show_completion_dialog(&self) -> bool {
        self.show_completion_dialog
    }

    /// Returns the outcome of the last check.
    #[must_use]
    pub fn check_result(&self) -> CheckResult {
        self.check_result
    }

    /// Returns `true` if `pos` is the selected cell.
    #[must_use]
    pub fn is_selected(&self, pos: Position) -> bool {
        self.selected_cell == Some(pos)
    }

    /// Returns `true` if `pos` belongs to the selected clue.
    #[must_use]
    pub fn is_in_selected_clue(&self, pos: Position) -> bool {
        self.selected_clue
            .as_ref()
            .is_some_and(|clue| clue.contains(pos))
    }

    /// Returns `true` if `clue` is the selected clue.
    #[must_use]
    pub fn is_selected_clue(&self, clue: &Clue) -> bool {
        self.selected_clue
            .as_ref()
            .is_some_and(|selected| selected.id() == clue.id())
    }

    /// Returns the state that results from applying `event`.
    ///
    /// `provider` is only consulted by [`GameEvent::LoadPuzzle`] and [`GameEvent::NewGame`].
    #[must_use]
    pub fn next<P>(&self, provider: &P, event: GameEvent) -> Self
    where
        P: PuzzleProvider + ?Sized,
    {
        let mut next = self.clone();
        next.apply(provider, event);
        next
    }

    pub(crate) fn apply<P>(&mut self, provider: &P, event: GameEvent)
    where
        P: PuzzleProvider + ?Sized,
    {
        match event {
            GameEvent::LoadPuzzle(index) => self.load_puzzle(provider, index),
            GameEvent::NewGame => {
                let index = if self.puzzle.is_some() {
                    self.puzzle_index.wrapping_add(1)
                } else {
                    0
                };
                self.load_puzzle(provider, index);
            }
            GameEvent::SelectCell(pos) => self.select_cell(pos),
            GameEvent::SelectClue(id) => self.select_clue(id),
            GameEvent::InputLetter(letter) => self.input_letter(letter),
            GameEvent::Backspace => self.backspace(),
            GameEvent::MoveSelection(dir) => self.move_selection(dir),
            GameEvent::ToggleDirection => self.toggle_direction(),
            GameEvent::CheckAnswers => self.check_answers(),
            GameEvent::RevealCurrentAnswer => self.reveal_current_answer(),
            GameEvent::ClearAll => self.clear_all(),
            GameEvent::DismissCompletionDialog => self.show_completion_dialog = false,
        }
    }

    fn load_puzzle<P>(&mut self, provider: &P, index: usize)
    where
        P: PuzzleProvider + ?Sized,
    {
        let puzzle = provider.puzzle(index);
        log::info!(
            "loaded puzzle {index}: {} ({}x{})",
            puzzle.title(),
            puzzle.rows(),
            puzzle.cols()
        );
        *self = Self::loaded(puzzle, index);
    }

    fn select_cell(&mut self, pos: Position) {
        let Some(puzzle) = &self.puzzle else {
            log::debug!("ignoring cell selection without a puzzle");
            return;
        };
        if !puzzle.is_open(pos) {
            log::debug!("ignoring selection of non-letter cell {pos}");
            return;
        }
        if self.selected_cell == Some(pos) {
            self.selected_direction.toggle();
        }
        self.move_cursor(pos);
        self.check_result = CheckResult::None;
    }

    fn select_clue(&mut self, id: ClueId) {
        let Some(clue) = self.puzzle.as_ref().and_then(|puzzle| puzzle.clue(id)).cloned() else {
            log::debug!("ignoring selection of unknown clue {id:?}");
            return;
        };
        self.selected_cell = Some(clue.start());
        self.selected_direction = clue.direction();
        self.selected_clue = Some(clue);
        self.check_result = CheckResult::None;
    }

    fn input_letter(&mut self, letter: char) {
        if !letter.is_ascii_alphabetic() {
            log::debug!("ignoring non-letter input {letter:?}");
            return;
        }
        let (Some(puzzle), Some(pos)) = (self.puzzle.as_mut(), self.selected_cell) else {
            return;
        };
        if let Err(err) = puzzle.set_input(pos, letter.to_ascii_uppercase()) {
            log::debug!("ignoring input: {err}");
            return;
        }
        let next = puzzle.next_open_cell(pos, self.selected_direction);
        if let Some(next) = next {
            self.move_cursor(next);
        }
        self.update_completion();
    }

    fn backspace(&mut self) {
        let (Some(puzzle), Some(pos)) = (self.puzzle.as_mut(), self.selected_cell) else {
            return;
        };
        let Some(cell) = puzzle.cell(pos).filter(|cell| !cell.is_black()) else {
            return;
        };
        if cell.input().is_some() {
            let _ = puzzle.clear_input(pos);
        } else if let Some(prev) = puzzle.prev_open_cell(pos, self.selected_direction) {
            let _ = puzzle.clear_input(prev);
            self.move_cursor(prev);
        }
        self.is_puzzle_complete = false;
        self.show_completion_dialog = false;
    }

    fn move_selection(&mut self, dir: MoveDirection) {
        let (Some(puzzle), Some(pos)) = (&self.puzzle, self.selected_cell) else {
            return;
        };
        let (direction, forward) = dir.axis();
        let target = if forward {
            puzzle.next_open_cell(pos, direction)
        } else {
            puzzle.prev_open_cell(pos, direction)
        };
        let Some(target) = target else {
            return;
        };
        self.selected_direction = direction;
        self.move_cursor(target);
        self.check_result = CheckResult::None;
    }

    fn toggle_direction(&mut self) {
        if self.puzzle.is_none() || self.selected_cell.is_none() {
            return;
        }
        self.selected_direction.toggle();
        self.refresh_selected_clue();
        self.check_result = CheckResult::None;
    }

    fn check_answers(&mut self) {
        let Some(puzzle) = &self.puzzle else {
            return;
        };
        self.check_result = if puzzle.check_answers() {
            CheckResult::Correct
        } else {
            CheckResult::Incorrect
        };
        log::debug!("checked answers: {:?}", self.check_result);
    }

    fn reveal_current_answer(&mut self) {
        let (Some(puzzle), Some(clue)) = (self.puzzle.as_mut(), &self.selected_clue) else {
            return;
        };
        puzzle.reveal_answer(clue);
        self.check_result = CheckResult::None;
        self.update_completion();
    }

    fn clear_all(&mut self) {
        let Some(puzzle) = self.puzzle.as_mut() else {
            return;
        };
        puzzle.clear_all();
        self.is_puzzle_complete = false;
        self.show_completion_dialog = false;
        self.check_result = CheckResult::None;
    }

    fn move_cursor(&mut self, pos: Position) {
        log::trace!("cursor {pos} {}", self.selected_direction);
        self.selected_cell = Some(pos);
        self.refresh_selected_clue();
    }

    fn refresh_selected_clue(&mut self) {
        self.selected_clue = match (&self.puzzle, self.selected_cell) {
            (Some(puzzle), Some(pos)) => puzzle.clue_at(pos, self.selected_direction).cloned(),
            _ => None,
        };
    }

    fn update_completion(&mut self) {
        if let Some(puzzle) = &self.puzzle
            && puzzle.is_complete()
        {
            self.is_puzzle_complete = true;
            self.show_completion_dialog = puzzle.check_answers();
            log::info!(
                "puzzle complete ({})",
                if self.show_completion_dialog {
                    "all correct"
                } else {
                    "with errors"
                }
            );
        }
    }
}
