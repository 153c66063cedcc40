//! The puzzle aggregate.

use crate::{Cell, Clue, ClueId, Direction, Grid, InputError, Position, PuzzleError};

/// A crossword puzzle: a titled grid plus its clues.
///
/// Construction validates every clue against the grid, so a `Puzzle` always
/// satisfies these invariants:
///
/// - the grid is rectangular;
/// - every clue path lies inside the grid and covers no block;
/// - every clue answer is uppercase ASCII letters and matches the grid letters
///   along its path.
///
/// Player input is edited in place through the methods on this type.
/// Out-of-range lookups return `None` instead of failing.
///
/// # Example
///
/// ```
/// use crossword_core::{Clue, Direction, Grid, Position, Puzzle};
///
/// let grid = Grid::from_pattern(&["CAT", "A#O", "RED"]);
/// let clues = vec![
///     Clue::new(1, "Feline pet", Direction::Across, Position::new(0, 0), "CAT"),
///     Clue::new(6, "Primary color", Direction::Across, Position::new(2, 0), "RED"),
/// ];
/// let puzzle = Puzzle::new("Simple", grid, clues).unwrap();
///
/// assert_eq!((puzzle.rows(), puzzle.cols()), (3, 3));
/// assert!(puzzle.cell(Position::new(1, 1)).unwrap().is_black());
/// assert!(puzzle.cell(Position::new(3, 0)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    title: String,
    grid: Grid,
    clues: Vec<Clue>,
}

impl Puzzle {
    /// Creates a puzzle, validating every clue against the grid.
    ///
    /// # Errors
    ///
    /// Returns the first [`PuzzleError`] found, checking clues in order.
    pub fn new(
        title: impl Into<String>,
        grid: Grid,
        clues: Vec<Clue>,
    ) -> Result<Self, PuzzleError> {
        for clue in &clues {
            validate_clue(&grid, clue)?;
        }
        Ok(Self {
            title: title.into(),
            grid,
            clues,
        })
    }

    /// Builds the grid from authoring rows (see [`Grid::from_pattern`]) and
    /// creates the puzzle.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if any clue does not fit the grid.
    pub fn from_pattern<S>(
        title: impl Into<String>,
        pattern: &[S],
        clues: Vec<Clue>,
    ) -> Result<Self, PuzzleError>
    where
        S: AsRef<str>,
    {
        Self::new(title, Grid::from_pattern(pattern), clues)
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Returns all clues in authoring order.
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Returns the across clues ordered by number.
    #[must_use]
    pub fn across_clues(&self) -> Vec<&Clue> {
        self.clues_in(Direction::Across)
    }

    /// Returns the down clues ordered by number.
    #[must_use]
    pub fn down_clues(&self) -> Vec<&Clue> {
        self.clues_in(Direction::Down)
    }

    /// Returns the clues in `direction` ordered by number.
    ///
    /// Clues sharing a number keep their authoring order.
    #[must_use]
    pub fn clues_in(&self, direction: Direction) -> Vec<&Clue> {
        let mut clues: Vec<_> = self
            .clues
            .iter()
            .filter(|clue| clue.direction() == direction)
            .collect();
        clues.sort_by_key(|clue| clue.number());
        clues
    }

    /// Returns the clue with the given identity.
    #[must_use]
    pub fn clue(&self, id: ClueId) -> Option<&Clue> {
        self.clues.iter().find(|clue| clue.id() == id)
    }

    /// Returns the first clue (in authoring order) in `direction` whose path
    /// contains `pos`.
    #[must_use]
    pub fn clue_at(&self, pos: Position, direction: Direction) -> Option<&Clue> {
        self.clues
            .iter()
            .find(|clue| clue.direction() == direction && clue.contains(pos))
    }

    /// Returns the cell at `pos`, or `None` if it is outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.grid.get(pos)
    }

    /// Returns `true` if `pos` is inside the grid and not a block.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| !cell.is_black())
    }

    /// Returns the first letter cell in row-major order.
    #[must_use]
    pub fn first_open_cell(&self) -> Option<Position> {
        self.grid
            .iter()
            .find(|(_, cell)| !cell.is_black())
            .map(|(pos, _)| pos)
    }

    /// Returns the nearest letter cell after `pos` along `direction`.
    ///
    /// Blocks are skipped. The scan stays on the row (across) or column
    /// (down) of `pos` and returns `None` when it runs off the grid.
    #[must_use]
    pub fn next_open_cell(&self, pos: Position, direction: Direction) -> Option<Position> {
        let mut current = pos.next(direction)?;
        while self.grid.contains(current) {
            if self.is_open(current) {
                return Some(current);
            }
            current = current.next(direction)?;
        }
        None
    }

    /// Returns the nearest letter cell before `pos` along `direction`.
    ///
    /// Blocks are skipped. Returns `None` when the scan runs off the grid.
    #[must_use]
    pub fn prev_open_cell(&self, pos: Position, direction: Direction) -> Option<Position> {
        if !self.grid.contains(pos) {
            return None;
        }
        let mut current = pos.prev(direction)?;
        loop {
            if self.is_open(current) {
                return Some(current);
            }
            current = current.prev(direction)?;
        }
    }

    /// Returns `true` if every letter cell has input, correct or not.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grid
            .iter()
            .all(|(_, cell)| cell.is_black() || cell.input().is_some())
    }

    /// Returns `true` if every letter cell's input equals its answer.
    #[must_use]
    pub fn check_answers(&self) -> bool {
        self.grid
            .iter()
            .all(|(_, cell)| cell.is_black() || cell.is_correct())
    }

    /// Returns `true` if every cell on the clue's path has input.
    #[must_use]
    pub fn is_clue_complete(&self, clue: &Clue) -> bool {
        clue.cells()
            .all(|pos| self.cell(pos).is_some_and(|cell| cell.input().is_some()))
    }

    /// Returns the number of letter cells with input.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, cell)| !cell.is_black() && cell.input().is_some())
            .count()
    }

    /// Returns the number of letter cells.
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, cell)| !cell.is_black())
            .count()
    }

    /// Sets the input of the letter cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfBounds`] if `pos` is outside the grid and
    /// [`InputError::BlackCell`] if it is a block.
    pub fn set_input(&mut self, pos: Position, letter: char) -> Result<(), InputError> {
        let cell = self
            .grid
            .get_mut(pos)
            .ok_or(InputError::OutOfBounds(pos))?;
        if !cell.set_input(letter) {
            return Err(InputError::BlackCell(pos));
        }
        Ok(())
    }

    /// Removes the input of the letter cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfBounds`] if `pos` is outside the grid and
    /// [`InputError::BlackCell`] if it is a block.
    pub fn clear_input(&mut self, pos: Position) -> Result<(), InputError> {
        let cell = self
            .grid
            .get_mut(pos)
            .ok_or(InputError::OutOfBounds(pos))?;
        if cell.is_black() {
            return Err(InputError::BlackCell(pos));
        }
        cell.clear();
        Ok(())
    }

    /// Removes the input of every cell.
    pub fn clear_all(&mut self) {
        for cell in self.grid.cells_mut() {
            cell.clear();
        }
    }

    /// Fills every cell on the clue's path with its answer.
    ///
    /// Cells outside the path are untouched. Path positions outside the grid
    /// are skipped.
    pub fn reveal_answer(&mut self, clue: &Clue) {
        for pos in clue.cells() {
            if let Some(cell) = self.grid.get_mut(pos) {
                cell.reveal();
            }
        }
    }
}

fn validate_clue(grid: &Grid, clue: &Clue) -> Result<(), PuzzleError> {
    let id = clue.id();
    if clue.is_empty() {
        return Err(PuzzleError::EmptyClue { clue: id });
    }
    if !clue.answer().chars().all(|ch| ch.is_ascii_uppercase()) {
        return Err(PuzzleError::InvalidAnswer {
            clue: id,
            answer: clue.answer().to_owned(),
        });
    }
    for (offset, expected) in clue.answer().chars().enumerate() {
        let pos = clue
            .start()
            .offset(clue.direction(), offset)
            .unwrap_or(clue.start());
        if !grid.contains(pos) {
            return Err(PuzzleError::ClueOutOfBounds { clue: id, pos });
        }
        let Some(found) = grid[pos].answer() else {
            return Err(PuzzleError::ClueCrossesBlock { clue: id, pos });
        };
        if found != expected {
            return Err(PuzzleError::AnswerMismatch {
                clue: id,
                pos,
                expected,
                found,
            });
        }
    }
    Ok(())
}
