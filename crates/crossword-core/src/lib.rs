//! Core data structures for crossword applications.
//!
//! This crate provides the puzzle data model used by the catalog and the game
//! session: grid geometry, per-cell player input, clue metadata, and the puzzle
//! aggregate that ties them together.
//!
//! # Overview
//!
//! 1. **Geometry** - Where things are
//!    - [`position`]: Cell coordinates with directional stepping
//!    - [`direction`]: The two fill directions, across and down
//!
//! 2. **Model** - What the puzzle is made of
//!    - [`cell`]: A single grid cell (block or letter) with its player input
//!    - [`clue`]: Clue metadata and the path of cells it covers
//!    - [`grid`]: Rectangular cell storage and the authoring-pattern builder
//!
//! 3. **Aggregate** - Puzzle-wide operations
//!    - [`puzzle`]: Validation, completion and correctness checks, bulk
//!      clear/reveal, and cursor scans that skip black cells
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Clue, Direction, Grid, Position, Puzzle};
//!
//! let grid = Grid::from_pattern(&["CAT", "A#O", "RED"]);
//! let clues = vec![
//!     Clue::new(1, "Feline pet", Direction::Across, Position::new(0, 0), "CAT"),
//!     Clue::new(1, "Automobile", Direction::Down, Position::new(0, 0), "CAR"),
//! ];
//! let mut puzzle = Puzzle::new("Simple", grid, clues).unwrap();
//!
//! assert!(!puzzle.is_complete());
//! let clue = puzzle.clues()[0].clone();
//! puzzle.reveal_answer(&clue);
//! assert_eq!(puzzle.filled_count(), 3);
//! ```

pub mod cell;
pub mod clue;
pub mod direction;
pub mod error;
pub mod grid;
pub mod position;
pub mod puzzle;

pub use self::{
    cell::Cell,
    clue::{Clue, ClueId},
    direction::Direction,
    error::{InputError, PuzzleError},
    grid::Grid,
    position::Position,
    puzzle::Puzzle,
};
