//! Puzzle catalogs for the crossword game.
//!
//! The game session does not know where puzzles come from; it asks a
//! [`PuzzleProvider`] for a puzzle by index. [`Catalog`] is the in-memory
//! provider used by the application, and [`Catalog::samples`] holds the
//! bundled sample puzzles.
//!
//! # Examples
//!
//! ```
//! use crossword_catalog::{Catalog, PuzzleProvider};
//!
//! let catalog = Catalog::samples();
//! let first = catalog.puzzle(0);
//! // Indices wrap around the catalog.
//! assert_eq!(catalog.puzzle(catalog.len()), first);
//! ```

pub mod catalog;
pub mod samples;

pub use self::catalog::{Catalog, CatalogError, PuzzleProvider};
