use crossword_core::Puzzle;

use crate::samples;

/// A read-only source of puzzles addressed by index.
///
/// Implementations must accept any index, wrapping it into range, so that a
/// caller can step through puzzles without knowing how many there are.
pub trait PuzzleProvider {
    /// Returns a fresh copy of the puzzle at `index` (modulo the puzzle count).
    fn puzzle(&self, index: usize) -> Puzzle;
}

impl<P> PuzzleProvider for &P
where
    P: PuzzleProvider + ?Sized,
{
    fn puzzle(&self, index: usize) -> Puzzle {
        (**self).puzzle(index)
    }
}

/// Errors returned when building a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    /// The catalog would contain no puzzles.
    #[display("a catalog needs at least one puzzle")]
    Empty,
}

/// A fixed, non-empty list of puzzles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Creates a catalog from the given puzzles.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if `puzzles` is empty.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { puzzles })
    }

    /// Creates the catalog of bundled sample puzzles.
    ///
    /// # Panics
    ///
    /// Panics if a bundled sample fails validation, which the crate tests rule out.
    #[must_use]
    pub fn samples() -> Self {
        let puzzles = samples::sample_puzzles().expect("bundled sample puzzles are valid");
        log::debug!("loaded {} sample puzzles", puzzles.len());
        Self { puzzles }
    }

    /// Returns the number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always `false`; a catalog is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Returns the puzzle titles in catalog order.
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.puzzles.iter().map(Puzzle::title)
    }
}

impl PuzzleProvider for Catalog {
    fn puzzle(&self, index: usize) -> Puzzle {
        self.puzzles[index % self.puzzles.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::{Clue, Direction, Position};

    use super::*;

    fn tiny(title: &str) -> Puzzle {
        Puzzle::from_pattern(
            title,
            &["AB"],
            vec![Clue::new(1, "Letters", Direction::Across, Position::new(0, 0), "AB")],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_index_wraps() {
        let catalog = Catalog::new(vec![tiny("first"), tiny("second")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.puzzle(0).title(), "first");
        assert_eq!(catalog.puzzle(1).title(), "second");
        assert_eq!(catalog.puzzle(2).title(), "first");
        assert_eq!(catalog.puzzle(usize::MAX).title(), "second");
        assert_eq!(catalog.titles().collect::<Vec<_>>(), ["first", "second"]);
    }

    #[test]
    fn test_puzzles_are_fresh_copies() {
        let catalog = Catalog::new(vec![tiny("only")]).unwrap();
        let mut puzzle = catalog.puzzle(0);
        puzzle.set_input(Position::new(0, 0), 'A').unwrap();
        assert!(catalog.puzzle(0).cell(Position::new(0, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_provider_by_reference() {
        fn first_title(provider: impl PuzzleProvider) -> String {
            provider.puzzle(0).title().to_owned()
        }
        let catalog = Catalog::samples();
        assert_eq!(first_title(&catalog), "Simple Puzzle");
    }
}
