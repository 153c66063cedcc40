//! Bundled sample puzzles.
//!
//! Puzzles are authored as text rows (`#` for blocks) plus a clue table and
//! turned into validated [`Puzzle`]s on demand.

use crossword_core::{Clue, Direction, Position, Puzzle, PuzzleError};

use Direction::{Across, Down};

/// Authoring form of a clue: number, text, direction, start row, start column, answer.
type ClueSpec = (u32, &'static str, Direction, usize, usize, &'static str);

struct PuzzleSpec {
    title: &'static str,
    pattern: &'static [&'static str],
    clues: &'static [ClueSpec],
}

impl PuzzleSpec {
    fn build(&self) -> Result<Puzzle, PuzzleError> {
        let clues = self
            .clues
            .iter()
            .map(|&(number, text, direction, row, col, answer)| {
                Clue::new(number, text, direction, Position::new(row, col), answer)
            })
            .collect();
        Puzzle::from_pattern(self.title, self.pattern, clues)
    }
}

const SIMPLE: PuzzleSpec = PuzzleSpec {
    title: "Simple Puzzle",
    pattern: &["CAT", "A#O", "RED"],
    clues: &[
        (1, "Feline pet", Across, 0, 0, "CAT"),
        (6, "Primary color", Across, 2, 0, "RED"),
        (1, "Automobile", Down, 0, 0, "CAR"),
        (3, "Fox, in Scotland", Down, 0, 2, "TOD"),
    ],
};

const MEDIUM: PuzzleSpec = PuzzleSpec {
    title: "Medium Puzzle",
    pattern: &["HOPE", "A#A#", "TONE", "#W#X"],
    clues: &[
        (1, "Optimistic wish", Across, 0, 0, "HOPE"),
        (7, "Musical quality", Across, 2, 0, "TONE"),
        (1, "Head covering", Down, 0, 0, "HAT"),
        (3, "Frying vessel", Down, 0, 2, "PAN"),
        (8, "Cry of pain", Down, 2, 1, "OW"),
        (9, "Former partner", Down, 2, 3, "EX"),
    ],
};

const WORD_SQUARE: PuzzleSpec = PuzzleSpec {
    title: "Word Square",
    pattern: &["CARD", "AREA", "REAR", "DART"],
    clues: &[
        (1, "Greeting sent on a birthday", Across, 0, 0, "CARD"),
        (5, "Length times width", Across, 1, 0, "AREA"),
        (6, "Back end", Across, 2, 0, "REAR"),
        (7, "Pub game missile", Across, 3, 0, "DART"),
        (1, "Deck member", Down, 0, 0, "CARD"),
        (2, "Region", Down, 0, 1, "AREA"),
        (3, "Raise, as children", Down, 0, 2, "REAR"),
        (4, "Move swiftly", Down, 0, 3, "DART"),
    ],
};

const SAMPLES: [PuzzleSpec; 3] = [SIMPLE, MEDIUM, WORD_SQUARE];

/// Builds every bundled sample puzzle, in catalog order.
///
/// # Errors
///
/// Returns the first [`PuzzleError`] if a sample is malformed.
pub fn sample_puzzles() -> Result<Vec<Puzzle>, PuzzleError> {
    SAMPLES.iter().map(PuzzleSpec::build).collect()
}

#[cfg(test)]
mod tests {
    use crossword_core::Cell;

    use super::*;

    #[test]
    fn test_samples_are_valid() {
        let puzzles = sample_puzzles().unwrap();
        assert_eq!(puzzles.len(), SAMPLES.len());
        for puzzle in &puzzles {
            assert!(!puzzle.title().is_empty());
            assert!(puzzle.rows() > 0);
            assert!(!puzzle.across_clues().is_empty());
            assert!(!puzzle.down_clues().is_empty());
        }
    }

    #[test]
    fn test_sample_clue_answers_match_grid() {
        for puzzle in sample_puzzles().unwrap() {
            for clue in puzzle.clues() {
                let letters: String = clue
                    .cells()
                    .filter_map(|pos| puzzle.cell(pos).and_then(Cell::answer))
                    .collect();
                assert_eq!(letters, clue.answer(), "{}: {}", puzzle.title(), clue.text());
            }
        }
    }

    #[test]
    fn test_sample_clue_numbers_match_grid_numbers() {
        for puzzle in sample_puzzles().unwrap() {
            for clue in puzzle.clues() {
                let number = puzzle.cell(clue.start()).and_then(Cell::number);
                assert_eq!(number, Some(clue.number()), "{}: {}", puzzle.title(), clue.text());
            }
        }
    }

    #[test]
    fn test_sample_patterns_round_trip() {
        for spec in &SAMPLES {
            let puzzle = spec.build().unwrap();
            let rendered = puzzle.grid().to_string();
            assert_eq!(rendered.lines().collect::<Vec<_>>(), spec.pattern);
        }
    }
}
