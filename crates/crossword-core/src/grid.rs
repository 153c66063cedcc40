//! Rectangular cell storage and the authoring-pattern builder.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
};

use crate::{Cell, Position, PuzzleError};

/// Character marking a block in the authoring pattern.
pub const BLOCK: char = '#';

/// A rectangular grid of [`Cell`]s stored in row-major order.
///
/// # Examples
///
/// ```
/// use crossword_core::{Grid, Position};
///
/// let grid = Grid::from_pattern(&["CAT", "A#O", "RED"]);
/// assert_eq!((grid.rows(), grid.cols()), (3, 3));
/// assert!(grid[Position::new(1, 1)].is_black());
/// assert_eq!(grid[Position::new(2, 0)].number(), Some(6));
/// assert_eq!(grid.to_string(), "CAT\nA#O\nRED\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from authoring rows.
    ///
    /// `#` marks a block and any other character is the cell's answer letter
    /// (stored uppercased). The grid is `rows × longest row`; positions past
    /// the end of a shorter row are blocks.
    ///
    /// A letter cell is numbered if it starts an across run (first column or
    /// block to its left) or a down run (first row or block above it). Numbers
    /// start at 1 and increase in row-major scan order.
    #[must_use]
    pub fn from_pattern<S>(pattern: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let letters: Vec<Vec<char>> = pattern
            .iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        let rows = letters.len();
        let cols = letters.iter().map(Vec::len).max().unwrap_or(0);

        let letter_at = |row: usize, col: usize| {
            letters
                .get(row)
                .and_then(|r| r.get(col))
                .copied()
                .filter(|&ch| ch != BLOCK)
        };

        let mut next_number = 1;
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let Some(letter) = letter_at(row, col) else {
                    cells.push(Cell::block());
                    continue;
                };
                let starts_across = col == 0 || letter_at(row, col - 1).is_none();
                let starts_down = row == 0 || letter_at(row - 1, col).is_none();
                let number = (starts_across || starts_down).then(|| {
                    let number = next_number;
                    next_number += 1;
                    number
                });
                cells.push(Cell::letter(letter.to_ascii_uppercase(), number));
            }
        }

        Self { rows, cols, cells }
    }

    /// Builds a grid from explicit rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NotRectangular`] if any row length differs from
    /// the first row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, PuzzleError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(PuzzleError::NotRectangular {
                row,
                expected: cols,
                found,
            });
        }
        let row_count = rows.len();
        Ok(Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `pos` is inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Returns the cell at `pos`, or `None` if it is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index_of(pos).map(|i| &mut self.cells[i])
    }

    /// Returns an iterator over every position and its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Position::new(i / self.cols, i % self.cols), cell))
    }

    /// Returns an iterator over the grid rows as cell slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(|row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row() * self.cols + pos.col())
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!(
                "position {pos} is outside a {}x{} grid",
                self.rows, self.cols
            ),
        }
    }
}

/// Renders the grid back into its authoring pattern, one line per row.
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for cell in row {
                f.write_char(cell.answer().unwrap_or(BLOCK))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn numbers(grid: &Grid) -> Vec<Option<u32>> {
        grid.iter().map(|(_, cell)| cell.number()).collect()
    }

    #[test]
    fn test_simple_pattern_numbering() {
        let grid = Grid::from_pattern(&["CAT", "A#O", "RED"]);
        assert_eq!(
            numbers(&grid),
            [
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                None,
                Some(5),
                Some(6),
                Some(7),
                None,
            ]
        );
    }

    #[test]
    fn test_short_rows_are_padded_with_blocks() {
        let grid = Grid::from_pattern(&["AB", "C", "DEF"]);
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert!(grid[Position::new(0, 2)].is_black());
        assert!(grid[Position::new(1, 1)].is_black());
        assert!(grid[Position::new(1, 2)].is_black());
        // Both neighbours above (1, 1) and (1, 2) are padding, so the cells below start down runs.
        assert_eq!(grid[Position::new(2, 1)].number(), Some(5));
        assert_eq!(grid[Position::new(2, 2)].number(), Some(6));
        assert_eq!(grid.to_string(), "AB#\nC##\nDEF\n");
    }

    #[test]
    fn test_letters_are_uppercased() {
        let grid = Grid::from_pattern(&["ab"]);
        assert_eq!(grid[Position::new(0, 1)].answer(), Some('B'));
    }

    #[test]
    fn test_empty_pattern() {
        let grid = Grid::from_pattern::<&str>(&[]);
        assert_eq!((grid.rows(), grid.cols()), (0, 0));
        assert_eq!(grid.iter().count(), 0);
        assert_eq!(grid.get(Position::new(0, 0)), None);
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::from_pattern(&["AB", "CD"]);
        assert!(grid.get(Position::new(1, 1)).is_some());
        assert!(grid.get(Position::new(2, 0)).is_none());
        assert!(grid.get(Position::new(0, 2)).is_none());
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![
            vec![Cell::letter('A', Some(1)), Cell::letter('B', Some(2))],
            vec![Cell::block()],
        ];
        assert_eq!(
            Grid::from_rows(rows),
            Err(PuzzleError::NotRectangular {
                row: 1,
                expected: 2,
                found: 1,
            })
        );

        let rows = vec![vec![Cell::letter('A', Some(1))], vec![Cell::block()]];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 1));
    }

    fn pattern_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Z#]{0,7}", 0..7)
    }

    proptest! {
        #[test]
        fn prop_grid_is_rectangular(pattern in pattern_strategy()) {
            let grid = Grid::from_pattern(&pattern);
            let cols = pattern.iter().map(|row| row.chars().count()).max().unwrap_or(0);
            prop_assert_eq!(grid.rows(), pattern.len());
            prop_assert_eq!(grid.cols(), cols);
            for row in grid.row_slices() {
                prop_assert_eq!(row.len(), cols);
            }
        }

        #[test]
        fn prop_display_round_trips(pattern in pattern_strategy()) {
            let grid = Grid::from_pattern(&pattern);
            let rendered = grid.to_string();
            let lines: Vec<&str> = rendered.lines().collect();
            prop_assert_eq!(Grid::from_pattern(&lines), grid);
        }

        #[test]
        fn prop_numbers_follow_run_starts(pattern in pattern_strategy()) {
            let grid = Grid::from_pattern(&pattern);
            let is_letter = |row: usize, col: usize| {
                grid.get(Position::new(row, col)).is_some_and(|cell| !cell.is_black())
            };
            let mut expected = 1;
            for (pos, cell) in grid.iter() {
                if cell.is_black() {
                    prop_assert_eq!(cell.number(), None);
                    continue;
                }
                let (row, col) = (pos.row(), pos.col());
                let starts = col == 0 || !is_letter(row, col - 1) || row == 0 || !is_letter(row - 1, col);
                if starts {
                    prop_assert_eq!(cell.number(), Some(expected));
                    expected += 1;
                } else {
                    prop_assert_eq!(cell.number(), None);
                }
            }
        }
    }
}
