//! Fill directions.

/// One of the two directions a crossword answer is written in.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Direction {
    /// Left to right along a row.
    #[default]
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_core::Direction;
    ///
    /// assert_eq!(Direction::Across.toggled(), Direction::Down);
    /// assert_eq!(Direction::Down.toggled(), Direction::Across);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Flips the direction in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_display() {
        let mut direction = Direction::default();
        assert!(direction.is_across());

        direction.toggle();
        assert!(direction.is_down());
        direction.toggle();
        assert_eq!(direction, Direction::Across);

        assert_eq!(Direction::Across.to_string(), "Across");
        assert_eq!(Direction::Down.to_string(), "Down");
    }
}
