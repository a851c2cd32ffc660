//! Named board positions and move input parsing.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A named cell on the board. The discriminant is the row-major index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft = 0,
    /// Top-center (index 1)
    TopCenter = 1,
    /// Top-right (index 2)
    TopRight = 2,
    /// Middle-left (index 3)
    MiddleLeft = 3,
    /// Center (index 4)
    Center = 4,
    /// Middle-right (index 5)
    MiddleRight = 5,
    /// Bottom-left (index 6)
    BottomLeft = 6,
    /// Bottom-center (index 7)
    BottomCenter = 7,
    /// Bottom-right (index 8)
    BottomRight = 8,
}

impl Position {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::Center => "center",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position for a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parses a cell index (`"4"`) or a label (`"center"`, `"Top Left"`).
    ///
    /// Labels match case-insensitively, with spaces or underscores accepted in
    /// place of the hyphen.
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index);
        }

        let wanted = trimmed.to_lowercase().replace([' ', '_'], "-");
        Self::iter().find(|pos| pos.label() == wanted)
    }

    /// Positions whose cells are still empty, in index order.
    #[instrument(skip(board))]
    pub fn open(board: &Board) -> Vec<Self> {
        Self::iter().filter(|pos| board.is_empty(pos.index())).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_number_and_label() {
        assert_eq!(Position::parse("4"), Some(Position::Center));
        assert_eq!(Position::parse(" 0 "), Some(Position::TopLeft));
        assert_eq!(Position::parse("Bottom Right"), Some(Position::BottomRight));
        assert_eq!(Position::parse("middle_left"), Some(Position::MiddleLeft));
        assert_eq!(Position::parse("12"), None);
        assert_eq!(Position::parse("nowhere"), None);
    }

    #[test]
    fn test_open_filters_occupied() {
        let board = Board::new().with(0, Symbol::X).with(4, Symbol::O);
        let open = Position::open(&board);
        assert_eq!(open.len(), 7);
        assert!(!open.contains(&Position::TopLeft));
        assert!(!open.contains(&Position::Center));
    }
}
