//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The three cell indices of a completed line, in enumeration order.
pub type WinningLine = [usize; 3];

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Symbol X (always moves first).
    #[serde(alias = "x")]
    X,
    /// Symbol O.
    #[serde(alias = "o")]
    O,
}

impl Symbol {
    /// The symbol that opens every game.
    pub const FIRST: Symbol = Symbol::X;

    /// Returns the complementary symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Symbol that owns the given history slot when replaying from an empty board.
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 {
            Self::FIRST
        } else {
            Self::FIRST.opponent()
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square marked by a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol in this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

impl From<Option<Symbol>> for Square {
    fn from(cell: Option<Symbol>) -> Self {
        cell.map_or(Square::Empty, Square::Occupied)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from nine optional symbols in row-major order.
    pub fn from_cells(cells: [Option<Symbol>; CELL_COUNT]) -> Self {
        Self {
            squares: cells.map(Square::from),
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), MoveError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds(index))?;
        *slot = square;
        Ok(())
    }

    /// Returns a copy of this board with `symbol` placed at `index`.
    ///
    /// Out-of-range indices leave the copy unchanged.
    pub fn with(&self, index: usize, symbol: Symbol) -> Self {
        let mut next = *self;
        if let Some(slot) = next.squares.get_mut(index) {
            *slot = Square::Occupied(symbol);
        }
        next
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Number of marked squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Returns the symbols as nine optional cells.
    pub fn cells(&self) -> [Option<Symbol>; CELL_COUNT] {
        self.squares.map(Square::symbol)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index)?,
                    Square::Occupied(symbol) => write!(f, "{}", symbol)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Terminal status of a board.
///
/// Winner and draw are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning symbol.
        winner: Symbol,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true for a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }

    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, line } => {
                write!(f, "{} wins on {:?}", winner, line)
            }
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
