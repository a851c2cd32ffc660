//! Move records and placement errors.

use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// A placement that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol that was placed.
    pub symbol: Symbol,
    /// Cell index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, index: usize) -> Self {
        Self { symbol, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.index)
    }
}

/// Reason a placement was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is not a board cell.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// A state invariant failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
