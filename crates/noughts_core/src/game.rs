//! Mutable match state: board, mover, status and history.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::evaluate;
use crate::types::{Board, CELL_COUNT, GameStatus, Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one game.
///
/// The history is authoritative: the board is always the replay of the
/// history with symbols alternating from [`Symbol::FIRST`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Symbol,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<usize>,
}

impl GameState {
    /// Creates an empty game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Symbol::FIRST,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying each index of `history` in order.
    ///
    /// # Errors
    ///
    /// Fails on the first placement that is out of bounds, occupied, or made
    /// after the game ended.
    #[instrument]
    pub fn replay(history: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in history {
            game.place(index)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the symbol to move next.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Returns the current status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history (cell indices in play order).
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Places the mover's symbol at `index`.
    ///
    /// On success the history grows by one, the status is recomputed from
    /// the board and the mover switches.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`], [`MoveError::OutOfBounds`] or
    /// [`MoveError::SquareOccupied`] without touching the state.
    #[instrument(skip(self), fields(to_move = %self.to_move, ply = self.history.len()))]
    pub fn place(&mut self, index: usize) -> Result<Move, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::SquareOccupied(index));
        }

        let symbol = self.to_move;
        self.board.set(index, Square::Occupied(symbol))?;
        self.history.push(index);
        self.status = evaluate(&self.board);
        self.to_move = symbol.opponent();

        debug!(index, %symbol, status = %self.status, "Move applied");

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(Move::new(symbol, index))
    }

    /// Removes up to `count` trailing moves and rebuilds the board from the
    /// remaining history.
    ///
    /// Symbols are reassigned by strict alternation, the status returns to
    /// [`GameStatus::InProgress`] and the mover follows history parity.
    /// Returns how many moves were removed.
    #[instrument(skip(self), fields(ply = self.history.len()))]
    pub fn undo(&mut self, count: usize) -> usize {
        let removed = count.min(self.history.len());
        self.history.truncate(self.history.len() - removed);

        self.board = self
            .history
            .iter()
            .enumerate()
            .fold(Board::new(), |board, (ply, &index)| {
                board.with(index, Symbol::for_ply(ply))
            });
        self.status = GameStatus::InProgress;
        self.to_move = Symbol::for_ply(self.history.len());

        debug!(removed, remaining = self.history.len(), "Moves undone");
        debug_assert!(self.check_invariants().is_ok(), "Invariants violated after undo");

        removed
    }

    /// Verifies every game invariant.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] listing each failed check.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
