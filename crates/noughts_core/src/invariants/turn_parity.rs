//! Turn parity invariant: the mover follows history length.

use super::Invariant;
use crate::{GameState, Symbol};

/// Invariant: an even history means the first mover's turn, odd the second's.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        game.to_move() == Symbol::for_ply(game.history().len())
    }

    fn description() -> &'static str {
        "Player to move matches history parity"
    }
}
