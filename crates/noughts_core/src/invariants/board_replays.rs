//! Replay invariant: the board is exactly the replay of the history.

use super::Invariant;
use crate::{Board, GameState, Symbol};

/// Invariant: replaying the history with alternating symbols yields the board.
///
/// Undo depends on this, since it rebuilds the board from history alone.
pub struct BoardReplaysInvariant;

impl Invariant<GameState> for BoardReplaysInvariant {
    fn holds(game: &GameState) -> bool {
        let replayed = game
            .history()
            .iter()
            .enumerate()
            .fold(Board::new(), |board, (ply, &index)| {
                board.with(index, Symbol::for_ply(ply))
            });
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board equals the replay of the move history"
    }
}
