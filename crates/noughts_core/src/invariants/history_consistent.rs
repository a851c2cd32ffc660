//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::GameState;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
