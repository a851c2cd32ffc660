//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Status is always computed from scratch,
//! never patched incrementally.

pub mod draw;
pub mod win;

pub use draw::{empty_cells, is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Determines the terminal status of a board.
///
/// The first uniform non-empty line in [`LINES`] order wins. Otherwise a full
/// board is a draw, and anything else is still in progress.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = winning_line(board) {
        return GameStatus::Won { winner, line };
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    const X: Option<Symbol> = Some(Symbol::X);
    const O: Option<Symbol> = Some(Symbol::O);
    const E: Option<Symbol> = None;

    #[test]
    fn test_evaluate_in_progress() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, E]);
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_win_reports_line() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let status = evaluate(&board);
        assert_eq!(status.winner(), Some(Symbol::X));
        assert_eq!(status.winning_line(), Some([0, 1, 2]));
        assert!(!status.is_draw());
    }

    #[test]
    fn test_evaluate_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        let status = evaluate(&board);
        assert!(status.is_draw());
        assert_eq!(status.winner(), None);
        assert_eq!(status.winning_line(), None);
    }

    #[test]
    fn test_winning_move_on_last_cell_is_not_a_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, X]);
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                winner: Symbol::X,
                line: [0, 4, 8]
            }
        );
    }
}
