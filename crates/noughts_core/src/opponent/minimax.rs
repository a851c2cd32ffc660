//! Full-depth minimax over board snapshots.

use crate::rules::{empty_cells, winning_line};
use crate::types::{Board, Symbol};
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Scores `board` from the computer's point of view.
///
/// A computer win scores `10 - depth`, a human win `depth - 10`, a full board
/// `0`. Otherwise the mover's symbol is tried in every empty cell and the
/// maximum (computer to move) or minimum (human to move) child score is
/// returned. There is no depth cutoff and no pruning; every child is a fresh
/// copy of the board.
pub fn minimax(
    board: &Board,
    depth: i32,
    maximizing: bool,
    computer: Symbol,
    human: Symbol,
) -> i32 {
    if let Some((winner, _)) = winning_line(board) {
        return if winner == computer {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    let moves = empty_cells(board);
    if moves.is_empty() {
        return 0;
    }

    let mover = if maximizing { computer } else { human };
    let scores = moves.into_iter().map(|index| {
        minimax(&board.with(index, mover), depth + 1, !maximizing, computer, human)
    });

    if maximizing {
        scores.fold(i32::MIN, i32::max)
    } else {
        scores.fold(i32::MAX, i32::min)
    }
}

/// Picks the computer's optimal cell.
///
/// Cells are tried in ascending order and the best is only replaced on a
/// strictly greater score, so ties go to the lowest index. Returns `None` on a
/// full board.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn best_move(board: &Board, computer: Symbol, human: Symbol) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for index in empty_cells(board) {
        let score = minimax(&board.with(index, computer), 0, false, computer, human);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    debug!(?best, "Minimax search finished");
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Symbol> = Some(Symbol::X);
    const O: Option<Symbol> = Some(Symbol::O);
    const E: Option<Symbol> = None;

    #[test]
    fn test_terminal_scores() {
        let won = Board::from_cells([O, O, O, X, X, E, X, E, E]);
        assert_eq!(minimax(&won, 3, true, Symbol::O, Symbol::X), 7);
        assert_eq!(minimax(&won, 3, true, Symbol::X, Symbol::O), -7);

        let drawn = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(minimax(&drawn, 5, false, Symbol::X, Symbol::O), 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(best_move(&board, Symbol::X, Symbol::O), Some(2));
        assert_eq!(best_move(&board, Symbol::O, Symbol::X), Some(5));
    }

    #[test]
    fn test_blocks_column_threat() {
        // X threatens column 0; O must take 6.
        let board = Board::from_cells([X, E, E, X, O, E, E, E, E]);
        assert_eq!(best_move(&board, Symbol::O, Symbol::X), Some(6));
    }

    #[test]
    fn test_center_opening_answered_in_first_corner() {
        let board = Board::from_cells([E, E, E, E, X, E, E, E, E]);
        assert_eq!(best_move(&board, Symbol::O, Symbol::X), Some(0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(best_move(&board, Symbol::X, Symbol::O), None);
    }
}
