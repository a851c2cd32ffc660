//! Draw detection and move enumeration.

use super::win::check_winner;
use crate::types::{Board, CELL_COUNT};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == CELL_COUNT
}

/// A full board with no winner.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

/// All unmarked indices in ascending order.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    (0..CELL_COUNT).filter(|&i| board.is_empty(i)).collect()
}
