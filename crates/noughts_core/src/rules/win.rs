//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Square, Symbol, WinningLine};

/// The eight winning triples in evaluation order.
///
/// The first uniform triple found wins; the order is part of the contract.
pub const LINES: [WinningLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Finds the first completed line on the board.
///
/// Returns the winning symbol together with its line. Called once per
/// search node, so it carries no span.
pub fn winning_line(board: &Board) -> Option<(Symbol, WinningLine)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Some(Square::Occupied(symbol))
                if board.get(b) == Some(Square::Occupied(symbol))
                    && board.get(c) == Some(Square::Occupied(symbol)) =>
            {
                Some((symbol, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|(symbol, _)| symbol)
}
