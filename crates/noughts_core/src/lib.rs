//! Pure tic-tac-toe logic.
//!
//! - **Rules**: terminal status and legal moves for any board ([`evaluate`],
//!   [`empty_cells`]).
//! - **Game state**: history-backed board with move and undo ([`GameState`]).
//! - **Opponent**: minimax with difficulty-tiered randomization
//!   ([`select_move`]).
//!
//! Nothing here performs I/O or spawns tasks; session pacing lives in the
//! `noughts` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
pub mod opponent;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use opponent::{Difficulty, best_move, minimax, select_move};
pub use position::Position;
pub use rules::{LINES, check_winner, empty_cells, evaluate, is_draw, is_full, winning_line};
pub use types::{Board, CELL_COUNT, GameStatus, Square, Symbol, WinningLine};
