//! Computer opponent: difficulty policy on top of minimax.

pub mod minimax;

pub use minimax::{best_move, minimax};

use crate::rules::empty_cells;
use crate::types::{Board, Symbol};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chance that a medium opponent ignores the search and plays randomly.
pub const MEDIUM_RANDOM_MOVE_PROBABILITY: f64 = 0.3;

/// How strongly the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Random 30% of the time, optimal otherwise.
    #[default]
    Medium,
    /// Always optimal.
    Hard,
}

/// Chooses the computer's next cell.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    computer: Symbol,
    human: Symbol,
    rng: &mut R,
) -> Option<usize> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium if rng.random_bool(MEDIUM_RANDOM_MOVE_PROBABILITY) => {
            random_move(board, rng)
        }
        Difficulty::Medium | Difficulty::Hard => best_move(board, computer, human),
    };

    debug!(?choice, %difficulty, %computer, "Computer move selected");
    choice
}

fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let moves = empty_cells(board);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}
