//! Noughts - tic-tac-toe sessions against a friend or the computer.
//!
//! The pure rules and the minimax opponent live in [`noughts_core`]; this
//! crate adds the session state machine that paces the computer's replies,
//! player settings, and TOML configuration.
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameSession, GameSettings};
//! use noughts_core::{Difficulty, Symbol};
//!
//! # async fn demo() {
//! let session = GameSession::new();
//! session.start_game(GameSettings::single("Ada", Symbol::X, Difficulty::Hard));
//! session.make_move(4);
//! session.wait_for_computer().await;
//! println!("{}", session.snapshot().headline());
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod computer;
mod config;
mod session;
mod settings;

pub use config::{Config, ConfigError, DEFAULT_COMPUTER_DELAY_MS, SessionConfig};
pub use session::{GameSession, Phase, SessionSnapshot};
pub use settings::{
    COMPUTER_NAME, DEFAULT_PLAYER_NAME, DEFAULT_PLAYER2_NAME, GameMode, GameSettings, Player,
};
