//! Game settings chosen when a session starts.

use derive_getters::Getters;
use derive_new::new;
use noughts_core::{Difficulty, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Name used when player 1 leaves the name blank.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Name used when player 2 leaves the name blank.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// Display name of the computer opponent.
pub const COMPUTER_NAME: &str = "AI";

/// How the second seat is filled.
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
pub enum GameMode {
    /// One human against the computer.
    #[default]
    Single,
    /// Two humans sharing one board.
    Local,
    /// Label only; plays exactly like [`GameMode::Local`].
    Online,
}

impl GameMode {
    /// Whether the second seat belongs to the computer.
    pub fn has_computer(self) -> bool {
        matches!(self, GameMode::Single)
    }
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Assigned symbol.
    symbol: Symbol,
}

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameSettings {
    /// The first (always human) player.
    player1: Player,
    /// The second human; absent in single-player mode.
    player2: Option<Player>,
    /// Play mode.
    mode: GameMode,
    /// Computer strength; only used in single-player mode.
    difficulty: Option<Difficulty>,
}

impl GameSettings {
    /// Settings for a game against the computer.
    pub fn single(name: impl Into<String>, symbol: Symbol, difficulty: Difficulty) -> Self {
        Self::new(
            Player::new(name.into(), symbol),
            None,
            GameMode::Single,
            Some(difficulty),
        )
    }

    /// Settings for two humans. Player 2 takes the other symbol.
    pub fn two_player(
        mode: GameMode,
        name: impl Into<String>,
        symbol: Symbol,
        name2: impl Into<String>,
    ) -> Self {
        Self::new(
            Player::new(name.into(), symbol),
            Some(Player::new(name2.into(), symbol.opponent())),
            mode,
            None,
        )
    }

    /// Applies the setup defaults.
    ///
    /// Blank names become [`DEFAULT_PLAYER_NAME`] / [`DEFAULT_PLAYER2_NAME`].
    /// Single-player drops player 2 and falls back to medium difficulty;
    /// the other modes always seat a player 2 on the complementary symbol
    /// and carry no difficulty.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn normalized(self) -> Self {
        let player1 = Player::new(
            name_or_default(&self.player1.name, DEFAULT_PLAYER_NAME),
            self.player1.symbol,
        );

        let normalized = if self.mode.has_computer() {
            Self::new(
                player1,
                None,
                self.mode,
                Some(self.difficulty.unwrap_or_default()),
            )
        } else {
            let name2 = self
                .player2
                .as_ref()
                .map_or(DEFAULT_PLAYER2_NAME, |p| p.name.as_str());
            let player2 = Player::new(
                name_or_default(name2, DEFAULT_PLAYER2_NAME),
                player1.symbol.opponent(),
            );
            Self::new(player1, Some(player2), self.mode, None)
        };

        debug!(settings = ?normalized, "Settings normalized");
        normalized
    }

    /// The computer's symbol, if this game has a computer player.
    pub fn computer_symbol(&self) -> Option<Symbol> {
        self.mode
            .has_computer()
            .then(|| self.player1.symbol.opponent())
    }

    /// Difficulty the computer plays at.
    pub fn effective_difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }

    /// Display name of whoever plays `symbol`.
    pub fn name_for(&self, symbol: Symbol) -> &str {
        if symbol == self.player1.symbol {
            &self.player1.name
        } else {
            self.player2
                .as_ref()
                .map_or(COMPUTER_NAME, |p| p.name.as_str())
        }
    }
}

fn name_or_default(name: &str, default: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
