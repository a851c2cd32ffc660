//! Session configuration loaded from TOML.

use crate::settings::{DEFAULT_PLAYER_NAME, DEFAULT_PLAYER2_NAME, GameMode, GameSettings, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use derive_setters::Setters;
use noughts_core::{Difficulty, Symbol};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default pause before the computer answers a human move.
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 500;

/// Player-facing configuration.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct Config {
    /// Milliseconds the computer waits before moving.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for the computer's random choices; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Name of player 1.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Name of player 2 in local and online modes.
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Symbol of player 1.
    #[serde(default = "default_symbol")]
    symbol: Symbol,

    /// Play mode.
    #[serde(default)]
    mode: GameMode,

    /// Computer strength in single-player mode.
    #[serde(default)]
    difficulty: Difficulty,
}

fn default_computer_delay_ms() -> u64 {
    DEFAULT_COMPUTER_DELAY_MS
}

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

fn default_player2_name() -> String {
    DEFAULT_PLAYER2_NAME.to_string()
}

fn default_symbol() -> Symbol {
    Symbol::X
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            player_name: default_player_name(),
            player2_name: default_player2_name(),
            symbol: default_symbol(),
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or unknown values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Pacing and randomness for a [`crate::GameSession`].
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(Duration::from_millis(self.computer_delay_ms), self.seed)
    }

    /// Game settings described by this config, normalized.
    pub fn game_settings(&self) -> GameSettings {
        let player1 = Player::new(self.player_name.clone(), self.symbol);
        let settings = if self.mode.has_computer() {
            GameSettings::new(player1, None, self.mode, Some(self.difficulty))
        } else {
            let player2 = Player::new(self.player2_name.clone(), self.symbol.opponent());
            GameSettings::new(player1, Some(player2), self.mode, None)
        };
        settings.normalized()
    }
}

/// Runtime knobs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct SessionConfig {
    /// Pause before a scheduled computer move is applied.
    computer_delay: Duration,
    /// Seed for the session RNG.
    seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COMPUTER_DELAY_MS), None)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            *config.session_config().computer_delay(),
            Duration::from_millis(500)
        );
        assert_eq!(*config.mode(), GameMode::Single);
        assert_eq!(*config.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_setters_chain() {
        let config = Config::default()
            .with_seed(Some(7))
            .with_computer_delay_ms(0)
            .with_mode(GameMode::Local)
            .with_player2_name("  ".to_string());

        assert_eq!(*config.session_config().seed(), Some(7));
        assert_eq!(*config.session_config().computer_delay(), Duration::ZERO);

        let settings = config.game_settings();
        assert_eq!(
            settings.player2().as_ref().map(|p| p.name().as_str()),
            Some(DEFAULT_PLAYER2_NAME)
        );
    }

    #[test]
    fn test_symbol_accepts_either_case() {
        let lower = Config::from_toml_str("symbol = \"o\"").unwrap();
        let upper = Config::from_toml_str("symbol = \"O\"").unwrap();
        assert_eq!(*lower.symbol(), Symbol::O);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let err = Config::from_toml_str("difficulty = \"impossible\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
