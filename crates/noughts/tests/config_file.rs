//! Loading configuration from disk.

use noughts::{Config, GameMode, GameSession};
use noughts_core::{Difficulty, Symbol};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_file_reads_all_fields() {
    let file = write_config(
        r#"
computer_delay_ms = 250
seed = 9
player_name = "Ada"
player2_name = "Bob"
symbol = "O"
mode = "local"
difficulty = "hard"
"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(*config.computer_delay_ms(), 250);
    assert_eq!(*config.seed(), Some(9));
    assert_eq!(*config.symbol(), Symbol::O);
    assert_eq!(*config.mode(), GameMode::Local);
    assert_eq!(*config.difficulty(), Difficulty::Hard);

    let session_config = config.session_config();
    assert_eq!(*session_config.computer_delay(), Duration::from_millis(250));

    let settings = config.game_settings();
    assert_eq!(settings.name_for(Symbol::O), "Ada");
    assert_eq!(settings.name_for(Symbol::X), "Bob");
    assert_eq!(*settings.difficulty(), None);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("difficulty = \"easy\"\n");

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(*config.computer_delay_ms(), 500);
    assert_eq!(config.player_name(), "Player");

    let settings = config.game_settings();
    assert_eq!(*settings.mode(), GameMode::Single);
    assert_eq!(settings.computer_symbol(), Some(Symbol::O));
}

#[test]
fn test_file_and_flag_symbol_spellings_agree() {
    let file = write_config("symbol = \"x\"\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(*config.symbol(), "x".parse::<Symbol>().unwrap());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("mode = [");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_session_from_config_starts_configured_game() {
    let file = write_config("mode = \"online\"\nplayer_name = \"Ada\"\n");
    let config = Config::from_file(file.path()).unwrap();

    let session = GameSession::with_config(config.session_config());
    session.start_game(config.game_settings());
    assert_eq!(session.snapshot().headline(), "Ada's Turn");

    session.make_move(0);
    assert_eq!(session.snapshot().headline(), "Player 2's Turn");
}
