//! Line-based terminal front end.

use anyhow::Result;
use noughts::{GameSession, GameSettings, Phase, SessionSnapshot};
use noughts_core::{Position, Symbol};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, instrument};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place at a cell.
    Place(usize),
    /// Take back the last turn.
    Undo,
    /// Start over with the same settings.
    Restart,
    /// Print the session as JSON.
    State,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
    /// Anything unrecognized.
    Unknown(String),
}

impl Input {
    /// Parses a trimmed input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "u" | "undo" => Self::Undo,
            "r" | "new" | "restart" => Self::Restart,
            "state" => Self::State,
            "h" | "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => match Position::parse(line) {
                Some(position) => Self::Place(position.index()),
                None => Self::Unknown(line.to_string()),
            },
        }
    }
}

const HELP: &str = "\
Enter a cell number (0-8) or name (top-left .. bottom-right) to move.
  undo     take back your last turn
  new      start again with the same players
  state    print the session as JSON
  quit     leave the game";

/// Renders the board and status block.
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = format!("\n{}\n\n{}", snapshot.board(), snapshot.headline());

    let single = snapshot.settings().as_ref().filter(|s| s.mode().has_computer());
    if let Some(settings) = single {
        out.push_str(&format!("\nDifficulty: {}", settings.effective_difficulty()));
    }

    if let Some(line) = snapshot.winning_line() {
        let labels = line
            .iter()
            .filter_map(|&i| Position::from_index(i))
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\nWinning line: {}", labels));
    }

    if snapshot.phase() == Phase::Finished {
        out.push_str("\nType 'new' to play again or 'undo' to take back.");
    }
    out
}

/// Runs an interactive game until the player quits or stdin closes.
#[instrument(skip_all)]
pub async fn run(session: GameSession, settings: GameSettings) -> Result<()> {
    session.start_game(settings.clone());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        session.wait_for_computer().await;
        let snapshot = session.snapshot();
        println!("{}", render(&snapshot));
        print_prompt(&snapshot);

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            break;
        };

        match Input::parse(&line) {
            Input::Place(index) => {
                if session.make_move(index).is_none() {
                    println!("Cell {} is not available.", index);
                }
            }
            Input::Undo => {
                if session.undo_move() == 0 {
                    println!("Nothing to undo.");
                }
            }
            Input::Restart => session.start_game(settings.clone()),
            Input::State => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            Input::Help => println!("{}", HELP),
            Input::Quit => break,
            Input::Unknown(text) if text.is_empty() => {}
            Input::Unknown(text) => println!("Unrecognized input '{}'. Type 'help'.", text),
        }
    }

    session.reset_game();
    println!("Goodbye!");
    Ok(())
}

fn print_prompt(snapshot: &SessionSnapshot) {
    write_prompt(&mut std::io::stdout().lock(), snapshot);
}

fn write_prompt(out: &mut impl Write, snapshot: &SessionSnapshot) {
    let mover: Symbol = *snapshot.current_player();
    if snapshot.phase() == Phase::InProgress {
        write!(out, "{} ({})> ", snapshot.name_for(mover), mover).ok();
    } else {
        write!(out, "> ").ok();
    }
    out.flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::GameMode;
    use noughts_core::Difficulty;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse(" 4 "), Input::Place(4));
        assert_eq!(Input::parse("Top-Left"), Input::Place(0));
        assert_eq!(Input::parse("bottom right"), Input::Place(8));
        assert_eq!(Input::parse("UNDO"), Input::Undo);
        assert_eq!(Input::parse("new"), Input::Restart);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("9"), Input::Unknown("9".to_string()));
        assert_eq!(Input::parse(""), Input::Unknown(String::new()));
    }

    #[test]
    fn test_prompt_names_the_mover() {
        let session = GameSession::new();
        let mut out = Vec::new();
        write_prompt(&mut out, &session.snapshot());
        assert_eq!(String::from_utf8(out).unwrap(), "> ");

        session.start_game(GameSettings::single("Ada", Symbol::X, Difficulty::Easy));
        let mut out = Vec::new();
        write_prompt(&mut out, &session.snapshot());
        assert_eq!(String::from_utf8(out).unwrap(), "Ada (X)> ");
    }

    #[test]
    fn test_render_shows_difficulty_and_winner() {
        let session = GameSession::new();
        session.start_game(GameSettings::single("Ada", Symbol::X, Difficulty::Easy));
        let text = render(&session.snapshot());
        assert!(text.contains("Ada's Turn"));
        assert!(text.contains("Difficulty: easy"));

        session.start_game(GameSettings::two_player(
            GameMode::Local,
            "Ada",
            Symbol::X,
            "Bob",
        ));
        for index in [0, 3, 4, 5, 8] {
            session.make_move(index);
        }
        let text = render(&session.snapshot());
        assert!(text.contains("Ada Wins!"));
        assert!(text.contains("Winning line: top-left, center, bottom-right"));
        assert!(!text.contains("Difficulty"));
    }
}
