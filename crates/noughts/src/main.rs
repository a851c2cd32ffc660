//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use noughts::{Config, GameSession};
use noughts_core::{Difficulty, GameState, GameStatus, Symbol, select_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,noughts=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Selfplay {
            games,
            x_difficulty,
            o_difficulty,
            seed,
            json,
        } => run_selfplay(games, x_difficulty, o_difficulty, seed, json),
    }
}

/// Run an interactive game
#[instrument(skip(args))]
async fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(mode) = args.mode {
        config = config.with_mode(mode);
    }
    if let Some(difficulty) = args.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(symbol) = args.symbol {
        config = config.with_symbol(symbol);
    }
    if let Some(name) = args.name {
        config = config.with_player_name(name);
    }
    if let Some(name2) = args.name2 {
        config = config.with_player2_name(name2);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(Some(seed));
    }
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }
    debug!(?config, "Resolved config");

    info!(mode = %config.mode(), "Starting interactive game");
    let session = GameSession::with_config(config.session_config());
    terminal::run(session, config.game_settings()).await
}

/// Tally of a self-play run.
#[derive(Debug, Default, Serialize)]
struct SelfplaySummary {
    x_difficulty: String,
    o_difficulty: String,
    games: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl SelfplaySummary {
    /// Tallies one finished game.
    fn record(&mut self, status: &GameStatus) -> Result<()> {
        match status {
            GameStatus::Won { winner: Symbol::X, .. } => self.x_wins += 1,
            GameStatus::Won { winner: Symbol::O, .. } => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => bail!("Self-play game ended without a result"),
        }
        Ok(())
    }
}

/// Let the computer play itself
#[instrument]
fn run_selfplay(
    games: usize,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut summary = SelfplaySummary {
        x_difficulty: x_difficulty.to_string(),
        o_difficulty: o_difficulty.to_string(),
        games,
        ..Default::default()
    };

    for game_number in 0..games {
        let mut game = GameState::new();
        while !game.status().is_over() {
            let mover = game.to_move();
            let difficulty = match mover {
                Symbol::X => x_difficulty,
                Symbol::O => o_difficulty,
            };
            let Some(index) = select_move(game.board(), difficulty, mover, mover.opponent(), &mut rng)
            else {
                bail!("No legal move in unfinished self-play game {}", game_number);
            };
            game.place(index)?;
        }

        debug!(game_number, status = %game.status(), history = ?game.history(), "Self-play game finished");
        summary.record(game.status())?;
    }

    info!(?summary, "Self-play complete");
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} games ({} as X vs {} as O): X won {}, O won {}, {} drawn",
            summary.games,
            summary.x_difficulty,
            summary.o_difficulty,
            summary.x_wins,
            summary.o_wins,
            summary.draws
        );
    }
    Ok(())
}
