//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand};
use noughts::GameMode;
use noughts_core::{Difficulty, Symbol};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play(PlayArgs),

    /// Let the computer play itself and report the results
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Difficulty of the X player
        #[arg(short = 'x', long = "x", default_value = "hard")]
        x_difficulty: Difficulty,

        /// Difficulty of the O player
        #[arg(short = 'o', long = "o", default_value = "hard")]
        o_difficulty: Difficulty,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for an interactive game. Flags override the config file.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Play mode (single, local, online)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Computer difficulty (easy, medium, hard)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Symbol for player 1 (X moves first)
    #[arg(short, long)]
    pub symbol: Option<Symbol>,

    /// Name of player 1
    #[arg(short, long)]
    pub name: Option<String>,

    /// Name of player 2 (local and online modes)
    #[arg(long)]
    pub name2: Option<String>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds the computer waits before moving
    #[arg(long)]
    pub delay_ms: Option<u64>,
}
