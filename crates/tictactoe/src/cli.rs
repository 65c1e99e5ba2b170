//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal with persistent win/draw statistics
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with persistent statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The selected command, `play` with defaults when none was given.
    pub fn command(self) -> Command {
        self.command.unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the terminal game
    Play(PlayArgs),

    /// Print the persisted statistics
    Stats(StatsArgs),

    /// Zero the persisted statistics
    ResetStats(StatsArgs),
}

/// Options for `play`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PlayArgs {
    /// Path to the TOML config file
    #[arg(long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Statistics file, overriding the config
    #[arg(long)]
    pub stats: Option<PathBuf>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from("tictactoe.toml"),
            stats: None,
        }
    }
}

/// Options for `stats` and `reset-stats`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsArgs {
    /// Path to the TOML config file
    #[arg(long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Statistics file, overriding the config
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Print JSON instead of the text summary (`stats` only)
    #[arg(long)]
    pub json: bool,
}
