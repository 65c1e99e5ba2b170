//! Tic-tac-toe - terminal game and statistics commands.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tictactoe::{
    AppConfig, CellBindings, Cli, Command, GameSession, PlayArgs, StatsArgs, TomlFileStore, tui,
};
use tictactoe_core::{Statistics, StatisticsStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Command::Play(args) => run_play(args),
        Command::Stats(args) => run_stats(args),
        Command::ResetStats(args) => run_reset_stats(args),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Loads the config file (defaults when absent) and applies the CLI override.
fn load_config(path: &Path, stats: Option<PathBuf>) -> Result<AppConfig> {
    let config = AppConfig::load_or_default(path)?;
    Ok(match stats {
        Some(stats_path) => config.with_stats_path(stats_path),
        None => config,
    })
}

/// Run the terminal game
fn run_play(args: PlayArgs) -> Result<()> {
    let config = load_config(&args.config, args.stats)?;

    // Setup logging to file to avoid interfering with TUI
    let log_path = config.log_file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        config = %args.config.display(),
        stats_path = %config.stats_path().display(),
        "Starting tictactoe"
    );

    let bindings = CellBindings::from_keys(config.cell_keys());
    let session = GameSession::start(TomlFileStore::new(config.stats_path()));
    let mut app = tui::App::new(session, bindings);

    tui::run(&mut app)
}

/// Print the persisted statistics
fn run_stats(args: StatsArgs) -> Result<()> {
    init_stderr_logging();
    let config = load_config(&args.config, args.stats)?;

    let stats = TomlFileStore::new(config.stats_path()).load()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats.summary());
    }
    Ok(())
}

/// Zero the persisted statistics
fn run_reset_stats(args: StatsArgs) -> Result<()> {
    init_stderr_logging();
    let config = load_config(&args.config, args.stats)?;

    let mut store = TomlFileStore::new(config.stats_path());
    store.save(&Statistics::default())?;
    info!(path = %store.path().display(), "Statistics reset");
    println!("{}", Statistics::default().summary());
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
