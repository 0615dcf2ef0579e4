//! tictactoe - play in the terminal or replay a move list.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe::{Cli, Command, ShellConfig, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            init_file_tracing(config.log_file())?;
            tui::run(&config)
        }
        Command::Replay { moves, json } => {
            init_stderr_tracing();
            run_replay(&moves, json)
        }
    }
}

/// Log to a file so output does not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter("info"))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Replay output goes to stdout; only warnings reach stderr unless RUST_LOG says otherwise.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn run_replay(moves: &[(usize, usize)], json: bool) -> Result<()> {
    let report = replay::run(moves);
    info!(rejected = report.rejected.len(), "Printing replay report");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
