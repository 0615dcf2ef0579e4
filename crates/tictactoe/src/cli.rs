//! Command-line interface for tictactoe.

use crate::replay::parse_move;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (keyboard or mouse)
    Play,

    /// Play a list of moves and print the result
    Replay {
        /// Moves as ROW,COL with 0-based coordinates, X first
        #[arg(required = true, value_name = "ROW,COL", value_parser = parse_move)]
        moves: Vec<(usize, usize)>,

        /// Print a JSON report instead of the board
        #[arg(long)]
        json: bool,
    },
}
