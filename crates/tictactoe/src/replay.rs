//! Headless replay of a move list.
//!
//! Moves are fed to the engine one at a time exactly as the terminal UI would
//! feed clicks: a refused move is recorded and skipped, and play continues.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_engine::{Game, InvalidMove, render_board, status_line};
use tracing::{info, instrument, warn};

/// A `row,col` argument that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move '{input}': expected ROW,COL such as 1,2")]
pub struct MoveParseError {
    /// The argument as given.
    pub input: String,
}

/// Parses `"row,col"` (whitespace allowed around each number).
///
/// Range is not checked here; the engine reports off-board moves.
pub fn parse_move(input: &str) -> Result<(usize, usize), MoveParseError> {
    let err = || MoveParseError {
        input: input.to_string(),
    };
    let (row, col) = input.split_once(',').ok_or_else(err)?;
    let row = row.trim().parse().map_err(|_| err())?;
    let col = col.trim().parse().map_err(|_| err())?;
    Ok((row, col))
}

/// A move the engine refused during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// 0-based index in the move list.
    pub index: usize,
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Why it was refused.
    #[serde(serialize_with = "serialize_display")]
    pub reason: InvalidMove,
}

fn serialize_display<S: serde::Serializer>(reason: &InvalidMove, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

/// Final game plus every refused move.
///
/// Serializes as `{ state, history, rejected }`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// The game after all moves.
    #[serde(flatten)]
    pub game: Game,
    /// Refused moves, in order.
    pub rejected: Vec<Rejection>,
}

impl ReplayReport {
    /// Board, status line, and one line per refused move.
    pub fn to_text(&self) -> String {
        let mut out = render_board(self.game.board());
        out.push_str("\n\n");
        out.push_str(&status_line(&self.game));
        for rejection in &self.rejected {
            out.push_str(&format!(
                "\nmove {} ({},{}) rejected: {}",
                rejection.index + 1,
                rejection.row,
                rejection.col,
                rejection.reason
            ));
        }
        out
    }
}

/// Plays every move in order on a fresh game.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn run(moves: &[(usize, usize)]) -> ReplayReport {
    let mut game = Game::new();
    let mut rejected = Vec::new();

    for (index, &(row, col)) in moves.iter().enumerate() {
        if let Err(reason) = game.place_mark(row, col) {
            warn!(index, row, col, %reason, "Move rejected during replay");
            rejected.push(Rejection {
                index,
                row,
                col,
                reason,
            });
        }
    }

    info!(status = %game.status(), rejected = rejected.len(), "Replay finished");
    ReplayReport { game, rejected }
}
