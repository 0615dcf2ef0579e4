//! Tic-tac-toe game engine.
//!
//! A pure state-and-rules library with no knowledge of rendering. A front end
//! owns a [`Game`], turns user input into [`Game::place_mark`] calls, and
//! renders what comes back.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Mark, outcome_message};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
//!     game.place_mark(row, col).expect("legal move");
//! }
//!
//! assert_eq!(game.check_winner(), Some(Mark::X));
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! assert_eq!(outcome_message(game.status()).as_deref(), Some("X WON!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod render;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{InvalidMove, Move, Placement};
pub use engine::Game;
pub use position::Position;
pub use render::{outcome_message, render_board, status_line};
pub use rules::{WINNING_LINES, WinningLine};
pub use types::{Board, Cell, GameState, GameStatus, Mark};
