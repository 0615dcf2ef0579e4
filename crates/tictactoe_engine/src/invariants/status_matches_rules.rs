//! Status invariant: the stored status is what the rules say about the board.

use super::Invariant;
use crate::rules::{check_winner, is_full};
use crate::{Game, GameStatus};

/// Invariant: status agrees with a fresh evaluation of the board.
///
/// `Won(m)` iff the scan finds `m` (and at least 3 marks are down),
/// `Tied` iff the board is full with no line, `InProgress` otherwise.
pub struct StatusMatchesRules;

impl Invariant<Game> for StatusMatchesRules {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        if game.status().winner() != check_winner(board) {
            return false;
        }
        match game.status() {
            GameStatus::Won(_) => game.turn_count() >= 3,
            GameStatus::Tied => game.turn_count() == 9,
            GameStatus::InProgress => !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Status matches the win and tie rules"
    }
}
