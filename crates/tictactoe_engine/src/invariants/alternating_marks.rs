//! Alternating marks invariant: X, O, X, O, ... and the history agrees with the board.

use super::Invariant;
use crate::{Cell, Game, Mark};

/// Invariant: marks alternate starting with X, and the history matches the board.
///
/// The history holds one entry per turn, entry *n* carries the mark for turn
/// *n*, every recorded position still holds its mark, and the board holds
/// nothing the history does not account for.
pub struct AlternatingMarks;

impl Invariant<Game> for AlternatingMarks {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.len() != usize::from(game.turn_count()) {
            return false;
        }

        let alternates = history
            .iter()
            .zip(0u8..)
            .all(|(mv, turn)| mv.mark == Mark::for_turn(turn));

        let recorded = history
            .iter()
            .all(|mv| game.board().get(mv.position) == Cell::Marked(mv.mark));

        alternates && recorded && game.board().marked_count() == history.len()
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... and history matches the board"
    }
}
