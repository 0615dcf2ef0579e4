//! Turn count invariant: the counter matches the marks on the board.

use super::Invariant;
use crate::Game;

/// Invariant: `turn_count` equals the number of marked cells.
pub struct TurnCountMatchesBoard;

impl Invariant<Game> for TurnCountMatchesBoard {
    fn holds(game: &Game) -> bool {
        usize::from(game.turn_count()) == game.board().marked_count()
    }

    fn description() -> &'static str {
        "Turn count equals the number of marked cells"
    }
}
