//! Empty root invariant: the first history entry is the starting board.

use super::super::Game;
use super::Invariant;

/// Invariant: history[0] exists and is the all-empty board with no move.
pub struct EmptyRootInvariant;

impl Invariant<Game> for EmptyRootInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .first()
            .is_some_and(|root| root.board().is_blank() && root.last_move().is_none())
    }

    fn description() -> &'static str {
        "First history entry is the empty board"
    }
}
