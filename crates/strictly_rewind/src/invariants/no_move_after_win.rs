//! No move after win: a won board is always the last entry of its line.

use super::super::{Game, compute_winner};
use super::Invariant;

/// Invariant: only the final history entry may have a winner.
pub struct NoMoveAfterWinInvariant;

impl Invariant<Game> for NoMoveAfterWinInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let last = history.len().saturating_sub(1);
        history
            .iter()
            .take(last)
            .all(|entry| compute_winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a winning board"
    }
}
