//! Step bounds invariant: the current step names a history entry.

use super::super::Game;
use super::Invariant;

/// Invariant: `step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<Game> for StepInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step is a valid history index"
    }
}
