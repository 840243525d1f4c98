//! Single mark invariant: each step adds exactly one mark for the right player.

use super::super::{Game, Player, Position, Square};
use super::Invariant;

/// Invariant: entry `i` differs from entry `i - 1` in exactly one square,
/// which was empty and now holds [`Player::for_step`]`(i - 1)`.
///
/// The recorded move must name that same square and player.
pub struct SingleMarkPerStepInvariant;

impl Invariant<Game> for SingleMarkPerStepInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let expected = Player::for_step(prev_step);

                let changed: Vec<Position> = Position::ALL
                    .iter()
                    .copied()
                    .filter(|pos| before.get(*pos) != after.get(*pos))
                    .collect();

                match (changed.as_slice(), pair[1].last_move()) {
                    ([pos], Some(mov)) => {
                        before.get(*pos) == Square::Empty
                            && after.get(*pos) == Square::Occupied(expected)
                            && mov.position == *pos
                            && mov.player == expected
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each step adds one mark, alternating X then O"
    }
}
