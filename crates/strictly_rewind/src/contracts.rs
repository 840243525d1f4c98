//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move is accepted. Postconditions check the
//! history invariants once the move is in.

use super::action::MoveError;
use super::game::Game;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use super::rules::compute_winner;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The viewed board has no winner yet.
pub struct NoWinner;

impl NoWinner {
    /// Fails with [`MoveError::GameOver`] when the viewed board is won.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match compute_winner(game.board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] when the square is taken.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Viewed board has no winner
/// - Square must be empty
///
/// Postconditions:
/// - [`HistoryInvariants`] hold
pub struct MoveContract;

impl MoveContract {
    /// Checks preconditions against the viewed step.
    pub fn pre(game: &Game, position: Position) -> Result<(), MoveError> {
        NoWinner::check(game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }

    /// Checks that the history invariants still hold.
    ///
    /// Returns the descriptions of every violated invariant.
    pub fn post(game: &Game) -> Result<(), String> {
        HistoryInvariants::check_all(game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariant violated");
            format!("Postcondition failed: {}", descriptions)
        })
    }
}
