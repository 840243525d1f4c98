//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Each accepted move is kept in
//! the history entry it produced, so navigation can describe it later.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The viewed board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Player),
}

/// Reason a jump was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StepError {
    /// The requested step is past the last history entry.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::O, Position::BottomLeft);
        assert_eq!(mov.to_string(), "O -> Bottom-left");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::GameOver(Player::X).to_string(),
            "Game is already over: X won"
        );
        assert_eq!(
            StepError::OutOfRange { step: 4, len: 2 }.to_string(),
            "Step 4 is out of range (history has 2 entries)"
        );
    }
}
