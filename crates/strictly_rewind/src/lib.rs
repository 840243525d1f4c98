//! Strictly Rewind - tic-tac-toe with move history and time travel.
//!
//! The engine keeps every board the game has passed through. Callers can
//! jump back to any earlier step and look at it; playing a move from an
//! earlier step discards the abandoned future and continues from there.
//!
//! # Architecture
//!
//! - **Game**: snapshot history, current step, move application and rewind
//! - **Rules**: pure win and draw detection
//! - **Contracts**: move preconditions and history invariants
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{Game, Player, Square};
//!
//! let mut game = Game::new();
//! game.apply_move(0);
//! assert_eq!(game.board().get_index(0), Some(Square::Occupied(Player::X)));
//! assert_eq!(game.next_player(), Player::O);
//!
//! game.jump_to(0).expect("step 0 always exists");
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError, StepError};
pub use contracts::{MoveContract, NoWinner, SquareIsEmpty};
pub use game::{Game, GameStatus};
pub use history::{HistoryEntry, StepLabel};
pub use invariants::{
    EmptyRootInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    NoMoveAfterWinInvariant, SingleMarkPerStepInvariant, StepInBoundsInvariant,
};
pub use position::Position;
pub use rules::{compute_winner, is_draw, is_full};
pub use types::{Board, Player, Square};

/// Alias for clarity when talking about a player's symbol.
pub type Marker = Player;
