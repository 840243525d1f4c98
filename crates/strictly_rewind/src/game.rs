//! Game state engine with move history and time travel.
//!
//! The engine stores one [`HistoryEntry`] per step. Looking at an earlier
//! step does not discard anything; the abandoned future is dropped only
//! when a move is accepted from that earlier step.

use super::action::{Move, MoveError, StepError};
use super::contracts::MoveContract;
use super::history::{HistoryEntry, StepLabel};
use super::position::Position;
use super::rules::{compute_winner, is_draw};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status shown for the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// The viewed board has a winner.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner on the viewed board; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Tic-tac-toe game with a navigable history of board snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
}

impl Game {
    /// Creates a new game at the empty starting board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::root()],
            step: 0,
        }
    }

    /// Plays the given cells in order from a new game.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &cell in cells {
            let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
            game.try_move(position)?;
        }
        Ok(game)
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the next player's mark at `cell` (0-8).
    ///
    /// Invalid moves are ignored: an occupied or off-board cell, or a viewed
    /// board that already has a winner, leaves the game unchanged. Returns
    /// the move when it was accepted.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&mut self, cell: usize) -> Option<Move> {
        let result = Position::from_index(cell)
            .ok_or(MoveError::OutOfBounds(cell))
            .and_then(|position| self.try_move(position));

        match result {
            Ok(mov) => Some(mov),
            Err(error) => {
                debug!(cell, %error, "Move ignored");
                None
            }
        }
    }

    /// Places the next player's mark at `position`, reporting rejections.
    ///
    /// On success, every entry after the viewed step is discarded, the new
    /// board is appended and becomes the viewed step.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed board has a winner
    /// - [`MoveError::SquareOccupied`] if the square is taken
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn try_move(&mut self, position: Position) -> Result<Move, MoveError> {
        MoveContract::pre(self, position)?;

        let mov = Move::new(self.next_player(), position);
        let entry = HistoryEntry::after(self.board(), mov);

        self.history.truncate(self.step + 1);
        self.history.push(entry);
        self.step = self.history.len() - 1;

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(self);
            debug_assert!(post.is_ok(), "{:?}", post);
        }

        info!(%mov, step = self.step, "Move applied");
        Ok(mov)
    }

    /// Views the board at `step` without discarding later entries.
    ///
    /// The next player follows the step parity: X on even steps, O on odd.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] if `step` is past the last entry.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepError> {
        if step >= self.history.len() {
            return Err(StepError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.step = step;
        info!(step, next = %self.next_player(), "Jumped to step");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The viewed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the last history entry.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// True when the viewed step is the last entry.
    pub fn is_at_latest(&self) -> bool {
        self.step == self.latest_step()
    }

    /// All history entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The viewed history entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// The viewed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// The player whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Player> {
        compute_winner(self.board())
    }

    /// True when the viewed board is full with no winner.
    pub fn is_draw(&self) -> bool {
        is_draw(self.board())
    }

    /// Status for the viewed step.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Winner(winner),
            None => GameStatus::NextPlayer(self.next_player()),
        }
    }

    /// Positions a move could be accepted at from the viewed step.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.board())
    }

    /// Navigation labels, one per history entry.
    pub fn moves(&self) -> Vec<StepLabel> {
        (0..self.history.len()).map(StepLabel::for_step).collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
