//! Board snapshots kept for time travel.

use super::action::Move;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// An immutable board snapshot in the game history.
///
/// Entry 0 is the empty starting board and has no move; every later entry
/// holds the board after its move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The empty starting entry.
    pub fn root() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Entry produced by playing `mov` on `previous`.
    pub(crate) fn after(previous: &Board, mov: Move) -> Self {
        Self {
            board: previous.with_mark(mov.position, mov.player),
            last_move: Some(mov),
        }
    }

    /// Same entry with its board replaced.
    #[cfg(test)]
    pub(crate) fn with_board(self, board: Board) -> Self {
        Self { board, ..self }
    }

    /// Same entry with its recorded move replaced.
    #[cfg(test)]
    pub(crate) fn with_move(self, mov: Move) -> Self {
        Self {
            last_move: Some(mov),
            ..self
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this entry, `None` for the root.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

/// Navigation label for one history step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLabel {
    /// The step this label jumps to.
    pub step: usize,
    /// Text describing the step.
    pub text: String,
}

impl StepLabel {
    /// Label for `step`: the start of the game or the numbered move.
    pub fn for_step(step: usize) -> Self {
        let text = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self { step, text }
    }
}

impl std::fmt::Display for StepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
