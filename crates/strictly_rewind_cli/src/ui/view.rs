//! Stateless text rendering of the viewed step.

use derive_getters::Getters;
use serde::Serialize;
use strictly_rewind::{Game, GameStatus, StepLabel};

/// Everything a front end shows for the viewed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// The viewed step.
    step: usize,
    /// Board rows as text (`X|2|O` ...).
    board: String,
    /// Status for the viewed step.
    status: GameStatus,
    /// Status text ("Next player: X" / "Winner: O").
    status_text: String,
    /// Navigation labels, one per history entry.
    moves: Vec<StepLabel>,
}

impl GameView {
    /// Captures the view of `game` at its current step.
    pub fn of(game: &Game) -> Self {
        let status = game.status();
        Self {
            step: game.step(),
            board: game.board().display(),
            status,
            status_text: status.to_string(),
            moves: game.moves(),
        }
    }

    /// Renders the view as plain text.
    ///
    /// The navigation list marks the viewed step with `>`.
    pub fn render(&self, show_history: bool) -> String {
        let mut out = format!("{}\n\n{}\n", self.board, self.status_text);
        if show_history {
            for label in &self.moves {
                let marker = if label.step == self.step { '>' } else { ' ' };
                out.push_str(&format!("{} {}. {}\n", marker, label.step, label.text));
            }
        }
        out
    }

    /// Renders the view as a JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_new_game() {
        let view = GameView::of(&Game::new());
        assert_eq!(
            view.render(true),
            "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\nNext player: X\n> 0. Go to game start\n"
        );
    }

    #[test]
    fn test_render_marks_viewed_step() {
        let mut game = Game::replay(&[4, 0]).expect("valid game");
        game.jump_to(1).expect("step exists");
        let text = GameView::of(&game).render(true);

        assert!(text.contains("4|X|6"));
        assert!(text.contains("Next player: O"));
        assert!(text.contains("  0. Go to game start\n"));
        assert!(text.contains("> 1. Go to move #1\n"));
        assert!(text.contains("  2. Go to move #2\n"));
    }

    #[test]
    fn test_render_without_history() {
        let view = GameView::of(&Game::new());
        assert!(!view.render(false).contains("Go to"));
    }

    #[test]
    fn test_json_fields() {
        let game = Game::replay(&[0, 3, 1, 4, 2]).expect("valid game");
        let json: serde_json::Value =
            serde_json::from_str(&GameView::of(&game).to_json().expect("serializable"))
                .expect("valid json");

        assert_eq!(json["step"], 5);
        assert_eq!(json["status_text"], "Winner: X");
        assert_eq!(json["moves"].as_array().map(Vec::len), Some(6));
    }
}
