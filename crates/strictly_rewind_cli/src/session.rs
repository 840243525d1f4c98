//! A single local game driven by text commands.

use crate::settings::Settings;
use crate::ui::{Command, GameView};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_rewind::Game;
use tracing::{debug, info, instrument, warn};

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Stop the session.
    Stop,
}

/// A game plus the settings used to display it.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    settings: Settings,
}

impl GameSession {
    /// Creates a session around a new game.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        info!("Creating new game session");
        Self {
            game: Game::new(),
            settings,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one command to the game.
    ///
    /// Rejected moves are ignored silently, as the engine does. A jump to a
    /// missing step is reported as an error.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn execute(&mut self, command: Command) -> Result<Flow, strictly_rewind::StepError> {
        match command {
            Command::Move(position) => {
                if self.game.apply_move(position.to_index()).is_none() {
                    debug!(%position, "Move had no effect");
                }
            }
            Command::Jump(step) => self.game.jump_to(step)?,
            Command::Show => {}
            Command::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Renders the viewed step according to the settings.
    pub fn render(&self) -> Result<String> {
        let view = GameView::of(&self.game);
        if *self.settings.json() {
            let mut json = view.to_json().context("Failed to serialize view")?;
            json.push('\n');
            Ok(json)
        } else {
            Ok(view.render(*self.settings.show_history()))
        }
    }

    /// Parses and applies one line, writing errors to `output`.
    #[instrument(skip(self, output))]
    pub fn handle_line(&mut self, line: &str, output: &mut impl Write) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                warn!(%error, "Ignoring input");
                writeln!(output, "error: {}", error).context("Failed to write output")?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(error) => {
                writeln!(output, "error: {}", error).context("Failed to write output")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Reads commands line by line, printing the view after each one.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        write!(output, "{}", self.render()?).context("Failed to write output")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }
            if self.handle_line(&line, &mut output)? == Flow::Stop {
                break;
            }
            write!(output, "{}", self.render()?).context("Failed to write output")?;
        }

        info!(steps = self.game.history().len(), "Session finished");
        Ok(())
    }

    /// Applies each command in turn and prints only the final view.
    #[instrument(skip(self, output))]
    pub fn replay(&mut self, commands: &[String], mut output: impl Write) -> Result<()> {
        for command in commands {
            if self.handle_line(command, &mut output)? == Flow::Stop {
                break;
            }
        }
        write!(output, "{}", self.render()?).context("Failed to write output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_rewind::{Player, Position};

    #[test]
    fn test_execute_move_and_jump() {
        let mut session = GameSession::new(Settings::default());
        assert_eq!(session.execute(Command::Move(Position::Center)), Ok(Flow::Continue));
        assert_eq!(session.game().next_player(), Player::O);

        assert_eq!(session.execute(Command::Jump(0)), Ok(Flow::Continue));
        assert_eq!(session.game().step(), 0);
        assert!(session.execute(Command::Jump(5)).is_err());
        assert_eq!(session.execute(Command::Quit), Ok(Flow::Stop));
    }

    #[test]
    fn test_handle_line_reports_bad_input() {
        let mut session = GameSession::new(Settings::default());
        let mut out = Vec::new();

        let flow = session.handle_line("teleport", &mut out).expect("writable");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(String::from_utf8(out).expect("utf8"), "error: Unknown command 'teleport'\n");
        assert_eq!(session.game().history().len(), 1);
    }
}
