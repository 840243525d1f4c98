//! Text commands understood by the driver.

use derive_more::{Display, Error};
use std::str::FromStr;
use strictly_rewind::Position;

/// A single user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark.
    Move(Position),
    /// View an earlier (or later) step.
    Jump(usize),
    /// Print the current view.
    Show,
    /// Stop reading commands.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// `move` without a usable cell.
    #[display("Unknown cell '{}' (use 0-8 or a label like 'center')", _0)]
    BadCell(#[error(not(source))] String),
    /// `jump` without a usable step.
    #[display("Unknown step '{}'", _0)]
    BadStep(#[error(not(source))] String),
    /// Anything else.
    #[display("Unknown command '{}'", _0)]
    Unknown(#[error(not(source))] String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };

        match verb.to_lowercase().as_str() {
            "move" | "m" => Position::from_label_or_number(rest)
                .map(Command::Move)
                .ok_or_else(|| CommandError::BadCell(rest.to_string())),
            "jump" | "j" => rest
                .parse::<usize>()
                .map(Command::Jump)
                .map_err(|_| CommandError::BadStep(rest.to_string())),
            "show" => Ok(Command::Show),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            // Bare cell number or label
            _ => Position::from_label_or_number(input)
                .map(Command::Move)
                .ok_or_else(|| CommandError::Unknown(input.to_string())),
        }
    }
}
