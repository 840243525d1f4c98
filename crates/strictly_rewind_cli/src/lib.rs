//! Command-line driver for the strictly_rewind engine.
//!
//! Parses text commands, applies them to a [`strictly_rewind::Game`] and
//! prints the board, status and navigation list.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod session;
mod settings;
mod ui;

pub use cli::{Cli, Command as CliCommand};
pub use session::{Flow, GameSession};
pub use settings::{ConfigError, Settings};
pub use ui::{Command, CommandError, GameView};
