//! Text front end: command parsing and view rendering.

mod command;
mod view;

pub use command::{Command, CommandError};
pub use view::GameView;
