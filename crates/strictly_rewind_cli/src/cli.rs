//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional; defaults apply when missing)
    #[arg(long, global = true, default_value = "strictly_rewind.toml")]
    pub config: PathBuf,

    /// Print the game view as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read commands from stdin, one per line, printing the view after each
    Play,

    /// Apply each argument as a command and print the final view
    Replay {
        /// Commands such as "move 4", "4", "center" or "jump 2"
        #[arg(required = true)]
        commands: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["strictly_rewind", "--json", "replay", "4", "jump 0"]);
        assert!(cli.json);
        match cli.command {
            Command::Replay { commands } => assert_eq!(commands, vec!["4", "jump 0"]),
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["strictly_rewind", "play"]);
        assert_eq!(cli.config, PathBuf::from("strictly_rewind.toml"));
        assert!(!cli.json);
    }
}
