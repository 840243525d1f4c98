//! Strictly Rewind - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_rewind_cli::{Cli, CliCommand, GameSession, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .context("Failed to load settings")?
        .with_json(cli.json);

    init_tracing(settings.log_filter());

    let mut session = GameSession::new(settings);
    match cli.command {
        CliCommand::Play => run_play(&mut session),
        CliCommand::Replay { commands } => run_replay(&mut session, &commands),
    }
}

/// Logs to stderr so stdout carries only the game view.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Interactive mode: commands from stdin.
#[instrument(skip_all)]
fn run_play(session: &mut GameSession) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout())
}

/// Script mode: commands from the argument list.
#[instrument(skip(session))]
fn run_replay(session: &mut GameSession, commands: &[String]) -> Result<()> {
    info!(count = commands.len(), "Replaying commands");
    session.replay(commands, std::io::stdout())
}
