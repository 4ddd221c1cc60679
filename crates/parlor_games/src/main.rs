//! Parlor Games - terminal board and card games.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod tictactoe;
mod twentyone;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so the game rendering owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Tictactoe => tictactoe::run(),
        Command::TwentyOne => twentyone::run(),
    }
}
