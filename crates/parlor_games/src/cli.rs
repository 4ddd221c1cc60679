//! Command-line interface for parlor_games.

use clap::{Parser, Subcommand};

/// Parlor Games - board and card games at the terminal
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Play tic-tac-toe or twenty-one at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against the computer
    Tictactoe,

    /// Play twenty-one against the dealer
    TwentyOne,
}
