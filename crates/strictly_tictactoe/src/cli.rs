//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - replay games on an event-driven board
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Replay tic-tac-toe games and report outcomes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print the resulting move history as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay the moves of a TOML game script
    Replay {
        /// Path to the script file
        script: std::path::PathBuf,
    },

    /// Replay moves given as arguments, e.g. "X 0 0" "O 1 1"
    Play {
        /// Moves in play order
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
