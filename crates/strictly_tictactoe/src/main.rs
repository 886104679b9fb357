//! Strictly Tic-Tac-Toe - replay CLI
//!
//! Replays scripted games against a fresh board and logs the outcome.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{
    Board, EventContext, EventKind, GameScript, Handler, Move, MoveCommand, Payload, Player,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (label, commands) = match cli.command {
        Command::Replay { script } => {
            let script = GameScript::from_file(&script)?;
            let commands = script.commands::<Player>()?;
            (script.name().clone(), commands)
        }
        Command::Play { moves } => {
            let commands = moves
                .iter()
                .map(|m| m.parse())
                .collect::<Result<Vec<MoveCommand>, _>>()?;
            ("command line".to_string(), commands)
        }
    };

    let history = replay(&label, commands)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else {
        for mv in &history {
            println!("{mv}");
        }
    }

    Ok(())
}

/// Replays `commands` on a fresh board and returns its history.
#[instrument(skip(commands), fields(moves = commands.len()))]
fn replay(label: &str, commands: Vec<MoveCommand>) -> Result<Vec<Move>> {
    let mut board: Board = Board::new();

    let outcome = Handler::new(
        |board: &mut Board, _event: &mut EventContext, payload: &Payload| match payload {
            Payload::Victory(player) => info!(%player, moves = board.move_count(), "Victory"),
            Payload::Draw => info!(moves = board.move_count(), "Draw"),
            Payload::BadMove { player, x, y } => {
                warn!(%player, x, y, "Rejected move onto occupied cell")
            }
            Payload::Reset | Payload::Move(_) => {}
        },
    );
    board.on(
        [EventKind::Victory, EventKind::Draw, EventKind::BadMove],
        &outcome,
    )?;

    for command in commands {
        board.apply(command)?;
    }

    info!(placed = board.move_count(), "Replay finished");
    Ok(board.history())
}
