//! Strictly Tic-Tac-Toe - an event-driven 3x3 board
//!
//! This library tracks marks placed by players, detects wins and draws,
//! keeps the move history and notifies observers through typed events.
//!
//! # Architecture
//!
//! - **Board**: grid, history and move legality
//! - **Events**: publish/subscribe with a shared, cancelable context
//! - **Rules**: the eight winning lines and the draw condition
//! - **Invariants**: consistency checks run after every placement in debug builds
//! - **Scripts**: TOML move lists replayed by the `strictly_tictactoe` binary
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use strictly_tictactoe::{Board, EventContext, EventKind, Handler, Payload};
//!
//! # fn main() -> Result<(), strictly_tictactoe::BoardError> {
//! let winner = Rc::new(Cell::new(None));
//! let seen = Rc::clone(&winner);
//! let on_victory: Handler<&'static str> = Handler::new(
//!     move |_board: &mut Board<&'static str>, _event: &mut EventContext, payload: &Payload<&'static str>| {
//!         if let Payload::Victory(player) = payload {
//!             seen.set(Some(*player));
//!         }
//!     },
//! );
//!
//! let mut board = Board::new();
//! board.on(EventKind::Victory, &on_victory)?;
//! board.place("X", 0, 0)?;
//! board.place("X", 1, 0)?;
//! assert!(board.place("X", 2, 0)?);
//! assert_eq!(winner.get(), Some("X"));
//! assert_eq!(board.history().len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod command;
mod error;
mod events;
mod invariants;
mod rules;
mod script;
mod types;

// Crate-level exports - Board
pub use board::{Board, HEIGHT, WIDTH};

// Crate-level exports - Commands and scripts
pub use command::MoveCommand;
pub use script::{GameScript, ScriptError};

// Crate-level exports - Errors
pub use error::{BoardError, BoardErrorKind};

// Crate-level exports - Events
pub use events::{EventContext, EventKind, EventSelector, Handler, Payload};

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, CellOwnerInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - Rules and domain types
pub use rules::WINNING_LINES;
pub use types::{Move, Player};
