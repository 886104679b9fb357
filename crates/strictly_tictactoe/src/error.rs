//! Board error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Kinds of programmer errors a board can raise.
///
/// A move onto an occupied cell is not an error: it is reported through
/// `Ok(false)` and a `badmove` event instead.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Arguments were missing, malformed or named an unknown event.
    #[display("Invalid arguments: {}", _0)]
    Argument(String),

    /// Coordinates fall outside the board.
    #[display("Index out of range: ({}, {})", x, y)]
    Range {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
    },
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// What went wrong.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`BoardErrorKind::Argument`].
    #[track_caller]
    pub fn argument(message: impl Into<String>) -> Self {
        Self::new(BoardErrorKind::Argument(message.into()))
    }

    /// Shorthand for [`BoardErrorKind::Range`].
    #[track_caller]
    pub fn range(x: i64, y: i64) -> Self {
        Self::new(BoardErrorKind::Range { x, y })
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &BoardErrorKind {
        &self.kind
    }
}
