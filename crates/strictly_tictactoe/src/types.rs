//! Core domain types for tic-tac-toe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Player in the game.
///
/// The board treats players as opaque tokens, so any `Clone + PartialEq`
/// type works; this enum is the default token.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

/// A mark placed on the board.
///
/// Moves are created by [`Board::place`](crate::Board::place) and never
/// change afterwards. [`Board::history`](crate::Board::history) hands out
/// clones, so the board's own records stay untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move<P = Player> {
    player: P,
    x: usize,
    y: usize,
    time: DateTime<Utc>,
}

impl<P: fmt::Debug> Move<P> {
    /// Records a mark placed now.
    #[instrument]
    pub(crate) fn new(player: P, x: usize, y: usize) -> Self {
        Self {
            player,
            x,
            y,
            time: Utc::now(),
        }
    }
}

impl<P> Move<P> {
    /// Returns the player who placed the mark.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Returns the column (0-based).
    pub fn x(&self) -> usize {
        self.x
    }

    /// Returns the row (0-based).
    pub fn y(&self) -> usize {
        self.y
    }

    /// Returns when the mark was placed.
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

impl<P: fmt::Display> fmt::Display for Move<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.x, self.y)
    }
}
