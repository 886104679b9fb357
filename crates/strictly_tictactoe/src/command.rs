//! Textual move commands such as `"X 1 2"`.

use super::error::BoardError;
use super::types::Player;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A request to place `player`'s mark at `(x, y)`.
///
/// Parsing checks that all three arguments are present; the board checks
/// bounds and occupancy when the command is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCommand<P = Player> {
    player: P,
    x: usize,
    y: usize,
}

impl<P> MoveCommand<P> {
    /// Creates a new command.
    pub fn new(player: P, x: usize, y: usize) -> Self {
        Self { player, x, y }
    }

    /// Returns the player making the move.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Returns the target column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Returns the target row.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Splits the command into `(player, x, y)`.
    pub fn into_parts(self) -> (P, usize, usize) {
        (self.player, self.x, self.y)
    }
}

impl<P: FromStr> FromStr for MoveCommand<P> {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut args = s.split_whitespace();
        let (Some(player), Some(x), Some(y)) = (args.next(), args.next(), args.next()) else {
            return Err(BoardError::argument(
                "Arguments for `player`, `x` and `y` are required",
            ));
        };
        if let Some(extra) = args.next() {
            return Err(BoardError::argument(format!(
                "Unexpected argument `{}`",
                extra
            )));
        }

        let player = player
            .parse::<P>()
            .map_err(|_| BoardError::argument(format!("Invalid player `{}`", player)))?;
        let x = parse_coordinate("x", x)?;
        let y = parse_coordinate("y", y)?;

        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(Self { player, x, y }),
            _ => Err(BoardError::range(x, y)),
        }
    }
}

fn parse_coordinate(axis: &str, token: &str) -> Result<i64, BoardError> {
    token
        .parse::<i64>()
        .map_err(|_| BoardError::argument(format!("Invalid `{}` coordinate `{}`", axis, token)))
}

impl<P: fmt::Display> fmt::Display for MoveCommand<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.player, self.x, self.y)
    }
}
