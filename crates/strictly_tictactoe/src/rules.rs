//! Win and draw detection.

use super::board::Board;
use std::fmt;
use tracing::instrument;

/// The eight winning lines as `(x, y)` cells.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks whether `player` owns every cell of some winning line.
///
/// Only the acting player can have just completed a line, so the opponent's
/// marks are never inspected.
#[instrument(skip(board))]
pub fn detect_victory<P>(board: &Board<P>, player: &P) -> bool
where
    P: Clone + PartialEq + fmt::Debug,
{
    WINNING_LINES.iter().any(|line| {
        line.iter()
            .all(|&(x, y)| board.cell(x, y).is_some_and(|mv| mv.player() == player))
    })
}

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full<P>(board: &Board<P>) -> bool
where
    P: Clone + PartialEq + fmt::Debug,
{
    board.move_count() == board.width() * board.height()
}
