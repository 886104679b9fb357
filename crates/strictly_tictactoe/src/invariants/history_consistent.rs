//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::Board;
use std::fmt;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
/// No moves are missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl<P> Invariant<Board<P>> for HistoryConsistentInvariant
where
    P: Clone + PartialEq + fmt::Debug,
{
    fn holds(board: &Board<P>) -> bool {
        let occupied = board.cells.iter().filter(|cell| cell.is_some()).count();
        occupied == board.history.len()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
