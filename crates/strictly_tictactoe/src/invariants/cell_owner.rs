//! Cell owner invariant: occupied cells point at a move placed there.

use super::Invariant;
use crate::Board;
use crate::board::{WIDTH, index};
use std::fmt;

/// Invariant: Each occupied cell refers to a history entry with the same
/// coordinates.
pub struct CellOwnerInvariant;

impl<P> Invariant<Board<P>> for CellOwnerInvariant
where
    P: Clone + PartialEq + fmt::Debug,
{
    fn holds(board: &Board<P>) -> bool {
        board.cells.iter().enumerate().all(|(cell, entry)| match entry {
            None => true,
            Some(i) => board
                .history
                .get(*i)
                .is_some_and(|mv| index(mv.x(), mv.y()) == cell && mv.x() < WIDTH),
        })
    }

    fn description() -> &'static str {
        "Occupied cells refer to moves placed on them"
    }
}
