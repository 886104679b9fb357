//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::Board;
use crate::board::{CELLS, HEIGHT, WIDTH, index};
use std::fmt;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty grid must never hit an occupied
/// cell and must reproduce the current grid exactly.
pub struct MonotonicBoardInvariant;

impl<P> Invariant<Board<P>> for MonotonicBoardInvariant
where
    P: Clone + PartialEq + fmt::Debug,
{
    fn holds(board: &Board<P>) -> bool {
        let mut reconstructed = [None; CELLS];

        for (i, mv) in board.history.iter().enumerate() {
            if mv.x() >= WIDTH || mv.y() >= HEIGHT {
                return false;
            }
            let cell = &mut reconstructed[index(mv.x(), mv.y())];
            if cell.is_some() {
                return false;
            }
            *cell = Some(i);
        }

        reconstructed == board.cells
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
