//! The board state machine.
//!
//! A [`Board`] owns the 3x3 grid, the move history and the event bus. All
//! mutation goes through [`Board::place`] and [`Board::reset`]; every other
//! method only observes.

use super::command::MoveCommand;
use super::error::BoardError;
use super::events::{
    selected_kinds, EventBus, EventContext, EventKind, EventSelector, Handler, Payload,
};
use super::rules;
use super::types::{Move, Player};
use std::fmt;
use tracing::{debug, info, instrument, warn};

#[cfg(debug_assertions)]
use super::invariants::{BoardInvariants, InvariantSet};

/// Board width in cells.
pub const WIDTH: usize = 3;

/// Board height in cells.
pub const HEIGHT: usize = 3;

pub(crate) const CELLS: usize = WIDTH * HEIGHT;

/// Tic-tac-toe board with move history and event notification.
///
/// Player tokens are opaque: the board never checks who is moving or whose
/// turn it is. It also keeps accepting moves after `victory` or `draw` has
/// fired; callers stop on their own or call [`reset`](Self::reset).
///
/// Handlers run synchronously inside the call that emits and receive the
/// board, so they may place marks, reset or change subscriptions. A handler
/// that keeps answering its own events recurses without bound.
#[derive(Debug)]
pub struct Board<P = Player> {
    /// History index of the move occupying each cell, row-major.
    pub(crate) cells: [Option<usize>; CELLS],
    /// Moves in placement order.
    pub(crate) history: Vec<Move<P>>,
    events: EventBus<P>,
}

/// Linear index of an in-bounds cell.
pub(crate) const fn index(x: usize, y: usize) -> usize {
    y * WIDTH + x
}

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl<P> Board<P>
where
    P: Clone + PartialEq + fmt::Debug,
{
    /// Creates an empty board.
    ///
    /// Construction goes through [`reset`](Self::reset), so a `reset` event is
    /// emitted before anyone can have subscribed.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self {
            cells: [None; CELLS],
            history: Vec::new(),
            events: EventBus::new(),
        };
        board.reset();
        board
    }

    /// Board width in cells.
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Board height in cells.
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Clears every mark and the history, then emits `reset`.
    ///
    /// Registered handlers are kept.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) -> &mut Self {
        self.history = Vec::new();
        self.cells = [None; CELLS];
        debug!("Board cleared");
        self.emit(Payload::Reset);
        self
    }

    /// Returns the move occupying `(x, y)`, if any.
    ///
    /// Off-board coordinates have no occupant.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Move<P>> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        self.cells[index(x, y)].and_then(|i| self.history.get(i))
    }

    /// Checks if no move occupies `(x, y)`.
    ///
    /// Bounds are not validated: off-board coordinates report `true`.
    pub fn is_available(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_none()
    }

    /// Places `player`'s mark at `(x, y)`.
    ///
    /// Returns `Ok(true)` when the mark was placed. Events fire in order:
    /// `move`, then `victory` if `player` completed a line, otherwise `draw`
    /// if the board is now full.
    ///
    /// Returns `Ok(false)` without touching the board when the cell is
    /// occupied, after emitting `badmove`.
    ///
    /// # Errors
    ///
    /// Returns a [`Range`](crate::BoardErrorKind::Range) error when `x` or `y`
    /// lies outside the board. Nothing is mutated or emitted in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, player: P, x: usize, y: usize) -> Result<bool, BoardError> {
        if x >= WIDTH || y >= HEIGHT {
            warn!("Move outside the board");
            return Err(BoardError::range(signed(x), signed(y)));
        }

        if !self.is_available(x, y) {
            warn!("Cell already occupied");
            self.emit(Payload::BadMove { player, x, y });
            return Ok(false);
        }

        let mv = Move::new(player.clone(), x, y);
        self.cells[index(x, y)] = Some(self.history.len());
        self.history.push(mv.clone());
        debug!(moves = self.history.len(), "Mark placed");

        #[cfg(debug_assertions)]
        self.check_invariants();

        self.emit(Payload::Move(mv));

        if self.detect_victory(&player) {
            info!("Victory");
            self.emit(Payload::Victory(player));
        } else if self.is_full() {
            info!("Draw");
            self.emit(Payload::Draw);
        }

        Ok(true)
    }

    /// Places the move described by `command`.
    ///
    /// # Errors
    ///
    /// Same as [`place`](Self::place).
    pub fn apply(&mut self, command: MoveCommand<P>) -> Result<bool, BoardError> {
        let (player, x, y) = command.into_parts();
        self.place(player, x, y)
    }

    /// Checks whether `player` owns one of the eight winning lines.
    pub fn detect_victory(&self, player: &P) -> bool {
        rules::detect_victory(self, player)
    }

    /// Number of occupied cells.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns copies of all moves since the last reset, oldest first.
    pub fn history(&self) -> Vec<Move<P>> {
        self.history.clone()
    }

    /// Registers `handler` for the selected events.
    ///
    /// Registering a handler that is already present for an event does
    /// nothing for that event.
    ///
    /// # Errors
    ///
    /// Returns an [`Argument`](crate::BoardErrorKind::Argument) error when an
    /// event name is unknown or the selection names nothing.
    #[instrument(skip(self, events, handler))]
    pub fn on(
        &mut self,
        events: impl EventSelector,
        handler: &Handler<P>,
    ) -> Result<&mut Self, BoardError> {
        let kinds = selected_kinds(events)?;
        self.events.subscribe(&kinds, handler);
        Ok(self)
    }

    /// Unregisters `handlers` from the selected events.
    ///
    /// An empty `handlers` slice removes every handler of those events.
    ///
    /// # Errors
    ///
    /// Same as [`on`](Self::on).
    #[instrument(skip(self, events, handlers), fields(count = handlers.len()))]
    pub fn off(
        &mut self,
        events: impl EventSelector,
        handlers: &[Handler<P>],
    ) -> Result<&mut Self, BoardError> {
        let kinds = selected_kinds(events)?;
        self.events.unsubscribe(&kinds, handlers);
        Ok(self)
    }

    /// Number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.events.count(kind)
    }

    /// Dispatches `payload` to the handlers of its kind, newest first.
    ///
    /// Every handler sees the same context, which is returned afterwards.
    #[instrument(skip(self, payload), fields(event = %payload.kind()))]
    fn emit(&mut self, payload: Payload<P>) -> EventContext {
        let mut context = EventContext::new(payload.kind());
        let handlers = self.events.snapshot(context.kind());
        if handlers.is_empty() {
            return context;
        }
        debug!(handlers = handlers.len(), "Dispatching event");
        for handler in handlers.iter().rev() {
            handler.call(self, &mut context, &payload);
        }
        context
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        let checked = BoardInvariants::check_all(self);
        if let Err(violations) = &checked {
            for violation in violations {
                warn!(invariant = %violation.description, "Board invariant violated");
            }
        }
        debug_assert!(checked.is_ok(), "Board invariants violated");
    }
}

impl<P> Default for Board<P>
where
    P: Clone + PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
