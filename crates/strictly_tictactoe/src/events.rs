//! Typed publish/subscribe bus embedded in the board.
//!
//! Handlers for one event run in reverse registration order: the handler
//! registered last runs first. Every handler of a single emission receives
//! the same [`EventContext`], so a `prevent_default()` call is visible to the
//! handlers that run after it.
//!
//! Handlers also receive the emitting board and may call back into it. The
//! handler list is snapshotted when an emission starts, so handlers added or
//! removed from inside a handler only affect later emissions.

use super::error::BoardError;
use super::types::{Move, Player};
use super::Board;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Names of the events a board emits.
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
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The board was cleared.
    Reset,
    /// A mark was placed.
    Move,
    /// The acting player completed a winning line.
    Victory,
    /// The board filled up without a winner.
    Draw,
    /// A move targeted an occupied cell.
    BadMove,
}

/// Data delivered with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<P = Player> {
    /// Board was reset.
    Reset,
    /// The freshly placed move.
    Move(Move<P>),
    /// The winning player.
    Victory(P),
    /// Board is full with no winner.
    Draw,
    /// A rejected attempt on an occupied cell.
    BadMove {
        /// Player who attempted the move.
        player: P,
        /// Targeted column.
        x: usize,
        /// Targeted row.
        y: usize,
    },
}

impl<P> Payload<P> {
    /// Returns the event this payload belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            Payload::Reset => EventKind::Reset,
            Payload::Move(_) => EventKind::Move,
            Payload::Victory(_) => EventKind::Victory,
            Payload::Draw => EventKind::Draw,
            Payload::BadMove { .. } => EventKind::BadMove,
        }
    }
}

/// Cancelable context shared by all handlers of one emission.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct EventContext {
    kind: EventKind,
    #[new(default)]
    default_prevented: bool,
}

impl EventContext {
    /// Returns the event being dispatched.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Marks the default action of this event as canceled.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns true once any handler has called [`prevent_default`](Self::prevent_default).
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

type Callback<P> = dyn Fn(&mut Board<P>, &mut EventContext, &Payload<P>);

/// A registered event callback.
///
/// Handlers compare by identity: clones of one handler are equal, two
/// handlers built from identical closures are not. Keep a clone around to
/// pass to [`Board::off`](crate::Board::off).
pub struct Handler<P = Player>(Rc<Callback<P>>);

impl<P> Handler<P> {
    /// Wraps a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut Board<P>, &mut EventContext, &Payload<P>) + 'static,
    {
        Self(Rc::new(callback))
    }

    pub(crate) fn call(
        &self,
        board: &mut Board<P>,
        context: &mut EventContext,
        payload: &Payload<P>,
    ) {
        (self.0)(board, context, payload)
    }
}

impl<P> Clone for Handler<P> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<P> PartialEq for Handler<P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<P> Eq for Handler<P> {}

impl<P> fmt::Debug for Handler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Rc::as_ptr(&self.0))
    }
}

/// Anything that names one or more events.
///
/// Implemented for a single [`EventKind`], sequences of kinds, a
/// whitespace-separated string such as `"move victory draw"` and slices of
/// such names. Selections that name no event at all are rejected by
/// [`Board::on`](crate::Board::on) and [`Board::off`](crate::Board::off).
pub trait EventSelector {
    /// Resolves the selection into event kinds.
    fn event_kinds(self) -> Result<Vec<EventKind>, BoardError>;
}

impl EventSelector for EventKind {
    fn event_kinds(self) -> Result<Vec<EventKind>, BoardError> {
        Ok(vec![self])
    }
}

impl EventSelector for &str {
    fn event_kinds(self) -> Result<Vec<EventKind>, BoardError> {
        self.split_whitespace().map(parse_event_name).collect()
    }
}

impl EventSelector for &[&str] {
    fn event_kinds(self) -> Result<Vec<EventKind>, BoardError> {
        self.iter().map(|name| parse_event_name(name.trim())).collect()
    }
}

impl EventSelector for &[EventKind] {
    fn event_kinds(self) -> Result<Vec<EventKind>, BoardError> {
        Ok(self.to_vec())
    }
}

impl<const N: usize> EventSelector for [EventKind; N] {
    fn event_kinds(self) -> Result<Vec<EventKind>, BoardError> {
        Ok(self.to_vec())
    }
}

impl EventSelector for Vec<EventKind> {
    fn event_kinds(self) -> Result<Vec<EventKind>, BoardError> {
        Ok(self)
    }
}

fn parse_event_name(name: &str) -> Result<EventKind, BoardError> {
    name.parse::<EventKind>()
        .map_err(|_| BoardError::argument(format!("Unknown event `{}`", name)))
}

/// Resolves `events`, rejecting a selection that names nothing.
pub(crate) fn selected_kinds(
    events: impl EventSelector,
) -> Result<Vec<EventKind>, BoardError> {
    let kinds = events.event_kinds()?;
    if kinds.is_empty() {
        return Err(BoardError::argument("At least one event name is required"));
    }
    Ok(kinds)
}

/// Handler table keyed by event kind, in registration order.
#[derive(Debug)]
pub(crate) struct EventBus<P> {
    handlers: HashMap<EventKind, Vec<Handler<P>>>,
}

impl<P> EventBus<P> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` once per kind; repeats are ignored.
    pub(crate) fn subscribe(&mut self, kinds: &[EventKind], handler: &Handler<P>) {
        for kind in kinds {
            let handlers = self.handlers.entry(*kind).or_default();
            if !handlers.contains(handler) {
                handlers.push(handler.clone());
                debug!(event = %kind, handlers = handlers.len(), "Handler registered");
            }
        }
    }

    /// Removes the given handlers, or every handler when `handlers` is empty.
    pub(crate) fn unsubscribe(&mut self, kinds: &[EventKind], handlers: &[Handler<P>]) {
        for kind in kinds {
            if handlers.is_empty() {
                self.handlers.remove(kind);
                debug!(event = %kind, "All handlers removed");
            } else if let Some(registered) = self.handlers.get_mut(kind) {
                registered.retain(|h| !handlers.contains(h));
                debug!(event = %kind, handlers = registered.len(), "Handlers removed");
            }
        }
    }

    /// Number of handlers currently registered for `kind`.
    pub(crate) fn count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Copy of the handlers registered for `kind`, in registration order.
    pub(crate) fn snapshot(&self, kind: EventKind) -> Vec<Handler<P>> {
        self.handlers.get(&kind).cloned().unwrap_or_default()
    }
}
