//! Values produced by firing transitions.

use crate::core::{Context, Event, EventKind, HistoryEntry, State, StateHistory};
use chrono::Utc;
use std::fmt;
use thiserror::Error;

/// Result of a successful [`Machine::fire`](super::Machine::fire).
///
/// `context.state()` always equals `new_state`.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<C: Context> {
    pub previous_state: C::State,
    pub new_state: C::State,
    pub context: C,
}

impl<C: Context> Outcome<C> {
    /// False for self-loops.
    pub fn state_changed(&self) -> bool {
        self.previous_state != self.new_state
    }

    pub fn into_context(self) -> C {
        self.context
    }

    /// History entry for this hop, stamped now.
    pub fn to_entry(&self, event: impl Into<String>) -> HistoryEntry<C::State> {
        HistoryEntry {
            from: self.previous_state.clone(),
            to: self.new_state.clone(),
            event: event.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Final context and recorded hops of [`Machine::replay`](super::Machine::replay).
#[derive(Clone, Debug)]
pub struct Replay<C: Context> {
    pub context: C,
    pub history: StateHistory<C::State>,
}

/// Errors raised by the engine itself.
///
/// Panics from guards, actions and observers are not represented here;
/// they unwind to the caller untouched.
#[derive(Error)]
pub enum TransitionError<C: Context, E: Event> {
    /// No transition from `state` accepts `event` with all guards passing.
    ///
    /// `context` is the value passed to `fire`, returned unchanged.
    #[error(
        "no transition from state '{}' accepts event '{}'",
        .state.name(),
        .event.kind().name()
    )]
    NoMatchingTransition {
        state: C::State,
        event: E,
        context: C,
    },
}

impl<C: Context, E: Event> TransitionError<C, E> {
    /// The state the context was in when the event was rejected.
    pub fn state(&self) -> &C::State {
        match self {
            Self::NoMatchingTransition { state, .. } => state,
        }
    }

    /// The rejected event.
    pub fn event(&self) -> &E {
        match self {
            Self::NoMatchingTransition { event, .. } => event,
        }
    }

    pub fn context(&self) -> &C {
        match self {
            Self::NoMatchingTransition { context, .. } => context,
        }
    }

    /// Take back the untouched context.
    pub fn into_context(self) -> C {
        match self {
            Self::NoMatchingTransition { context, .. } => context,
        }
    }
}

// Contexts need not be `Debug`, so the context is left out.
impl<C: Context, E: Event> fmt::Debug for TransitionError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatchingTransition { state, event, .. } => f
                .debug_struct("NoMatchingTransition")
                .field("state", state)
                .field("event", event)
                .finish_non_exhaustive(),
        }
    }
}
