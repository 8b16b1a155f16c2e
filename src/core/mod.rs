//! Core building blocks of the engine.
//!
//! This module contains the pure primitives transitions are made of:
//! - States, events and the context capability via the `State`, `Event`,
//!   `EventKind` and `Context` traits
//! - Guard predicates and actions with their combinators
//! - Immutable history tracking
//!
//! Nothing in this module has side effects of its own.

mod action;
mod context;
mod event;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use context::{Context, Entity};
pub use event::{Event, EventKind};
pub use guard::Guard;
pub use history::{HistoryEntry, StateHistory};
pub use state::State;
