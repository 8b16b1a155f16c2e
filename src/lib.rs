//! Ruleflow: a pure rule-driven state transition engine
//!
//! Ruleflow evaluates declarative transition rules against an immutable
//! domain value and produces a new state plus a transformed value. The
//! machine is an ordered, immutable rule set; it never stores the values it
//! works on, so a single machine can be shared freely across threads.
//!
//! # Core Concepts
//!
//! - **Context**: the domain value, exposing its state and a `with_state` copy
//! - **Events**: typed triggers carrying an explicit kind used for dispatch
//! - **Guards**: pure predicates that gate a transition
//! - **Actions**: pure transforms applied while a transition fires
//! - **Machine**: first-match rule selection with `fire`, `can_fire` and
//!   `available_events`
//!
//! # Example
//!
//! ```rust
//! use ruleflow::core::{Context, Guard};
//! use ruleflow::engine::{Machine, Transition, TransitionError};
//! use ruleflow::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum DocState {
//!         Draft,
//!         Published,
//!         Archived,
//!     }
//!     final: [Archived]
//! }
//!
//! event_enum! {
//!     enum DocEvent {
//!         Publish,
//!         Archive,
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Document {
//!     state: DocState,
//!     content: String,
//! }
//!
//! impl Context for Document {
//!     type State = DocState;
//!
//!     fn state(&self) -> &DocState {
//!         &self.state
//!     }
//!
//!     fn with_state(self, state: DocState) -> Self {
//!         Self { state, ..self }
//!     }
//! }
//!
//! let machine: Machine<Document, DocEvent> = Machine::new(vec![
//!     Transition::new(DocState::Draft, DocEvent::Publish, DocState::Published)
//!         .with_guard(Guard::named("has content", |d: &Document| !d.content.is_empty())),
//!     Transition::new(DocState::Published, DocEvent::Archive, DocState::Archived),
//! ]);
//!
//! let empty = Document { state: DocState::Draft, content: String::new() };
//! let err = machine.fire(empty, &DocEvent::Publish).unwrap_err();
//! assert!(matches!(
//!     err,
//!     TransitionError::NoMatchingTransition { state: DocState::Draft, .. }
//! ));
//!
//! // A rejected event hands the context back untouched.
//! let mut doc = err.into_context();
//! doc.content.push_str("hi");
//! let outcome = machine.fire(doc, &DocEvent::Publish).unwrap();
//! assert_eq!(outcome.new_state, DocState::Published);
//! assert_eq!(outcome.context.state, DocState::Published);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod lint;

// Re-export commonly used types
pub use crate::builder::{MachineBuilder, TransitionBuilder};
pub use crate::core::{Action, Context, Entity, Event, EventKind, Guard, State, StateHistory};
pub use crate::engine::{Machine, Outcome, Transition, TransitionError};
