//! The transition engine.
//!
//! # Key Concepts
//!
//! - **Transitions**: immutable rules with ordered guards and actions
//! - **Machine**: an ordered rule set that matches, fires and queries
//!   transitions against caller-supplied contexts
//! - **Outcomes**: the previous state, the new state and the derived context
//!
//! Matching is first-match in declaration order. After the actions of the
//! selected transition run, the context's state is always reset to the
//! transition's target, whatever the actions did to it.

mod machine;
mod outcome;
mod transition;

pub use machine::{Machine, Observer};
pub use outcome::{Outcome, Replay, TransitionError};
pub use transition::Transition;
