//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Context, Event};
use crate::engine::{Machine, Observer, Transition};
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
///
/// Transitions keep the order they are added in, which is the order
/// `fire` tries them.
pub struct MachineBuilder<C: Context, E: Event> {
    transitions: Vec<Transition<C, E>>,
    observer: Option<Observer<C::State, E>>,
}

impl<C: Context + 'static, E: Event + 'static> MachineBuilder<C, E> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            observer: None,
        }
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<C, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<C, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<C, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Register the observer invoked after each successful fire.
    /// A second call replaces the first observer.
    pub fn on_transition<F>(mut self, observer: F) -> Self
    where
        F: Fn(&C::State, &E, &C::State) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Build the machine. Shadowed or unreachable rules are not rejected;
    /// see [`audit`](crate::lint::audit) for that.
    pub fn build(self) -> Machine<C, E> {
        Machine::from_parts(self.transitions, self.observer)
    }
}

impl<C: Context + 'static, E: Event + 'static> Default for MachineBuilder<C, E> {
    fn default() -> Self {
        Self::new()
    }
}
