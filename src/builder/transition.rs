//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Context, Event, Guard};
use crate::engine::Transition;

/// Builder for constructing transitions with a fluent API.
///
/// Guards and actions accumulate in call order.
pub struct TransitionBuilder<C: Context, E: Event> {
    from: Option<C::State>,
    kind: Option<E::Kind>,
    to: Option<C::State>,
    guards: Vec<Guard<C>>,
    actions: Vec<Action<C, E>>,
}

impl<C: Context + 'static, E: Event + 'static> TransitionBuilder<C, E> {
    pub fn new() -> Self {
        Self {
            from: None,
            kind: None,
            to: None,
            guards: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: C::State) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the event kind this transition responds to (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: C::State) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard.
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add a guard using a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Add an action.
    pub fn then(mut self, action: Action<C, E>) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an action using a closure.
    pub fn action<F>(self, transform: F) -> Self
    where
        F: Fn(C, &E) -> C + Send + Sync + 'static,
    {
        self.then(Action::new(transform))
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<C, E>, BuildError> {
        let source = self.from.ok_or(BuildError::MissingFromState)?;
        let kind = self.kind.ok_or(BuildError::MissingEventKind)?;
        let target = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            source,
            kind,
            target,
            guards: self.guards,
            actions: self.actions,
        })
    }
}

impl<C: Context + 'static, E: Event + 'static> Default for TransitionBuilder<C, E> {
    fn default() -> Self {
        Self::new()
    }
}
