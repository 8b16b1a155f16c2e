//! Transition rules.

use crate::core::{Action, Context, Event, EventKind, Guard, State};
use std::fmt;

/// An immutable rule: from `source`, on an event of `kind`, move to `target`
/// once every guard passes, transforming the context with `actions`.
///
/// Guards run in declaration order and stop at the first failure. Actions
/// are folded left to right, each receiving the previous one's output and
/// the same event.
pub struct Transition<C: Context, E: Event> {
    pub source: C::State,
    pub kind: E::Kind,
    pub target: C::State,
    pub guards: Vec<Guard<C>>,
    pub actions: Vec<Action<C, E>>,
}

impl<C: Context, E: Event> Transition<C, E> {
    /// Unguarded transition with no actions.
    pub fn new(source: C::State, kind: E::Kind, target: C::State) -> Self {
        Self {
            source,
            kind,
            target,
            guards: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Append a guard, evaluated after the ones already present.
    pub fn with_guard(mut self, guard: Guard<C>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Append an action, executed after the ones already present.
    pub fn with_action(mut self, action: Action<C, E>) -> Self {
        self.actions.push(action);
        self
    }

    /// Whether this rule's kind covers the event's kind.
    pub fn accepts(&self, event: &E) -> bool {
        self.kind.accepts(&event.kind())
    }

    /// Evaluate guards in order, stopping at the first that fails.
    pub fn guards_pass(&self, context: &C) -> bool {
        self.guards.iter().all(|guard| {
            let passed = guard.check(context);
            if !passed {
                tracing::trace!(
                    from = self.source.name(),
                    to = self.target.name(),
                    guard = guard.description(),
                    "guard rejected transition"
                );
            }
            passed
        })
    }

    /// Check if this transition can fire for `event` in `current` (pure).
    pub fn is_applicable(&self, current: &C::State, event: &E, context: &C) -> bool {
        *current == self.source && self.accepts(event) && self.guards_pass(context)
    }

    /// Fold the actions over `context`. No actions returns it unchanged.
    pub fn execute_actions(&self, context: C, event: &E) -> C {
        self.actions
            .iter()
            .fold(context, |ctx, action| action.execute(ctx, event))
    }
}

impl<C: Context, E: Event> Clone for Transition<C, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            kind: self.kind.clone(),
            target: self.target.clone(),
            guards: self.guards.clone(),
            actions: self.actions.clone(),
        }
    }
}

impl<C: Context, E: Event> fmt::Debug for Transition<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("source", &self.source)
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("guards", &self.guards)
            .field("actions", &self.actions.len())
            .finish()
    }
}
