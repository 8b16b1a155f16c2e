//! The immutable rule set and its matching, firing and query operations.

use crate::core::{Context, Event, EventKind, State, StateHistory};
use crate::engine::outcome::{Outcome, Replay, TransitionError};
use crate::engine::transition::Transition;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Callback invoked after every successful fire with `(from, event, to)`.
pub type Observer<S, E> = Arc<dyn Fn(&S, &E, &S) + Send + Sync>;

/// Ordered, immutable collection of transitions plus an optional observer.
///
/// A machine holds no current state: every operation takes the context it
/// works on, so one machine can serve any number of contexts, from any
/// number of threads.
///
/// When several transitions could fire, the first one in declaration order
/// wins; later rules for the same source and kind are shadowed.
pub struct Machine<C: Context, E: Event> {
    transitions: Vec<Transition<C, E>>,
    observer: Option<Observer<C::State, E>>,
}

impl<C: Context, E: Event> Machine<C, E> {
    /// Create a machine over `transitions`, kept in the given order.
    pub fn new(transitions: Vec<Transition<C, E>>) -> Self {
        Self {
            transitions,
            observer: None,
        }
    }

    /// Attach an observer called synchronously after each successful fire.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&C::State, &E, &C::State) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub(crate) fn from_parts(
        transitions: Vec<Transition<C, E>>,
        observer: Option<Observer<C::State, E>>,
    ) -> Self {
        Self {
            transitions,
            observer,
        }
    }

    pub fn transitions(&self) -> &[Transition<C, E>] {
        &self.transitions
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    fn find(&self, context: &C, event: &E) -> Option<(usize, &Transition<C, E>)> {
        let current = context.state();
        self.transitions
            .iter()
            .enumerate()
            .find(|(_, t)| t.is_applicable(current, event, context))
    }

    /// The transition `fire` would execute, without executing it (pure).
    pub fn select(&self, context: &C, event: &E) -> Option<&Transition<C, E>> {
        self.find(context, event).map(|(_, t)| t)
    }

    /// Execute the first applicable transition.
    ///
    /// The returned context is the result of folding the transition's
    /// actions over `context`, with its state then set to the transition's
    /// target. When nothing matches, no action or observer runs and the
    /// error hands `context` back unchanged.
    pub fn fire(
        &self,
        context: C,
        event: &E,
    ) -> Result<Outcome<C>, TransitionError<C, E>> {
        let current = context.state().clone();

        let Some((index, transition)) = self.find(&context, event) else {
            tracing::debug!(
                state = current.name(),
                event = event.kind().name(),
                "no transition accepts event"
            );
            return Err(TransitionError::NoMatchingTransition {
                state: current,
                event: event.clone(),
                context,
            });
        };

        let context = transition
            .execute_actions(context, event)
            .with_state(transition.target.clone());

        tracing::debug!(
            from = current.name(),
            to = transition.target.name(),
            event = event.kind().name(),
            transition = index,
            "transition fired"
        );

        if let Some(observer) = &self.observer {
            observer(&current, event, &transition.target);
        }

        Ok(Outcome {
            previous_state: current,
            new_state: transition.target.clone(),
            context,
        })
    }

    /// Whether `fire` would succeed. Runs guards only (pure).
    pub fn can_fire(&self, context: &C, event: &E) -> bool {
        self.find(context, event).is_some()
    }

    /// Kinds of every transition leaving the context's state whose guards pass.
    ///
    /// Unlike `fire`, this does not stop at the first match: every candidate
    /// transition is evaluated and duplicate kinds collapse.
    pub fn available_events(&self, context: &C) -> HashSet<E::Kind> {
        let current = context.state();
        self.transitions
            .iter()
            .filter(|t| t.source == *current && t.guards_pass(context))
            .map(|t| t.kind.clone())
            .collect()
    }

    /// Fire `events` in order, threading the context through each hop.
    ///
    /// Stops at the first rejected event and returns its error, which holds
    /// the context as it was before that event.
    pub fn replay<'a, I>(
        &self,
        context: C,
        events: I,
    ) -> Result<Replay<C>, TransitionError<C, E>>
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let mut context = context;
        let mut history = StateHistory::new();
        for event in events {
            let outcome = self.fire(context, event)?;
            history = history.record(outcome.to_entry(event.kind().name()));
            context = outcome.into_context();
        }
        Ok(Replay { context, history })
    }
}

impl<C: Context, E: Event> Clone for Machine<C, E> {
    fn clone(&self) -> Self {
        Self {
            transitions: self.transitions.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<C: Context, E: Event> fmt::Debug for Machine<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("transitions", &self.transitions)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
