//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for assembling rule
//! lists with minimal boilerplate. None of it adds semantics: a machine
//! built here behaves exactly like one built from a plain `Vec` of
//! [`Transition`]s.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Context, Event, Guard};
use crate::engine::Transition;

/// Create an unconditional transition without actions.
///
/// # Example
///
/// ```
/// use ruleflow::builder::simple_transition;
/// use ruleflow::core::Entity;
/// use ruleflow::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light { Red, Green }
/// }
///
/// event_enum! {
///     enum Tick { Timer }
/// }
///
/// let transition =
///     simple_transition::<Entity<Light, ()>, Tick>(Light::Red, Tick::Timer, Light::Green);
/// assert_eq!(transition.target, Light::Green);
/// ```
pub fn simple_transition<C, E>(from: C::State, kind: E::Kind, to: C::State) -> Transition<C, E>
where
    C: Context,
    E: Event,
{
    Transition::new(from, kind, to)
}

/// Create a transition gated by a single guard predicate.
///
/// # Example
///
/// ```
/// use ruleflow::builder::guarded_transition;
/// use ruleflow::core::Entity;
/// use ruleflow::{event_enum, state_enum};
///
/// state_enum! {
///     enum DocState { Draft, Published }
/// }
///
/// event_enum! {
///     enum DocEvent { Publish }
/// }
///
/// type Doc = Entity<DocState, String>;
///
/// let transition = guarded_transition::<Doc, DocEvent, _>(
///     DocState::Draft,
///     DocEvent::Publish,
///     DocState::Published,
///     |doc| !doc.data.is_empty(),
/// );
/// assert!(transition.guards_pass(&Doc::new(DocState::Draft, "text".into())));
/// ```
pub fn guarded_transition<C, E, F>(
    from: C::State,
    kind: E::Kind,
    to: C::State,
    guard: F,
) -> Transition<C, E>
where
    C: Context + 'static,
    E: Event,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Transition::new(from, kind, to).with_guard(Guard::new(guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum TestState {
            Start,
            Middle,
            End,
        }
        final: [End]
    }

    event_enum! {
        enum TestEvent {
            Next,
        }
    }

    type Ctx = Entity<TestState, i32>;

    #[test]
    fn simple_transition_builds() {
        let transition = simple_transition::<Ctx, TestEvent>(
            TestState::Start,
            TestEvent::Next,
            TestState::Middle,
        );

        assert_eq!(transition.source, TestState::Start);
        assert_eq!(transition.target, TestState::Middle);
        assert!(transition.is_applicable(
            &TestState::Start,
            &TestEvent::Next,
            &Ctx::new(TestState::Start, 0)
        ));
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let transition = guarded_transition::<Ctx, TestEvent, _>(
            TestState::Middle,
            TestEvent::Next,
            TestState::End,
            |ctx| ctx.data >= 0,
        );

        assert!(transition.guards_pass(&Ctx::new(TestState::Middle, 1)));
        assert!(!transition.guards_pass(&Ctx::new(TestState::Middle, -1)));
    }
}
