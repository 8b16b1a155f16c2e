//! Static audit of a machine's rule list.
//!
//! A machine accepts any rule list: shadowed rules are legal and simply
//! never fire. [`audit`] reports such rules without rejecting them, using
//! Stillwater's `Validation` to collect every finding in one pass instead
//! of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use ruleflow::core::Entity;
//! use ruleflow::engine::{Machine, Transition};
//! use ruleflow::lint::{audit, RuleViolation};
//! use ruleflow::{event_enum, state_enum};
//! use stillwater::validation::Validation;
//!
//! state_enum! {
//!     enum DocState { Draft, Published, Archived }
//!     final: [Archived]
//! }
//!
//! event_enum! {
//!     enum DocEvent { Publish }
//! }
//!
//! let machine: Machine<Entity<DocState, ()>, DocEvent> = Machine::new(vec![
//!     Transition::new(DocState::Draft, DocEvent::Publish, DocState::Published),
//!     Transition::new(DocState::Draft, DocEvent::Publish, DocState::Archived),
//! ]);
//!
//! match audit(&machine) {
//!     Validation::Failure(findings) => {
//!         assert!(findings
//!             .iter()
//!             .any(|f| matches!(f, RuleViolation::Shadowed { index: 1, by: 0, .. })));
//!     }
//!     Validation::Success(_) => panic!("expected a shadowed rule"),
//! }
//! ```

mod violations;

pub use violations::RuleViolation;

use crate::core::{Context, Event, EventKind, Guard, State};
use crate::engine::{Machine, Transition};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Audit every rule of `machine`, accumulating ALL findings.
///
/// Returns `Validation::Success(())` for a clean rule list.
pub fn audit<C: Context, E: Event>(
    machine: &Machine<C, E>,
) -> Validation<(), NonEmptyVec<RuleViolation>> {
    let transitions = machine.transitions();
    let mut checks: Vec<Validation<(), NonEmptyVec<RuleViolation>>> = Vec::new();

    for (index, transition) in transitions.iter().enumerate() {
        checks.push(check_shadowing(transitions, index, transition));
        checks.push(check_final_source(index, transition));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// A rule is unreachable when an earlier, unguarded rule leaves the same
/// state and its kind covers this rule's kind.
///
/// An earlier rule counts as unguarded when every guard it carries is
/// [unconditional](crate::core::Guard::is_unconditional). Arbitrary
/// predicates are opaque, so a closure that always returns `true` is not
/// detected.
fn check_shadowing<C: Context, E: Event>(
    transitions: &[Transition<C, E>],
    index: usize,
    transition: &Transition<C, E>,
) -> Validation<(), NonEmptyVec<RuleViolation>> {
    let shadow = transitions[..index].iter().position(|earlier| {
        earlier.guards.iter().all(Guard::is_unconditional)
            && earlier.source == transition.source
            && earlier.kind.accepts(&transition.kind)
    });

    match shadow {
        Some(by) => Validation::fail(RuleViolation::Shadowed {
            index,
            by,
            rule: describe(transition),
        }),
        None => Validation::success(()),
    }
}

fn check_final_source<C: Context, E: Event>(
    index: usize,
    transition: &Transition<C, E>,
) -> Validation<(), NonEmptyVec<RuleViolation>> {
    if transition.source.is_final() {
        Validation::fail(RuleViolation::LeavesFinalState {
            index,
            state: transition.source.name().to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn describe<C: Context, E: Event>(transition: &Transition<C, E>) -> String {
    format!(
        "{} --{}--> {}",
        transition.source.name(),
        transition.kind.name(),
        transition.target.name()
    )
}
