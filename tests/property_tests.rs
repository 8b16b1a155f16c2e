//! Property-based tests for the transition engine.
//!
//! These tests use proptest to generate random rule lists and contexts and
//! check that matching, firing and querying agree with each other.

use proptest::prelude::*;
use ruleflow::core::{Action, Context, Guard};
use ruleflow::engine::{Machine, Transition, TransitionError};
use ruleflow::{event_enum, state_enum};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

state_enum! {
    enum Phase {
        Idle,
        Running,
        Paused,
        Done,
    }
    final: [Done]
}

event_enum! {
    enum Signal {
        Start,
        Pause,
        Resume,
        Stop,
    }
}

#[derive(Clone, PartialEq, Debug)]
struct Job {
    state: Phase,
    priority: u8,
    trail: Vec<u8>,
}

impl Context for Job {
    type State = Phase;

    fn state(&self) -> &Phase {
        &self.state
    }

    fn with_state(self, state: Phase) -> Self {
        Self { state, ..self }
    }
}

/// A generated rule. Each threshold becomes a guard `priority >= threshold`.
#[derive(Clone, Debug)]
struct RuleSpec {
    source: Phase,
    kind: Signal,
    target: Phase,
    thresholds: Vec<u8>,
    tag: u8,
    scribble: Option<Phase>,
}

impl RuleSpec {
    fn build(&self) -> Transition<Job, Signal> {
        let mut transition: Transition<Job, Signal> =
            Transition::new(self.source.clone(), self.kind, self.target.clone());
        for &threshold in &self.thresholds {
            transition =
                transition.with_guard(Guard::new(move |job: &Job| job.priority >= threshold));
        }
        let tag = self.tag;
        transition = transition.with_action(Action::new(move |mut job: Job, _: &Signal| {
            job.trail.push(tag);
            job
        }));
        if let Some(state) = self.scribble.clone() {
            transition = transition.with_action(Action::new(move |job: Job, _: &Signal| {
                job.with_state(state.clone())
            }));
        }
        transition
    }

    fn passes(&self, job: &Job) -> bool {
        self.thresholds.iter().all(|&t| job.priority >= t)
    }
}

prop_compose! {
    fn arbitrary_phase()(variant in 0..4u8) -> Phase {
        match variant {
            0 => Phase::Idle,
            1 => Phase::Running,
            2 => Phase::Paused,
            _ => Phase::Done,
        }
    }
}

prop_compose! {
    fn arbitrary_signal()(variant in 0..4u8) -> Signal {
        match variant {
            0 => Signal::Start,
            1 => Signal::Pause,
            2 => Signal::Resume,
            _ => Signal::Stop,
        }
    }
}

prop_compose! {
    fn arbitrary_rule()(
        source in arbitrary_phase(),
        kind in arbitrary_signal(),
        target in arbitrary_phase(),
        thresholds in prop::collection::vec(0..10u8, 0..3),
        tag in any::<u8>(),
        scribble in prop::option::of(arbitrary_phase()),
    ) -> RuleSpec {
        RuleSpec { source, kind, target, thresholds, tag, scribble }
    }
}

prop_compose! {
    fn arbitrary_job()(state in arbitrary_phase(), priority in 0..10u8) -> Job {
        Job { state, priority, trail: Vec::new() }
    }
}

fn machine_for(rules: &[RuleSpec]) -> Machine<Job, Signal> {
    Machine::new(rules.iter().map(RuleSpec::build).collect())
}

/// Index of the rule a correct engine must pick.
fn expected_match(rules: &[RuleSpec], job: &Job, signal: Signal) -> Option<usize> {
    rules
        .iter()
        .position(|r| r.source == job.state && r.kind == signal && r.passes(job))
}

proptest! {
    #[test]
    fn fire_is_deterministic(
        rules in prop::collection::vec(arbitrary_rule(), 0..8),
        job in arbitrary_job(),
        signal in arbitrary_signal(),
    ) {
        let machine = machine_for(&rules);
        let first = machine.fire(job.clone(), &signal).ok();
        let second = machine.fire(job, &signal).ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fire_selects_first_passing_rule(
        rules in prop::collection::vec(arbitrary_rule(), 0..8),
        job in arbitrary_job(),
        signal in arbitrary_signal(),
    ) {
        let machine = machine_for(&rules);
        let result = machine.fire(job.clone(), &signal);

        match expected_match(&rules, &job, signal) {
            Some(index) => {
                let outcome = result.unwrap();
                prop_assert_eq!(&outcome.new_state, &rules[index].target);
                prop_assert_eq!(outcome.context.trail.last(), Some(&rules[index].tag));
                prop_assert_eq!(outcome.context.trail.len(), 1);
            }
            None => {
                let is_no_match = matches!(
                    result,
                    Err(TransitionError::NoMatchingTransition { ref state, event, ref context })
                        if *state == job.state && event == signal && *context == job
                );
                prop_assert!(is_no_match);
            }
        }
    }

    #[test]
    fn target_is_authoritative(
        rules in prop::collection::vec(arbitrary_rule(), 1..8),
        job in arbitrary_job(),
        signal in arbitrary_signal(),
    ) {
        let machine = machine_for(&rules);
        if let Ok(outcome) = machine.fire(job.clone(), &signal) {
            prop_assert_eq!(outcome.context.state(), &outcome.new_state);
            prop_assert_eq!(&outcome.previous_state, &job.state);
            prop_assert_eq!(outcome.context.priority, job.priority);
        }
    }

    #[test]
    fn can_fire_matches_fire_success(
        rules in prop::collection::vec(arbitrary_rule(), 0..8),
        job in arbitrary_job(),
        signal in arbitrary_signal(),
    ) {
        let machine = machine_for(&rules);
        let can = machine.can_fire(&job, &signal);
        prop_assert_eq!(can, machine.fire(job, &signal).is_ok());
    }

    #[test]
    fn available_events_is_exhaustive(
        rules in prop::collection::vec(arbitrary_rule(), 0..8),
        job in arbitrary_job(),
    ) {
        let machine = machine_for(&rules);
        let expected: HashSet<Signal> = rules
            .iter()
            .filter(|r| r.source == job.state && r.passes(&job))
            .map(|r| r.kind)
            .collect();

        prop_assert_eq!(machine.available_events(&job), expected);
    }

    #[test]
    fn available_events_agree_with_can_fire(
        rules in prop::collection::vec(arbitrary_rule(), 0..8),
        job in arbitrary_job(),
        signal in arbitrary_signal(),
    ) {
        let machine = machine_for(&rules);
        let listed = machine.available_events(&job).contains(&signal);
        prop_assert_eq!(listed, machine.can_fire(&job, &signal));
    }

    #[test]
    fn guards_after_a_failure_never_run(
        failing_at in 0..4usize,
        total in 4..6usize,
        job in arbitrary_job(),
    ) {
        let counters: Vec<Arc<AtomicUsize>> =
            (0..total).map(|_| Arc::new(AtomicUsize::new(0))).collect();
        let mut transition: Transition<Job, Signal> =
            Transition::new(job.state.clone(), Signal::Start, Phase::Running);
        for (i, counter) in counters.iter().enumerate() {
            let counter = Arc::clone(counter);
            transition = transition.with_guard(Guard::new(move |_: &Job| {
                counter.fetch_add(1, Ordering::SeqCst);
                i != failing_at
            }));
        }
        let machine = Machine::new(vec![transition]);

        prop_assert!(!machine.can_fire(&job, &Signal::Start));
        for (i, counter) in counters.iter().enumerate() {
            let expected = if i <= failing_at { 1 } else { 0 };
            prop_assert_eq!(counter.load(Ordering::SeqCst), expected);
        }
    }
}
