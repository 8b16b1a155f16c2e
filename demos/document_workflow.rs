//! Document Approval Workflow
//!
//! This example demonstrates a multi-stage approval workflow with guards and actions.
//!
//! Key concepts:
//! - Multi-stage linear workflow (Draft -> Review -> Approved -> Published)
//! - Guards enforce business rules on the document
//! - Actions transform the document immutably
//! - An observer writes an audit trail
//! - Rejected events are an ordinary outcome, not a crash
//!
//! Run with: RUST_LOG=debug cargo run --example document_workflow

use ruleflow::builder::{BuildError, MachineBuilder, TransitionBuilder};
use ruleflow::core::{Context, Event, EventKind, Guard, State};
use ruleflow::engine::Machine;
use ruleflow::lint::audit;
use ruleflow::{event_enum, state_enum};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum DocState {
        Draft,
        Review,
        Approved,
        Published,
    }
    final: [Published]
}

event_enum! {
    enum DocEvent {
        Submit,
        Approve,
        Publish,
    }
}

// Document entity
#[derive(Clone, Debug)]
struct Document {
    id: u64,
    state: DocState,
    content: String,
    word_count: usize,
    approvals: u32,
}

impl Context for Document {
    type State = DocState;

    fn state(&self) -> &DocState {
        &self.state
    }

    fn with_state(self, state: DocState) -> Self {
        Self { state, ..self }
    }
}

fn long_enough() -> Guard<Document> {
    Guard::named("at least 100 words", |doc: &Document| {
        !doc.content.is_empty() && doc.word_count >= 100
    })
}

fn short_enough() -> Guard<Document> {
    Guard::named("at most 5000 words", |doc: &Document| doc.word_count <= 5000)
}

fn build_machine() -> Result<Machine<Document, DocEvent>, BuildError> {
    let machine = MachineBuilder::new()
        .transition(
            TransitionBuilder::new()
                .from(DocState::Draft)
                .on(DocEvent::Submit)
                .to(DocState::Review)
                .guard(long_enough()),
        )?
        .transition(
            TransitionBuilder::new()
                .from(DocState::Review)
                .on(DocEvent::Approve)
                .to(DocState::Approved)
                .guard(short_enough())
                .action(|doc: Document, _: &DocEvent| Document {
                    approvals: doc.approvals + 1,
                    ..doc
                }),
        )?
        .transition(
            TransitionBuilder::new()
                .from(DocState::Approved)
                .on(DocEvent::Publish)
                .to(DocState::Published),
        )?
        .on_transition(|from: &DocState, event: &DocEvent, to: &DocState| {
            println!(
                "  [Audit] {} --{}--> {}",
                from.name(),
                event.kind().name(),
                to.name()
            );
        })
        .build();
    Ok(machine)
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Document Approval Workflow ===\n");

    let machine = build_machine()?;
    println!("States: Draft -> Review -> Approved -> Published");
    println!("Rule audit clean: {}\n", audit(&machine).is_success());

    let doc = Document {
        id: 123,
        state: DocState::Draft,
        content: "Lorem ipsum dolor sit amet...".to_string(),
        word_count: 250,
        approvals: 0,
    };

    println!("Processing document {}:", doc.id);
    println!("  Available from Draft: {:?}", machine.available_events(&doc));

    // Publishing straight from Draft is rejected; the document comes back.
    let mut current = match machine.fire(doc, &DocEvent::Publish) {
        Ok(outcome) => outcome.into_context(),
        Err(err) => {
            println!("  ✗ {err}");
            err.into_context()
        }
    };

    for event in [DocEvent::Submit, DocEvent::Approve, DocEvent::Publish] {
        match machine.fire(current, &event) {
            Ok(outcome) => current = outcome.into_context(),
            Err(err) => {
                println!("  ✗ {err}");
                current = err.into_context();
                break;
            }
        }
    }

    println!(
        "\nFinal state: {} (final: {}, approvals: {})",
        current.state.name(),
        current.state.is_final(),
        current.approvals
    );

    let stub = Document {
        id: 124,
        state: DocState::Draft,
        content: "Too short".to_string(),
        word_count: 2,
        approvals: 0,
    };
    println!(
        "\nDocument {} can be submitted: {}",
        stub.id,
        machine.can_fire(&stub, &DocEvent::Submit)
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
