//! State transition history tracking.
//!
//! The machine itself never keeps history. Callers that want an audit trail
//! record [`Outcome`](crate::engine::Outcome)s into a [`StateHistory`], or let
//! [`Machine::replay`](crate::engine::Machine::replay) build one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use ruleflow::core::{HistoryEntry, State};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DocState {
///     Draft,
///     Published,
/// }
///
/// impl State for DocState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Published => "Published",
///         }
///     }
/// }
///
/// let entry = HistoryEntry {
///     from: DocState::Draft,
///     to: DocState::Published,
///     event: "Publish".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(entry.changed_state());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryEntry<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the event kind that fired the transition
    pub event: String,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

impl<S: State> HistoryEntry<S> {
    /// Self-loops are recorded too; this tells them apart.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of fired transitions.
///
/// History is immutable - `record` returns a new history with the entry
/// appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use ruleflow::core::{HistoryEntry, State, StateHistory};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DocState {
///     Draft,
///     Published,
///     Archived,
/// }
///
/// impl State for DocState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Published => "Published",
///             Self::Archived => "Archived",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(HistoryEntry {
///         from: DocState::Draft,
///         to: DocState::Published,
///         event: "Publish".into(),
///         timestamp: Utc::now(),
///     })
///     .record(HistoryEntry {
///         from: DocState::Published,
///         to: DocState::Archived,
///         event: "Archive".into(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&DocState::Draft, &DocState::Published, &DocState::Archived]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    entries: Vec<HistoryEntry<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    pub fn record(&self, entry: HistoryEntry<S>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// States traversed: the first entry's `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.first() {
            path.push(&first.from);
        }
        for entry in &self.entries {
            path.push(&entry.to);
        }
        path
    }

    /// Time between the first and last entry, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// The most recently reached state, if anything was recorded.
    pub fn current(&self) -> Option<&S> {
        self.entries.last().map(|entry| &entry.to)
    }

    pub fn transitions(&self) -> &[HistoryEntry<S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
