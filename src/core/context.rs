//! The capability the engine needs from a domain model.

use super::state::State;
use serde::{Deserialize, Serialize};

/// An immutable domain value that sits in a [`State`].
///
/// `with_state` must return a value identical to `self` except for the
/// state. The engine calls it once per fired transition to reassert the
/// transition's target.
///
/// # Example
///
/// ```rust
/// use ruleflow::core::{Context, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DocState { Draft, Published }
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
/// struct Document {
///     state: DocState,
///     content: String,
/// }
///
/// impl Context for Document {
///     type State = DocState;
///
///     fn state(&self) -> &DocState {
///         &self.state
///     }
///
///     fn with_state(self, state: DocState) -> Self {
///         Self { state, ..self }
///     }
/// }
///
/// let doc = Document { state: DocState::Draft, content: "hi".into() };
/// let doc = doc.with_state(DocState::Published);
/// assert_eq!(doc.state(), &DocState::Published);
/// assert_eq!(doc.content, "hi");
/// ```
pub trait Context {
    type State: State;

    /// Current state of this value.
    fn state(&self) -> &Self::State;

    /// Return this value with only its state replaced.
    fn with_state(self, state: Self::State) -> Self;
}

/// A ready-made context pairing a state with an arbitrary payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity<S, T> {
    pub state: S,
    pub data: T,
}

impl<S, T> Entity<S, T> {
    pub fn new(state: S, data: T) -> Self {
        Self { state, data }
    }

    /// Return the entity with its payload transformed, keeping the state.
    pub fn map_data<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self {
            state: self.state,
            data: f(self.data),
        }
    }
}

impl<S: State, T> Context for Entity<S, T> {
    type State = S;

    fn state(&self) -> &S {
        &self.state
    }

    fn with_state(self, state: S) -> Self {
        Self {
            state,
            data: self.data,
        }
    }
}
