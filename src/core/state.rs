//! State identities.
//!
//! The engine treats states opaquely: it only ever compares them for
//! equality. Names and finality exist for diagnostics and rule audits.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the states a [`Context`](super::Context) can sit in.
///
/// # Required Traits
///
/// - `Clone`: the engine copies the source state into outcomes and errors
/// - `PartialEq`: transitions match on state equality
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: states are recorded in [`StateHistory`](super::StateHistory)
///
/// # Example
///
/// ```rust
/// use ruleflow::core::State;
/// use serde::{Deserialize, Serialize};
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
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Archived)
///     }
/// }
///
/// assert!(DocState::Archived.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether no transition is expected to leave this state.
    ///
    /// The engine never consults this while firing; it is only used by
    /// [`audit`](crate::lint::audit). Defaults to `false`.
    fn is_final(&self) -> bool {
        false
    }
}
