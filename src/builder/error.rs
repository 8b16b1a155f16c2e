//! Build errors for transition builders.

use thiserror::Error;

/// Errors that can occur when building transitions.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event kind not specified. Call .on(kind)")]
    MissingEventKind,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,
}
