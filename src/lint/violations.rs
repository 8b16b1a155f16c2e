//! Findings reported by the rule audit.

use thiserror::Error;

/// A problem found in a machine's rule list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleViolation {
    #[error("Transition #{index} ({rule}) can never fire: unguarded transition #{by} matches first")]
    Shadowed {
        index: usize,
        by: usize,
        rule: String,
    },

    #[error("Transition #{index} leaves final state '{state}'")]
    LeavesFinalState { index: usize, state: String },
}
