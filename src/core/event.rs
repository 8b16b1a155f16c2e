//! Events and the kinds transitions dispatch on.
//!
//! Every event carries an explicit [`EventKind`]. A transition is registered
//! for one kind and matches any event whose kind that kind
//! [`accepts`](EventKind::accepts). Kinds can therefore form a hierarchy
//! (a `Payment` kind accepting `CardPayment` and `CashPayment` events)
//! without any runtime type inspection.

use std::fmt::Debug;
use std::hash::Hash;

/// Category identifier used to match events against transitions.
///
/// `accepts` must be reflexive and transitive. The default implementation
/// is plain equality, which is what flat event sets want.
///
/// # Example
///
/// ```rust
/// use ruleflow::core::EventKind;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum PaymentKind {
///     Any,
///     Card,
///     Cash,
/// }
///
/// impl EventKind for PaymentKind {
///     fn name(&self) -> &str {
///         match self {
///             Self::Any => "Payment",
///             Self::Card => "CardPayment",
///             Self::Cash => "CashPayment",
///         }
///     }
///
///     fn accepts(&self, other: &Self) -> bool {
///         matches!(self, Self::Any) || self == other
///     }
/// }
///
/// assert!(PaymentKind::Any.accepts(&PaymentKind::Card));
/// assert!(!PaymentKind::Card.accepts(&PaymentKind::Cash));
/// ```
pub trait EventKind: Clone + Eq + Hash + Debug + Send + Sync {
    /// Name used in logs, history entries and error messages.
    fn name(&self) -> &str;

    /// Whether a transition registered for `self` matches an event of kind `other`.
    fn accepts(&self, other: &Self) -> bool {
        self == other
    }
}

/// A typed trigger value dispatched against transitions.
///
/// Events may carry arbitrary data; actions receive the full event while
/// matching only looks at [`kind`](Event::kind).
pub trait Event: Clone + Debug + Send + Sync {
    type Kind: EventKind;

    /// The kind this event instance belongs to.
    fn kind(&self) -> Self::Kind;
}
