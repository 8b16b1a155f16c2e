//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over a context that determine whether a
//! transition may fire. They compose with `and`, `or` and negation, and the
//! composites short-circuit exactly like `&&` and `||`.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

type Predicate<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;

/// Pure predicate that determines if a transition can execute.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use ruleflow::core::Guard;
///
/// struct Doc {
///     content: String,
///     words: usize,
/// }
///
/// let has_content = Guard::named("has content", |d: &Doc| !d.content.is_empty());
/// let short_enough = Guard::named("short enough", |d: &Doc| d.words <= 5000);
/// let publishable = has_content.and(short_enough);
///
/// let doc = Doc { content: "hello".into(), words: 1 };
/// assert!(publishable.check(&doc));
/// assert_eq!(publishable.description(), "(has content && short enough)");
/// ```
pub struct Guard<C> {
    predicate: Predicate<C>,
    description: Arc<str>,
    constant: Option<bool>,
}

impl<C: 'static> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic, free of side effects and
    /// thread-safe (`Send + Sync`).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self::named("guard", predicate)
    }

    /// Create a guard with a description used in logs and audits.
    pub fn named<F>(description: impl Into<Arc<str>>, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            description: description.into(),
            constant: None,
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self {
        Self::named("always", |_| true).with_constant(Some(true))
    }

    /// Guard that never passes.
    pub fn never() -> Self {
        Self::named("never", |_| false).with_constant(Some(false))
    }

    fn with_constant(mut self, constant: Option<bool>) -> Self {
        self.constant = constant;
        self
    }

    /// Passes iff both guards pass. `other` is not evaluated when `self` fails.
    pub fn and(self, other: Guard<C>) -> Self {
        let description = format!("({} && {})", self.description, other.description);
        let constant = match (self.constant, other.constant) {
            (Some(false), _) | (_, Some(false)) => Some(false),
            (Some(true), Some(true)) => Some(true),
            _ => None,
        };
        let (lhs, rhs) = (self.predicate, other.predicate);
        Self::named(description, move |ctx| lhs(ctx) && rhs(ctx)).with_constant(constant)
    }

    /// Passes iff either guard passes. `other` is not evaluated when `self` passes.
    pub fn or(self, other: Guard<C>) -> Self {
        let description = format!("({} || {})", self.description, other.description);
        let constant = match (self.constant, other.constant) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => Some(false),
            _ => None,
        };
        let (lhs, rhs) = (self.predicate, other.predicate);
        Self::named(description, move |ctx| lhs(ctx) || rhs(ctx)).with_constant(constant)
    }

    /// Logical negation.
    pub fn negate(self) -> Self {
        let description = format!("!{}", self.description);
        let constant = self.constant.map(|value| !value);
        let inner = self.predicate;
        Self::named(description, move |ctx| !inner(ctx)).with_constant(constant)
    }
}

impl<C> Guard<C> {
    /// Evaluate the predicate against a context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// True when the guard is built only from [`Guard::always`] and
    /// [`Guard::never`] and passes for every context.
    ///
    /// Opaque predicates are never considered unconditional, even if they
    /// happen to return `true` everywhere.
    pub fn is_unconditional(&self) -> bool {
        self.constant == Some(true)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            description: Arc::clone(&self.description),
            constant: self.constant,
        }
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.description).finish()
    }
}

impl<C: 'static> BitAnd for Guard<C> {
    type Output = Guard<C>;

    fn bitand(self, rhs: Guard<C>) -> Guard<C> {
        self.and(rhs)
    }
}

impl<C: 'static> BitOr for Guard<C> {
    type Output = Guard<C>;

    fn bitor(self, rhs: Guard<C>) -> Guard<C> {
        self.or(rhs)
    }
}

impl<C: 'static> Not for Guard<C> {
    type Output = Guard<C>;

    fn not(self) -> Guard<C> {
        self.negate()
    }
}
