//! Actions: pure context transforms applied while a transition fires.

use std::fmt;
use std::sync::Arc;

type Transform<C, E> = Arc<dyn Fn(C, &E) -> C + Send + Sync>;

/// Pure function from `(context, event)` to a new context.
///
/// An action may set any state on the context it returns; the machine
/// overwrites it with the transition's target afterwards.
///
/// # Example
///
/// ```rust
/// use ruleflow::core::Action;
///
/// #[derive(Debug, PartialEq)]
/// struct Tally(u32);
///
/// let add = Action::new(|t: Tally, n: &u32| Tally(t.0 + n));
/// let double = Action::new(|t: Tally, _: &u32| Tally(t.0 * 2));
///
/// assert_eq!(add.then(double).execute(Tally(1), &2), Tally(6));
/// ```
pub struct Action<C, E> {
    transform: Transform<C, E>,
}

impl<C: 'static, E: 'static> Action<C, E> {
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(C, &E) -> C + Send + Sync + 'static,
    {
        Action {
            transform: Arc::new(transform),
        }
    }

    /// Action returning the context unchanged.
    pub fn noop() -> Self {
        Self::new(|ctx, _| ctx)
    }

    /// Run `self`, then `next` on its result. Both see the same event.
    pub fn then(self, next: Action<C, E>) -> Self {
        let (first, second) = (self.transform, next.transform);
        Self::new(move |ctx, event| second(first(ctx, event), event))
    }
}

impl<C, E> Action<C, E> {
    pub fn execute(&self, context: C, event: &E) -> C {
        (self.transform)(context, event)
    }
}

impl<C, E> Clone for Action<C, E> {
    fn clone(&self) -> Self {
        Self {
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<C, E> fmt::Debug for Action<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action")
    }
}
