//! Context-transforming actions applied during transitions.
//!
//! Actions are pure functions that consume the machine's current context
//! and produce a replacement. The interpreter never mutates context in
//! place; it installs whatever value the action returns.

use std::sync::Arc;

/// Pure transformation applied to the machine context during a transition.
///
/// Actions are shared between machines running the same chart, so the
/// underlying function is reference-counted and must be thread-safe.
///
/// # Example
///
/// ```rust
/// use statechart::core::Action;
///
/// let increment = Action::new(|count: i64| count + 1);
///
/// assert_eq!(increment.apply(0), 1);
/// assert_eq!(increment.apply(41), 42);
/// ```
pub struct Action<C> {
    transform: Arc<dyn Fn(C) -> C + Send + Sync>,
}

impl<C> Action<C> {
    /// Create an action from a pure transformation function.
    ///
    /// The function must be deterministic and free of observable side
    /// effects beyond the context it receives and returns.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(C) -> C + Send + Sync + 'static,
    {
        Action {
            transform: Arc::new(transform),
        }
    }

    /// Apply the action, producing the replacement context.
    pub fn apply(&self, context: C) -> C {
        (self.transform)(context)
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self {
            transform: Arc::clone(&self.transform),
        }
    }
}
