//! Core Event trait for transition events.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the events a chart reacts to.
///
/// Events identify which transition to take from a given state. Like
/// states, they are plain values from a caller-defined finite set and key
/// the per-state event dispatch table. The [`crate::event_enum!`] macro
/// generates this impl.
///
/// # Example
///
/// ```rust
/// use statechart::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum FetchEvent {
///     Fetch,
///     Resolve,
///     Reject,
/// }
///
/// impl Event for FetchEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Fetch => "Fetch",
///             Self::Resolve => "Resolve",
///             Self::Reject => "Reject",
///         }
///     }
/// }
/// ```
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
