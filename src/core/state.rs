//! Core State trait for chart states.
//!
//! Every state in a chart implements this trait. States are plain value
//! identifiers with no behavior of their own; the chart's state table is
//! keyed by them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for chart states.
///
/// States are immutable values drawn from a caller-defined finite set,
/// usually an enum. The [`crate::state_enum!`] macro generates this impl.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the machine and the transition log
/// - `Eq` + `Hash`: states key the chart's state table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: transition records are serializable
///
/// # Example
///
/// ```rust
/// use statechart::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Light {
///     Green,
///     Yellow,
///     Red,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Green => "Green",
///             Self::Yellow => "Yellow",
///             Self::Red => "Red",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}
