//! Build errors for strict chart construction.

use thiserror::Error;

/// Errors reported by [`crate::builder::ChartBuilder::build_strict`].
///
/// Lenient construction never produces these; unresolvable names are then
/// handled at transition time instead (skipped actions, permissive
/// guards).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("transition from '{state}' references unknown action '{name}'")]
    UnknownAction { state: String, name: String },

    #[error("transition from '{state}' references unknown guard '{name}'")]
    UnknownGuard { state: String, name: String },
}
