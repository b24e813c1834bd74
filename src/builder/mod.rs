//! Builder API for ergonomic chart construction.
//!
//! This module provides the fluent [`ChartBuilder`] and the
//! `state_enum!` / `event_enum!` macros for declaring chart vocabularies
//! with minimal boilerplate while maintaining type safety.
//!
//! Construction is lenient by default - [`ChartBuilder::build`] is total
//! and defers every unresolvable reference to the interpreter's soft
//! fallbacks. [`ChartBuilder::build_strict`] opts into fail-fast
//! validation of named action and guard references.

pub mod chart;
pub mod error;
pub mod macros;

pub use chart::ChartBuilder;
pub use error::BuildError;
