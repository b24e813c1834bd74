//! Statechart: declarative state machines with a pure transition interpreter.
//!
//! A **chart** declares states, the events each state accepts, and - per
//! transition - optional context-transforming actions and boolean guards.
//! A **machine** instantiates a chart, tracks current state and context,
//! and exposes a single operation: feed an event, get the resulting state.
//!
//! The interpreter never raises errors for malformed or incomplete chart
//! data. Unknown events are no-ops, unresolvable action names are skipped,
//! unresolvable guard names pass, and terminal states (explicitly marked
//! `"final"` or declared with no transitions) permanently halt the
//! machine.
//!
//! # Core Concepts
//!
//! - **Chart**: immutable definition - state table, named actions, named guards
//! - **Machine**: mutable runtime - current state, context, liveness flag
//! - **Context**: caller-defined data transformed by actions, gated by guards
//!
//! # Example
//!
//! ```rust
//! use statechart::builder::ChartBuilder;
//! use statechart::chart::{EventTarget, TransitionEntry};
//! use statechart::machine::Machine;
//! use statechart::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Light {
//!         Green,
//!         Yellow,
//!         Red,
//!     }
//! }
//!
//! event_enum! {
//!     enum Signal {
//!         Timer,
//!     }
//! }
//!
//! let chart = ChartBuilder::new(Light::Green, ())
//!     .state(
//!         Light::Green,
//!         [TransitionEntry::on([(
//!             Signal::Timer,
//!             EventTarget::simple(Light::Yellow),
//!         )])],
//!     )
//!     .state(
//!         Light::Yellow,
//!         [TransitionEntry::on([(
//!             Signal::Timer,
//!             EventTarget::simple(Light::Red),
//!         )])],
//!     )
//!     .state(
//!         Light::Red,
//!         [TransitionEntry::on([(
//!             Signal::Timer,
//!             EventTarget::simple(Light::Green),
//!         )])],
//!     )
//!     .build();
//!
//! let mut machine = Machine::from_chart(chart);
//! assert_eq!(machine.transition(Signal::Timer), Light::Yellow);
//! assert_eq!(machine.transition(Signal::Timer), Light::Red);
//! ```

pub mod builder;
pub mod chart;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ChartBuilder};
pub use chart::{Chart, EventTarget, StateLookup, TransitionEntry, FINAL_MARKER};
pub use core::{Action, Event, Guard, State, TransitionLog, TransitionRecord};
pub use machine::Machine;
