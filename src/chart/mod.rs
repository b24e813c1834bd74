//! Immutable chart definitions.
//!
//! A chart is the declarative description of a state machine: the initial
//! state and context, a table mapping each declared state to its
//! transition entries, and the named handler tables transitions reference.
//! Charts carry no runtime state; construction performs no semantic
//! validation (see [`crate::builder`] for the opt-in strict mode) and the
//! interpreter degrades to no-ops on anything unresolvable.

mod entry;

pub use entry::{EventTarget, TransitionEntry, FINAL_MARKER};

use crate::core::{Action, Event, Guard, State};
use std::collections::HashMap;
use tracing::warn;

/// The chart's state table.
///
/// The lookup result is deliberately three-valued: a key can be absent, be
/// declared with no transitions (`None`), or carry a list of entries. The
/// interpreter treats the first two as terminal and the third as live; see
/// [`StateLookup`].
pub type StateTable<S, E, C> = HashMap<S, Option<Vec<TransitionEntry<S, E, C>>>>;

/// Result of looking a state up in the chart's state table.
pub enum StateLookup<'a, S: State, E: Event, C> {
    /// The state was never declared.
    Undeclared,
    /// The state is declared with an explicit "no transitions" marker.
    NoTransitions,
    /// The state is declared with transition entries.
    Entries(&'a [TransitionEntry<S, E, C>]),
}

/// Immutable declarative definition of a state machine.
///
/// Built once through [`crate::builder::ChartBuilder`] and consulted,
/// read-only, on every transition. A chart can be shared by any number of
/// machines; its handler tables are never mutated after construction.
///
/// # Example
///
/// ```rust
/// use statechart::builder::ChartBuilder;
/// use statechart::chart::{EventTarget, TransitionEntry};
/// use statechart::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light { Green, Yellow, Red }
/// }
///
/// event_enum! {
///     enum Signal { Timer }
/// }
///
/// let chart = ChartBuilder::new(Light::Green, ())
///     .state(
///         Light::Green,
///         [TransitionEntry::on([(
///             Signal::Timer,
///             EventTarget::simple(Light::Yellow),
///         )])],
///     )
///     .build();
///
/// assert_eq!(chart.initial(), &Light::Green);
/// ```
pub struct Chart<S: State, E: Event, C> {
    pub(crate) id: Option<String>,
    pub(crate) initial: S,
    pub(crate) initial_context: C,
    pub(crate) states: StateTable<S, E, C>,
    pub(crate) actions: HashMap<String, Action<C>>,
    pub(crate) guards: HashMap<String, Guard<C>>,
}

impl<S: State, E: Event, C> Chart<S, E, C> {
    /// Optional caller-supplied identifier, used in diagnostics only.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The state a machine starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// The context a machine starts with.
    pub fn initial_context(&self) -> &C {
        &self.initial_context
    }

    /// Three-valued lookup of a state in the state table.
    pub fn lookup(&self, state: &S) -> StateLookup<'_, S, E, C> {
        match self.states.get(state) {
            None => StateLookup::Undeclared,
            Some(None) => StateLookup::NoTransitions,
            Some(Some(entries)) => StateLookup::Entries(entries),
        }
    }

    /// Resolve a named action, if declared.
    pub fn action(&self, name: &str) -> Option<&Action<C>> {
        self.actions.get(name)
    }

    /// Resolve a named guard, if declared.
    pub fn guard(&self, name: &str) -> Option<&Guard<C>> {
        self.guards.get(name)
    }

    /// Fold the named actions over a context, in order.
    ///
    /// Names that do not resolve are skipped; the remaining actions in the
    /// batch still run.
    pub(crate) fn apply_actions(&self, names: &[String], mut context: C) -> C {
        for name in names {
            match self.actions.get(name) {
                Some(action) => context = action.apply(context),
                None => warn!(action = name.as_str(), "action name did not resolve, skipping"),
            }
        }
        context
    }

    /// Evaluate a named guard against a context.
    ///
    /// A name that does not resolve allows the transition (permissive
    /// default).
    pub(crate) fn guard_allows(&self, name: &str, context: &C) -> bool {
        match self.guards.get(name) {
            Some(guard) => guard.check(context),
            None => {
                warn!(guard = name, "guard name did not resolve, allowing transition");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ChartBuilder;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum TestState {
            Idle,
            Loading,
            Success,
        }
    }

    event_enum! {
        enum TestEvent {
            Fetch,
        }
    }

    fn chart() -> Chart<TestState, TestEvent, i64> {
        ChartBuilder::new(TestState::Idle, 0)
            .id("fetch")
            .state(
                TestState::Idle,
                [TransitionEntry::on([(
                    TestEvent::Fetch,
                    EventTarget::simple(TestState::Loading),
                )])],
            )
            .no_transitions(TestState::Success)
            .action("bump", |count| count + 1)
            .guard("positive", |count: &i64| *count > 0)
            .build()
    }

    #[test]
    fn accessors_expose_definition() {
        let chart = chart();
        assert_eq!(chart.id(), Some("fetch"));
        assert_eq!(chart.initial(), &TestState::Idle);
        assert_eq!(chart.initial_context(), &0);
    }

    #[test]
    fn lookup_distinguishes_three_cases() {
        let chart = chart();

        assert!(matches!(chart.lookup(&TestState::Idle), StateLookup::Entries(_)));
        assert!(matches!(
            chart.lookup(&TestState::Success),
            StateLookup::NoTransitions
        ));
        assert!(matches!(
            chart.lookup(&TestState::Loading),
            StateLookup::Undeclared
        ));
    }

    #[test]
    fn named_handlers_resolve() {
        let chart = chart();
        assert!(chart.action("bump").is_some());
        assert!(chart.action("missing").is_none());
        assert!(chart.guard("positive").is_some());
        assert!(chart.guard("missing").is_none());
    }

    #[test]
    fn apply_actions_skips_unresolvable_names() {
        let chart = chart();
        let names = vec!["bump".to_string(), "missing".to_string(), "bump".to_string()];
        assert_eq!(chart.apply_actions(&names, 0), 2);
    }

    #[test]
    fn unresolvable_guard_is_permissive() {
        let chart = chart();
        assert!(chart.guard_allows("missing", &-5));
        assert!(!chart.guard_allows("positive", &-5));
        assert!(chart.guard_allows("positive", &5));
    }
}
