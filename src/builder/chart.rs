//! Fluent builder for chart definitions.

use crate::builder::error::BuildError;
use crate::chart::{Chart, EventTarget, StateTable, TransitionEntry};
use crate::core::{Action, Event, Guard, State};
use std::collections::HashMap;

/// Builder for constructing charts with a fluent API.
///
/// The required pieces - initial state and initial context - are taken up
/// front, so [`ChartBuilder::build`] is total: it cannot fail, no matter
/// how incomplete or inconsistent the declared transitions are. Callers
/// who prefer fail-fast construction use [`ChartBuilder::build_strict`],
/// which additionally checks that every named action and guard reference
/// resolves.
///
/// # Example
///
/// ```rust
/// use statechart::builder::ChartBuilder;
/// use statechart::chart::{EventTarget, TransitionEntry};
/// use statechart::{event_enum, state_enum};
///
/// state_enum! {
///     enum Counter { Active }
/// }
///
/// event_enum! {
///     enum CounterEvent { Increment }
/// }
///
/// let chart = ChartBuilder::new(Counter::Active, 0)
///     .state(
///         Counter::Active,
///         [TransitionEntry::on([(
///             CounterEvent::Increment,
///             EventTarget::with_actions(Counter::Active, ["increment"]),
///         )])],
///     )
///     .action("increment", |count: i64| count + 1)
///     .build();
///
/// assert!(chart.action("increment").is_some());
/// ```
pub struct ChartBuilder<S: State, E: Event, C> {
    id: Option<String>,
    initial: S,
    context: C,
    states: StateTable<S, E, C>,
    actions: HashMap<String, Action<C>>,
    guards: HashMap<String, Guard<C>>,
}

impl<S: State, E: Event, C> ChartBuilder<S, E, C> {
    /// Start a builder with the required initial state and context.
    pub fn new(initial: S, context: C) -> Self {
        Self {
            id: None,
            initial,
            context,
            states: HashMap::new(),
            actions: HashMap::new(),
            guards: HashMap::new(),
        }
    }

    /// Set an identifier used in diagnostics (optional).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Declare a state with its transition entries.
    pub fn state<I>(mut self, state: S, entries: I) -> Self
    where
        I: IntoIterator<Item = TransitionEntry<S, E, C>>,
    {
        self.states.insert(state, Some(entries.into_iter().collect()));
        self
    }

    /// Declare a state with no transitions.
    ///
    /// Such a state is an implicit terminal: a machine departing from it
    /// halts.
    pub fn no_transitions(mut self, state: S) -> Self {
        self.states.insert(state, None);
        self
    }

    /// Declare a state carrying only the terminal marker.
    pub fn final_state(self, state: S) -> Self {
        self.state(state, [TransitionEntry::final_marker()])
    }

    /// Register a named action.
    pub fn action<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(C) -> C + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Action::new(action));
        self
    }

    /// Register a named guard.
    pub fn guard<F>(mut self, name: impl Into<String>, guard: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guards.insert(name.into(), Guard::new(guard));
        self
    }

    /// Build the chart. Total: performs no validation.
    pub fn build(self) -> Chart<S, E, C> {
        Chart {
            id: self.id,
            initial: self.initial,
            initial_context: self.context,
            states: self.states,
            actions: self.actions,
            guards: self.guards,
        }
    }

    /// Build the chart, failing fast on unresolvable handler names.
    ///
    /// Checks every named action and guard reference in the state table
    /// against the registered handler tables. Targets referencing
    /// undeclared states are still legal; reaching one halts the machine
    /// at transition time rather than failing here.
    pub fn build_strict(self) -> Result<Chart<S, E, C>, BuildError> {
        for (state, entries) in &self.states {
            let Some(entries) = entries else { continue };
            for entry in entries {
                let TransitionEntry::On(events) = entry else { continue };
                for target in events.values() {
                    match target {
                        EventTarget::Simple(_) | EventTarget::WithAction { .. } => {}
                        EventTarget::WithActions { actions, .. } => {
                            self.check_actions(state, actions)?;
                        }
                        EventTarget::WithGuard { guard, .. } => {
                            self.check_guard(state, guard)?;
                        }
                        EventTarget::WithActionsAndGuard { actions, guard, .. } => {
                            self.check_actions(state, actions)?;
                            self.check_guard(state, guard)?;
                        }
                    }
                }
            }
        }

        Ok(self.build())
    }

    fn check_actions(&self, state: &S, names: &[String]) -> Result<(), BuildError> {
        match names.iter().find(|name| !self.actions.contains_key(*name)) {
            Some(name) => Err(BuildError::UnknownAction {
                state: state.name().to_string(),
                name: name.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_guard(&self, state: &S, name: &str) -> Result<(), BuildError> {
        if self.guards.contains_key(name) {
            Ok(())
        } else {
            Err(BuildError::UnknownGuard {
                state: state.name().to_string(),
                name: name.to_string(),
            })
        }
    }
}
