//! Machine runtime executing a chart.
//!
//! A machine wraps a shared [`Chart`] with the mutable pieces of an
//! automaton: the current state, the context, and a liveness flag. Its one
//! operation is `transition`: feed an event, get the (possibly unchanged)
//! resulting state back, with context updated per the chart's rules.
//!
//! Transitions never fail. Anything unresolvable - an undeclared departure
//! state, an unknown event, a missing handler name - degrades to a no-op
//! or a soft halt instead of an error, so callers can drive a machine with
//! arbitrary event sequences and only ever inspect the returned state and
//! the liveness flag.

use crate::chart::{Chart, EventTarget, StateLookup, TransitionEntry};
use crate::core::{Event, State, TransitionLog, TransitionRecord};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Mutable runtime instance of a chart.
///
/// The machine itself has a two-state lifecycle: it starts alive, and
/// halts permanently when it observes that its departure state is terminal
/// (explicitly marked `"final"`, declared with no transitions, or never
/// declared at all). A halted machine treats every further `transition`
/// call as the identity function on its current state.
///
/// # Example
///
/// ```rust
/// use statechart::builder::ChartBuilder;
/// use statechart::chart::{EventTarget, TransitionEntry};
/// use statechart::machine::Machine;
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
///     .state(
///         Light::Yellow,
///         [TransitionEntry::on([(
///             Signal::Timer,
///             EventTarget::simple(Light::Red),
///         )])],
///     )
///     .state(
///         Light::Red,
///         [TransitionEntry::on([(
///             Signal::Timer,
///             EventTarget::simple(Light::Green),
///         )])],
///     )
///     .build();
///
/// let mut machine = Machine::from_chart(chart);
/// assert_eq!(machine.transition(Signal::Timer), Light::Yellow);
/// assert_eq!(machine.transition(Signal::Timer), Light::Red);
/// assert_eq!(machine.transition(Signal::Timer), Light::Green);
/// ```
pub struct Machine<S: State, E: Event, C: Clone + Send + Sync + 'static> {
    chart: Arc<Chart<S, E, C>>,
    current: S,
    context: C,
    alive: bool,
    log: TransitionLog<S, E>,
}

impl<S: State, E: Event, C: Clone + Send + Sync + 'static> Machine<S, E, C> {
    /// Create a machine from a shared chart.
    ///
    /// Copies the chart's initial state and clones its initial context;
    /// the machine starts alive with an empty log.
    pub fn new(chart: Arc<Chart<S, E, C>>) -> Self {
        let current = chart.initial().clone();
        let context = chart.initial_context().clone();
        Self {
            chart,
            current,
            context,
            alive: true,
            log: TransitionLog::new(),
        }
    }

    /// Create a machine that owns its chart exclusively.
    pub fn from_chart(chart: Chart<S, E, C>) -> Self {
        Self::new(Arc::new(chart))
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get current context (pure)
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Whether the machine still processes events (pure)
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Get the committed-transition log (pure)
    pub fn log(&self) -> &TransitionLog<S, E> {
        &self.log
    }

    /// Get the chart this machine executes (pure)
    pub fn chart(&self) -> &Chart<S, E, C> {
        &self.chart
    }

    /// Feed an event, departing from the machine's current state.
    ///
    /// Returns the resulting state, which is unchanged whenever the event
    /// is not handled, a guard rejects the move, or the machine is (or
    /// becomes) halted.
    pub fn transition(&mut self, event: E) -> S {
        let from = self.current.clone();
        self.transition_from(from, event)
    }

    /// Feed an event with an explicit departure state.
    ///
    /// The machine's own state and context are still the values mutated;
    /// the explicit departure only replaces `current` for the lookup. Kept
    /// for call sites that thread the state through explicitly, e.g.
    /// functional pipelines.
    pub fn transition_from(&mut self, from: S, event: E) -> S {
        if !self.alive {
            return self.current.clone();
        }

        let chart = Arc::clone(&self.chart);
        let entries = match chart.lookup(&from) {
            StateLookup::Undeclared => {
                debug!(state = from.name(), "departure state not declared, halting");
                self.alive = false;
                return from;
            }
            StateLookup::NoTransitions => {
                debug!(state = from.name(), "departure state has no transitions, halting");
                self.alive = false;
                return from;
            }
            StateLookup::Entries(entries) => entries,
        };

        // Terminal detection precedes event dispatch: a final state can
        // never be nudged out of, even if a dispatch table is also present.
        if entries.iter().any(TransitionEntry::is_final_marker) {
            debug!(state = from.name(), "final state reached, halting");
            self.alive = false;
            return from;
        }

        let Some(target) = entries.iter().find_map(|entry| match entry {
            TransitionEntry::On(events) => events.get(&event),
            TransitionEntry::Marker(_) => None,
        }) else {
            debug!(
                state = from.name(),
                event = event.name(),
                "event not handled in this state"
            );
            return from;
        };

        self.dispatch(&chart, from, event, target)
    }

    fn dispatch(
        &mut self,
        chart: &Chart<S, E, C>,
        from: S,
        event: E,
        target: &EventTarget<S, C>,
    ) -> S {
        match target {
            EventTarget::Simple(to) => self.commit(from, event, to.clone()),
            EventTarget::WithAction { target: to, action } => {
                self.context = action.apply(self.context.clone());
                self.commit(from, event, to.clone())
            }
            EventTarget::WithActions {
                target: to,
                actions,
            } => {
                self.context = chart.apply_actions(actions, self.context.clone());
                self.commit(from, event, to.clone())
            }
            EventTarget::WithGuard { target: to, guard } => {
                if chart.guard_allows(guard, &self.context) {
                    self.commit(from, event, to.clone())
                } else {
                    debug!(
                        state = from.name(),
                        event = event.name(),
                        guard = guard.as_str(),
                        "guard rejected transition"
                    );
                    from
                }
            }
            EventTarget::WithActionsAndGuard {
                target: to,
                actions,
                guard,
            } => {
                // Trial-apply the batch to a copy, gate on the result, and
                // only then install it: all of the actions commit or none.
                let trial = chart.apply_actions(actions, self.context.clone());
                if chart.guard_allows(guard, &trial) {
                    self.context = trial;
                    self.commit(from, event, to.clone())
                } else {
                    debug!(
                        state = from.name(),
                        event = event.name(),
                        guard = guard.as_str(),
                        "guard rejected action batch"
                    );
                    from
                }
            }
        }
    }

    fn commit(&mut self, from: S, event: E, to: S) -> S {
        debug!(from = from.name(), to = to.name(), event = event.name(), "transition committed");
        self.log = self.log.record(TransitionRecord {
            from,
            to: to.clone(),
            event,
            timestamp: Utc::now(),
        });
        self.current = to.clone();
        to
    }
}
