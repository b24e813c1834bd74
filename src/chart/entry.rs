//! Transition entries and event targets attached to chart states.

use crate::core::{Action, Event, State};
use std::collections::HashMap;

/// Reserved marker value that makes a state terminal.
pub const FINAL_MARKER: &str = "final";

/// One declaration attached to a state in the chart.
///
/// A state's outgoing behavior is the union of all its `On` entries plus
/// any markers. Only one `On` entry is expected in practice, but the
/// interpreter scans them all.
pub enum TransitionEntry<S: State, E: Event, C> {
    /// Event-dispatch table: which target each event resolves to.
    On(HashMap<E, EventTarget<S, C>>),
    /// Free-form tag. The reserved value [`FINAL_MARKER`] makes the state
    /// terminal; other values carry no built-in semantics.
    Marker(String),
}

impl<S: State, E: Event, C> TransitionEntry<S, E, C> {
    /// Build an event-dispatch entry from `(event, target)` pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statechart::chart::{EventTarget, TransitionEntry};
    /// use statechart::{event_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Light { Green, Yellow }
    /// }
    ///
    /// event_enum! {
    ///     enum Signal { Timer }
    /// }
    ///
    /// let entry: TransitionEntry<Light, Signal, ()> = TransitionEntry::on([
    ///     (Signal::Timer, EventTarget::simple(Light::Yellow)),
    /// ]);
    /// assert!(!entry.is_final_marker());
    /// ```
    pub fn on<I>(targets: I) -> Self
    where
        I: IntoIterator<Item = (E, EventTarget<S, C>)>,
    {
        Self::On(targets.into_iter().collect())
    }

    /// Build a marker entry with an arbitrary tag.
    pub fn marker(tag: impl Into<String>) -> Self {
        Self::Marker(tag.into())
    }

    /// Build the reserved terminal marker.
    pub fn final_marker() -> Self {
        Self::Marker(FINAL_MARKER.to_string())
    }

    /// Whether this entry is the reserved terminal marker.
    pub fn is_final_marker(&self) -> bool {
        matches!(self, Self::Marker(tag) if tag == FINAL_MARKER)
    }
}

impl<S: State, E: Event, C> Clone for TransitionEntry<S, E, C> {
    fn clone(&self) -> Self {
        match self {
            Self::On(events) => Self::On(events.clone()),
            Self::Marker(tag) => Self::Marker(tag.clone()),
        }
    }
}

/// What happens when a specific event fires from a specific state.
///
/// The guard-carrying variants reference guards by name; the named-action
/// variants reference actions by name. Names resolve against the chart's
/// handler tables at transition time, falling back softly when a name is
/// missing (actions are skipped, guards pass).
pub enum EventTarget<S: State, C> {
    /// Unconditional move, no context change.
    Simple(S),
    /// Move and replace context with `action(context)`. The action is an
    /// inline closure, not a name lookup.
    WithAction { target: S, action: Action<C> },
    /// Move and fold the named actions over the context, in order.
    WithActions { target: S, actions: Vec<String> },
    /// Move only if the named guard passes on the current context.
    WithGuard { target: S, guard: String },
    /// Trial-apply the named actions, then evaluate the guard on the final
    /// trial context. Commits all of the actions or none of them.
    WithActionsAndGuard {
        target: S,
        actions: Vec<String>,
        guard: String,
    },
}

impl<S: State, C> EventTarget<S, C> {
    /// Unconditional move to `target`.
    pub fn simple(target: S) -> Self {
        Self::Simple(target)
    }

    /// Move to `target`, transforming context with an inline closure.
    pub fn with_action<F>(target: S, action: F) -> Self
    where
        F: Fn(C) -> C + Send + Sync + 'static,
    {
        Self::WithAction {
            target,
            action: Action::new(action),
        }
    }

    /// Move to `target`, applying the named actions in order.
    pub fn with_actions<I, N>(target: S, actions: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::WithActions {
            target,
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }

    /// Move to `target` only if the named guard passes.
    pub fn with_guard(target: S, guard: impl Into<String>) -> Self {
        Self::WithGuard {
            target,
            guard: guard.into(),
        }
    }

    /// Move to `target`, committing the named actions only if the guard
    /// passes on the trial result of applying them.
    pub fn with_actions_and_guard<I, N>(target: S, actions: I, guard: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::WithActionsAndGuard {
            target,
            actions: actions.into_iter().map(Into::into).collect(),
            guard: guard.into(),
        }
    }

    /// The declared target state of this variant.
    pub fn target(&self) -> &S {
        match self {
            Self::Simple(target) => target,
            Self::WithAction { target, .. } => target,
            Self::WithActions { target, .. } => target,
            Self::WithGuard { target, .. } => target,
            Self::WithActionsAndGuard { target, .. } => target,
        }
    }
}

impl<S: State, C> Clone for EventTarget<S, C> {
    fn clone(&self) -> Self {
        match self {
            Self::Simple(target) => Self::Simple(target.clone()),
            Self::WithAction { target, action } => Self::WithAction {
                target: target.clone(),
                action: action.clone(),
            },
            Self::WithActions { target, actions } => Self::WithActions {
                target: target.clone(),
                actions: actions.clone(),
            },
            Self::WithGuard { target, guard } => Self::WithGuard {
                target: target.clone(),
                guard: guard.clone(),
            },
            Self::WithActionsAndGuard {
                target,
                actions,
                guard,
            } => Self::WithActionsAndGuard {
                target: target.clone(),
                actions: actions.clone(),
                guard: guard.clone(),
            },
        }
    }
}
