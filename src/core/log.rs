//! In-memory transition log.
//!
//! Records the committed transitions of a machine in order. Rejected or
//! no-op transition calls are never recorded, so the log is an exact audit
//! trail of every state change.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// Records are immutable values describing a move from one state to
/// another in response to an event at a specific point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, E: Event> {
    /// The state the machine departed from
    pub from: S,
    /// The state the machine arrived in
    pub to: S,
    /// The event that triggered the move
    pub event: E,
    /// When the transition committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of committed transitions.
///
/// The log is immutable - [`TransitionLog::record`] returns a new log with
/// the record appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use statechart::core::{TransitionLog, TransitionRecord};
/// use statechart::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Phase { One, Two }
/// }
///
/// event_enum! {
///     enum Tick { Next }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: Phase::One,
///     to: Phase::Two,
///     event: Tick::Next,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.path(), vec![&Phase::One, &Phase::Two]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State, E: Event> {
    records: Vec<TransitionRecord<S, E>>,
}

impl<S: State, E: Event> Default for TransitionLog<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionLog<S, E> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    ///
    /// This is a pure function - the existing log is not mutated.
    pub fn record(&self, record: TransitionRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the departure state of the
    /// first record, then the arrival state of each record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Total duration from first to last committed transition.
    ///
    /// Returns `None` while the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All records in commit order.
    pub fn records(&self) -> &[TransitionRecord<S, E>] {
        &self.records
    }
}
