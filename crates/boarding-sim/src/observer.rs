//! Observer hooks for trace collection and progress reporting.

use boarding_core::{PersonId, SimTime};

use crate::PassengerState;

/// One state transition as seen by observers: the (time, passenger,
/// state-before, state-after) tuple of the event trace.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionRecord {
    pub at:     SimTime,
    pub person: PersonId,
    pub from:   PassengerState,
    pub to:     PassengerState,
}

/// Callbacks invoked by [`BoardingSim::run`][crate::BoardingSim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait BoardingObserver {
    /// Called for every state transition — including the cascaded unblocking
    /// of the passenger behind an actor — in processing order.
    fn on_transition(&mut self, _record: &TransitionRecord) {}

    /// Called once, when the last passenger sits down.
    fn on_complete(&mut self, _final_time: SimTime, _events: u64) {}
}

/// A [`BoardingObserver`] that does nothing.  Use when you only want the
/// final time.
pub struct NoopObserver;

impl BoardingObserver for NoopObserver {}

/// Records the full event trace in memory.
///
/// Two runs over identical input produce identical `records` vectors —
/// bit-identical event times included — which is exactly what the
/// determinism tests compare.
#[derive(Default)]
pub struct TraceRecorder {
    pub records:    Vec<TransitionRecord>,
    pub final_time: Option<SimTime>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardingObserver for TraceRecorder {
    fn on_transition(&mut self, record: &TransitionRecord) {
        self.records.push(*record);
    }

    fn on_complete(&mut self, final_time: SimTime, _events: u64) {
        self.final_time = Some(final_time);
    }
}
