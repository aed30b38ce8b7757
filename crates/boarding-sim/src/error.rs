//! Simulation error taxonomy.
//!
//! Setup problems are reported before the run starts.  Invariant violations
//! mean the physical model itself went inconsistent — they abort the run
//! immediately, carrying the offending passenger, the time, and the nature
//! of the violation, rather than letting bad state propagate invisibly
//! through later events.  There are no transient or recoverable errors.

use boarding_cabin::SetupError;
use boarding_core::{CoreError, PersonId, SimTime};
use thiserror::Error;

use crate::PassengerState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A physical-model invariant failed.  Always fatal.
    #[error("invariant violated for {person} at {at}: {kind}")]
    Invariant {
        person: PersonId,
        at:     SimTime,
        kind:   InvariantKind,
    },

    /// The schedule ran dry while passengers were still standing.
    #[error("no event pending at {at} but {unseated} passengers are not seated")]
    Stalled { at: SimTime, unseated: usize },

    /// Schedule entries survived past the all-seated terminal condition.
    #[error("{entries} schedule entries left after boarding completed at {at}")]
    DanglingSchedule { at: SimTime, entries: usize },
}

impl SimError {
    pub(crate) fn invariant(person: PersonId, at: SimTime, kind: InvariantKind) -> Self {
        SimError::Invariant { person, at, kind }
    }
}

/// The nature of a fatal invariant violation.
#[derive(Debug, Error)]
pub enum InvariantKind {
    #[error("time would move backward ({from} -> {to})")]
    TimeReversal { from: SimTime, to: SimTime },

    #[error("position {position:.6} exceeds goal {goal:.6} beyond tolerance")]
    OvershotGoal { position: f64, goal: f64 },

    #[error("reached-seat event fired with position {position:.6} != goal {goal:.6}")]
    NotAtGoal { position: f64, goal: f64 },

    #[error("position read while stale (last synced at {synced_at})")]
    StaleSync { synced_at: SimTime },

    #[error("stepped past the pending event at {scheduled}")]
    SteppedPastEvent { scheduled: SimTime },

    #[error("illegal transition {from} -> {to}")]
    IllegalTransition { from: PassengerState, to: PassengerState },

    #[error("event fired in non-schedulable state {state}")]
    UnexpectedEvent { state: PassengerState },
}

pub type SimResult<T> = Result<T, SimError>;
