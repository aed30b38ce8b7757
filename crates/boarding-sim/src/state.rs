//! The per-passenger state machine.

use std::fmt;

/// What a single passenger is doing.
///
/// States advance along five legal edges and terminate at `Seated`:
///
/// ```text
/// Waiting ──► Unblocked ──► Moving ──► Packing ──► Seated
///    ▲                        │
///    └────────────────────────┘  (blocked before reaching the seat)
/// ```
///
/// `Waiting → Unblocked` is triggered externally, when the obstruction ahead
/// clears; every other edge is the passenger's own scheduled event.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassengerState {
    /// Stalled behind a blocker, or not yet started.  Position fixed.
    Waiting,
    /// Cleared to go; motion starts after the reflex delay.
    Unblocked,
    /// Walking toward the seat row at constant speed.
    Moving,
    /// Stationary at the seat row, stowing luggage.
    Packing,
    /// Terminal.  Removed from the aisle topology.
    Seated,
}

impl PassengerState {
    /// A passenger in an obstructing state occupies aisle space without
    /// advancing, so it can block the passenger behind.  `Moving` is always
    /// non-obstructing, `Seated` passengers have left the aisle.
    #[inline]
    pub fn is_obstructing(self) -> bool {
        matches!(
            self,
            PassengerState::Waiting | PassengerState::Unblocked | PassengerState::Packing
        )
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, PassengerState::Seated)
    }

    /// The five legal edges of the state machine.
    pub fn can_transition_to(self, next: PassengerState) -> bool {
        matches!(
            (self, next),
            (Self::Waiting, Self::Unblocked)
                | (Self::Unblocked, Self::Moving)
                | (Self::Moving, Self::Packing)
                | (Self::Moving, Self::Waiting)
                | (Self::Packing, Self::Seated)
        )
    }

    /// Lowercase state name, as written in traces.
    pub fn name(self) -> &'static str {
        match self {
            PassengerState::Waiting   => "waiting",
            PassengerState::Unblocked => "unblocked",
            PassengerState::Moving    => "moving",
            PassengerState::Packing   => "packing",
            PassengerState::Seated    => "seated",
        }
    }
}

impl fmt::Display for PassengerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
