//! Structure-of-Arrays passenger storage.

use boarding_cabin::Seat;
use boarding_core::{PersonId, SimTime};

use crate::PassengerState;

/// SoA storage for all per-passenger simulation state.
///
/// Every `Vec` field has exactly `count` elements; the `PersonId` value is
/// the index into all of them:
///
/// ```ignore
/// let pos = store.position[person.index()];  // O(1), cache-friendly
/// ```
///
/// The aisle adjacency lives in [`AisleQueue`][crate::AisleQueue] and the
/// pending event times in [`EventClock`][crate::EventClock]; `PersonId`
/// indexes those the same way.
///
/// `position` is meaningful only as of `synced_at` — a `Moving` passenger's
/// stored position goes stale until the engine's lazy integration touches it
/// again.  Passengers in any other state do not move, so their positions
/// never go stale.
#[derive(Debug)]
pub struct PassengerStore {
    /// Number of passengers.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Assigned seat.  Only the row affects the goal position; the column is
    /// carried for traces and diagnostics.
    pub seat: Vec<Seat>,

    /// Current state-machine state.
    pub state: Vec<PassengerState>,

    /// Position along the aisle, in meters.  Non-decreasing while `Moving`.
    pub position: Vec<f64>,

    /// Goal position (`seat_space * row`), in meters.
    pub goal: Vec<f64>,

    /// Simulation time at which `position`/`state` were last made consistent.
    pub synced_at: Vec<SimTime>,
}

impl PassengerStore {
    pub(crate) fn new(seat: Vec<Seat>, goal: Vec<f64>, position: Vec<f64>) -> Self {
        let count = seat.len();
        debug_assert_eq!(goal.len(), count);
        debug_assert_eq!(position.len(), count);
        Self {
            count,
            seat,
            state: vec![PassengerState::Waiting; count],
            position,
            goal,
            synced_at: vec![SimTime::ZERO; count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `PersonId`s in ascending index order.
    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.count as u32).map(PersonId)
    }

    #[inline]
    pub fn state(&self, p: PersonId) -> PassengerState {
        self.state[p.index()]
    }

    /// Meters left between `p`'s synced position and its seat row.
    #[inline]
    pub fn distance_to_goal(&self, p: PersonId) -> f64 {
        self.goal[p.index()] - self.position[p.index()]
    }
}
