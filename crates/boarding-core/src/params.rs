//! Physical constants of the airplane and its passengers.

use crate::{CoreError, CoreResult, RowId};

/// Parameters characterizing properties of the airplane and passengers.
///
/// These six values are the entire configuration surface of the engine.  All
/// must be positive and finite; [`validate`][PhysicalParams::validate] rejects
/// anything else before a simulation is built.  The defaults describe a
/// single-aisle cabin with unhurried boarders.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalParams {
    /// Aisle space one standing person occupies, in meters.  A blocked
    /// passenger stops this far behind the person ahead.
    pub waiting_space: f64,

    /// Spacing between consecutive seat rows, in meters.  A passenger's goal
    /// position is `seat_space * row`.
    pub seat_space: f64,

    /// Delay between being cleared to move and actually starting to walk, in
    /// seconds.
    pub reflex_time: f64,

    /// Time a passenger occupies their row storing luggage and getting
    /// situated before sitting, in seconds.
    pub packing_time: f64,

    /// Walking speed in the aisle, in meters/second.
    pub walking_speed: f64,

    /// Tolerance used for every floating-point time and position comparison.
    pub epsilon: f64,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        Self {
            waiting_space: 0.8,
            seat_space:    1.5,
            reflex_time:   0.3,
            packing_time:  12.0,
            walking_speed: 0.8,
            epsilon:       1e-6,
        }
    }
}

impl PhysicalParams {
    /// Reject non-positive or non-finite values.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("waiting_space", self.waiting_space),
            ("seat_space",    self.seat_space),
            ("reflex_time",   self.reflex_time),
            ("packing_time",  self.packing_time),
            ("walking_speed", self.walking_speed),
            ("epsilon",       self.epsilon),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::Config(format!(
                    "{name} must be a positive real, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Aisle position of a seat row, in meters from the cabin door.
    #[inline]
    pub fn row_position(&self, row: RowId) -> f64 {
        self.seat_space * row.0 as f64
    }

    /// `true` if `x` is within `epsilon` of zero.
    #[inline]
    pub fn near_zero(&self, x: f64) -> bool {
        x.abs() < self.epsilon
    }
}
