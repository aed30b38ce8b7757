//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous scalar in simulated seconds, wrapped in `SimTime`.
//! Event times are derived from distance/speed division, so they are
//! floating-point by nature; every comparison against "now" or against zero
//! therefore goes through a tolerance ([`SimTime::nearly`], or the `epsilon`
//! carried in [`PhysicalParams`][crate::PhysicalParams]) instead of exact
//! equality.
//!
//! The global clock only ever moves forward: the driver loop advances `now`
//! to the earliest pending event time, and every passenger's last-sync
//! timestamp trails it.

use std::fmt;

/// An absolute simulation time, in seconds from the start of boarding.
///
/// `SimTime` is `Copy` and wraps a plain `f64`.  It deliberately does not
/// implement `Eq`/`Ord`; heap ordering in the event clock goes through
/// [`SimTime::total_cmp`].
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Seconds elapsed since the start of boarding.
    #[inline]
    pub fn seconds(self) -> f64 {
        self.0
    }

    /// The time `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: f64) -> SimTime {
        SimTime(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is
    /// actually later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// `true` if `self` and `other` differ by less than `epsilon`.
    #[inline]
    pub fn nearly(self, other: SimTime, epsilon: f64) -> bool {
        (self.0 - other.0).abs() < epsilon
    }

    /// Total ordering over the underlying `f64` (IEEE 754 totalOrder).
    #[inline]
    pub fn total_cmp(&self, other: &SimTime) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}
