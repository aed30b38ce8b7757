//! `boarding-core` — foundational types for the `rust_boarding` simulator.
//!
//! This crate is a dependency of every other `boarding-*` crate.  It
//! intentionally has no internal dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `PersonId`, `RowId`                               |
//! | [`time`]    | `SimTime` (continuous simulation seconds)         |
//! | [`params`]  | `PhysicalParams` (the six tunables)               |
//! | [`rng`]     | `SimRng` (seedable setup randomness)              |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{PersonId, RowId};
pub use params::PhysicalParams;
pub use rng::SimRng;
pub use time::SimTime;
