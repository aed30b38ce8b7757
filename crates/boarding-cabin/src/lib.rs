//! `boarding-cabin` — seat maps and boarding-order setup.
//!
//! The engine in `boarding-sim` treats seat assignment as an opaque input;
//! this crate is the factory that produces it.  A validated
//! [`BoardingManifest`] (who sits where, who stands where in line) is the
//! only thing that crosses the boundary.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`seat`]     | `Seat`, `CabinLayout`                               |
//! | [`manifest`] | `BoardingManifest` (validated assignment + queue)   |
//! | [`loader`]   | `load_manifest_csv`, `load_manifest_reader`         |
//! | [`error`]    | `SetupError`, `SetupResult<T>`                      |

pub mod error;
pub mod loader;
pub mod manifest;
pub mod seat;

#[cfg(test)]
mod tests;

pub use error::{SetupError, SetupResult};
pub use loader::{load_manifest_csv, load_manifest_reader};
pub use manifest::BoardingManifest;
pub use seat::{CabinLayout, Seat};
