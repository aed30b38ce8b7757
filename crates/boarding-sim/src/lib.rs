//! `boarding-sim` — the discrete-event boarding engine.
//!
//! # Event loop
//!
//! ```text
//! bootstrap: release the front of the line          (Waiting → Unblocked)
//! loop until everyone is seated:
//!   ① pop the earliest (time, passenger) entry — lowest id on ties
//!   ② advance the global clock to that time
//!   ③ sync the actor's position (lazy integration)
//!   ④ apply the actor's transition:
//!        Unblocked → Moving    schedule reach-seat vs hit-obstruction
//!        Moving    → Packing   at the seat row, or → Waiting if blocked
//!        Packing   → Seated    splice out of the aisle chain
//!   ⑤ re-evaluate the passenger directly behind the actor:
//!        Waiting and now clear → Unblocked;  Moving → reschedule
//! ```
//!
//! The cascade in ⑤ is applied synchronously within the same step, not queued
//! as a separate event.  The whole engine is single-threaded and
//! deterministic: given the same manifest and constants, two runs produce
//! bit-identical event traces.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`state`]    | `PassengerState` (the five-state machine)               |
//! | [`store`]    | `PassengerStore` (SoA per-passenger state)              |
//! | [`aisle`]    | `AisleQueue` (ahead/behind chain)                       |
//! | [`clock`]    | `EventClock` (global time + pending-event set)          |
//! | [`engine`]   | lazy integration and transition application             |
//! | [`sim`]      | `BoardingSim`, `CabinSnapshot`                          |
//! | [`builder`]  | `SimBuilder`                                            |
//! | [`observer`] | `BoardingObserver`, `NoopObserver`, `TraceRecorder`     |
//! | [`error`]    | `SimError`, `InvariantKind`, `SimResult<T>`             |

pub mod aisle;
pub mod builder;
pub mod clock;
pub mod engine;
pub mod error;
pub mod observer;
pub mod sim;
pub mod state;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aisle::AisleQueue;
pub use builder::SimBuilder;
pub use clock::EventClock;
pub use error::{InvariantKind, SimError, SimResult};
pub use observer::{BoardingObserver, NoopObserver, TraceRecorder, TransitionRecord};
pub use sim::{BoardingSim, CabinSnapshot, PassengerSnapshot};
pub use state::PassengerState;
pub use store::PassengerStore;
