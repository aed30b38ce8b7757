//! `boarding-output` — simulation trace writers.
//!
//! The engine reports transitions through the `BoardingObserver` trait;
//! [`TraceOutputObserver`] forwards them to an [`OutputWriter`] backend.
//! CSV is the only backend today:
//!
//! | File              | Contents                                  |
//! |-------------------|-------------------------------------------|
//! | `transitions.csv` | (time, passenger, state before, after)    |
//! | `run_summary.csv` | passenger count, event count, total time  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use boarding_output::{CsvWriter, TraceOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceOutputObserver::new(writer);
//! let total = sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceOutputObserver;
pub use row::{RunSummaryRow, TransitionRow};
pub use writer::OutputWriter;
