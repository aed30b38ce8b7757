//! Setup error taxonomy.
//!
//! Every variant is reported to the caller before a simulation starts; the
//! engine never sees invalid input.

use boarding_core::PersonId;
use thiserror::Error;

use crate::Seat;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("{passengers} passengers but only {seats} seats")]
    NotEnoughSeats { seats: usize, passengers: usize },

    #[error("seat list length {seats} does not match queue length {queue}")]
    CountMismatch { seats: usize, queue: usize },

    #[error("queue is not a permutation of the passenger list (offending entry: {person})")]
    QueueNotPermutation { person: PersonId },

    #[error("seat {seat} assigned to more than one passenger")]
    DuplicateSeat { seat: Seat },

    #[error("seat {seat} is outside the cabin (rows start at 1)")]
    RowOutOfRange { seat: Seat },

    #[error("manifest parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SetupResult<T> = Result<T, SetupError>;
