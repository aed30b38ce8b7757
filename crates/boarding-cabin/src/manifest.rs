//! `BoardingManifest` — who sits where, and in what order they board.

use std::collections::HashSet;

use boarding_core::{PersonId, SimRng};

use crate::{CabinLayout, Seat, SetupError, SetupResult};

/// The validated input contract of a boarding run: a person→seat assignment
/// and a front-to-back boarding queue.
///
/// Both vectors have one entry per passenger; `seats` is indexed by
/// `PersonId` and `queue[0]` is the passenger at the front of the line.
/// Construction enforces the setup invariants (queue is a permutation, seats
/// distinct, rows ≥ 1), so a `BoardingManifest` that exists is safe to
/// simulate.
#[derive(Clone, Debug)]
pub struct BoardingManifest {
    seats: Vec<Seat>,
    queue: Vec<PersonId>,
}

impl BoardingManifest {
    /// Build a manifest from an explicit assignment and queue, validating the
    /// setup invariants.
    pub fn new(seats: Vec<Seat>, queue: Vec<PersonId>) -> SetupResult<Self> {
        let n = seats.len();
        if queue.len() != n {
            return Err(SetupError::CountMismatch { seats: n, queue: queue.len() });
        }

        // Row 0 would put the goal at the front passenger's starting position.
        if let Some(&seat) = seats.iter().find(|s| s.row.0 == 0) {
            return Err(SetupError::RowOutOfRange { seat });
        }

        let mut assigned: HashSet<Seat> = HashSet::with_capacity(n);
        for &seat in &seats {
            if !assigned.insert(seat) {
                return Err(SetupError::DuplicateSeat { seat });
            }
        }

        let mut seen = vec![false; n];
        for &person in &queue {
            if person.index() >= n || seen[person.index()] {
                return Err(SetupError::QueueNotPermutation { person });
            }
            seen[person.index()] = true;
        }

        Ok(Self { seats, queue })
    }

    /// Random setup: shuffle the layout's seats, deal the first `passengers`
    /// of them out, and shuffle the boarding order.
    ///
    /// Requires `passengers <= layout.seat_count()`.
    pub fn random(
        layout:     &CabinLayout,
        passengers: usize,
        rng:        &mut SimRng,
    ) -> SetupResult<Self> {
        if passengers > layout.seat_count() {
            return Err(SetupError::NotEnoughSeats {
                seats: layout.seat_count(),
                passengers,
            });
        }

        let mut seats: Vec<Seat> = layout.seats().collect();
        rng.shuffle(&mut seats);
        seats.truncate(passengers);

        let mut queue: Vec<PersonId> = (0..passengers as u32).map(PersonId).collect();
        rng.shuffle(&mut queue);

        Self::new(seats, queue)
    }

    /// Number of passengers.
    #[inline]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// The seat assigned to `person`.
    #[inline]
    pub fn seat(&self, person: PersonId) -> Seat {
        self.seats[person.index()]
    }

    /// Per-person seat assignment, indexed by `PersonId`.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Boarding order, front of the line first.
    pub fn queue(&self) -> &[PersonId] {
        &self.queue
    }
}
