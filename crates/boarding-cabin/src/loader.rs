//! CSV manifest loader.
//!
//! # CSV format
//!
//! One row per passenger.  `queue_position` 0 is the front of the line.
//!
//! ```csv
//! person_id,seat_row,seat_column,queue_position
//! 0,3,B,2
//! 1,1,A,0
//! 2,5,D,1
//! ```
//!
//! Every `person_id` in `0..N` must appear exactly once, and the
//! `queue_position` values must form a permutation of `0..N` — the same
//! contract [`BoardingManifest::new`] enforces for in-memory input.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use boarding_core::{PersonId, RowId};

use crate::{BoardingManifest, Seat, SetupError, SetupResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ManifestRecord {
    person_id:      u32,
    seat_row:       u16,
    seat_column:    char,
    queue_position: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`BoardingManifest`] from a CSV file.
pub fn load_manifest_csv(path: &Path) -> SetupResult<BoardingManifest> {
    let file = std::fs::File::open(path).map_err(SetupError::Io)?;
    load_manifest_reader(file)
}

/// Like [`load_manifest_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded manifests.
pub fn load_manifest_reader<R: Read>(reader: R) -> SetupResult<BoardingManifest> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rows: Vec<ManifestRecord> = csv_reader
        .deserialize()
        .collect::<Result<_, _>>()
        .map_err(|e| SetupError::Parse(e.to_string()))?;

    let n = rows.len();
    let mut seats: Vec<Option<Seat>> = vec![None; n];
    let mut queue: Vec<Option<PersonId>> = vec![None; n];

    for row in rows {
        let person = PersonId(row.person_id);
        if person.index() >= n {
            return Err(SetupError::Parse(format!(
                "person_id {} out of range for a {n}-row manifest",
                row.person_id
            )));
        }
        if seats[person.index()].is_some() {
            return Err(SetupError::Parse(format!(
                "person_id {} appears more than once",
                row.person_id
            )));
        }

        let column = match row.seat_column.to_ascii_uppercase() {
            c @ 'A'..='Z' => c as u8 - b'A',
            c => {
                return Err(SetupError::Parse(format!(
                    "invalid seat column {c:?} for person {}",
                    row.person_id
                )));
            }
        };
        seats[person.index()] = Some(Seat::new(RowId(row.seat_row), column));

        let pos = row.queue_position as usize;
        if pos >= n || queue[pos].is_some() {
            return Err(SetupError::QueueNotPermutation { person });
        }
        queue[pos] = Some(person);
    }

    // Every slot is filled: N rows, distinct in-range person_ids and
    // queue_positions.  flatten() would silently drop a hole, so map instead.
    let seats: Vec<Seat> = seats
        .into_iter()
        .map(|s| s.ok_or_else(|| SetupError::Parse("incomplete manifest".into())))
        .collect::<SetupResult<_>>()?;
    let queue: Vec<PersonId> = queue
        .into_iter()
        .map(|q| q.ok_or_else(|| SetupError::Parse("incomplete manifest".into())))
        .collect::<SetupResult<_>>()?;

    BoardingManifest::new(seats, queue)
}
