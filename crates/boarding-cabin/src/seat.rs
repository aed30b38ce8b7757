//! Seats and the cabin seat map.
//!
//! Only the row of a seat matters to the boarding engine (it fixes the goal
//! position in the aisle); the column is carried for identity, traces, and
//! diagnostics.

use std::fmt;
use std::str::FromStr;

use boarding_core::RowId;

use crate::SetupError;

// ── Seat ──────────────────────────────────────────────────────────────────────

/// One seat: a row number and a column index (0 = `A`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub row:    RowId,
    /// Column index within the row; displayed as a letter (`0` → `A`).
    pub column: u8,
}

impl Seat {
    pub fn new(row: RowId, column: u8) -> Self {
        Self { row, column }
    }

    /// Column as a letter, e.g. `2` → `C`.
    #[inline]
    pub fn column_letter(self) -> char {
        (b'A' + self.column) as char
    }

    /// Human-readable label, e.g. `12C`.
    pub fn label(self) -> String {
        format!("{}{}", self.row.0, self.column_letter())
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row.0, self.column_letter())
    }
}

impl FromStr for Seat {
    type Err = SetupError;

    /// Parse a label like `12C` (row digits followed by one column letter).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s.len().checked_sub(1).filter(|_| s.is_ascii());
        let Some(split) = split else {
            return Err(SetupError::Parse(format!("invalid seat label {s:?}")));
        };
        let (digits, letter) = s.split_at(split);
        let row: u16 = digits
            .parse()
            .map_err(|_| SetupError::Parse(format!("invalid seat row in {s:?}")))?;
        let column = match letter.chars().next() {
            Some(c @ 'A'..='Z') => c as u8 - b'A',
            _ => return Err(SetupError::Parse(format!("invalid seat column in {s:?}"))),
        };
        Ok(Seat::new(RowId(row), column))
    }
}

// ── CabinLayout ───────────────────────────────────────────────────────────────

/// A rectangular seat map: `rows` rows of `columns` seats each.
///
/// Rows are numbered from 1 at the front of the cabin; columns are lettered
/// from `A`.  The layout is the opaque seat inventory the manifest factory
/// draws from — the engine itself never sees it.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinLayout {
    pub rows:    u16,
    pub columns: u8,
}

impl CabinLayout {
    pub fn new(rows: u16, columns: u8) -> Self {
        Self { rows, columns }
    }

    /// Total number of seats in the cabin.
    #[inline]
    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// All seats in row-major order, front row first.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        (1..=self.rows)
            .flat_map(move |r| (0..self.columns).map(move |c| Seat::new(RowId(r), c)))
    }

    /// `true` if `seat` exists in this layout.
    pub fn contains(&self, seat: Seat) -> bool {
        (1..=self.rows).contains(&seat.row.0) && seat.column < self.columns
    }
}
