//! The aisle line-up topology — who is directly ahead of / behind whom.

use boarding_core::PersonId;

/// Doubly linked ahead/behind chain over the boarding line.
///
/// Stored as two sentinel-linked `Vec<PersonId>` in the SoA convention;
/// `PersonId::INVALID` means "no neighbor".  The chain is always a simple
/// path: consistent in both directions (`ahead[behind[p]] == p` whenever
/// `behind[p]` exists), no cycles, and seated passengers are spliced out
/// entirely.
#[derive(Clone, Debug)]
pub struct AisleQueue {
    ahead:  Vec<PersonId>,
    behind: Vec<PersonId>,
}

impl AisleQueue {
    /// Build the chain from the boarding order, front of the line first.
    pub fn from_queue(queue: &[PersonId]) -> Self {
        let n = queue.len();
        let mut ahead = vec![PersonId::INVALID; n];
        let mut behind = vec![PersonId::INVALID; n];
        for pair in queue.windows(2) {
            let (front, back) = (pair[0], pair[1]);
            ahead[back.index()] = front;
            behind[front.index()] = back;
        }
        Self { ahead, behind }
    }

    /// The passenger directly ahead of `p`, toward the front of the cabin.
    #[inline]
    pub fn ahead(&self, p: PersonId) -> Option<PersonId> {
        valid(self.ahead[p.index()])
    }

    /// The passenger directly behind `p`.
    #[inline]
    pub fn behind(&self, p: PersonId) -> Option<PersonId> {
        valid(self.behind[p.index()])
    }

    /// Remove `p` from the line: link its neighbors directly to each other
    /// and clear `p`'s own links.  Happens exactly once per passenger, on
    /// `Packing → Seated`, and must precede the re-evaluation of the
    /// passenger that was behind `p` — its "ahead" has changed.
    pub fn splice_out(&mut self, p: PersonId) {
        let front = self.ahead[p.index()];
        let back = self.behind[p.index()];
        if front.is_valid() {
            self.behind[front.index()] = back;
        }
        if back.is_valid() {
            self.ahead[back.index()] = front;
        }
        self.ahead[p.index()] = PersonId::INVALID;
        self.behind[p.index()] = PersonId::INVALID;
    }

    /// Check the two-way chain invariant for every passenger.
    pub fn is_consistent(&self) -> bool {
        (0..self.ahead.len() as u32).map(PersonId).all(|p| {
            let back_ok = match self.behind(p) {
                Some(b) => self.ahead(b) == Some(p),
                None => true,
            };
            let front_ok = match self.ahead(p) {
                Some(a) => self.behind(a) == Some(p),
                None => true,
            };
            back_ok && front_ok
        })
    }
}

#[inline]
fn valid(id: PersonId) -> Option<PersonId> {
    id.is_valid().then_some(id)
}
