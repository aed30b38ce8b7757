//! The `BoardingSim` aggregate and its event loop.

use boarding_cabin::Seat;
use boarding_core::{PersonId, PhysicalParams, SimTime};

use crate::{
    AisleQueue, BoardingObserver, EventClock, PassengerState, PassengerStore, SimError, SimResult,
};

// ── BoardingSim ───────────────────────────────────────────────────────────────

/// The whole simulation state, owned as one aggregate and mutated in place by
/// every event.  No globals: the driver loop and the transition helpers all
/// work through `&mut self`.
///
/// Create via [`SimBuilder`][crate::SimBuilder]; drive with [`run`][Self::run]
/// or step with [`advance_one_event`][Self::advance_one_event].
#[derive(Debug)]
pub struct BoardingSim {
    /// Physical constants, immutable for the life of the run.
    pub params: PhysicalParams,

    /// Per-passenger SoA state.
    pub passengers: PassengerStore,

    /// Ahead/behind adjacency of the line.
    pub aisle: AisleQueue,

    /// Global time plus the pending-event set.
    pub clock: EventClock,

    /// Passengers already seated, so the terminal check is O(1).
    pub(crate) seated: usize,

    /// Events popped and applied so far.
    pub(crate) events: u64,

    /// Whether the front of the line has been released.
    started: bool,
}

impl BoardingSim {
    pub(crate) fn new(params: PhysicalParams, passengers: PassengerStore, aisle: AisleQueue) -> Self {
        let count = passengers.count;
        Self {
            params,
            passengers,
            aisle,
            clock: EventClock::new(count),
            seated: 0,
            events: 0,
            started: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// The current global simulation time.
    #[inline]
    pub fn time(&self) -> SimTime {
        self.clock.now()
    }

    /// `true` once every passenger is seated.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.seated == self.passengers.count
    }

    /// Number of events processed so far.
    #[inline]
    pub fn events_processed(&self) -> u64 {
        self.events
    }

    /// Run until everyone is seated and return the total boarding time.
    pub fn run<O: BoardingObserver>(&mut self, observer: &mut O) -> SimResult<SimTime> {
        while !self.is_complete() {
            self.advance_one_event(observer)?;
        }
        // Every schedule entry belongs to an unseated passenger, so the
        // terminal condition implies an empty schedule.
        if !self.clock.is_empty() {
            return Err(SimError::DanglingSchedule {
                at:      self.time(),
                entries: self.clock.len(),
            });
        }
        observer.on_complete(self.time(), self.events);
        Ok(self.time())
    }

    /// Pop and process the earliest pending event.  No-op once boarding is
    /// complete.
    ///
    /// The behind-neighbor is captured BEFORE the actor's transition is
    /// applied: on `Packing → Seated` the actor is spliced out of the line
    /// first, and the neighbor must then be re-evaluated against its new
    /// "ahead".
    pub fn advance_one_event<O: BoardingObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.is_complete() {
            return Ok(());
        }
        if !self.started {
            self.bootstrap(observer)?;
        }

        let Some((at, actor)) = self.clock.pop_earliest() else {
            return Err(SimError::Stalled {
                at:       self.time(),
                unseated: self.passengers.count - self.seated,
            });
        };
        let behind = self.aisle.behind(actor);

        self.clock.advance_to(actor, at, self.params.epsilon)?;
        self.step_to(actor, self.time())?;
        self.apply_transition(actor, observer)?;

        if let Some(q) = behind {
            self.refresh_behind(q, observer)?;
        }
        self.events += 1;
        Ok(())
    }

    /// Diagnostic snapshot of every passenger still in play, front of the
    /// cabin first.  Debug/visualization aid — the engine never reads it.
    pub fn snapshot(&self) -> CabinSnapshot {
        let mut passengers: Vec<PassengerSnapshot> = self
            .passengers
            .person_ids()
            .filter(|&p| !self.passengers.state(p).is_terminal())
            .map(|p| {
                let i = p.index();
                PassengerSnapshot {
                    person:     p,
                    seat:       self.passengers.seat[i],
                    state:      self.passengers.state[i],
                    position:   self.passengers.position[i],
                    goal:       self.passengers.goal[i],
                    synced_at:  self.passengers.synced_at[i],
                    ahead:      self.aisle.ahead(p),
                    behind:     self.aisle.behind(p),
                    next_event: self.clock.scheduled_time(p),
                }
            })
            .collect();
        passengers.sort_by(|a, b| b.position.total_cmp(&a.position));

        CabinSnapshot { time: self.time(), passengers }
    }

    // ── Bootstrap ─────────────────────────────────────────────────────────

    /// Release the passenger at the front of the line (greatest position)
    /// unconditionally.  Everything downstream cascades from here.
    fn bootstrap<O: BoardingObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.started = true;
        let front = self
            .passengers
            .person_ids()
            .max_by(|a, b| {
                self.passengers.position[a.index()].total_cmp(&self.passengers.position[b.index()])
            });
        match front {
            Some(front) => self.unblock(front, observer),
            None => Ok(()),
        }
    }
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

/// Point-in-time diagnostic view of the cabin.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinSnapshot {
    pub time:       SimTime,
    /// Non-seated passengers, sorted front of the cabin first.
    pub passengers: Vec<PassengerSnapshot>,
}

/// One passenger's full state, as reported by [`BoardingSim::snapshot`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerSnapshot {
    pub person:     PersonId,
    pub seat:       Seat,
    pub state:      PassengerState,
    pub position:   f64,
    pub goal:       f64,
    pub synced_at:  SimTime,
    pub ahead:      Option<PersonId>,
    pub behind:     Option<PersonId>,
    pub next_event: Option<SimTime>,
}
