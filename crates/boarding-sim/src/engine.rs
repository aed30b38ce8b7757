//! Transition engine: lazy position integration and event-time computation.
//!
//! # The sync-then-read contract
//!
//! A passenger's position is only integrated when the passenger is touched
//! ("lazy integration"): [`step_to`][BoardingSim::step_to] brings
//! `position`/`synced_at` up to a target time, and every read that feeds an
//! event-time computation must be preceded by a sync to the current global
//! time.  Passengers in the stationary states never move, so their stored
//! positions stay valid without a sync — which is what makes reading the
//! *ahead* passenger's position inside the obstruction computation safe:
//! an obstructing neighbor is by definition stationary.

use boarding_core::{PersonId, SimTime};

use crate::sim::BoardingSim;
use crate::{BoardingObserver, InvariantKind, PassengerState, SimError, SimResult, TransitionRecord};

/// What ends a `Moving` stretch: the seat row, or the passenger ahead.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum MoveOutcome {
    ReachSeat,
    HitObstruction,
}

impl BoardingSim {
    // ── Lazy position integration ─────────────────────────────────────────

    /// Integrate `p`'s position forward from `synced_at` to `t` (only
    /// `Moving` passengers actually move) and stamp `synced_at = t`.
    ///
    /// Overshooting the goal beyond tolerance is a modeling bug and fails
    /// loudly — it is never clamped.
    pub(crate) fn step_to(&mut self, p: PersonId, t: SimTime) -> SimResult<()> {
        let i = p.index();
        let last = self.passengers.synced_at[i];
        if t < last {
            if last - t > self.params.epsilon {
                return Err(SimError::invariant(
                    p,
                    self.time(),
                    InvariantKind::TimeReversal { from: last, to: t },
                ));
            }
            // Sub-epsilon jitter: keep the later stamp.
            return Ok(());
        }

        // Only step forward up to the passenger's own pending event, never past it.
        if let Some(scheduled) = self.clock.scheduled_time(p) {
            if t - scheduled > self.params.epsilon {
                return Err(SimError::invariant(
                    p,
                    self.time(),
                    InvariantKind::SteppedPastEvent { scheduled },
                ));
            }
        }

        if self.passengers.state[i] == PassengerState::Moving {
            self.passengers.position[i] += self.params.walking_speed * t.since(last);
            if self.passengers.position[i] > self.passengers.goal[i] + self.params.epsilon {
                return Err(SimError::invariant(
                    p,
                    self.time(),
                    InvariantKind::OvershotGoal {
                        position: self.passengers.position[i],
                        goal:     self.passengers.goal[i],
                    },
                ));
            }
        }
        self.passengers.synced_at[i] = t;
        Ok(())
    }

    // ── Next-event computation ────────────────────────────────────────────

    /// Seconds until `p` reaches its seat row, from its synced position.
    fn time_to_seat(&self, p: PersonId) -> f64 {
        self.passengers.distance_to_goal(p) / self.params.walking_speed
    }

    /// Seconds until `p` closes up to waiting distance behind the passenger
    /// ahead, or `None` when no one ahead is obstructing.
    fn time_to_obstruction(&self, p: PersonId) -> Option<f64> {
        let a = self.aisle.ahead(p)?;
        if !self.passengers.state[a.index()].is_obstructing() {
            return None;
        }
        let gap = self.passengers.position[a.index()]
            - self.params.waiting_space
            - self.passengers.position[p.index()];
        Some(gap / self.params.walking_speed)
    }

    /// The earlier of reach-seat / hit-obstruction for a `Moving` passenger,
    /// as an absolute time plus its cause.  Ties go to the seat.
    ///
    /// Precondition: `p` is synced to the current global time; reading a
    /// stale position here would silently corrupt the event order, so it is
    /// checked and fatal.
    pub(crate) fn next_event_for(&self, p: PersonId) -> SimResult<(SimTime, MoveOutcome)> {
        let synced_at = self.passengers.synced_at[p.index()];
        if !synced_at.nearly(self.time(), self.params.epsilon) {
            return Err(SimError::invariant(
                p,
                self.time(),
                InvariantKind::StaleSync { synced_at },
            ));
        }

        let t_seat = self.time_to_seat(p);
        match self.time_to_obstruction(p) {
            Some(t_obs) if t_obs < t_seat => Ok((self.time() + t_obs, MoveOutcome::HitObstruction)),
            _ => Ok((self.time() + t_seat, MoveOutcome::ReachSeat)),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Move `p` along one legal edge and notify the observer.
    fn transition<O: BoardingObserver>(
        &mut self,
        p:        PersonId,
        to:       PassengerState,
        observer: &mut O,
    ) -> SimResult<()> {
        let from = self.passengers.state[p.index()];
        if !from.can_transition_to(to) {
            return Err(SimError::invariant(
                p,
                self.time(),
                InvariantKind::IllegalTransition { from, to },
            ));
        }
        self.passengers.state[p.index()] = to;
        observer.on_transition(&TransitionRecord { at: self.time(), person: p, from, to });
        Ok(())
    }

    /// `Waiting → Unblocked`: cleared to go; motion follows after the reflex
    /// delay.
    pub(crate) fn unblock<O: BoardingObserver>(
        &mut self,
        p:        PersonId,
        observer: &mut O,
    ) -> SimResult<()> {
        self.transition(p, PassengerState::Unblocked, observer)?;
        self.clock
            .schedule(p, self.time() + self.params.reflex_time, self.params.epsilon)
    }

    /// Apply the actor's own scheduled transition.  The actor is already
    /// synced to now and its schedule entry removed.
    pub(crate) fn apply_transition<O: BoardingObserver>(
        &mut self,
        p:        PersonId,
        observer: &mut O,
    ) -> SimResult<()> {
        match self.passengers.state[p.index()] {
            PassengerState::Unblocked => {
                self.transition(p, PassengerState::Moving, observer)?;
                let (at, _) = self.next_event_for(p)?;
                self.clock.schedule(p, at, self.params.epsilon)
            }

            PassengerState::Moving => {
                // Recompute the cause at fire time: the obstruction tracked
                // when this event was scheduled may have changed since.
                match self.next_event_for(p)?.1 {
                    MoveOutcome::ReachSeat => {
                        let i = p.index();
                        let off = self.passengers.position[i] - self.passengers.goal[i];
                        if !self.params.near_zero(off) {
                            return Err(SimError::invariant(
                                p,
                                self.time(),
                                InvariantKind::NotAtGoal {
                                    position: self.passengers.position[i],
                                    goal:     self.passengers.goal[i],
                                },
                            ));
                        }
                        self.transition(p, PassengerState::Packing, observer)?;
                        self.clock
                            .schedule(p, self.time() + self.params.packing_time, self.params.epsilon)
                    }
                    MoveOutcome::HitObstruction => {
                        // Blocked: no pending event until externally unblocked.
                        self.transition(p, PassengerState::Waiting, observer)
                    }
                }
            }

            PassengerState::Packing => {
                self.transition(p, PassengerState::Seated, observer)?;
                self.aisle.splice_out(p);
                self.seated += 1;
                Ok(())
            }

            state @ (PassengerState::Waiting | PassengerState::Seated) => Err(SimError::invariant(
                p,
                self.time(),
                InvariantKind::UnexpectedEvent { state },
            )),
        }
    }

    /// Re-evaluate the passenger directly behind an actor whose state just
    /// changed.
    pub(crate) fn refresh_behind<O: BoardingObserver>(
        &mut self,
        q:        PersonId,
        observer: &mut O,
    ) -> SimResult<()> {
        self.step_to(q, self.time())?;
        match self.passengers.state[q.index()] {
            PassengerState::Waiting => {
                if self.is_clear_ahead(q) {
                    self.unblock(q, observer)?;
                }
                Ok(())
            }
            PassengerState::Moving => {
                // The obstruction q was tracking may have appeared, moved, or
                // vanished; replace its pending event.
                let (at, _) = self.next_event_for(q)?;
                self.clock.schedule(q, at, self.params.epsilon)
            }
            PassengerState::Unblocked | PassengerState::Packing | PassengerState::Seated => Ok(()),
        }
    }

    /// `true` if nothing keeps `q` from being released: no one ahead, the one
    /// ahead is advancing, or there is clearance to walk into.
    fn is_clear_ahead(&self, q: PersonId) -> bool {
        match self.aisle.ahead(q) {
            None => true,
            Some(a) => {
                !self.passengers.state[a.index()].is_obstructing()
                    || self.passengers.position[q.index()]
                        < self.passengers.position[a.index()] - self.params.waiting_space
            }
        }
    }
}
