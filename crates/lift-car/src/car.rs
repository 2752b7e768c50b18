//! The `Car` struct and its request-admission logic.
//!
//! # Admission model
//!
//! Every requested floor passes two gates before it reaches a queue:
//!
//! 1. **Class filter** — a parity-restricted car drops floors it does not
//!    serve ([`RejectReason::Unsupported`]).
//! 2. **Policy classification** — decides *which* queue the floor joins, or
//!    rejects it:
//!
//!    | Policy          | Idle car                        | Moving car                         |
//!    |-----------------|---------------------------------|------------------------------------|
//!    | `Directional`   | first floor sets the heading    | only floors ahead of the heading   |
//!    | `AllowOpposite` | above → up, below → down        | above → up, below → down           |
//!
//! A floor equal to the current floor is never queued under either policy
//! ([`RejectReason::AtCurrentFloor`]).
//!
//! Invariant either way: every floor in the up queue was strictly above the
//! car when admitted, and every floor in the down queue strictly below.

use lift_core::{AdmissionPolicy, CarClass, CarId, Direction, Floor};

use crate::{AdmissionReport, CarObserver, DirectionalQueues, RejectReason};

/// One elevator car: physical position, heading, and pending floors.
///
/// Fields are private because the central invariant — heading is `Idle` iff
/// both queues are empty — must survive every public call.  Cars are created
/// by the dispatcher (which allocates their IDs) and driven through
/// [`add_requests`](Car::add_requests).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    id: CarId,
    class: CarClass,
    policy: AdmissionPolicy,
    floor: Floor,
    heading: Direction,
    queues: DirectionalQueues,
}

impl Car {
    /// Create a parked car at `start`.
    pub fn new(id: CarId, class: CarClass, start: Floor, policy: AdmissionPolicy) -> Self {
        Self {
            id,
            class,
            policy,
            floor: start,
            heading: Direction::Idle,
            queues: DirectionalQueues::new(),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn class(&self) -> CarClass {
        self.class
    }

    pub fn policy(&self) -> AdmissionPolicy {
        self.policy
    }

    /// The floor the car is currently at.
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Current sweep heading.  `Idle` iff both queues are empty.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// The pending-floor queues (read-only).
    pub fn queues(&self) -> &DirectionalQueues {
        &self.queues
    }

    /// `true` if the car is parked with nothing queued.
    pub fn is_idle(&self) -> bool {
        self.heading == Direction::Idle
    }

    /// `true` if this car's class serves `floor`.
    pub fn supports(&self, floor: Floor) -> bool {
        self.class.supports(floor)
    }

    // ── Admission ─────────────────────────────────────────────────────────

    /// Admit a batch of floor requests, then run the sweep to completion.
    ///
    /// Floors are classified one at a time in batch order (so under the
    /// strict policy the *first* admitted floor of an idle car fixes the
    /// heading that the rest of the batch is judged against).  Rejected
    /// floors are reported and skipped; they never abort the batch.
    pub fn add_requests<O: CarObserver>(
        &mut self,
        floors: &[Floor],
        observer: &mut O,
    ) -> AdmissionReport {
        let mut report = AdmissionReport::default();
        for &floor in floors {
            match self.classify(floor) {
                Ok(()) => {
                    observer.on_queued(self.id, floor);
                    report.queued.push(floor);
                }
                Err(reason) => {
                    observer.on_rejected(self.id, floor, reason);
                    report.rejected.push((floor, reason));
                }
            }
        }
        self.process_requests(observer);
        report
    }

    /// Route one floor into the correct queue, or reject it.
    ///
    /// Mutates `heading` in the strict-policy idle case: the first admitted
    /// floor starts the sweep direction.
    fn classify(&mut self, floor: Floor) -> Result<(), RejectReason> {
        if !self.supports(floor) {
            return Err(RejectReason::Unsupported);
        }
        let relation = Direction::between(self.floor, floor);
        if relation == Direction::Idle {
            return Err(RejectReason::AtCurrentFloor);
        }

        match self.policy {
            AdmissionPolicy::AllowOpposite => {
                // Position alone decides the queue; the sweep will reach it
                // after reversing if it lies behind the current heading.
                self.queue_toward(relation, floor);
                Ok(())
            }
            AdmissionPolicy::Directional => {
                if self.heading == Direction::Idle {
                    self.heading = relation;
                    self.queue_toward(relation, floor);
                    Ok(())
                } else if relation == self.heading {
                    self.queue_toward(relation, floor);
                    Ok(())
                } else {
                    Err(RejectReason::AgainstHeading)
                }
            }
        }
    }

    fn queue_toward(&mut self, relation: Direction, floor: Floor) {
        match relation {
            Direction::Up => self.queues.push_up(floor),
            Direction::Down => self.queues.push_down(floor),
            Direction::Idle => unreachable!("callers filter the equal-floor case"),
        }
    }

    // ── Used by the sweep (crate-private) ─────────────────────────────────

    pub(crate) fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    pub(crate) fn set_floor(&mut self, floor: Floor) {
        self.floor = floor;
    }

    pub(crate) fn queues_mut(&mut self) -> &mut DirectionalQueues {
        &mut self.queues
    }
}
