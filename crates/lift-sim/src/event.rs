//! In-memory event recording.
//!
//! `EventLog` is the bank's standard [`CarObserver`]: every admission
//! decision and every floor of motion lands here as a [`BankEvent`] value,
//! available for inspection after any call.  Demos print them; tests assert
//! on them; nothing in the library ever formats or logs on its own.

use lift_car::{CarObserver, RejectReason};
use lift_core::{CarId, Floor};

// ── BankEvent ─────────────────────────────────────────────────────────────────

/// One observable thing that happened in the bank.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BankEvent {
    /// A floor was accepted into `car`'s queues.
    Queued { car: CarId, floor: Floor },
    /// A requested floor was dropped by `car`.
    Rejected {
        car: CarId,
        floor: Floor,
        reason: RejectReason,
    },
    /// `car` passed `at` without stopping, en route to `target`.
    FloorPassed { car: CarId, at: Floor, target: Floor },
    /// `car` stopped at `floor` to serve a request.
    Arrived { car: CarId, floor: Floor },
    /// `car` drained both queues and parked at `floor`.
    Idle { car: CarId, floor: Floor },
}

impl std::fmt::Display for BankEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankEvent::Queued { car, floor } => write!(f, "{car} queued {floor}"),
            BankEvent::Rejected { car, floor, reason } => {
                write!(f, "{car} dropped {floor} ({reason})")
            }
            BankEvent::FloorPassed { car, at, target } => {
                write!(f, "{car} passing {at} toward {target}")
            }
            BankEvent::Arrived { car, floor } => write!(f, "{car} arrived at {floor}"),
            BankEvent::Idle { car, floor } => write!(f, "{car} idle at {floor}"),
        }
    }
}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// A [`CarObserver`] that appends every callback to a growable event list.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<BankEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[BankEvent] {
        &self.events
    }

    /// Only the stops (arrivals), in order — the visit sequence tests care
    /// about most.
    pub fn arrivals(&self) -> impl Iterator<Item = (CarId, Floor)> + '_ {
        self.events.iter().filter_map(|e| match e {
            BankEvent::Arrived { car, floor } => Some((*car, *floor)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all recorded events (between script runs, for example).
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl CarObserver for EventLog {
    fn on_queued(&mut self, car: CarId, floor: Floor) {
        self.events.push(BankEvent::Queued { car, floor });
    }

    fn on_rejected(&mut self, car: CarId, floor: Floor, reason: RejectReason) {
        self.events.push(BankEvent::Rejected { car, floor, reason });
    }

    fn on_floor_passed(&mut self, car: CarId, at: Floor, target: Floor) {
        self.events.push(BankEvent::FloorPassed { car, at, target });
    }

    fn on_arrival(&mut self, car: CarId, floor: Floor) {
        self.events.push(BankEvent::Arrived { car, floor });
    }

    fn on_idle(&mut self, car: CarId, floor: Floor) {
        self.events.push(BankEvent::Idle { car, floor });
    }
}
