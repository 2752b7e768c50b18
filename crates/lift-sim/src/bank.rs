//! The `Bank` facade.

use lift_car::{AdmissionReport, Car};
use lift_core::{CarId, Direction, Floor};
use lift_dispatch::Dispatcher;

use crate::{EventLog, SimResult};

/// A complete elevator bank: dispatcher, fleet, and event log in one place.
///
/// `Bank` is the convenience surface for demos and tests — it owns an
/// [`EventLog`] and threads it through every call, so after any operation
/// the full motion history is available from [`events`](Bank::events).
/// Callers who need a custom [`CarObserver`][lift_car::CarObserver] drive
/// the [`Dispatcher`] directly instead.
///
/// Create via [`BankBuilder`][crate::BankBuilder].
#[derive(Debug)]
pub struct Bank {
    pub(crate) dispatcher: Dispatcher,
    pub(crate) log: EventLog,
}

impl Bank {
    // ── Calls ─────────────────────────────────────────────────────────────

    /// A rider at `from` presses the hall button for `direction`.
    /// Returns the car sent to pick them up.
    pub fn hall_call(&mut self, from: Floor, direction: Direction) -> SimResult<CarId> {
        Ok(self.dispatcher.hall_call(from, direction, &mut self.log)?)
    }

    /// Hall call plus the rider's destination press after boarding.
    pub fn full_trip(&mut self, from: Floor, direction: Direction, to: Floor) -> SimResult<CarId> {
        Ok(self.dispatcher.full_trip(from, direction, to, &mut self.log)?)
    }

    /// Destination buttons pressed inside car `id`.
    pub fn car_call(&mut self, id: CarId, floors: &[Floor]) -> SimResult<AdmissionReport> {
        Ok(self.dispatcher.car_call(id, floors, &mut self.log)?)
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The fleet in registration order.
    pub fn cars(&self) -> &[Car] {
        self.dispatcher.cars()
    }

    /// One car by ID.
    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.dispatcher.car(id)
    }

    /// Highest serviceable floor.
    pub fn top_floor(&self) -> Floor {
        self.dispatcher.top_floor()
    }

    /// Everything that has happened so far.
    pub fn events(&self) -> &EventLog {
        &self.log
    }

    /// Forget recorded history (car state is untouched).
    pub fn clear_events(&mut self) {
        self.log.clear();
    }

    /// The underlying dispatcher, for callers that want to bypass the
    /// built-in event log.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }
}
