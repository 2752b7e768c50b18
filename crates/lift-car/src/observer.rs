//! Car observer trait for motion reporting and data collection.

use lift_core::{CarId, Floor};

use crate::RejectReason;

/// Callbacks invoked by a [`Car`][crate::Car] as it admits requests and
/// sweeps.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is the framework's reporting
/// surface: anything the old console-driven simulators printed (floors
/// passed, arrivals, dropped requests) arrives here instead, and the caller
/// decides what to do with it.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl CarObserver for ArrivalPrinter {
///     fn on_arrival(&mut self, car: CarId, floor: Floor) {
///         println!("{car} stopped at {floor}");
///     }
/// }
/// ```
pub trait CarObserver {
    /// A floor was accepted into one of the car's queues.
    fn on_queued(&mut self, _car: CarId, _floor: Floor) {}

    /// A requested floor was dropped (class filter, directional policy, …).
    fn on_rejected(&mut self, _car: CarId, _floor: Floor, _reason: RejectReason) {}

    /// The car passed `at` without stopping, en route to `target`.
    fn on_floor_passed(&mut self, _car: CarId, _at: Floor, _target: Floor) {}

    /// The car stopped at `floor` to serve a queued request.
    fn on_arrival(&mut self, _car: CarId, _floor: Floor) {}

    /// Both queues drained; the car parked at `floor`.
    fn on_idle(&mut self, _car: CarId, _floor: Floor) {}
}

/// A [`CarObserver`] that does nothing.  Use when you need to drive a car
/// but don't want motion callbacks.
pub struct NoopCarObserver;

impl CarObserver for NoopCarObserver {}
