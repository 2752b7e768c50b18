//! Scripted traffic: a list of full trips replayed against a bank.
//!
//! This is the deterministic driving surface — a fixed call sequence that
//! exercises the whole dispatch path and can be asserted on afterwards.
//! Anything stochastic (seeded traffic generation) lives in the demo
//! binaries, not here.

use lift_core::{CarId, Direction, Floor};

use crate::{Bank, SimError};

/// One rider's journey: hall call at `from` toward `direction`, destination
/// `to` pressed after boarding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripCall {
    pub from: Floor,
    pub direction: Direction,
    pub to: Floor,
}

impl TripCall {
    pub fn new(from: Floor, direction: Direction, to: Floor) -> Self {
        Self { from, direction, to }
    }
}

impl std::fmt::Display for TripCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.direction, self.to)
    }
}

impl Bank {
    /// Replay `calls` in order, collecting each call's outcome.
    ///
    /// A refused call (bad bounds, no suitable car, …) is recorded in its
    /// slot and the script continues — one bad rider never blocks the rest
    /// of the day's traffic.
    pub fn run_script(&mut self, calls: &[TripCall]) -> Vec<Result<CarId, SimError>> {
        calls
            .iter()
            .map(|call| self.full_trip(call.from, call.direction, call.to))
            .collect()
    }
}
