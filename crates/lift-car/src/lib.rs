//! `lift-car` — single-car model: queues, admission, and the LOOK sweep.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`queues`]   | `DirectionalQueues` — ordered up/down pending-floor sets  |
//! | [`car`]      | `Car` — position, heading, class, admission policies      |
//! | [`sweep`]    | `Car::process_requests` — the bounded-flip LOOK driver    |
//! | [`report`]   | `AdmissionReport`, `RejectReason`                         |
//! | [`observer`] | `CarObserver` trait + `NoopCarObserver`                   |
//!
//! # State machine
//!
//! ```text
//!            first admitted floor
//!   Idle ───────────────────────────▶ Up | Down
//!    ▲                                   │
//!    │   both queues drained             │ heading's queue empty,
//!    └───────────────────────────────────┤ other queue non-empty
//!                                        ▼
//!                                  opposite heading
//! ```
//!
//! `heading == Idle` iff both queues are empty — every public call preserves
//! this, and the sweep re-establishes it before returning.

pub mod car;
pub mod observer;
pub mod queues;
pub mod report;
pub mod sweep;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::Car;
pub use observer::{CarObserver, NoopCarObserver};
pub use queues::DirectionalQueues;
pub use report::{AdmissionReport, RejectReason};
