//! `lift-dispatch` — fleet-wide call admission and car selection.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`dispatcher`] | `Dispatcher` — fleet owner, ID allocator, call API    |
//! | [`scoring`]    | `find_best_car`, `is_suitable`                        |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                  |
//!
//! # Call flow
//!
//! ```text
//! hall_call(from, dir) ──▶ bounds check ──▶ score fleet ──▶ winner queues `from`
//! full_trip(from, dir, to) ──▶ bounds + consistency ──▶ score ──▶ winner queues
//!                                                                `from`, then `to`
//! car_call(id, floors…) ──▶ bounds check ──▶ that car queues the batch
//! ```
//!
//! Validation always runs to completion before any car is touched: a refused
//! request leaves the whole fleet exactly as it was.

pub mod dispatcher;
pub mod error;
pub mod scoring;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use scoring::{find_best_car, is_suitable, qualifies};
