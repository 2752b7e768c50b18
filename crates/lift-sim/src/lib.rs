//! `lift-sim` — the assembled elevator bank: builder, facade, scripting.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`builder`] | `BankBuilder` — validated fleet/floor configuration     |
//! | [`bank`]    | `Bank` — dispatcher + event log facade                  |
//! | [`script`]  | `TripCall`, `Bank::run_script`                          |
//! | [`event`]   | `BankEvent`, `EventLog` (a recording `CarObserver`)     |
//! | [`error`]   | `SimError`, `SimResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{CarClass, Direction, Floor};
//! use lift_sim::BankBuilder;
//!
//! let mut bank = BankBuilder::new()
//!     .top_floor(Floor(10))
//!     .car(CarClass::All)
//!     .car(CarClass::Even)
//!     .car(CarClass::Odd)
//!     .build()?;
//!
//! let car = bank.hall_call(Floor(3), Direction::Up)?;
//! bank.car_call(car, &[Floor(9), Floor(6), Floor(1)])?;
//! for event in bank.events().events() {
//!     println!("{event}");
//! }
//! ```

pub mod bank;
pub mod builder;
pub mod error;
pub mod event;
pub mod script;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bank::Bank;
pub use builder::BankBuilder;
pub use error::{SimError, SimResult};
pub use event::{BankEvent, EventLog};
pub use script::TripCall;
