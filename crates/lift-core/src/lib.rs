//! `lift-core` — foundational types for the `rust_lift` elevator framework.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                               |
//! |---------------|----------------------------------------|
//! | [`ids`]       | `CarId`                                |
//! | [`floor`]     | `Floor` newtype                        |
//! | [`direction`] | `Direction` enum                       |
//! | [`class`]     | `CarClass`, `AdmissionPolicy`          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod class;
pub mod direction;
pub mod floor;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use class::{AdmissionPolicy, CarClass};
pub use direction::Direction;
pub use floor::Floor;
pub use ids::CarId;
