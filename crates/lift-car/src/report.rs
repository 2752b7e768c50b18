//! Per-batch admission outcomes.
//!
//! A batch of requested floors is never all-or-nothing: each floor is
//! admitted or rejected on its own, and a rejection does not abort the rest
//! of the batch.  Rejections are therefore *data* in the returned report,
//! not error returns — the car stays fully usable either way.

use lift_core::Floor;

// ── RejectReason ──────────────────────────────────────────────────────────────

/// Why a single requested floor was not queued.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// The car's class (odd/even restriction) does not serve this floor.
    Unsupported,
    /// Strict directional policy: the floor lies behind the current sweep.
    /// Deliberate — the rider waits for a later call rather than making the
    /// car oscillate.
    AgainstHeading,
    /// The car is already at this floor; there is nothing to queue.
    AtCurrentFloor,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::Unsupported    => "unsupported floor",
            RejectReason::AgainstHeading => "against current heading",
            RejectReason::AtCurrentFloor => "already at floor",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AdmissionReport ───────────────────────────────────────────────────────────

/// The per-floor outcome of one `Car::add_requests` batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdmissionReport {
    /// Floors accepted into a queue, in batch order.
    pub queued: Vec<Floor>,
    /// Floors dropped, with the reason, in batch order.
    pub rejected: Vec<(Floor, RejectReason)>,
}

impl AdmissionReport {
    /// `true` if at least one floor of the batch was queued.
    pub fn any_queued(&self) -> bool {
        !self.queued.is_empty()
    }

    /// `true` if every floor of the batch was queued.
    pub fn all_queued(&self) -> bool {
        self.rejected.is_empty()
    }
}
