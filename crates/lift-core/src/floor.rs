//! The `Floor` newtype.
//!
//! # Why signed
//!
//! Valid floors live in `[0, top]`, but the dispatch API must be able to
//! *receive* an out-of-range request (a caller asking for floor −1) and
//! reject it with a bounds error rather than make it unrepresentable at the
//! type level.  Storing `i32` keeps validation an explicit, testable step.

use std::fmt;

/// An absolute floor number.
///
/// Ordinary integer ordering applies: higher floors compare greater.  All
/// queue structures rely on this `Ord` to keep floors in sweep order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub i32);

impl Floor {
    /// Ground floor.
    pub const GROUND: Floor = Floor(0);

    /// `true` if the floor number is odd.
    #[inline]
    pub fn is_odd(self) -> bool {
        self.0.rem_euclid(2) == 1
    }

    /// `true` if the floor number is even.
    #[inline]
    pub fn is_even(self) -> bool {
        self.0.rem_euclid(2) == 0
    }

    /// Absolute distance to `other` in floors.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor one step toward `target` (unchanged if already there).
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        match self.0.cmp(&target.0) {
            std::cmp::Ordering::Less => Floor(self.0 + 1),
            std::cmp::Ordering::Greater => Floor(self.0 - 1),
            std::cmp::Ordering::Equal => self,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
