//! Travel direction shared by hall calls and car headings.
//!
//! One enum serves both roles: a rider's requested direction (`Up`/`Down`;
//! `Idle` is invalid input there and rejected by the dispatcher) and a car's
//! current heading (`Idle` meaning "both queues empty, parked").

use crate::Floor;

/// Which way a car is sweeping, or which way a rider wants to go.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Parked with no pending floors (default state for a new car).
    #[default]
    Idle,
    /// Sweeping toward higher floors.
    Up,
    /// Sweeping toward lower floors.
    Down,
}

impl Direction {
    /// `true` for any heading that has the car in motion.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Idle)
    }

    /// The reverse sweep direction.  `Idle` stays `Idle`.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// The direction of travel from `from` to `to` (`Idle` if equal).
    #[inline]
    pub fn between(from: Floor, to: Floor) -> Direction {
        match from.0.cmp(&to.0) {
            std::cmp::Ordering::Less => Direction::Up,
            std::cmp::Ordering::Greater => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }

    /// Human-readable label, useful for event logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Idle => "idle",
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
