//! `DirectionalQueues` — the two ordered pending-floor sets of one car.
//!
//! # Why two `BTreeSet`s
//!
//! A LOOK sweep serves floors in strictly monotonic order: ascending while
//! heading up, descending while heading down.  A `BTreeSet` per direction
//! gives exactly that iteration order for free, and its set semantics make
//! re-requesting an already-queued floor idempotent (two riders pressing the
//! same button is one stop).
//!
//! The queues hold no policy: *which* queue a floor belongs in is decided by
//! the car's admission logic.  This type only guarantees ordered draining.

use std::collections::BTreeSet;

use lift_core::{Direction, Floor};

/// Pending floors split by sweep direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionalQueues {
    /// Floors to serve while moving up — drained ascending (min first).
    up: BTreeSet<Floor>,
    /// Floors to serve while moving down — drained descending (max first).
    down: BTreeSet<Floor>,
}

impl DirectionalQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `floor` for the upward sweep.
    pub fn push_up(&mut self, floor: Floor) {
        self.up.insert(floor);
    }

    /// Queue `floor` for the downward sweep.
    pub fn push_down(&mut self, floor: Floor) {
        self.down.insert(floor);
    }

    /// Remove and return the next floor in sweep order for `heading`:
    /// the lowest queued floor when heading up, the highest when heading
    /// down.  Returns `None` for an empty queue or an `Idle` heading.
    pub fn pop_next(&mut self, heading: Direction) -> Option<Floor> {
        match heading {
            Direction::Up => self.up.pop_first(),
            Direction::Down => self.down.pop_last(),
            Direction::Idle => None,
        }
    }

    /// `true` if the queue serving `heading` has no pending floors.
    pub fn side_is_empty(&self, heading: Direction) -> bool {
        match heading {
            Direction::Up => self.up.is_empty(),
            Direction::Down => self.down.is_empty(),
            Direction::Idle => self.is_empty(),
        }
    }

    /// `true` if both queues are empty (the car may go idle).
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// Total pending floors across both queues.
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    /// Pending upward floors in ascending (visit) order.
    pub fn up_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.up.iter().copied()
    }

    /// Pending downward floors in descending (visit) order.
    pub fn down_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.down.iter().rev().copied()
    }
}
