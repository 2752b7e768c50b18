//! The LOOK sweep driver.
//!
//! # LOOK, not SCAN
//!
//! The car travels only as far as the last queued floor in its heading
//! (never to the end of the shaft), then reverses into the other queue.  A
//! request admitted *behind* the car waits for the next pass — admission
//! policy, not the sweep, decides whether such a request exists at all.
//!
//! # Run-to-completion
//!
//! `process_requests` drains everything that is queued before it returns;
//! no new floors can be admitted mid-sweep.  With two queues that means at
//! most two drains (one per direction) per invocation, so the driver is a
//! bounded loop rather than the drain-then-recurse formulation this design
//! is usually presented with — same visit order, no recursion depth to
//! worry about.

use lift_core::{Direction, Floor};

use crate::{Car, CarObserver};

impl Car {
    /// Drain both queues in LOOK order, stepping one floor at a time.
    ///
    /// On return the car is parked: both queues empty, heading `Idle`.  The
    /// observer sees every intermediate floor
    /// ([`on_floor_passed`][CarObserver::on_floor_passed]) and every stop
    /// ([`on_arrival`][CarObserver::on_arrival]) — intermediate floors are
    /// modelled rather than teleporting so dwell/visibility matches a real
    /// cab.
    pub fn process_requests<O: CarObserver>(&mut self, observer: &mut O) {
        // Two queues ⇒ two drains suffice under run-to-completion.
        for _ in 0..2 {
            if self.queues().is_empty() {
                break;
            }
            if self.heading() == Direction::Idle {
                // Parked car with work queued: up queue has priority.
                let heading = if !self.queues().side_is_empty(Direction::Up) {
                    Direction::Up
                } else {
                    Direction::Down
                };
                self.set_heading(heading);
            }
            self.drain_heading(observer);
            self.set_heading(self.heading().opposite());
        }

        self.set_heading(Direction::Idle);
        observer.on_idle(self.id(), self.floor());
    }

    /// Serve every floor queued for the current heading, in sweep order.
    fn drain_heading<O: CarObserver>(&mut self, observer: &mut O) {
        let heading = self.heading();
        while let Some(target) = self.queues_mut().pop_next(heading) {
            self.move_to(target, observer);
        }
    }

    /// Step the car one floor at a time until it reaches `target`.
    fn move_to<O: CarObserver>(&mut self, target: Floor, observer: &mut O) {
        while self.floor() != target {
            observer.on_floor_passed(self.id(), self.floor(), target);
            let next = self.floor().step_toward(target);
            self.set_floor(next);
        }
        observer.on_arrival(self.id(), self.floor());
    }
}
