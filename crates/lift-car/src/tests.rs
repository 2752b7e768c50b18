//! Unit tests for lift-car.

use lift_core::{AdmissionPolicy, CarClass, CarId, Direction, Floor};

use crate::{Car, CarObserver, DirectionalQueues, NoopCarObserver, RejectReason};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn f(n: i32) -> Floor {
    Floor(n)
}

fn strict_car(class: CarClass, start: i32) -> Car {
    Car::new(CarId(0), class, f(start), AdmissionPolicy::Directional)
}

fn opposite_car(class: CarClass, start: i32) -> Car {
    Car::new(CarId(0), class, f(start), AdmissionPolicy::AllowOpposite)
}

/// Records every observer callback for order-sensitive assertions.
#[derive(Default)]
struct Recorder {
    queued: Vec<Floor>,
    rejected: Vec<(Floor, RejectReason)>,
    passed: Vec<Floor>,
    arrivals: Vec<Floor>,
    idle_at: Vec<Floor>,
}

impl CarObserver for Recorder {
    fn on_queued(&mut self, _car: CarId, floor: Floor) {
        self.queued.push(floor);
    }
    fn on_rejected(&mut self, _car: CarId, floor: Floor, reason: RejectReason) {
        self.rejected.push((floor, reason));
    }
    fn on_floor_passed(&mut self, _car: CarId, at: Floor, _target: Floor) {
        self.passed.push(at);
    }
    fn on_arrival(&mut self, _car: CarId, floor: Floor) {
        self.arrivals.push(floor);
    }
    fn on_idle(&mut self, _car: CarId, floor: Floor) {
        self.idle_at.push(floor);
    }
}

// ── DirectionalQueues ─────────────────────────────────────────────────────────

mod queues {
    use super::*;

    #[test]
    fn up_pops_ascending() {
        let mut q = DirectionalQueues::new();
        q.push_up(f(8));
        q.push_up(f(3));
        q.push_up(f(5));
        assert_eq!(q.pop_next(Direction::Up), Some(f(3)));
        assert_eq!(q.pop_next(Direction::Up), Some(f(5)));
        assert_eq!(q.pop_next(Direction::Up), Some(f(8)));
        assert_eq!(q.pop_next(Direction::Up), None);
    }

    #[test]
    fn down_pops_descending() {
        let mut q = DirectionalQueues::new();
        q.push_down(f(2));
        q.push_down(f(7));
        q.push_down(f(4));
        assert_eq!(q.pop_next(Direction::Down), Some(f(7)));
        assert_eq!(q.pop_next(Direction::Down), Some(f(4)));
        assert_eq!(q.pop_next(Direction::Down), Some(f(2)));
        assert_eq!(q.pop_next(Direction::Down), None);
    }

    #[test]
    fn duplicate_floor_is_one_stop() {
        let mut q = DirectionalQueues::new();
        q.push_up(f(6));
        q.push_up(f(6));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn floors_iterate_in_visit_order() {
        let mut q = DirectionalQueues::new();
        q.push_up(f(5));
        q.push_up(f(3));
        q.push_down(f(2));
        q.push_down(f(7));
        assert_eq!(q.up_floors().collect::<Vec<_>>(), vec![f(3), f(5)]);
        assert_eq!(q.down_floors().collect::<Vec<_>>(), vec![f(7), f(2)]);
    }

    #[test]
    fn idle_pops_nothing() {
        let mut q = DirectionalQueues::new();
        q.push_up(f(6));
        assert_eq!(q.pop_next(Direction::Idle), None);
        assert!(!q.is_empty());
    }
}

// ── Admission ─────────────────────────────────────────────────────────────────

mod admission {
    use super::*;

    #[test]
    fn first_request_sets_heading_from_idle() {
        // The batch is classified before the sweep runs, so the report shows
        // admission-time decisions; afterwards the car has fully serviced it.
        let mut car = strict_car(CarClass::All, 0);
        let report = car.add_requests(&[f(4)], &mut NoopCarObserver);
        assert_eq!(report.queued, vec![f(4)]);
        assert_eq!(car.floor(), f(4));
        assert!(car.is_idle());
    }

    #[test]
    fn current_floor_request_is_dropped() {
        let mut car = strict_car(CarClass::All, 5);
        let report = car.add_requests(&[f(5)], &mut NoopCarObserver);
        assert_eq!(report.rejected, vec![(f(5), RejectReason::AtCurrentFloor)]);
        assert!(car.is_idle());
        assert_eq!(car.floor(), f(5));
    }

    #[test]
    fn unsupported_floor_skipped_rest_of_batch_processed() {
        // Even car: floor 3 is dropped, floors 2 and 4 still served.
        let mut car = strict_car(CarClass::Even, 0);
        let mut rec = Recorder::default();
        let report = car.add_requests(&[f(2), f(3), f(4)], &mut rec);
        assert_eq!(report.queued, vec![f(2), f(4)]);
        assert_eq!(report.rejected, vec![(f(3), RejectReason::Unsupported)]);
        assert_eq!(rec.arrivals, vec![f(2), f(4)]);
    }

    #[test]
    fn strict_policy_rejects_floor_behind_heading() {
        // At floor 4, floor 9 fixes the heading to Up; floor 2 then lies
        // behind the sweep and must be rejected, not reordered.
        let mut car = strict_car(CarClass::All, 4);
        let report = car.add_requests(&[f(9), f(2)], &mut NoopCarObserver);
        assert_eq!(report.queued, vec![f(9)]);
        assert_eq!(report.rejected, vec![(f(2), RejectReason::AgainstHeading)]);
        assert_eq!(car.floor(), f(9));
    }

    #[test]
    fn opposite_policy_queues_both_sides() {
        let mut car = opposite_car(CarClass::All, 4);
        let mut rec = Recorder::default();
        let report = car.add_requests(&[f(9), f(2)], &mut rec);
        assert!(report.all_queued());
        // Up sweep first, then the reversal serves floor 2.
        assert_eq!(rec.arrivals, vec![f(9), f(2)]);
        assert!(car.is_idle());
        assert_eq!(car.floor(), f(2));
    }

    #[test]
    fn up_queue_floors_strictly_above_at_admission() {
        // Verified through the recorder: every queued floor in the batch was
        // above floor 0 when admitted (the strict invariant).
        let mut car = strict_car(CarClass::All, 0);
        let report = car.add_requests(&[f(3), f(7), f(1)], &mut NoopCarObserver);
        assert!(report.queued.iter().all(|&q| q > f(0)));
        assert_eq!(report.queued.len(), 3);
    }
}

// ── Sweep (LOOK) ──────────────────────────────────────────────────────────────

mod sweep {
    use super::*;

    #[test]
    fn up_sweep_visits_ascending() {
        // upQueue = {3,5,8} from floor 1 → visited 3, 5, 8, never 5 before 3.
        let mut car = strict_car(CarClass::All, 1);
        let mut rec = Recorder::default();
        car.add_requests(&[f(8), f(3), f(5)], &mut rec);
        assert_eq!(rec.arrivals, vec![f(3), f(5), f(8)]);
    }

    #[test]
    fn intermediate_floors_are_stepped_through() {
        let mut car = strict_car(CarClass::All, 0);
        let mut rec = Recorder::default();
        car.add_requests(&[f(3)], &mut rec);
        // Floors 0, 1, 2 are passed; 3 is an arrival.
        assert_eq!(rec.passed, vec![f(0), f(1), f(2)]);
        assert_eq!(rec.arrivals, vec![f(3)]);
    }

    #[test]
    fn idle_iff_queues_empty_after_sweep() {
        let mut car = opposite_car(CarClass::All, 5);
        car.add_requests(&[f(9), f(2), f(7)], &mut NoopCarObserver);
        assert!(car.is_idle());
        assert!(car.queues().is_empty());
        assert_eq!(car.heading(), Direction::Idle);
    }

    #[test]
    fn down_sweep_visits_descending() {
        let mut car = strict_car(CarClass::All, 9);
        let mut rec = Recorder::default();
        car.add_requests(&[f(2), f(6), f(4)], &mut rec);
        assert_eq!(rec.arrivals, vec![f(6), f(4), f(2)]);
        assert_eq!(car.floor(), f(2));
    }

    #[test]
    fn sweep_runs_to_queue_end_before_reversing() {
        // Opposite policy from floor 5: the up sweep finishes (6 then 9)
        // before the car reverses for 1 — LOOK, not nearest-first.
        let mut car = opposite_car(CarClass::All, 5);
        let mut rec = Recorder::default();
        car.add_requests(&[f(6), f(1), f(9)], &mut rec);
        assert_eq!(rec.arrivals, vec![f(6), f(9), f(1)]);
    }

    #[test]
    fn empty_batch_leaves_car_parked() {
        let mut car = strict_car(CarClass::All, 3);
        let mut rec = Recorder::default();
        car.add_requests(&[], &mut rec);
        assert!(car.is_idle());
        assert_eq!(car.floor(), f(3));
        assert_eq!(rec.idle_at, vec![f(3)]);
    }

    #[test]
    fn boarding_batch_after_pickup_matches_reference_run() {
        // Pickup at 3, then the rider batch 9,6,1,8,2,5: under the strict
        // policy 9 sets Up, so 1 and 2 are rejected and the cab serves
        // 5, 6, 8, 9 on the way up.
        let mut car = strict_car(CarClass::All, 0);
        car.add_requests(&[f(3)], &mut NoopCarObserver);

        let mut rec = Recorder::default();
        let report = car.add_requests(&[f(9), f(6), f(1), f(8), f(2), f(5)], &mut rec);
        assert_eq!(report.queued, vec![f(9), f(6), f(8), f(5)]);
        assert_eq!(
            report.rejected,
            vec![
                (f(1), RejectReason::AgainstHeading),
                (f(2), RejectReason::AgainstHeading),
            ]
        );
        assert_eq!(rec.arrivals, vec![f(5), f(6), f(8), f(9)]);
        assert!(car.is_idle());
    }
}
