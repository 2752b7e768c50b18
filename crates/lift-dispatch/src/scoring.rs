//! Car-selection scoring for hall calls.
//!
//! # Suitability, then distance
//!
//! A car qualifies for a pickup floor only if its class serves the floor
//! *and* stopping there would not interrupt its sweep: a car heading up
//! qualifies only for floors above it, a car heading down only for floors
//! below, an idle car always.  Among qualifying cars the nearest wins;
//! ties keep the first-registered car, so repeated calls against identical
//! fleet state pick the same car every time.

use lift_car::Car;
use lift_core::{CarClass, Direction, Floor};

/// `true` if a car of `class`, currently at `at` and heading `heading`, can
/// pick up a rider waiting at `pickup` without breaking its sweep.
///
/// Takes the three facts rather than a `&Car` so schedulers can score
/// hypothetical or externally tracked car states too.
pub fn qualifies(class: CarClass, at: Floor, heading: Direction, pickup: Floor) -> bool {
    if !class.supports(pickup) {
        return false;
    }
    match heading {
        Direction::Up => pickup > at,
        Direction::Down => pickup < at,
        Direction::Idle => true,
    }
}

/// `true` if `car` can serve a pickup at `pickup` right now.
pub fn is_suitable(car: &Car, pickup: Floor) -> bool {
    qualifies(car.class(), car.floor(), car.heading(), pickup)
}

/// Index (registration order) of the best car for a pickup at `pickup`, or
/// `None` if no car qualifies.
///
/// Strict `<` on distance makes the tie-break deterministic: the earliest
/// registered car at the minimum distance is kept.
pub fn find_best_car(cars: &[Car], pickup: Floor) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (idx, car) in cars.iter().enumerate() {
        if !is_suitable(car, pickup) {
            continue;
        }
        let distance = car.floor().distance_to(pickup);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}
