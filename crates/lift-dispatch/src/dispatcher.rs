//! The `Dispatcher`: fleet owner and call-admission front door.

use lift_car::{AdmissionReport, Car, CarObserver};
use lift_core::{AdmissionPolicy, CarClass, CarId, Direction, Floor};

use crate::scoring::find_best_car;
use crate::{DispatchError, DispatchResult};

/// Fleet-wide admission, validation, and car selection.
///
/// The dispatcher is the sole owner of every [`Car`] (cars never reference
/// each other) and of the ID allocator: `register` hands out `CarId`s
/// sequentially in registration order, which is also the scoring tie-break
/// order.
///
/// The serviceable range is `[F0, top_floor]`, both ends inclusive.  Every
/// floor that enters through the public API is bounds-checked here, before
/// it can reach a car.
#[derive(Debug)]
pub struct Dispatcher {
    cars: Vec<Car>,
    top_floor: Floor,
}

impl Dispatcher {
    /// Create a dispatcher with an empty fleet serving `[F0, top_floor]`.
    pub fn new(top_floor: Floor) -> Self {
        Self {
            cars: Vec::new(),
            top_floor,
        }
    }

    // ── Fleet management ──────────────────────────────────────────────────

    /// Add a car to the fleet, parked at `start`.  Returns its allocated ID.
    ///
    /// Registration order is permanent: it defines both `CarId` numbering
    /// and the scoring tie-break.
    pub fn register(&mut self, class: CarClass, start: Floor, policy: AdmissionPolicy) -> CarId {
        let id = CarId(self.cars.len() as u16);
        self.cars.push(Car::new(id, class, start, policy));
        id
    }

    /// All cars in registration order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Look up one car by ID.
    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    /// Highest serviceable floor.
    pub fn top_floor(&self) -> Floor {
        self.top_floor
    }

    // ── Call handling ─────────────────────────────────────────────────────

    /// Handle a hall call: a rider at `from` wants to travel `_direction`.
    ///
    /// Selects the best-positioned qualifying car, forwards `from` to it,
    /// and returns the chosen car's ID so the caller can direct the rider.
    /// The stated direction is accepted for API symmetry with
    /// [`full_trip`](Dispatcher::full_trip) but does not influence scoring,
    /// which is driven by car position and heading alone.
    pub fn hall_call<O: CarObserver>(
        &mut self,
        from: Floor,
        _direction: Direction,
        observer: &mut O,
    ) -> DispatchResult<CarId> {
        self.check_bounds(from)?;
        let idx = find_best_car(&self.cars, from)
            .ok_or(DispatchError::NoSuitableCar { floor: from })?;
        let car = &mut self.cars[idx];
        car.add_requests(&[from], observer);
        Ok(car.id())
    }

    /// Handle a full trip: pickup at `from`, travel `direction`, destination
    /// `to` pressed once the rider has boarded.
    ///
    /// Everything is validated up front — both floors in bounds, `to`
    /// strictly beyond `from` in the stated direction — so a refused trip
    /// leaves every car untouched.  On success the pickup and the boarding
    /// follow-up both go to the same car.
    pub fn full_trip<O: CarObserver>(
        &mut self,
        from: Floor,
        direction: Direction,
        to: Floor,
        observer: &mut O,
    ) -> DispatchResult<CarId> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        Self::check_trip(from, direction, to)?;

        let idx = find_best_car(&self.cars, from)
            .ok_or(DispatchError::NoSuitableCar { floor: from })?;
        let car = &mut self.cars[idx];
        car.add_requests(&[from], observer);
        car.add_requests(&[to], observer);
        Ok(car.id())
    }

    /// Forward destination-button presses from a rider already inside `id`.
    ///
    /// All floors are bounds-checked before any reaches the car; an
    /// out-of-range floor refuses the whole batch (no partial admission).
    /// Per-floor class/policy rejections are still reported through the
    /// returned [`AdmissionReport`].
    pub fn car_call<O: CarObserver>(
        &mut self,
        id: CarId,
        floors: &[Floor],
        observer: &mut O,
    ) -> DispatchResult<AdmissionReport> {
        for &floor in floors {
            self.check_bounds(floor)?;
        }
        let car = self
            .cars
            .get_mut(id.index())
            .ok_or(DispatchError::UnknownCar(id))?;
        Ok(car.add_requests(floors, observer))
    }

    // ── Validation ────────────────────────────────────────────────────────

    fn check_bounds(&self, floor: Floor) -> DispatchResult<()> {
        if floor < Floor::GROUND || floor > self.top_floor {
            return Err(DispatchError::FloorOutOfBounds {
                floor,
                top: self.top_floor,
            });
        }
        Ok(())
    }

    fn check_trip(from: Floor, direction: Direction, to: Floor) -> DispatchResult<()> {
        let consistent = match direction {
            Direction::Idle => return Err(DispatchError::IdleTripDirection),
            Direction::Up => to > from,
            Direction::Down => to < from,
        };
        if !consistent {
            return Err(DispatchError::InconsistentTrip {
                from,
                to,
                direction,
            });
        }
        Ok(())
    }
}
