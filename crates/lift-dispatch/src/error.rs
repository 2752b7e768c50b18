use lift_core::{CarId, Direction, Floor};
use thiserror::Error;

/// Dispatch-level failures.
///
/// All of these are local and recoverable: an error return means the request
/// was refused *before* any car state changed — no partial admission, no
/// corrupted queues.  `NoSuitableCar` in particular is an ordinary outcome
/// the caller may retry after the fleet repositions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("floor {floor} outside the serviceable range [F0, {top}]")]
    FloorOutOfBounds { floor: Floor, top: Floor },

    #[error("no car currently qualifies for a call at {floor}")]
    NoSuitableCar { floor: Floor },

    #[error("full-trip direction must be up or down, not idle")]
    IdleTripDirection,

    #[error("destination {to} is not {direction} of boarding floor {from}")]
    InconsistentTrip {
        from: Floor,
        to: Floor,
        direction: Direction,
    },

    #[error("{0} is not registered with this dispatcher")]
    UnknownCar(CarId),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
