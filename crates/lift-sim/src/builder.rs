//! Fluent builder for constructing a [`Bank`].

use lift_core::{AdmissionPolicy, CarClass, Floor};
use lift_dispatch::Dispatcher;

use crate::{Bank, EventLog, SimError, SimResult};

/// One car to be registered at build time.
#[derive(Copy, Clone, Debug)]
struct CarSpec {
    class: CarClass,
    start: Floor,
    policy: Option<AdmissionPolicy>,
}

/// Fluent builder for [`Bank`].
///
/// # Required inputs
///
/// - [`top_floor`](BankBuilder::top_floor) — highest serviceable floor (≥ F1)
/// - at least one [`car`](BankBuilder::car)
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                      |
/// |-------------------|----------------------------------------------|
/// | `.policy(p)`      | `AdmissionPolicy::Directional` for all cars  |
/// | per-car start     | `Floor::GROUND`                              |
///
/// # Example
///
/// ```rust,ignore
/// let mut bank = BankBuilder::new()
///     .top_floor(Floor(10))
///     .car(CarClass::All)
///     .car(CarClass::Even)
///     .car(CarClass::Odd)
///     .build()?;
/// let car = bank.hall_call(Floor(3), Direction::Up)?;
/// ```
pub struct BankBuilder {
    top_floor: Option<Floor>,
    default_policy: AdmissionPolicy,
    specs: Vec<CarSpec>,
}

impl Default for BankBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BankBuilder {
    pub fn new() -> Self {
        Self {
            top_floor: None,
            default_policy: AdmissionPolicy::Directional,
            specs: Vec::new(),
        }
    }

    /// Set the highest serviceable floor (the valid range is `[F0, top]`).
    pub fn top_floor(mut self, top: Floor) -> Self {
        self.top_floor = Some(top);
        self
    }

    /// Set the admission policy applied to every car that does not override
    /// it via [`car_with`](BankBuilder::car_with).
    ///
    /// Defaults to [`AdmissionPolicy::Directional`]; whether a deployment
    /// wants opposite-direction queueing is its own call.
    pub fn policy(mut self, policy: AdmissionPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// Add a car of `class`, parked at the ground floor.
    pub fn car(self, class: CarClass) -> Self {
        self.push(class, Floor::GROUND, None)
    }

    /// Add a car of `class` parked at `start`.
    pub fn car_at(self, class: CarClass, start: Floor) -> Self {
        self.push(class, start, None)
    }

    /// Add a car with an explicit start floor and admission policy.
    pub fn car_with(self, class: CarClass, start: Floor, policy: AdmissionPolicy) -> Self {
        self.push(class, start, Some(policy))
    }

    fn push(mut self, class: CarClass, start: Floor, policy: Option<AdmissionPolicy>) -> Self {
        self.specs.push(CarSpec { class, start, policy });
        self
    }

    /// Validate the configuration and assemble a ready-to-use [`Bank`].
    pub fn build(self) -> SimResult<Bank> {
        let top = self
            .top_floor
            .ok_or_else(|| SimError::Config("top floor not set".into()))?;
        if top < Floor(1) {
            return Err(SimError::Config(format!(
                "top floor {top} leaves nothing to service (need at least F1)"
            )));
        }
        if self.specs.is_empty() {
            return Err(SimError::Config("fleet is empty — add at least one car".into()));
        }

        let mut dispatcher = Dispatcher::new(top);
        for spec in &self.specs {
            if spec.start < Floor::GROUND || spec.start > top {
                return Err(SimError::Config(format!(
                    "car start {} outside the serviceable range [F0, {top}]",
                    spec.start
                )));
            }
            dispatcher.register(
                spec.class,
                spec.start,
                spec.policy.unwrap_or(self.default_policy),
            );
        }

        Ok(Bank {
            dispatcher,
            log: EventLog::new(),
        })
    }
}
