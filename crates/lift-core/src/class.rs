//! Car service class and queue-admission policy.

use crate::Floor;

// ── CarClass ──────────────────────────────────────────────────────────────────

/// Which floors a car is allowed to stop at.
///
/// Parity-restricted cars are a common express-bank configuration: half the
/// fleet serves odd floors, half serves even, and `All` cars fill the gaps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarClass {
    /// Serves every floor.
    #[default]
    All,
    /// Serves odd-numbered floors only.
    Odd,
    /// Serves even-numbered floors only.
    Even,
}

impl CarClass {
    /// `true` if a car of this class may stop at `floor`.
    #[inline]
    pub fn supports(self, floor: Floor) -> bool {
        match self {
            CarClass::All => true,
            CarClass::Odd => floor.is_odd(),
            CarClass::Even => floor.is_even(),
        }
    }

    /// Human-readable label, useful for event logs.
    pub fn as_str(self) -> &'static str {
        match self {
            CarClass::All  => "all",
            CarClass::Odd  => "odd",
            CarClass::Even => "even",
        }
    }
}

impl std::fmt::Display for CarClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AdmissionPolicy ───────────────────────────────────────────────────────────

/// How a car classifies an incoming floor request against its current sweep.
///
/// Both policies are first-class; which one a deployment wants is a
/// configuration decision, not something the framework assumes.
/// [`Directional`](AdmissionPolicy::Directional) is the builder default.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdmissionPolicy {
    /// While sweeping, only floors strictly ahead of the heading are
    /// accepted; floors behind the car are rejected outright.  Avoids
    /// oscillation at the cost of making the rider re-call later.
    #[default]
    Directional,
    /// Any floor above the car joins the up queue and any floor below joins
    /// the down queue, regardless of heading — it will be served after the
    /// current sweep reverses.
    AllowOpposite,
}
