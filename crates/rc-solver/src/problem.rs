//! Problem definitions for the closed-form solvers.
//!
//! Each operation is its own struct holding exactly the knowns it needs, so an
//! unknown can never be supplied by mistake. The query enums select between
//! operations of one family; [`Problem`] selects between families.

use rc_core::units::{Temperature, Time};
use rc_core::{AmountUnit, Real, TemperatureUnit, TimeUnit};

use crate::derivation::Derivation;
use crate::error::SolveResult;

/// Units for the exponential family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExponentialUnits {
    pub amount: AmountUnit,
    pub time: TimeUnit,
}

/// Units for the Newton's-law family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoolingUnits {
    pub temperature: TemperatureUnit,
    pub time: TimeUnit,
}

/// Amount at `t2` given `x0` and one observation `(t1, x1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountAtTime {
    pub x0: Real,
    pub t1: Real,
    pub x1: Real,
    pub t2: Real,
}

/// Initial value `x0` given two observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialValue {
    pub x1: Real,
    pub t1: Real,
    pub x2: Real,
    pub t2: Real,
}

/// Time at which the amount reaches `x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeToReach {
    pub x0: Real,
    pub x1: Real,
    pub t1: Real,
    pub x2: Real,
}

/// Temperature at `t2` given the ambient, the initial temperature and one
/// observation `(t1, temp1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureAtTime {
    pub ambient: Real,
    pub initial: Real,
    pub t1: Real,
    pub temp1: Real,
    pub t2: Real,
}

/// Initial temperature given the ambient and two observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialTemperature {
    pub ambient: Real,
    pub t1: Real,
    pub temp1: Real,
    pub t2: Real,
    pub temp2: Real,
}

/// Time at which the body reaches `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeToTemperature {
    pub ambient: Real,
    pub initial: Real,
    pub known_time: Real,
    pub known_temp: Real,
    pub target: Real,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExponentialQuery {
    AmountAtTime(AmountAtTime),
    InitialValue(InitialValue),
    TimeToReach(TimeToReach),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingQuery {
    TemperatureAtTime(TemperatureAtTime),
    InitialTemperature(InitialTemperature),
    TimeToReach(TimeToTemperature),
}

/// Growth/decay problem: one query plus the units it is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialProblem {
    pub query: ExponentialQuery,
    pub units: ExponentialUnits,
}

/// Heating/cooling problem: one query plus the units it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingProblem {
    pub query: CoolingQuery,
    pub units: CoolingUnits,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    Exponential(ExponentialProblem),
    Cooling(CoolingProblem),
}

impl From<ExponentialProblem> for Problem {
    fn from(p: ExponentialProblem) -> Self {
        Problem::Exponential(p)
    }
}

impl From<CoolingProblem> for Problem {
    fn from(p: CoolingProblem) -> Self {
        Problem::Cooling(p)
    }
}

/// Which unknown a solution carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolvedQuantity {
    Amount,
    InitialValue,
    Time,
    Temperature,
    InitialTemperature,
}

/// Direction of change of the fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trend {
    Growth,
    Decay,
    Cooling,
    Heating,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Growth => "growth",
            Trend::Decay => "decay",
            Trend::Cooling => "cooling",
            Trend::Heating => "heating",
        }
    }
}

/// Cooling results in canonical units (Kelvin, hours).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Canonical {
    Temperature(Temperature),
    Elapsed(Time),
}

/// Output of a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub quantity: SolvedQuantity,
    /// The unknown, in the caller's units
    pub value: Real,
    /// Display label for `value`
    pub unit: String,
    /// Per caller time unit for growth/decay, per hour for cooling
    pub rate_constant: Real,
    /// dx/dt at t2 (amount-at-time only)
    pub rate_of_change: Option<Real>,
    pub trend: Trend,
    pub canonical: Option<Canonical>,
    pub derivation: Derivation,
}

/// One closed-form operation.
///
/// Implementations validate every input before doing any arithmetic and
/// return either a complete solution or an error; never a partial derivation.
pub trait Operation {
    type Units;

    /// Short name for logging.
    fn name(&self) -> &'static str;

    fn solve(&self, units: &Self::Units) -> SolveResult<Solution>;
}
