// rc-core/src/units.rs

//! Unit tags and normalization.
//!
//! Temperatures normalize to Kelvin and durations normalize to hours. Both
//! conversions are affine/linear and have exact algebraic inverses; the only
//! loss is ordinary `f64` rounding.

use std::fmt;
use std::str::FromStr;

use uom::si::f64::{ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime};

use crate::error::{CoreError, CoreResult};
use crate::numeric::{Real, ensure_finite};

// Public canonical quantity types (f64)
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn hr(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales.
    pub const KELVIN_OFFSET: f64 = 273.15;
    pub const FAHRENHEIT_OFFSET: f64 = 32.0;
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    pub const HOURS_PER_DAY: f64 = 24.0;
    pub const HOURS_PER_WEEK: f64 = 24.0 * 7.0;
    /// Julian year (365.25 days) to absorb leap years.
    pub const HOURS_PER_YEAR: f64 = 24.0 * 365.25;
}

use constants::*;

/// Temperature scale selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Short symbol appended to displayed temperatures.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(Self::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(CoreError::UnsupportedUnit {
                unit: s.to_string(),
                quantity: "temperature",
            }),
        }
    }
}

/// Duration unit selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Years,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 6] = [
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Weeks,
        Self::Years,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Years => "years",
        }
    }

    /// Singular form, used in "per hour" style rate labels.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Seconds => "second",
            Self::Minutes => "minute",
            Self::Hours => "hour",
            Self::Days => "day",
            Self::Weeks => "week",
            Self::Years => "year",
        }
    }

    /// Number of hours in one of this unit.
    fn hours(self) -> Real {
        match self {
            Self::Seconds => 1.0 / SECONDS_PER_HOUR,
            Self::Minutes => 1.0 / MINUTES_PER_HOUR,
            Self::Hours => 1.0,
            Self::Days => HOURS_PER_DAY,
            Self::Weeks => HOURS_PER_WEEK,
            Self::Years => HOURS_PER_YEAR,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(Self::Seconds),
            "min" | "mins" | "minute" | "minutes" => Ok(Self::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(Self::Hours),
            "d" | "day" | "days" => Ok(Self::Days),
            "wk" | "week" | "weeks" => Ok(Self::Weeks),
            "y" | "yr" | "yrs" | "year" | "years" => Ok(Self::Years),
            _ => Err(CoreError::UnsupportedUnit {
                unit: s.to_string(),
                quantity: "time",
            }),
        }
    }
}

/// Free-form label for amounts ("kg", "population", ...).
///
/// Carried through to output only; never converted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmountUnit(String);

impl AmountUnit {
    pub fn new(label: impl Into<String>) -> CoreResult<Self> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(CoreError::UnsupportedUnit {
                unit: label,
                quantity: "amount",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AmountUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AmountUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Convert a temperature in `unit` to Kelvin.
pub fn to_kelvin(value: Real, unit: TemperatureUnit) -> CoreResult<Real> {
    let value = ensure_finite(value, "temperature")?;
    let kelvin = match unit {
        TemperatureUnit::Celsius => value + KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * (5.0 / 9.0) + KELVIN_OFFSET,
        TemperatureUnit::Kelvin => value,
    };
    ensure_finite(kelvin, "temperature")
}

/// Convert a temperature in Kelvin to `unit`.
pub fn from_kelvin(value: Real, unit: TemperatureUnit) -> CoreResult<Real> {
    let value = ensure_finite(value, "temperature")?;
    let converted = match unit {
        TemperatureUnit::Celsius => value - KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value - KELVIN_OFFSET) * (9.0 / 5.0) + FAHRENHEIT_OFFSET,
        TemperatureUnit::Kelvin => value,
    };
    ensure_finite(converted, "temperature")
}

/// Convert a duration in `unit` to hours.
pub fn normalize_time(value: Real, unit: TimeUnit) -> CoreResult<Real> {
    let value = ensure_finite(value, "time")?;
    let hours = match unit {
        TimeUnit::Seconds => value / SECONDS_PER_HOUR,
        TimeUnit::Minutes => value / MINUTES_PER_HOUR,
        TimeUnit::Hours => value,
        other => value * other.hours(),
    };
    ensure_finite(hours, "time")
}

/// Convert a duration in hours to `unit`.
pub fn denormalize_time(value: Real, unit: TimeUnit) -> CoreResult<Real> {
    let value = ensure_finite(value, "time")?;
    let converted = match unit {
        TimeUnit::Seconds => value * SECONDS_PER_HOUR,
        TimeUnit::Minutes => value * MINUTES_PER_HOUR,
        TimeUnit::Hours => value,
        other => value / other.hours(),
    };
    ensure_finite(converted, "time")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn temperature_unit() -> impl Strategy<Value = TemperatureUnit> {
        prop::sample::select(TemperatureUnit::ALL.to_vec())
    }

    fn time_unit() -> impl Strategy<Value = TimeUnit> {
        prop::sample::select(TimeUnit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn kelvin_round_trip(v in -1.0e4_f64..1.0e4_f64, unit in temperature_unit()) {
            let back = to_kelvin(from_kelvin(v, unit).unwrap(), unit).unwrap();
            let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
            prop_assert!(nearly_equal(back, v, tol), "{back} != {v} for {unit}");
        }

        #[test]
        fn hours_round_trip(v in -1.0e6_f64..1.0e6_f64, unit in time_unit()) {
            let back = normalize_time(denormalize_time(v, unit).unwrap(), unit).unwrap();
            let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
            prop_assert!(nearly_equal(back, v, tol), "{back} != {v} for {unit}");
        }
    }
}
