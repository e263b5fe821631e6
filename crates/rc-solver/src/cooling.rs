//! Newton's law of cooling/heating: `T(t) = T∞ + (T0 - T∞) * e^(-k*t)`.
//!
//! Temperatures are converted to Kelvin and times to hours before any
//! arithmetic; results are converted back to the caller's units. `k` is
//! therefore always per hour.

use rc_core::units::{hr, k as kelvin};
use rc_core::{
    Real, TemperatureUnit, denormalize_time, ensure_finite, fixed, from_kelvin, normalize_time,
    to_kelvin,
};
use tracing::debug;

use crate::derivation::Derivation;
use crate::error::{SolveError, SolveResult};
use crate::exponential::{checked_ln, finite_result};
use crate::problem::{
    Canonical, CoolingUnits, InitialTemperature, Operation, Solution, SolvedQuantity,
    TemperatureAtTime, TimeToTemperature, Trend,
};

const K_DP: usize = 6;
const TEMP_DP: usize = 2;
const HOURS_DP: usize = 6;

const COOLING_MODEL: &str = "T(t) = T∞ + (T₀ - T∞)e^(-kt)";

/// Temperature for display, e.g. `90.00°C` or `363.15 K`.
fn show_temp(v: Real, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Kelvin => format!("{} K", fixed(v, TEMP_DP)),
        other => format!("{}{}", fixed(v, TEMP_DP), other.symbol()),
    }
}

fn show_k(v: Real) -> String {
    format!("{} K", fixed(v, TEMP_DP))
}

fn show_hours(v: Real) -> String {
    format!("{} h", fixed(v, HOURS_DP))
}

/// `3725.0 s` -> `1 h 2 min 5 s`; negative durations are flagged.
fn hms(hours: Real) -> String {
    let total = (hours.abs() * 3600.0).round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    let text = format!("{h} h {m} min {s} s");
    if hours < 0.0 {
        format!("{text} before t = 0")
    } else {
        text
    }
}

/// Cooling when the body starts above ambient.
fn classify(initial_k: Real, ambient_k: Real) -> Trend {
    if initial_k > ambient_k {
        Trend::Cooling
    } else {
        Trend::Heating
    }
}

fn nonzero_difference(c: Real, what: &str) -> SolveResult<Real> {
    if c == 0.0 {
        Err(SolveError::domain(format!(
            "{what} equals the ambient temperature; the ratio is undefined"
        )))
    } else {
        Ok(c)
    }
}

fn classification_line(d: &mut Derivation, trend: Trend) {
    let relation = match trend {
        Trend::Cooling => "T₀ > T∞",
        _ => "T₀ < T∞",
    };
    d.blank()
        .append(format!("The body is {} ({relation}).", trend.label()));
}

impl Operation for TemperatureAtTime {
    type Units = CoolingUnits;

    fn name(&self) -> &'static str {
        "temperature-at-time"
    }

    fn solve(&self, units: &CoolingUnits) -> SolveResult<Solution> {
        let ambient = ensure_finite(self.ambient, "ambient")?;
        let initial = ensure_finite(self.initial, "initial")?;
        let t1 = ensure_finite(self.t1, "t1")?;
        let temp1 = ensure_finite(self.temp1, "temp1")?;
        let t2 = ensure_finite(self.t2, "t2")?;
        let (tu, ut) = (units.temperature, units.time);

        let ta = to_kelvin(ambient, tu)?;
        let t0 = to_kelvin(initial, tu)?;
        let tk1 = to_kelvin(temp1, tu)?;
        let h1 = normalize_time(t1, ut)?;
        let h2 = normalize_time(t2, ut)?;
        if h1 == 0.0 {
            return Err(SolveError::degenerate(
                "t1 must be non-zero to compute k = -ln((T1-T∞)/C)/t1",
            ));
        }

        let c = nonzero_difference(t0 - ta, "initial temperature")?;
        let d1 = tk1 - ta;
        let k = -checked_ln(d1 / c, "(T1-T∞)/C")? / h1;
        let temp_k = finite_result(ta + c * (-k * h2).exp(), "T(t2)")?;
        let result = from_kelvin(temp_k, tu)?;
        let trend = classify(t0, ta);
        debug!(operation = self.name(), k, temp_k, result, "solved cooling problem");

        let mut d = Derivation::new();
        d.heading("Newton's Law Calculation - Temperature at t₂")
            .append("Given:")
            .append(format!("• Ambient temperature (T∞) = {}", show_temp(ambient, tu)))
            .append(format!("• Initial temperature (T₀) = {}", show_temp(initial, tu)))
            .append(format!(
                "• Known point: T₁ = {} at t₁ = {t1} {ut}",
                show_temp(temp1, tu)
            ))
            .append(format!("• Target time (t₂) = {t2} {ut}"))
            .blank()
            .append(format!("Model: {COOLING_MODEL}"))
            .blank()
            .append("Step 1: Convert temperatures to Kelvin")
            .append(format!("T∞ = {}", show_k(ta)))
            .append(format!("T₀ = {}", show_k(t0)))
            .append(format!("T₁ = {}", show_k(tk1)))
            .blank()
            .append("Step 2: Convert times to hours")
            .append(format!("t₁ = {t1} {ut} = {}", show_hours(h1)))
            .append(format!("t₂ = {t2} {ut} = {}", show_hours(h2)))
            .blank()
            .append("Step 3: Calculate initial temperature difference (C)")
            .append("C = T₀ - T∞")
            .append(format!(
                "C = {} - {} = {}",
                fixed(t0, TEMP_DP),
                fixed(ta, TEMP_DP),
                show_k(c)
            ))
            .blank()
            .append("Step 4: Calculate k using the known point")
            .append("T - T∞ = Ce^(-kt)")
            .append(format!(
                "{} = {}e^(-k*{})",
                fixed(d1, TEMP_DP),
                fixed(c, TEMP_DP),
                fixed(h1, HOURS_DP)
            ))
            .append("k = -ln((T₁ - T∞)/C)/t₁")
            .append(format!("k = {} per hour", fixed(k, K_DP)))
            .blank()
            .append("Step 5: Calculate temperature at t₂")
            .append("T = T∞ + Ce^(-kt)")
            .append(format!(
                "T = {} + {}e^(-{}*{})",
                fixed(ta, TEMP_DP),
                fixed(c, TEMP_DP),
                fixed(k, K_DP),
                fixed(h2, HOURS_DP)
            ))
            .append(format!("T = {}", show_k(temp_k)))
            .append(format!("T = {}", show_temp(result, tu)));
        classification_line(&mut d, trend);
        d.blank()
            .append("Verification:")
            .append(format!("- Ambient Temperature (T∞): {}", show_temp(ambient, tu)))
            .append(format!("- Initial Temperature (T₀): {}", show_temp(initial, tu)))
            .append(format!(
                "- Known Point: {} at t={t1} {ut}",
                show_temp(temp1, tu)
            ))
            .append(format!(
                "- Temperature at t={t2} {ut}: {}",
                show_temp(result, tu)
            ))
            .append(format!("- Cooling Coefficient (k): {} per hour", fixed(k, K_DP)));

        Ok(Solution {
            quantity: SolvedQuantity::Temperature,
            value: result,
            unit: tu.symbol().to_string(),
            rate_constant: k,
            rate_of_change: None,
            trend,
            canonical: Some(Canonical::Temperature(kelvin(temp_k))),
            derivation: d,
        })
    }
}

impl Operation for InitialTemperature {
    type Units = CoolingUnits;

    fn name(&self) -> &'static str {
        "initial-temperature"
    }

    fn solve(&self, units: &CoolingUnits) -> SolveResult<Solution> {
        let ambient = ensure_finite(self.ambient, "ambient")?;
        let t1 = ensure_finite(self.t1, "t1")?;
        let temp1 = ensure_finite(self.temp1, "temp1")?;
        let t2 = ensure_finite(self.t2, "t2")?;
        let temp2 = ensure_finite(self.temp2, "temp2")?;
        let (tu, ut) = (units.temperature, units.time);

        let ta = to_kelvin(ambient, tu)?;
        let tk1 = to_kelvin(temp1, tu)?;
        let tk2 = to_kelvin(temp2, tu)?;
        let h1 = normalize_time(t1, ut)?;
        let h2 = normalize_time(t2, ut)?;
        if h1 == h2 {
            return Err(SolveError::degenerate(format!(
                "t1 and t2 coincide ({t1} {ut}); k = -ln(C2/C1)/(t2-t1) is undefined"
            )));
        }

        let c1 = nonzero_difference(tk1 - ta, "T1")?;
        let c2 = tk2 - ta;
        let k = -checked_ln(c2 / c1, "(T2-T∞)/(T1-T∞)")? / (h2 - h1);
        let t0 = finite_result(ta + c1 * (k * h1).exp(), "T0")?;
        let result = from_kelvin(t0, tu)?;
        let trend = classify(t0, ta);
        debug!(operation = self.name(), k, t0, result, "solved cooling problem");

        let mut d = Derivation::new();
        d.heading("Newton's Law Calculation - Initial Temperature")
            .append("Given:")
            .append(format!("• Ambient temperature (T∞) = {}", show_temp(ambient, tu)))
            .append(format!(
                "• Point 1: T₁ = {} at t₁ = {t1} {ut}",
                show_temp(temp1, tu)
            ))
            .append(format!(
                "• Point 2: T₂ = {} at t₂ = {t2} {ut}",
                show_temp(temp2, tu)
            ))
            .blank()
            .append(format!("Model: {COOLING_MODEL}"))
            .blank()
            .append("Step 1: Convert temperatures to Kelvin")
            .append(format!("T∞ = {}", show_k(ta)))
            .append(format!("T₁ = {}", show_k(tk1)))
            .append(format!("T₂ = {}", show_k(tk2)))
            .blank()
            .append("Step 2: Convert times to hours")
            .append(format!("t₁ = {t1} {ut} = {}", show_hours(h1)))
            .append(format!("t₂ = {t2} {ut} = {}", show_hours(h2)))
            .blank()
            .append("Step 3: Calculate temperature differences")
            .append(format!(
                "C₁ = T₁ - T∞ = {} - {} = {}",
                fixed(tk1, TEMP_DP),
                fixed(ta, TEMP_DP),
                fixed(c1, TEMP_DP)
            ))
            .append(format!(
                "C₂ = T₂ - T∞ = {} - {} = {}",
                fixed(tk2, TEMP_DP),
                fixed(ta, TEMP_DP),
                fixed(c2, TEMP_DP)
            ))
            .blank()
            .append("Step 4: Calculate k from the ratio of the two points")
            .append("(T₂ - T∞)/(T₁ - T∞) = e^(-k(t₂-t₁))")
            .append("k = -ln((T₂ - T∞)/(T₁ - T∞))/(t₂-t₁)")
            .append(format!(
                "k = -ln({}/{})/({} - {})",
                fixed(c2, 4),
                fixed(c1, 4),
                fixed(h2, HOURS_DP),
                fixed(h1, HOURS_DP)
            ))
            .append(format!("k = {} per hour", fixed(k, K_DP)))
            .blank()
            .append("Step 5: Calculate initial temperature")
            .append("T₀ = T∞ + (T₁ - T∞)e^(kt₁)")
            .append(format!(
                "T₀ = {} + {} * e^({} * {})",
                fixed(ta, TEMP_DP),
                fixed(c1, TEMP_DP),
                fixed(k, K_DP),
                fixed(h1, HOURS_DP)
            ))
            .append(format!("T₀ = {}", show_k(t0)))
            .append(format!("T₀ = {}", show_temp(result, tu)));
        classification_line(&mut d, trend);
        d.blank()
            .append("Verification:")
            .append(format!("- Ambient Temperature (T∞): {}", show_temp(ambient, tu)))
            .append(format!(
                "- Known Point 1: {} at t={t1} {ut}",
                show_temp(temp1, tu)
            ))
            .append(format!(
                "- Known Point 2: {} at t={t2} {ut}",
                show_temp(temp2, tu)
            ))
            .append(format!(
                "- Heat Transfer Coefficient (k): {} per hour",
                fixed(k, K_DP)
            ))
            .append(format!("- Initial Temperature (T₀): {}", show_temp(result, tu)));

        Ok(Solution {
            quantity: SolvedQuantity::InitialTemperature,
            value: result,
            unit: tu.symbol().to_string(),
            rate_constant: k,
            rate_of_change: None,
            trend,
            canonical: Some(Canonical::Temperature(kelvin(t0))),
            derivation: d,
        })
    }
}

impl Operation for TimeToTemperature {
    type Units = CoolingUnits;

    fn name(&self) -> &'static str {
        "time-to-temperature"
    }

    fn solve(&self, units: &CoolingUnits) -> SolveResult<Solution> {
        let ambient = ensure_finite(self.ambient, "ambient")?;
        let initial = ensure_finite(self.initial, "initial")?;
        let known_time = ensure_finite(self.known_time, "known_time")?;
        let known_temp = ensure_finite(self.known_temp, "known_temp")?;
        let target = ensure_finite(self.target, "target")?;
        let (tu, ut) = (units.temperature, units.time);

        let ta = to_kelvin(ambient, tu)?;
        let t0 = to_kelvin(initial, tu)?;
        let tk1 = to_kelvin(known_temp, tu)?;
        let tkt = to_kelvin(target, tu)?;
        let h1 = normalize_time(known_time, ut)?;
        if h1 == 0.0 {
            return Err(SolveError::degenerate(
                "known time must be non-zero to compute k = -ln((T1-T∞)/C)/t1",
            ));
        }

        let c = nonzero_difference(t0 - ta, "initial temperature")?;
        let d1 = tk1 - ta;
        let dt = tkt - ta;
        let k = -checked_ln(d1 / c, "(T1-T∞)/C")? / h1;
        if k == 0.0 {
            return Err(SolveError::degenerate(
                "known temperature equals the initial temperature, so k = 0",
            ));
        }
        let hours = finite_result(-checked_ln(dt / c, "(target-T∞)/C")? / k, "t")?;
        let result = denormalize_time(hours, ut)?;
        let trend = classify(t0, ta);
        debug!(operation = self.name(), k, hours, result, "solved cooling problem");

        let mut d = Derivation::new();
        d.heading("Newton's Law Calculation - Time to Reach Temperature")
            .append("Given:")
            .append(format!("• Ambient temperature (T∞) = {}", show_temp(ambient, tu)))
            .append(format!("• Initial temperature (T₀) = {}", show_temp(initial, tu)))
            .append(format!(
                "• Known point: T₁ = {} at t₁ = {known_time} {ut}",
                show_temp(known_temp, tu)
            ))
            .append(format!("• Target temperature = {}", show_temp(target, tu)))
            .blank()
            .append(format!("Model: {COOLING_MODEL}"))
            .blank()
            .append("Step 1: Convert temperatures to Kelvin")
            .append(format!("T∞ = {}", show_k(ta)))
            .append(format!("T₀ = {}", show_k(t0)))
            .append(format!("T₁ = {}", show_k(tk1)))
            .append(format!("T_target = {}", show_k(tkt)))
            .blank()
            .append("Step 2: Convert the known time to hours")
            .append(format!("t₁ = {known_time} {ut} = {}", show_hours(h1)))
            .blank()
            .append("Step 3: Calculate initial temperature difference (C)")
            .append("C = T₀ - T∞")
            .append(format!(
                "C = {} - {} = {}",
                fixed(t0, TEMP_DP),
                fixed(ta, TEMP_DP),
                show_k(c)
            ))
            .blank()
            .append("Step 4: Calculate k using the known point")
            .append("T - T∞ = Ce^(-kt)")
            .append(format!(
                "{} = {}e^(-k*{})",
                fixed(d1, TEMP_DP),
                fixed(c, TEMP_DP),
                fixed(h1, HOURS_DP)
            ))
            .append(format!("k = {} per hour", fixed(k, K_DP)))
            .blank()
            .append("Step 5: Calculate time to reach the target")
            .append("T = T∞ + Ce^(-kt)")
            .append(format!(
                "{} = {}e^(-{}t)",
                fixed(dt, TEMP_DP),
                fixed(c, TEMP_DP),
                fixed(k, K_DP)
            ))
            .append(format!(
                "t = -ln({}/{})/{}",
                fixed(dt, TEMP_DP),
                fixed(c, TEMP_DP),
                fixed(k, K_DP)
            ))
            .append(format!("t = {}", show_hours(hours)))
            .append(format!("t = {} {ut}", fixed(result, TEMP_DP)))
            .blank()
            .append(format!("Elapsed time: {}", hms(hours)));
        classification_line(&mut d, trend);
        d.blank()
            .append("Verification:")
            .append(format!("- Ambient Temperature (T∞): {}", show_temp(ambient, tu)))
            .append(format!("- Initial Temperature (T₀): {}", show_temp(initial, tu)))
            .append(format!(
                "- Known Point: {} at t={known_time} {ut}",
                show_temp(known_temp, tu)
            ))
            .append(format!("- Target Temperature: {}", show_temp(target, tu)))
            .append(format!("- Cooling Coefficient (k): {} per hour", fixed(k, K_DP)))
            .append(format!("- Required Time: {} {ut}", fixed(result, TEMP_DP)));

        Ok(Solution {
            quantity: SolvedQuantity::Time,
            value: result,
            unit: ut.name().to_string(),
            rate_constant: k,
            rate_of_change: None,
            trend,
            canonical: Some(Canonical::Elapsed(hr(hours))),
            derivation: d,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rc_core::TimeUnit;

    fn units(temperature: TemperatureUnit, time: TimeUnit) -> CoolingUnits {
        CoolingUnits { temperature, time }
    }

    #[test]
    fn hms_breakdown() {
        assert_eq!(hms(1.0 + 2.0 / 60.0 + 5.0 / 3600.0), "1 h 2 min 5 s");
        assert_eq!(hms(0.5), "0 h 30 min 0 s");
        assert_eq!(hms(-0.25), "0 h 15 min 0 s before t = 0");
    }

    #[test]
    fn temperature_at_time_in_celsius_minutes() {
        // Coffee: 90°C in a 20°C room, 70°C after 10 min.
        let op = TemperatureAtTime {
            ambient: 20.0,
            initial: 90.0,
            t1: 10.0,
            temp1: 70.0,
            t2: 20.0,
        };
        let sol = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap();
        // C * (5/7)^2 above ambient
        let expected = 20.0 + 70.0 * (50.0_f64 / 70.0).powi(2);
        assert!((sol.value - expected).abs() < 1e-9, "{}", sol.value);
        assert_eq!(sol.trend, Trend::Cooling);
        let k_expected = -(50.0_f64 / 70.0).ln() / (10.0 / 60.0);
        assert!((sol.rate_constant - k_expected).abs() < 1e-9);
        assert_eq!(sol.unit, "°C");
        assert!(matches!(sol.canonical, Some(Canonical::Temperature(_))));
    }

    #[test]
    fn heating_is_classified() {
        let op = TemperatureAtTime {
            ambient: 300.0,
            initial: 280.0,
            t1: 1.0,
            temp1: 290.0,
            t2: 2.0,
        };
        let sol = op
            .solve(&units(TemperatureUnit::Kelvin, TimeUnit::Hours))
            .unwrap();
        assert!((sol.value - 295.0).abs() < 1e-9);
        assert_eq!(sol.trend, Trend::Heating);
        assert!(
            sol.derivation
                .lines()
                .iter()
                .any(|l| l == "The body is heating (T₀ < T∞).")
        );
    }

    #[test]
    fn known_point_across_ambient_is_domain_error() {
        let op = TemperatureAtTime {
            ambient: 20.0,
            initial: 90.0,
            t1: 10.0,
            temp1: 10.0,
            t2: 20.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    #[test]
    fn initial_equal_to_ambient_is_domain_error() {
        let op = TimeToTemperature {
            ambient: 20.0,
            initial: 20.0,
            known_time: 5.0,
            known_temp: 20.0,
            target: 20.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    #[test]
    fn zero_known_time_is_degenerate() {
        let op = TemperatureAtTime {
            ambient: 20.0,
            initial: 90.0,
            t1: 0.0,
            temp1: 70.0,
            t2: 20.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn initial_temperature_rejects_coinciding_times() {
        let op = InitialTemperature {
            ambient: 68.0,
            t1: 4.0,
            temp1: 150.0,
            t2: 4.0,
            temp2: 120.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Fahrenheit, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn initial_temperature_back_extrapolates() {
        // Cooling in Kelvin/hours with k = ln 2: differences 40 K at t=1, 20 K at t=2.
        let op = InitialTemperature {
            ambient: 300.0,
            t1: 1.0,
            temp1: 340.0,
            t2: 2.0,
            temp2: 320.0,
        };
        let sol = op
            .solve(&units(TemperatureUnit::Kelvin, TimeUnit::Hours))
            .unwrap();
        assert!((sol.value - 380.0).abs() < 1e-9);
        assert!((sol.rate_constant - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn time_to_temperature_in_seconds() {
        // Halves the excess every 600 s; target is a quarter of the initial excess.
        let op = TimeToTemperature {
            ambient: 0.0,
            initial: 80.0,
            known_time: 600.0,
            known_temp: 40.0,
            target: 20.0,
        };
        let sol = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Seconds))
            .unwrap();
        assert!((sol.value - 1200.0).abs() < 1e-6, "{}", sol.value);
        assert_eq!(sol.unit, "seconds");
        assert!(
            sol.derivation
                .lines()
                .iter()
                .any(|l| l == "Elapsed time: 0 h 20 min 0 s")
        );
        match sol.canonical {
            Some(Canonical::Elapsed(t)) => {
                use uom::si::time::hour;
                assert!((t.get::<hour>() - 1.0 / 3.0).abs() < 1e-9);
            }
            other => panic!("unexpected canonical value {other:?}"),
        }
    }

    #[test]
    fn time_to_temperature_without_change_is_degenerate() {
        let op = TimeToTemperature {
            ambient: 20.0,
            initial: 90.0,
            known_time: 5.0,
            known_temp: 90.0,
            target: 50.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    fn index_of(lines: &[String], pred: impl Fn(&str) -> bool) -> usize {
        lines
            .iter()
            .position(|l| pred(l.as_str()))
            .unwrap_or_else(|| panic!("line not found in {lines:#?}"))
    }

    #[test]
    fn derivations_state_the_model_before_k_and_result() {
        let u = units(TemperatureUnit::Celsius, TimeUnit::Minutes);
        let cases = [
            (
                TemperatureAtTime {
                    ambient: 20.0,
                    initial: 90.0,
                    t1: 10.0,
                    temp1: 70.0,
                    t2: 20.0,
                }
                .solve(&u)
                .unwrap(),
                "T = ",
            ),
            (
                InitialTemperature {
                    ambient: 20.0,
                    t1: 0.0,
                    temp1: 90.0,
                    t2: 10.0,
                    temp2: 70.0,
                }
                .solve(&u)
                .unwrap(),
                "T₀ = ",
            ),
            (
                TimeToTemperature {
                    ambient: 20.0,
                    initial: 90.0,
                    known_time: 10.0,
                    known_temp: 70.0,
                    target: 40.0,
                }
                .solve(&u)
                .unwrap(),
                "t = ",
            ),
        ];
        for (sol, result_prefix) in cases {
            let lines = sol.derivation.lines();
            let model = index_of(lines, |l| l == format!("Model: {COOLING_MODEL}"));
            let k = index_of(lines, |l| l.starts_with("k = "));
            let result = lines
                .iter()
                .rposition(|l| l.starts_with(result_prefix))
                .unwrap();
            assert!(lines[..model].iter().any(|l| l == "Given:"));
            assert!(model < k, "{lines:#?}");
            assert!(k < result, "{lines:#?}");
        }
    }

    #[test]
    fn non_finite_inputs_name_the_field() {
        let op = InitialTemperature {
            ambient: 20.0,
            t1: 0.0,
            temp1: 90.0,
            t2: 10.0,
            temp2: f64::NAN,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.field(), Some("temp2"));

        let op = TemperatureAtTime {
            ambient: f64::INFINITY,
            initial: 90.0,
            t1: 10.0,
            temp1: 70.0,
            t2: 20.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.field(), Some("ambient"));
    }

    #[test]
    fn initial_temperature_first_point_at_ambient_is_domain_error() {
        let op = InitialTemperature {
            ambient: 20.0,
            t1: 5.0,
            temp1: 20.0,
            t2: 10.0,
            temp2: 30.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    #[test]
    fn initial_temperature_points_across_ambient_is_domain_error() {
        let op = InitialTemperature {
            ambient: 20.0,
            t1: 5.0,
            temp1: 50.0,
            t2: 10.0,
            temp2: 10.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    #[test]
    fn target_at_ambient_is_unreachable() {
        let op = TimeToTemperature {
            ambient: 20.0,
            initial: 90.0,
            known_time: 5.0,
            known_temp: 70.0,
            target: 20.0,
        };
        let err = op
            .solve(&units(TemperatureUnit::Celsius, TimeUnit::Minutes))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }
}
