//! Exponential growth/decay: `x(t) = x0 * e^(k*t)`.
//!
//! Time stays in the caller's unit throughout; the model is scale invariant so
//! `k` is reported per that unit.

use rc_core::{Real, ensure_finite, fixed};
use tracing::debug;

use crate::derivation::Derivation;
use crate::error::{SolveError, SolveResult};
use crate::problem::{
    AmountAtTime, ExponentialUnits, InitialValue, Operation, Solution, SolvedQuantity,
    TimeToReach, Trend,
};

const K_DP: usize = 6;
const AMOUNT_DP: usize = 4;

const EXPONENTIAL_MODEL: &str = "x(t) = x₀ * e^(k*t)";

fn positive(v: Real, field: &str) -> SolveResult<Real> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(SolveError::domain(format!("{field} must be positive, got {v}")))
    }
}

/// `ln(arg)`, rejecting arguments outside the logarithm's domain.
pub(crate) fn checked_ln(arg: Real, what: &str) -> SolveResult<Real> {
    if arg > 0.0 && arg.is_finite() {
        Ok(arg.ln())
    } else {
        Err(SolveError::domain(format!("ln({what}) is undefined for {arg}")))
    }
}

pub(crate) fn finite_result(v: Real, what: &str) -> SolveResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SolveError::domain(format!("{what} is not representable ({v})")))
    }
}

/// Growth iff the amount at t2 exceeds the amount at t = 0.
fn classify(x2: Real, x0: Real) -> Trend {
    if x2 > x0 { Trend::Growth } else { Trend::Decay }
}

fn closing_lines(d: &mut Derivation, trend: Trend, x0: Real, k: Real, units: &ExponentialUnits) {
    d.blank()
        .append(format!("The {} model is:", trend.label()))
        .append(format!(
            "x(t) = {} * e^({}t) {}",
            fixed(x0, AMOUNT_DP),
            fixed(k, K_DP),
            units.amount
        ));
}

impl Operation for AmountAtTime {
    type Units = ExponentialUnits;

    fn name(&self) -> &'static str {
        "amount-at-time"
    }

    fn solve(&self, units: &ExponentialUnits) -> SolveResult<Solution> {
        let x0 = ensure_finite(self.x0, "x0")?;
        let t1 = ensure_finite(self.t1, "t1")?;
        let x1 = ensure_finite(self.x1, "x1")?;
        let t2 = ensure_finite(self.t2, "t2")?;
        positive(x0, "x0")?;
        positive(x1, "x1")?;
        if t1 == 0.0 {
            return Err(SolveError::degenerate(
                "t1 must be non-zero to compute k = ln(x1/x0)/t1",
            ));
        }

        let k = checked_ln(x1 / x0, "x1/x0")? / t1;
        let x2 = finite_result(x0 * (k * t2).exp(), "x(t2)")?;
        let dxdt = finite_result(k * x2, "dx/dt")?;
        let trend = classify(x2, x0);
        debug!(operation = self.name(), k, x2, dxdt, "solved exponential problem");

        let ux = &units.amount;
        let ut = units.time;
        let mut d = Derivation::new();
        d.heading("Growth/Decay Calculation - Amount at t₂")
            .append("Given:")
            .append(format!("• Initial value (x₀) = {x0} {ux}"))
            .append(format!("• Value at t₁ (x₁) = {x1} {ux}"))
            .append(format!("• Time 1 (t₁) = {t1} {ut}"))
            .append(format!("• Time 2 (t₂) = {t2} {ut}"))
            .blank()
            .append(format!("Model: {EXPONENTIAL_MODEL}"))
            .blank()
            .append("Step 1: Calculate growth/decay rate (k)")
            .append("k = ln(x₁/x₀)/t₁")
            .append(format!("k = ln({x1}/{x0})/{t1}"))
            .append(format!("k = {} per {}", fixed(k, K_DP), ut.singular()))
            .blank()
            .append("Step 2: Calculate amount at t₂")
            .append(EXPONENTIAL_MODEL)
            .append(format!("x({t2}) = {x0} * e^({} * {t2})", fixed(k, K_DP)))
            .append(format!("x({t2}) = {} {ux}", fixed(x2, AMOUNT_DP)))
            .blank()
            .append("Step 3: Calculate rate of change (dx/dt)")
            .append("dx/dt = k * x(t)")
            .append(format!(
                "dx/dt = {} * {}",
                fixed(k, K_DP),
                fixed(x2, AMOUNT_DP)
            ))
            .append(format!("dx/dt = {} {ux}/{}", fixed(dxdt, AMOUNT_DP), ut.singular()));
        closing_lines(&mut d, trend, x0, k, units);

        Ok(Solution {
            quantity: SolvedQuantity::Amount,
            value: x2,
            unit: ux.to_string(),
            rate_constant: k,
            rate_of_change: Some(dxdt),
            trend,
            canonical: None,
            derivation: d,
        })
    }
}

impl Operation for InitialValue {
    type Units = ExponentialUnits;

    fn name(&self) -> &'static str {
        "initial-value"
    }

    fn solve(&self, units: &ExponentialUnits) -> SolveResult<Solution> {
        let x1 = ensure_finite(self.x1, "x1")?;
        let t1 = ensure_finite(self.t1, "t1")?;
        let x2 = ensure_finite(self.x2, "x2")?;
        let t2 = ensure_finite(self.t2, "t2")?;
        positive(x1, "x1")?;
        positive(x2, "x2")?;
        if t1 == t2 {
            return Err(SolveError::degenerate(format!(
                "t1 and t2 coincide ({t1}); k = ln(x2/x1)/(t2-t1) is undefined"
            )));
        }

        let k = checked_ln(x2 / x1, "x2/x1")? / (t2 - t1);
        let x0 = finite_result(x1 / (k * t1).exp(), "x0")?;
        let trend = classify(x2, x0);
        debug!(operation = self.name(), k, x0, "solved exponential problem");

        let ux = &units.amount;
        let ut = units.time;
        let mut d = Derivation::new();
        d.heading("Growth/Decay Calculation - Initial Value")
            .append("Given:")
            .append(format!("• Value at t₁ (x₁) = {x1} {ux}"))
            .append(format!("• Value at t₂ (x₂) = {x2} {ux}"))
            .append(format!("• Time 1 (t₁) = {t1} {ut}"))
            .append(format!("• Time 2 (t₂) = {t2} {ut}"))
            .blank()
            .append(format!("Model: {EXPONENTIAL_MODEL}"))
            .blank()
            .append("Step 1: Calculate growth/decay rate (k)")
            .append("k = ln(x₂/x₁)/(t₂-t₁)")
            .append(format!("k = ln({x2}/{x1})/({t2}-{t1})"))
            .append(format!("k = {} per {}", fixed(k, K_DP), ut.singular()))
            .blank()
            .append("Step 2: Calculate initial value (x₀)")
            .append("x₀ = x₁ / e^(k*t₁)")
            .append(format!("x₀ = {x1} / e^({} * {t1})", fixed(k, K_DP)))
            .append(format!("x₀ = {} {ux}", fixed(x0, AMOUNT_DP)));
        closing_lines(&mut d, trend, x0, k, units);

        Ok(Solution {
            quantity: SolvedQuantity::InitialValue,
            value: x0,
            unit: ux.to_string(),
            rate_constant: k,
            rate_of_change: None,
            trend,
            canonical: None,
            derivation: d,
        })
    }
}

impl Operation for TimeToReach {
    type Units = ExponentialUnits;

    fn name(&self) -> &'static str {
        "time-to-reach"
    }

    fn solve(&self, units: &ExponentialUnits) -> SolveResult<Solution> {
        let x0 = ensure_finite(self.x0, "x0")?;
        let x1 = ensure_finite(self.x1, "x1")?;
        let t1 = ensure_finite(self.t1, "t1")?;
        let x2 = ensure_finite(self.x2, "x2")?;
        positive(x0, "x0")?;
        positive(x1, "x1")?;
        positive(x2, "x2")?;
        if t1 == 0.0 {
            return Err(SolveError::degenerate(
                "t1 must be non-zero to compute k = ln(x1/x0)/t1",
            ));
        }

        let k = checked_ln(x1 / x0, "x1/x0")? / t1;
        if k == 0.0 {
            return Err(SolveError::degenerate(
                "x1 equals x0, so k = 0 and no change was observed",
            ));
        }
        let t2 = finite_result(checked_ln(x2 / x0, "x2/x0")? / k, "t2")?;
        let trend = classify(x2, x0);
        debug!(operation = self.name(), k, t2, "solved exponential problem");

        let ux = &units.amount;
        let ut = units.time;
        let mut d = Derivation::new();
        d.heading("Growth/Decay Calculation - Time to Reach Target")
            .append("Given:")
            .append(format!("• Initial value (x₀) = {x0} {ux}"))
            .append(format!("• Value at t₁ (x₁) = {x1} {ux}"))
            .append(format!("• Time 1 (t₁) = {t1} {ut}"))
            .append(format!("• Target value (x₂) = {x2} {ux}"))
            .blank()
            .append(format!("Model: {EXPONENTIAL_MODEL}"))
            .blank()
            .append("Step 1: Calculate growth/decay rate (k)")
            .append("k = ln(x₁/x₀)/t₁")
            .append(format!("k = ln({x1}/{x0})/{t1}"))
            .append(format!("k = {} per {}", fixed(k, K_DP), ut.singular()))
            .blank()
            .append("Step 2: Calculate time to reach target (t₂)")
            .append("t₂ = ln(x₂/x₀)/k")
            .append(format!("t₂ = ln({x2}/{x0})/{}", fixed(k, K_DP)))
            .append(format!("t₂ = {} {ut}", fixed(t2, AMOUNT_DP)));
        closing_lines(&mut d, trend, x0, k, units);

        Ok(Solution {
            quantity: SolvedQuantity::Time,
            value: t2,
            unit: ut.name().to_string(),
            rate_constant: k,
            rate_of_change: None,
            trend,
            canonical: None,
            derivation: d,
        })
    }
}
