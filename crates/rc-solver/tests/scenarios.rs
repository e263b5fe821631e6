//! End-to-end solver scenarios through the public `solve` entry point.

use rc_core::{AmountUnit, TemperatureUnit, TimeUnit};
use rc_solver::{
    AmountAtTime, Canonical, CoolingProblem, CoolingQuery, CoolingUnits, ErrorKind,
    ExponentialProblem, ExponentialQuery, ExponentialUnits, InitialTemperature, InitialValue,
    Problem, SolvedQuantity, TemperatureAtTime, TimeToReach, TimeToTemperature, Trend, solve,
};

fn growth(query: ExponentialQuery, amount: &str, time: TimeUnit) -> Problem {
    ExponentialProblem {
        query,
        units: ExponentialUnits {
            amount: AmountUnit::new(amount).unwrap(),
            time,
        },
    }
    .into()
}

fn cooling(query: CoolingQuery, temperature: TemperatureUnit, time: TimeUnit) -> Problem {
    CoolingProblem {
        query,
        units: CoolingUnits { temperature, time },
    }
    .into()
}

#[test]
fn amount_at_time_kg_hours() {
    let problem = growth(
        ExponentialQuery::AmountAtTime(AmountAtTime {
            x0: 100.0,
            t1: 1.0,
            x1: 150.0,
            t2: 2.0,
        }),
        "kg",
        TimeUnit::Hours,
    );
    let sol = solve(&problem).unwrap();

    assert_eq!(sol.quantity, SolvedQuantity::Amount);
    assert!((sol.rate_constant - 0.405_465).abs() < 1e-6);
    assert!((sol.value - 225.0).abs() < 1e-9);
    assert_eq!(sol.trend, Trend::Growth);
    assert_eq!(sol.unit, "kg");

    let lines = sol.derivation.lines();
    assert_eq!(lines[0], "Growth/Decay Calculation - Amount at t₂");
    assert!(lines.iter().any(|l| l == "k = ln(x₁/x₀)/t₁"));
    assert!(lines.iter().any(|l| l == "The growth model is:"));
}

#[test]
fn initial_temperature_from_first_observation_at_zero() {
    let problem = cooling(
        CoolingQuery::InitialTemperature(InitialTemperature {
            ambient: 20.0,
            t1: 0.0,
            temp1: 90.0,
            t2: 10.0,
            temp2: 70.0,
        }),
        TemperatureUnit::Celsius,
        TimeUnit::Minutes,
    );
    let sol = solve(&problem).unwrap();

    // Manual Kelvin/hour arithmetic, in the same order as the solver.
    let ta: f64 = 20.0 + 273.15;
    let tk1: f64 = 90.0 + 273.15;
    let tk2: f64 = 70.0 + 273.15;
    let h1: f64 = 0.0 / 60.0;
    let h2: f64 = 10.0 / 60.0;
    let c1 = tk1 - ta;
    let c2 = tk2 - ta;
    let k = -(c2 / c1).ln() / (h2 - h1);
    let t0 = ta + c1 * (k * h1).exp();

    assert_eq!(sol.rate_constant, k);
    assert_eq!(sol.value, t0 - 273.15);
    assert!((sol.value - 90.0).abs() < 1e-9);
    assert_eq!(sol.trend, Trend::Cooling);
    match sol.canonical {
        Some(Canonical::Temperature(t)) => {
            use uom::si::thermodynamic_temperature::kelvin;
            assert!((t.get::<kelvin>() - t0).abs() < 1e-9);
        }
        other => panic!("unexpected canonical value {other:?}"),
    }
    let lines = sol.derivation.lines();
    assert!(lines.iter().any(|l| l == "T∞ = 293.15 K"));
    assert!(lines.iter().any(|l| l == "t₂ = 10 minutes = 0.166667 h"));
}

#[test]
fn time_to_reach_without_change_is_degenerate() {
    let problem = growth(
        ExponentialQuery::TimeToReach(TimeToReach {
            x0: 50.0,
            x1: 50.0,
            t1: 3.0,
            x2: 80.0,
        }),
        "population",
        TimeUnit::Years,
    );
    let err = solve(&problem).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
}

#[test]
fn every_operation_is_idempotent() {
    let problems = [
        growth(
            ExponentialQuery::AmountAtTime(AmountAtTime {
                x0: 12.0,
                t1: 2.0,
                x1: 9.0,
                t2: 7.0,
            }),
            "g",
            TimeUnit::Days,
        ),
        growth(
            ExponentialQuery::InitialValue(InitialValue {
                x1: 12.0,
                t1: 2.0,
                x2: 30.0,
                t2: 5.0,
            }),
            "count",
            TimeUnit::Seconds,
        ),
        growth(
            ExponentialQuery::TimeToReach(TimeToReach {
                x0: 1000.0,
                x1: 1100.0,
                t1: 1.0,
                x2: 2000.0,
            }),
            "dollars",
            TimeUnit::Years,
        ),
        cooling(
            CoolingQuery::TemperatureAtTime(TemperatureAtTime {
                ambient: 70.0,
                initial: 180.0,
                t1: 5.0,
                temp1: 150.0,
                t2: 15.0,
            }),
            TemperatureUnit::Fahrenheit,
            TimeUnit::Minutes,
        ),
        cooling(
            CoolingQuery::InitialTemperature(InitialTemperature {
                ambient: 5.0,
                t1: 1.0,
                temp1: -2.0,
                t2: 3.0,
                temp2: 1.0,
            }),
            TemperatureUnit::Celsius,
            TimeUnit::Hours,
        ),
        cooling(
            CoolingQuery::TimeToReach(TimeToTemperature {
                ambient: 295.0,
                initial: 370.0,
                known_time: 0.5,
                known_temp: 350.0,
                target: 310.0,
            }),
            TemperatureUnit::Kelvin,
            TimeUnit::Days,
        ),
    ];

    for problem in &problems {
        let first = solve(problem).unwrap();
        let second = solve(problem).unwrap();
        assert_eq!(first, second);
        assert!(!first.derivation.is_empty());
    }
}

#[test]
fn heating_from_below_ambient() {
    // Frozen item warming in a 5°C fridge: -2°C at 1 h, 1°C at 3 h.
    let problem = cooling(
        CoolingQuery::InitialTemperature(InitialTemperature {
            ambient: 5.0,
            t1: 1.0,
            temp1: -2.0,
            t2: 3.0,
            temp2: 1.0,
        }),
        TemperatureUnit::Celsius,
        TimeUnit::Hours,
    );
    let sol = solve(&problem).unwrap();
    assert_eq!(sol.trend, Trend::Heating);
    assert!(sol.value < -2.0);
    assert!(sol.rate_constant > 0.0);
}
