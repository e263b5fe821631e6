//! High-level solver interface.

use tracing::debug;

use crate::error::SolveResult;
use crate::problem::{
    CoolingProblem, CoolingQuery, ExponentialProblem, ExponentialQuery, Operation, Problem,
    Solution,
};

/// Solve any supported problem.
///
/// Dispatch is a plain match on the tagged variants; each operation rejects
/// bad input before computing, so an `Err` never carries a partial derivation.
pub fn solve(problem: &Problem) -> SolveResult<Solution> {
    match problem {
        Problem::Exponential(p) => solve_exponential(p),
        Problem::Cooling(p) => solve_cooling(p),
    }
}

pub fn solve_exponential(problem: &ExponentialProblem) -> SolveResult<Solution> {
    let units = &problem.units;
    match &problem.query {
        ExponentialQuery::AmountAtTime(op) => run(op, units),
        ExponentialQuery::InitialValue(op) => run(op, units),
        ExponentialQuery::TimeToReach(op) => run(op, units),
    }
}

pub fn solve_cooling(problem: &CoolingProblem) -> SolveResult<Solution> {
    let units = &problem.units;
    match &problem.query {
        CoolingQuery::TemperatureAtTime(op) => run(op, units),
        CoolingQuery::InitialTemperature(op) => run(op, units),
        CoolingQuery::TimeToReach(op) => run(op, units),
    }
}

fn run<O: Operation>(op: &O, units: &O::Units) -> SolveResult<Solution> {
    let result = op.solve(units);
    if let Err(e) = &result {
        debug!(operation = op.name(), error = %e, "solve rejected input");
    }
    result
}
