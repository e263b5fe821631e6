//! Closed-form solvers for exponential growth/decay and Newton's law of
//! cooling/heating.
//!
//! Each of the six operations takes exactly its knowns, normalizes units,
//! isolates the unknown algebraically and records a step-by-step
//! [`Derivation`] next to the numeric result.

pub mod cooling;
pub mod derivation;
pub mod error;
pub mod exponential;
pub mod problem;
pub mod solve;

pub use derivation::Derivation;
pub use error::{ErrorKind, SolveError, SolveResult};
pub use problem::{
    AmountAtTime, Canonical, CoolingProblem, CoolingQuery, CoolingUnits, ExponentialProblem,
    ExponentialQuery, ExponentialUnits, InitialTemperature, InitialValue, Operation, Problem,
    Solution, SolvedQuantity, TemperatureAtTime, TimeToReach, TimeToTemperature, Trend,
};
pub use solve::{solve, solve_cooling, solve_exponential};
