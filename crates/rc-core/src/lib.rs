//! rc-core: stable foundation for ratecalc.
//!
//! Contains:
//! - units (unit tags, Kelvin/hour normalization, uom quantity aliases)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::{
    AmountUnit, TemperatureUnit, TimeUnit, denormalize_time, from_kelvin, normalize_time,
    to_kelvin,
};
