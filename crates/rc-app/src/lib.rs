//! Shared application service layer for ratecalc.
//!
//! This crate plays the form host for the solvers: it knows which fields each
//! calculation asks for, turns a raw field mapping into a typed problem, and
//! renders the resulting derivation for CLI (or any other) front ends.

pub mod error;
pub mod forms;
pub mod request;
pub mod solve_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use forms::{Calculator, FieldSpec, FormKind, FormTemplate, UnitField};
pub use request::{FieldValue, FormRequest, UnitSelection, load_request, parse_request};
pub use solve_service::{render_json, render_text, solve_file, solve_request};
