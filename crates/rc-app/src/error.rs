//! Error types for the rc-app service layer.

use std::path::PathBuf;

use rc_solver::{ErrorKind, SolveError};

/// Application error type that wraps solver failures and adds the
/// request-handling failures a host can run into.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("Unknown form: {0}")]
    UnknownForm(String),

    #[error("Failed to read request file: {path}")]
    RequestFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse request: {0}")]
    RequestParse(String),

    #[error("Failed to render output: {0}")]
    Output(String),
}

/// Result type for rc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Solver failure kind, if this error came from the solver contract.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            AppError::Solve(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Offending form field, where one can be named.
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::Solve(e) => e.field(),
            _ => None,
        }
    }

    /// Generic message a form host shows instead of solver internals.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            Some(ErrorKind::InvalidInput) => "Please fill in all fields with valid numbers.",
            Some(ErrorKind::DomainError) => {
                "These values have no solution: a logarithm would be undefined."
            }
            Some(ErrorKind::DegenerateInput) => {
                "These values cannot determine the unknown: times coincide or nothing changed."
            }
            Some(ErrorKind::UnsupportedUnit) => "Please select a supported unit.",
            None => "The request could not be processed.",
        }
    }
}

impl From<rc_core::CoreError> for AppError {
    fn from(err: rc_core::CoreError) -> Self {
        AppError::Solve(err.into())
    }
}
