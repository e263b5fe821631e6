//! Error types for solver operations.

use rc_core::CoreError;
use thiserror::Error;

/// Failure kind, for hosts that only need to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    InvalidInput,
    DomainError,
    DegenerateInput,
    UnsupportedUnit,
}

/// Errors that can occur while solving a problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A required field is missing, non-numeric or non-finite.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A logarithm or ratio is undefined for the supplied values.
    #[error("Domain error: {what}")]
    Domain { what: String },

    /// Time points coincide or the rate constant is zero.
    #[error("Degenerate input: {what}")]
    Degenerate { what: String },

    #[error("Unsupported {quantity} unit '{unit}'")]
    UnsupportedUnit {
        unit: String,
        quantity: &'static str,
    },
}

pub type SolveResult<T> = Result<T, SolveError>;

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::InvalidInput { .. } => ErrorKind::InvalidInput,
            SolveError::Domain { .. } => ErrorKind::DomainError,
            SolveError::Degenerate { .. } => ErrorKind::DegenerateInput,
            SolveError::UnsupportedUnit { .. } => ErrorKind::UnsupportedUnit,
        }
    }

    /// Offending field, where one can be named.
    pub fn field(&self) -> Option<&str> {
        match self {
            SolveError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    pub(crate) fn domain(what: impl Into<String>) -> Self {
        SolveError::Domain { what: what.into() }
    }

    pub(crate) fn degenerate(what: impl Into<String>) -> Self {
        SolveError::Degenerate { what: what.into() }
    }
}

impl From<CoreError> for SolveError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => SolveError::InvalidInput {
                field: what.to_string(),
                reason: format!("non-finite value {value}"),
            },
            CoreError::UnsupportedUnit { unit, quantity } => {
                SolveError::UnsupportedUnit { unit, quantity }
            }
        }
    }
}
