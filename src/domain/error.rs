//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent arithmetic contract violations.
/// These are independent of CLI and config concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;
