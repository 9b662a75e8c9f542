//! Error types for polynomial operations.

use gs_galois::FieldError;
use thiserror::Error;

/// Main error type for univariate and bivariate polynomial operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Division by the zero polynomial
    #[error("Division by the zero polynomial")]
    DivisionByZero,

    /// An underlying field operation failed (mismatched fields, invalid
    /// representations, zero divisors at the element level)
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;
