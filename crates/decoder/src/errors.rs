// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for interpolation, factorization and list decoding.

use gs_galois::FieldError;
use gs_linalg::LinalgError;
use gs_poly::PolynomialError;
use thiserror::Error;

/// Error type for interpolation polynomial construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// Only the zero polynomial satisfies the constraints within the
    /// weighted-degree budget
    #[error("No nonzero interpolation polynomial exists within the weighted-degree budget")]
    NoTrivialPolynomial,

    /// Structurally malformed builder input
    #[error("Invalid interpolation arguments: {message}")]
    InvalidArguments { message: String },

    /// Field-level failures
    #[error("Field error: {0}")]
    Field(#[from] FieldError),

    /// Polynomial arithmetic failures
    #[error("Polynomial error: {0}")]
    Polynomial(#[from] PolynomialError),

    /// Linear system failures
    #[error("Solver error: {0}")]
    Solver(#[from] LinalgError),
}

/// Result type alias for interpolation operations.
pub type InterpolationResult<T> = Result<T, InterpolationError>;

impl InterpolationError {
    /// Create an invalid arguments error with a message.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        InterpolationError::InvalidArguments {
            message: message.into(),
        }
    }
}

/// Error type for end-to-end list decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    /// The n/k/t combination is malformed or outside the operating regime
    /// of the decoder
    #[error("Parameters too weak: {message}")]
    ParametersTooWeak { message: String },

    /// Interpolation stage failures
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Factorization and evaluation failures
    #[error("Polynomial error: {0}")]
    Polynomial(#[from] PolynomialError),

    /// Field-level failures
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

/// Result type alias for decoding operations.
pub type DecodingResult<T> = Result<T, DecodingError>;

impl DecodingError {
    /// Create a parameters error with a message.
    pub fn parameters_too_weak(message: impl Into<String>) -> Self {
        DecodingError::ParametersTooWeak {
            message: message.into(),
        }
    }
}
