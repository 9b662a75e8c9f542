// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for linear algebra over Galois fields.

use gs_galois::FieldError;
use thiserror::Error;

/// Main error type for matrix construction and system solving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Incompatible matrix/vector shapes
    #[error("Dimension mismatch: {message}")]
    DimensionMismatch { message: String },

    /// Field-level failures from entry validation or arithmetic
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

/// Result type alias for linear algebra operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

impl LinalgError {
    /// Create a dimension mismatch error with a message.
    pub fn dimension_mismatch(message: impl Into<String>) -> Self {
        LinalgError::DimensionMismatch {
            message: message.into(),
        }
    }
}
