// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for Galois field construction and arithmetic
//!
//! This module defines specific error types using `thiserror` for better error handling
//! and debugging across field construction, element validation, and arithmetic.

use crate::field::GaloisField;
use thiserror::Error;

/// Main error type for Galois field operations
///
/// This enum covers all the different types of errors that can occur
/// during field construction, element validation, and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A representation outside the range `[0, order)` was used as an element
    #[error("Value {value} is not an element of a field of order {order}")]
    NotFieldElement { value: usize, order: usize },

    /// Operands of a binary operation belong to different fields
    #[error("Operands belong to different fields: {left} vs {right}")]
    FieldMismatch { left: String, right: String },

    /// Division (or inversion, or discrete logarithm) of the zero element
    #[error("Division by zero in a finite field")]
    DivisionByZero,

    /// A field could not be constructed from the given order/polynomial
    #[error("Invalid field: {message}")]
    InvalidField { message: String },
}

/// Result type alias for Galois field operations
pub type FieldResult<T> = Result<T, FieldError>;

// Helper functions for creating errors with context
impl FieldError {
    /// Create an `InvalidField` error with a message
    pub fn invalid_field(message: impl Into<String>) -> Self {
        FieldError::InvalidField {
            message: message.into(),
        }
    }

    /// Create a `FieldMismatch` error naming both fields
    pub fn mismatch(left: &GaloisField, right: &GaloisField) -> Self {
        FieldError::FieldMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}
