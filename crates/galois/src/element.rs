// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! A field element paired with the field it lives in.
//!
//! Elements are immutable values: arithmetic returns new elements and every
//! binary operation checks that both operands come from the same field.

use std::fmt;

use crate::errors::{FieldError, FieldResult};
use crate::field::GaloisField;

/// An element of a [`GaloisField`], carrying its owning field handle.
///
/// Construct one through [`GaloisField::element`], [`GaloisField::zero`] or
/// [`GaloisField::one`]; the representation is validated at that boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldElement {
    field: GaloisField,
    value: usize,
}

impl FieldElement {
    pub(crate) fn from_parts(field: GaloisField, value: usize) -> Self {
        FieldElement { field, value }
    }

    /// The element's integer representation in `[0, order)`.
    pub fn value(&self) -> usize {
        self.value
    }

    /// The field this element belongs to.
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    fn ensure_same_field(&self, other: &FieldElement) -> FieldResult<()> {
        if self.field == other.field {
            Ok(())
        } else {
            Err(FieldError::mismatch(&self.field, &other.field))
        }
    }

    /// Adds two elements.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` when the operands belong to
    /// different fields.
    pub fn add(&self, other: &FieldElement) -> FieldResult<FieldElement> {
        self.ensure_same_field(other)?;
        Ok(Self::from_parts(
            self.field.clone(),
            self.field.add(self.value, other.value),
        ))
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` when the operands belong to
    /// different fields.
    pub fn sub(&self, other: &FieldElement) -> FieldResult<FieldElement> {
        self.ensure_same_field(other)?;
        Ok(Self::from_parts(
            self.field.clone(),
            self.field.sub(self.value, other.value),
        ))
    }

    /// Multiplies two elements.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` when the operands belong to
    /// different fields.
    pub fn mul(&self, other: &FieldElement) -> FieldResult<FieldElement> {
        self.ensure_same_field(other)?;
        Ok(Self::from_parts(
            self.field.clone(),
            self.field.mul(self.value, other.value),
        ))
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` when the operands belong to
    /// different fields, and `FieldError::DivisionByZero` when `other` is
    /// the zero element.
    pub fn div(&self, other: &FieldElement) -> FieldResult<FieldElement> {
        self.ensure_same_field(other)?;
        Ok(Self::from_parts(
            self.field.clone(),
            self.field.div(self.value, other.value)?,
        ))
    }

    /// The additive inverse.
    pub fn additive_inverse(&self) -> FieldElement {
        Self::from_parts(self.field.clone(), self.field.negate(self.value))
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::DivisionByZero` for the zero element.
    pub fn multiplicative_inverse(&self) -> FieldResult<FieldElement> {
        Ok(Self::from_parts(
            self.field.clone(),
            self.field.inverse(self.value)?,
        ))
    }

    /// Raises the element to the given power, with `pow(0) == one`.
    pub fn pow(&self, exponent: usize) -> FieldElement {
        Self::from_parts(self.field.clone(), self.field.pow(self.value, exponent))
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
