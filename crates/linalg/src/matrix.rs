// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Dimension-validated matrices of field-element representations.

use gs_galois::GaloisField;

use crate::errors::{LinalgError, LinalgResult};

/// A matrix over one [`GaloisField`] with runtime-determined dimensions.
///
/// Row lengths and entries are validated at construction, so every stored
/// value is a representation inside the owning field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatrix {
    field: GaloisField,
    data: Vec<Vec<usize>>,
    rows: usize,
    cols: usize,
}

impl FieldMatrix {
    /// Creates a matrix from row data, validating shape and entries.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if rows have inconsistent lengths, and
    /// `FieldError::NotFieldElement` (wrapped) if any entry is outside the
    /// field.
    pub fn new(field: &GaloisField, data: Vec<Vec<usize>>) -> LinalgResult<Self> {
        if data.is_empty() {
            return Ok(Self {
                field: field.clone(),
                data,
                rows: 0,
                cols: 0,
            });
        }

        let rows = data.len();
        let cols = data[0].len();
        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(LinalgError::dimension_mismatch(format!(
                    "row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            for &value in row {
                field.ensure_element(value)?;
            }
        }

        Ok(Self {
            field: field.clone(),
            data,
            rows,
            cols,
        })
    }

    /// Creates a zero matrix of the specified dimensions.
    pub fn zeros(field: &GaloisField, rows: usize, cols: usize) -> Self {
        Self {
            field: field.clone(),
            data: vec![vec![0; cols]; rows],
            rows,
            cols,
        }
    }

    /// The field the entries live in.
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a reference to the underlying row data.
    pub fn data(&self) -> &[Vec<usize>] {
        &self.data
    }

    /// Gets a specific entry.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.data[row][col]
    }

    /// Multiplies the matrix by a column vector.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when the vector length differs from the
    /// column count, and `FieldError::NotFieldElement` (wrapped) if any
    /// vector entry is outside the field.
    pub fn mul_vector(&self, vector: &[usize]) -> LinalgResult<Vec<usize>> {
        if vector.len() != self.cols {
            return Err(LinalgError::dimension_mismatch(format!(
                "vector has {} entries, expected {}",
                vector.len(),
                self.cols
            )));
        }
        for &value in vector {
            self.field.ensure_element(value)?;
        }
        let product = self
            .data
            .iter()
            .map(|row| {
                row.iter().zip(vector).fold(0, |acc, (&a, &x)| {
                    self.field.add(acc, self.field.mul(a, x))
                })
            })
            .collect();
        Ok(product)
    }
}

impl From<FieldMatrix> for Vec<Vec<usize>> {
    fn from(matrix: FieldMatrix) -> Self {
        matrix.data
    }
}
