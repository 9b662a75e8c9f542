// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reed-Solomon evaluation encoding and test-word construction.

use gs_galois::{FieldElement, FieldError, FieldResult, GaloisField};
use gs_poly::{Polynomial, PolynomialResult};

/// The `n` consecutive evaluation points `first, first + 1, ...` as
/// elements of `field`.
///
/// # Errors
///
/// Returns `NotFieldElement` when the range runs past the field order.
pub fn consecutive_points(
    field: &GaloisField,
    n: usize,
    first: usize,
) -> FieldResult<Vec<FieldElement>> {
    (first..first + n).map(|value| field.element(value)).collect()
}

/// Evaluation encoding: the code word of `information` at the points `xs`.
///
/// # Errors
///
/// Returns `FieldMismatch` (wrapped) when a point belongs to a different
/// field than the information polynomial.
pub fn encode(
    information: &Polynomial,
    xs: &[FieldElement],
) -> PolynomialResult<Vec<(FieldElement, FieldElement)>> {
    let field = information.field();
    let mut points = Vec::with_capacity(xs.len());
    for x in xs {
        if x.field() != field {
            return Err(FieldError::mismatch(field, x.field()).into());
        }
        let value = information.evaluate(x.value())?;
        points.push((x.clone(), field.element(value)?));
    }
    Ok(points)
}

/// A copy of `points` whose values at the given 0-based positions are
/// shifted by adding 1 in the field. Adding a nonzero constant always
/// changes the value, so every listed position is guaranteed to disagree
/// with the original word.
///
/// # Panics
///
/// Panics if any position is out of bounds.
pub fn with_noise_at(
    points: &[(FieldElement, FieldElement)],
    positions: &[usize],
) -> FieldResult<Vec<(FieldElement, FieldElement)>> {
    let mut noisy = points.to_vec();
    for &position in positions {
        let (x, y) = noisy[position].clone();
        let field = y.field().clone();
        let shifted = field.element(field.add(y.value(), 1))?;
        noisy[position] = (x, shifted);
    }
    Ok(noisy)
}
