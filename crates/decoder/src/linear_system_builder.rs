// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Interpolation by solving the constraint system wholesale.

use gs_galois::FieldElement;
use gs_linalg::{solve, FieldMatrix, SystemSolution};
use gs_poly::{BivariatePolynomial, CombinationsCalculator};

use crate::errors::{InterpolationError, InterpolationResult};
use crate::interpolation::{
    validate_build_arguments, InterpolationPolynomialBuilder, WeightedOrder,
};

/// Interpolation by explicit Gaussian elimination.
///
/// Enumerates every monomial within the weighted-degree budget, sets up
/// one homogeneous equation per (point, r, s) Hasse constraint and hands
/// the system to [`gs_linalg::solve`]. The matrix has one column per
/// monomial, so this scales much worse than [`KotterBuilder`] and exists
/// to cross-check it on small instances.
///
/// [`KotterBuilder`]: crate::kotter::KotterBuilder
#[derive(Debug, Clone, Default)]
pub struct LinearSystemBuilder;

impl LinearSystemBuilder {
    pub fn new() -> Self {
        LinearSystemBuilder
    }
}

impl InterpolationPolynomialBuilder for LinearSystemBuilder {
    fn build(
        &self,
        order: WeightedOrder,
        max_weighted_degree: usize,
        points: &[(FieldElement, FieldElement)],
        multiplicity: usize,
    ) -> InterpolationResult<BivariatePolynomial> {
        let field = validate_build_arguments(points, multiplicity)?;
        let mut calc = CombinationsCalculator::new(&field);
        let monomials = order.monomials_within(max_weighted_degree);

        let mut rows = Vec::new();
        for (x, y) in points {
            let x0 = x.value();
            let y0 = y.value();
            for r in 0..multiplicity {
                for s in 0..multiplicity - r {
                    let mut row = Vec::with_capacity(monomials.len());
                    for &(i, j) in &monomials {
                        if i < r || j < s {
                            row.push(0);
                            continue;
                        }
                        let binomials = field.mul(calc.binomial(i, r), calc.binomial(j, s));
                        let powers =
                            field.mul(field.pow(x0, i - r), field.pow(y0, j - s));
                        row.push(field.mul(binomials, powers));
                    }
                    rows.push(row);
                }
            }
        }

        let rhs = vec![0; rows.len()];
        let matrix = FieldMatrix::new(&field, rows)?;
        let solution = match solve(&matrix, &rhs)? {
            SystemSolution::Empty => return Err(InterpolationError::NoTrivialPolynomial),
            SystemSolution::One(solution) | SystemSolution::Infinite(solution) => solution,
        };
        if solution.iter().all(|&coefficient| coefficient == 0) {
            return Err(InterpolationError::NoTrivialPolynomial);
        }

        Ok(BivariatePolynomial::new(
            &field,
            monomials.into_iter().zip(solution),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_galois::GaloisField;

    fn as_points(field: &GaloisField, pairs: &[(usize, usize)]) -> Vec<(FieldElement, FieldElement)> {
        pairs
            .iter()
            .map(|&(x, y)| (field.element(x).unwrap(), field.element(y).unwrap()))
            .collect()
    }

    #[test]
    fn test_constraints_vanish() {
        let field = GaloisField::cached(8).unwrap();
        let points = as_points(&field, &[(1, 0), (2, 2), (3, 3), (4, 3), (5, 2)]);
        let order = WeightedOrder::new(1, 2).unwrap();
        let multiplicity = 2;
        let q = LinearSystemBuilder::new()
            .build(order, 6, &points, multiplicity)
            .unwrap();
        assert!(!q.is_zero());

        let mut calc = CombinationsCalculator::new(&field);
        for (x, y) in &points {
            for r in 0..multiplicity {
                for s in 0..multiplicity - r {
                    assert_eq!(
                        q.hasse_derivative(r, s, x.value(), y.value(), &mut calc)
                            .unwrap(),
                        0
                    );
                }
            }
        }
    }

    #[test]
    fn test_interpolates_through_points() {
        let field = GaloisField::cached(7).unwrap();
        let points = as_points(&field, &[(1, 2), (2, 5), (3, 3)]);
        let order = WeightedOrder::new(1, 1).unwrap();
        let q = LinearSystemBuilder::new().build(order, 2, &points, 1).unwrap();
        for (x, y) in &points {
            assert_eq!(q.evaluate(x.value(), y.value()).unwrap(), 0);
        }
    }

    #[test]
    fn test_invalid_arguments() {
        let order = WeightedOrder::new(1, 1).unwrap();
        assert!(matches!(
            LinearSystemBuilder::new().build(order, 3, &[], 1),
            Err(InterpolationError::InvalidArguments { .. })
        ));
    }
}
