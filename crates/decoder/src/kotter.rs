// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Kötter's incremental interpolation algorithm.

use gs_galois::FieldElement;
use gs_poly::{BivariatePolynomial, CombinationsCalculator};
use tracing::debug;

use crate::errors::{InterpolationError, InterpolationResult};
use crate::interpolation::{
    validate_build_arguments, InterpolationPolynomialBuilder, WeightedOrder,
};

/// Interpolation by Kötter's algorithm, the production path.
///
/// One candidate polynomial is kept per possible lead y-degree and the
/// Hasse-derivative constraints are folded in one at a time. Each
/// constraint costs one elimination sweep over the candidates, so the
/// whole build runs in polynomial time, unlike solving the constraint
/// system wholesale.
#[derive(Debug, Clone, Default)]
pub struct KotterBuilder;

impl KotterBuilder {
    pub fn new() -> Self {
        KotterBuilder
    }
}

struct Candidate {
    polynomial: BivariatePolynomial,
    /// Lead monomial under the weighted order. Its y-degree never changes:
    /// elimination subtracts a candidate with a strictly smaller lead, and
    /// the pivot update only raises the x-degree.
    lead: (usize, usize),
}

impl InterpolationPolynomialBuilder for KotterBuilder {
    fn build(
        &self,
        order: WeightedOrder,
        max_weighted_degree: usize,
        points: &[(FieldElement, FieldElement)],
        multiplicity: usize,
    ) -> InterpolationResult<BivariatePolynomial> {
        let field = validate_build_arguments(points, multiplicity)?;
        let mut calc = CombinationsCalculator::new(&field);

        let max_y = max_weighted_degree / order.y_weight();
        let mut candidates = Vec::with_capacity(max_y + 1);
        for y_degree in 0..=max_y {
            candidates.push(Candidate {
                polynomial: BivariatePolynomial::monomial(&field, 1, 0, y_degree)?,
                lead: (0, y_degree),
            });
        }

        for (x, y) in points {
            let x0 = x.value();
            let y0 = y.value();
            for r in 0..multiplicity {
                for s in 0..multiplicity - r {
                    candidates.retain(|candidate| {
                        order.weighted_degree(candidate.lead.0, candidate.lead.1)
                            <= max_weighted_degree
                    });
                    if candidates.is_empty() {
                        return Err(InterpolationError::NoTrivialPolynomial);
                    }

                    let mut derivatives = Vec::with_capacity(candidates.len());
                    for candidate in &candidates {
                        derivatives
                            .push(candidate.polynomial.hasse_derivative(r, s, x0, y0, &mut calc)?);
                    }

                    let pivot = (0..candidates.len())
                        .filter(|&i| derivatives[i] != 0)
                        .min_by(|&a, &b| order.compare(candidates[a].lead, candidates[b].lead));
                    let Some(pivot) = pivot else {
                        // Constraint already satisfied by every candidate.
                        continue;
                    };
                    let pivot_derivative = derivatives[pivot];
                    let pivot_polynomial = candidates[pivot].polynomial.clone();

                    for (i, candidate) in candidates.iter_mut().enumerate() {
                        if i == pivot || derivatives[i] == 0 {
                            continue;
                        }
                        let scale = field.div(derivatives[i], pivot_derivative)?;
                        let correction = pivot_polynomial.mul_scalar(scale)?;
                        candidate.polynomial = candidate.polynomial.sub(&correction)?;
                    }

                    let shift = BivariatePolynomial::new(
                        &field,
                        [((1, 0), 1), ((0, 0), field.negate(x0))],
                    )?;
                    candidates[pivot].polynomial = candidates[pivot].polynomial.mul(&shift)?;
                    candidates[pivot].lead.0 += 1;
                }
            }
        }

        candidates.retain(|candidate| {
            order.weighted_degree(candidate.lead.0, candidate.lead.1) <= max_weighted_degree
        });
        let winner = candidates
            .into_iter()
            .min_by(|a, b| order.compare(a.lead, b.lead))
            .ok_or(InterpolationError::NoTrivialPolynomial)?;
        debug!(
            "interpolated {} points at multiplicity {} with lead monomial x^{} y^{}",
            points.len(),
            multiplicity,
            winner.lead.0,
            winner.lead.1
        );
        Ok(winner.polynomial)
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

    fn assert_vanishes(
        q: &BivariatePolynomial,
        points: &[(FieldElement, FieldElement)],
        multiplicity: usize,
    ) {
        let mut calc = CombinationsCalculator::new(q.field());
        for (x, y) in points {
            for r in 0..multiplicity {
                for s in 0..multiplicity - r {
                    assert_eq!(
                        q.hasse_derivative(r, s, x.value(), y.value(), &mut calc)
                            .unwrap(),
                        0,
                        "({r}, {s}) derivative does not vanish at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_point_single_constraint() {
        let field = GaloisField::cached(7).unwrap();
        let points = as_points(&field, &[(2, 3)]);
        let order = WeightedOrder::new(1, 1).unwrap();
        let q = KotterBuilder::new().build(order, 1, &points, 1).unwrap();
        // The minimal-lead survivor is y - 3 = y + 4.
        let expected =
            BivariatePolynomial::new(&field, [((0, 1), 1), ((0, 0), 4)]).unwrap();
        assert_eq!(q, expected);
        assert_eq!(q.evaluate(2, 3).unwrap(), 0);
    }

    #[test]
    fn test_vanishing_with_multiplicity() {
        let field = GaloisField::cached(8).unwrap();
        // Evaluations of 1 + 2x + 3x^2 at x = 1..7.
        let points = as_points(
            &field,
            &[(1, 0), (2, 2), (3, 3), (4, 3), (5, 2), (6, 0), (7, 1)],
        );
        let order = WeightedOrder::new(1, 2).unwrap();
        let multiplicity = 2;
        let q = KotterBuilder::new()
            .build(order, 7, &points, multiplicity)
            .unwrap();
        assert!(!q.is_zero());
        for ((i, j), _) in q.monomials() {
            assert!(order.weighted_degree(i, j) <= 7);
        }
        assert_vanishes(&q, &points, multiplicity);
    }

    #[test]
    fn test_budget_too_small() {
        let field = GaloisField::cached(7).unwrap();
        let points = as_points(&field, &[(1, 1), (2, 2)]);
        let order = WeightedOrder::new(1, 1).unwrap();
        let result = KotterBuilder::new().build(order, 0, &points, 2);
        assert!(matches!(
            result,
            Err(InterpolationError::NoTrivialPolynomial)
        ));
    }

    #[test]
    fn test_invalid_arguments() {
        let field = GaloisField::cached(7).unwrap();
        let order = WeightedOrder::new(1, 1).unwrap();
        let builder = KotterBuilder::new();
        assert!(matches!(
            builder.build(order, 3, &[], 1),
            Err(InterpolationError::InvalidArguments { .. })
        ));
        let points = as_points(&field, &[(1, 1)]);
        assert!(matches!(
            builder.build(order, 3, &points, 0),
            Err(InterpolationError::InvalidArguments { .. })
        ));
    }
}
