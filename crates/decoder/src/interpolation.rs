// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Weighted monomial orders and the interpolation builder seam.

use std::cmp::Ordering;

use gs_galois::{FieldElement, FieldError, GaloisField};
use gs_poly::BivariatePolynomial;

use crate::errors::{InterpolationError, InterpolationResult};

/// The weighted monomial order steering Guruswami-Sudan interpolation.
///
/// A monomial x^i y^j has weighted degree `i * x_weight + j * y_weight`;
/// comparisons break ties by the plain x-degree, which makes the order
/// total on monomials. List decoding uses the weights (1, k - 1) so that
/// the weighted degree of Q(x, f(x)) bounds its plain degree for any
/// message polynomial f of degree below k.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedOrder {
    x_weight: usize,
    y_weight: usize,
}

impl WeightedOrder {
    /// Creates an order from two positive weights.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` when either weight is zero.
    pub fn new(x_weight: usize, y_weight: usize) -> InterpolationResult<Self> {
        if x_weight == 0 || y_weight == 0 {
            return Err(InterpolationError::invalid_arguments(
                "monomial weights must be positive",
            ));
        }
        Ok(WeightedOrder { x_weight, y_weight })
    }

    pub fn x_weight(&self) -> usize {
        self.x_weight
    }

    pub fn y_weight(&self) -> usize {
        self.y_weight
    }

    /// Weighted degree of the monomial x^x_degree y^y_degree.
    pub fn weighted_degree(&self, x_degree: usize, y_degree: usize) -> usize {
        x_degree * self.x_weight + y_degree * self.y_weight
    }

    /// Compares two monomials: weighted degree first, ties by x-degree.
    pub fn compare(&self, left: (usize, usize), right: (usize, usize)) -> Ordering {
        self.weighted_degree(left.0, left.1)
            .cmp(&self.weighted_degree(right.0, right.1))
            .then(left.0.cmp(&right.0))
    }

    /// All monomials with weighted degree at most `bound`, ascending under
    /// the order.
    pub fn monomials_within(&self, bound: usize) -> Vec<(usize, usize)> {
        let mut monomials = Vec::new();
        for y_degree in 0..=(bound / self.y_weight) {
            let remaining = bound - y_degree * self.y_weight;
            for x_degree in 0..=(remaining / self.x_weight) {
                monomials.push((x_degree, y_degree));
            }
        }
        monomials.sort_by(|&left, &right| self.compare(left, right));
        monomials
    }

    /// How many monomials have weighted degree at most `bound`.
    pub fn monomial_count_within(&self, bound: usize) -> usize {
        (0..=(bound / self.y_weight))
            .map(|y_degree| (bound - y_degree * self.y_weight) / self.x_weight + 1)
            .sum()
    }
}

/// Strategy seam for producing the interpolation polynomial Q.
///
/// An implementation must return a nonzero polynomial whose (r, s) Hasse
/// derivatives vanish at every input point for all r + s < `multiplicity`,
/// with every monomial staying within `max_weighted_degree` under `order`.
pub trait InterpolationPolynomialBuilder {
    fn build(
        &self,
        order: WeightedOrder,
        max_weighted_degree: usize,
        points: &[(FieldElement, FieldElement)],
        multiplicity: usize,
    ) -> InterpolationResult<BivariatePolynomial>;
}

/// Checks the shared builder preconditions and returns the common field.
pub(crate) fn validate_build_arguments(
    points: &[(FieldElement, FieldElement)],
    multiplicity: usize,
) -> InterpolationResult<GaloisField> {
    if multiplicity == 0 {
        return Err(InterpolationError::invalid_arguments(
            "multiplicity must be at least 1",
        ));
    }
    let first = points.first().ok_or_else(|| {
        InterpolationError::invalid_arguments("at least one interpolation point is required")
    })?;
    let field = first.0.field().clone();
    for (x, y) in points {
        if *x.field() != field {
            return Err(FieldError::mismatch(&field, x.field()).into());
        }
        if *y.field() != field {
            return Err(FieldError::mismatch(&field, y.field()).into());
        }
    }
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weights_rejected() {
        assert!(matches!(
            WeightedOrder::new(0, 1),
            Err(InterpolationError::InvalidArguments { .. })
        ));
        assert!(matches!(
            WeightedOrder::new(1, 0),
            Err(InterpolationError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_weighted_degree() {
        let order = WeightedOrder::new(1, 2).unwrap();
        assert_eq!(order.weighted_degree(0, 0), 0);
        assert_eq!(order.weighted_degree(3, 0), 3);
        assert_eq!(order.weighted_degree(1, 2), 5);
    }

    #[test]
    fn test_compare_breaks_ties_by_x_degree() {
        let order = WeightedOrder::new(1, 2).unwrap();
        // x^2 and y have the same weighted degree; y is smaller.
        assert_eq!(order.compare((0, 1), (2, 0)), Ordering::Less);
        assert_eq!(order.compare((2, 0), (0, 1)), Ordering::Greater);
        assert_eq!(order.compare((1, 1), (1, 1)), Ordering::Equal);
    }

    #[test]
    fn test_monomial_enumeration() {
        let order = WeightedOrder::new(1, 2).unwrap();
        let monomials = order.monomials_within(3);
        assert_eq!(
            monomials,
            vec![(0, 0), (1, 0), (0, 1), (2, 0), (1, 1), (3, 0)]
        );
        assert_eq!(order.monomial_count_within(3), monomials.len());
        assert_eq!(order.monomial_count_within(0), 1);
    }

    #[test]
    fn test_validation() {
        let field = gs_galois::GaloisField::cached(7).unwrap();
        let points = vec![(field.element(1).unwrap(), field.element(2).unwrap())];
        assert!(validate_build_arguments(&points, 1).is_ok());
        assert!(matches!(
            validate_build_arguments(&points, 0),
            Err(InterpolationError::InvalidArguments { .. })
        ));
        assert!(matches!(
            validate_build_arguments(&[], 1),
            Err(InterpolationError::InvalidArguments { .. })
        ));

        let other = gs_galois::GaloisField::cached(8).unwrap();
        let mixed = vec![(field.element(1).unwrap(), other.element(2).unwrap())];
        assert!(matches!(
            validate_build_arguments(&mixed, 1),
            Err(InterpolationError::Field(FieldError::FieldMismatch { .. }))
        ));
    }
}
