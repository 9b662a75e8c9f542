// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Roth-Ruckenstein factorization of interpolation polynomials.

use std::collections::HashSet;

use gs_galois::GaloisField;
use gs_poly::{BivariatePolynomial, Polynomial, PolynomialResult};

/// Finds the y-roots of a bivariate polynomial by depth-first search.
///
/// A univariate f is a y-root of Q when Q(x, f(x)) is identically zero;
/// these are exactly the message candidates of Guruswami-Sudan decoding.
/// The search fixes one coefficient of f per level: each root r of
/// Q(0, y) is a possible constant term, and the substitution
/// y -> r + x*y followed by stripping common x-powers turns the
/// remaining coefficients into the same problem one level down.
#[derive(Debug, Clone, Default)]
pub struct RothRuckensteinFactorizer;

impl RothRuckensteinFactorizer {
    pub fn new() -> Self {
        RothRuckensteinFactorizer
    }

    /// All univariate polynomials f with degree at most `max_factor_degree`
    /// and Q(x, f(x)) identically zero, deduplicated and sorted by their
    /// coefficient representations. The zero input yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates field and polynomial arithmetic failures; none occur for
    /// inputs produced by the interpolation builders.
    pub fn factorize(
        &self,
        q: &BivariatePolynomial,
        max_factor_degree: usize,
    ) -> PolynomialResult<Vec<Polynomial>> {
        if q.is_zero() {
            return Ok(Vec::new());
        }
        let field = q.field().clone();
        let stripped = q.divide_by_max_possible_x_degree();
        let mut found = HashSet::new();
        let mut coefficients = Vec::new();
        self.search(
            &stripped,
            &field,
            max_factor_degree,
            &mut coefficients,
            &mut found,
        )?;
        let mut factors: Vec<Polynomial> = found.into_iter().collect();
        factors.sort_by(|a, b| a.coefficients().cmp(b.coefficients()));
        Ok(factors)
    }

    fn search(
        &self,
        q: &BivariatePolynomial,
        field: &GaloisField,
        max_factor_degree: usize,
        coefficients: &mut Vec<usize>,
        found: &mut HashSet<Polynomial>,
    ) -> PolynomialResult<()> {
        // When y divides Q the coefficients fixed so far already form a
        // y-root.
        if q.evaluate_y(0)?.is_zero() {
            found.insert(Polynomial::new(field, coefficients.clone())?);
        }
        if coefficients.len() > max_factor_degree {
            return Ok(());
        }

        // Q is x-stripped, so Q(0, y) is a nonzero polynomial and the
        // root scan below is over a genuine equation.
        let at_zero = q.evaluate_x(0)?;
        for root in 0..field.order() {
            if at_zero.evaluate(root)? != 0 {
                continue;
            }
            let x_sub = BivariatePolynomial::monomial(field, 1, 1, 0)?;
            let y_sub = BivariatePolynomial::new(field, [((0, 0), root), ((1, 1), 1)])?;
            let next = q
                .substitute(&x_sub, &y_sub)?
                .divide_by_max_possible_x_degree();
            coefficients.push(root);
            self.search(&next, field, max_factor_degree, coefficients, found)?;
            coefficients.pop();
        }
        Ok(())
    }
}
