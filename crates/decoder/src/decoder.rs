// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The Guruswami-Sudan list decoder.

use gs_galois::FieldElement;
use gs_poly::Polynomial;
use tracing::{debug, info};

use crate::errors::{DecodingError, DecodingResult};
use crate::factorization::RothRuckensteinFactorizer;
use crate::interpolation::{InterpolationPolynomialBuilder, WeightedOrder};
use crate::kotter::KotterBuilder;

/// List decoder for Reed-Solomon codes beyond half the minimum distance.
///
/// A length-n, dimension-k code word is the evaluation of a message
/// polynomial of degree below k at n distinct points. Given received
/// points and a required agreement t with t^2 > n(k - 1), `decode`
/// returns every message polynomial matching the received word in at
/// least t positions. The result is a list because beyond the
/// unique-decoding radius several code words can be that close.
///
/// The builder is a type parameter so the interpolation strategy can be
/// swapped; [`KotterBuilder`] is the default.
#[derive(Debug, Clone)]
pub struct GsDecoder<B: InterpolationPolynomialBuilder = KotterBuilder> {
    builder: B,
    factorizer: RothRuckensteinFactorizer,
}

impl GsDecoder<KotterBuilder> {
    pub fn new() -> Self {
        Self::with_builder(KotterBuilder::new())
    }
}

impl Default for GsDecoder<KotterBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: InterpolationPolynomialBuilder> GsDecoder<B> {
    pub fn with_builder(builder: B) -> Self {
        GsDecoder {
            builder,
            factorizer: RothRuckensteinFactorizer::new(),
        }
    }

    /// Decodes `points` as a received word of the (n, k) code, returning
    /// every message polynomial that agrees with it in at least
    /// `min_correct` positions.
    ///
    /// An empty list is a valid outcome: it means no code word lies within
    /// the requested agreement of the received word.
    ///
    /// # Errors
    ///
    /// Returns `ParametersTooWeak` when `points` does not have length `n`,
    /// when n/k/t fall outside 2 <= k <= n and 1 <= t <= n, or when the
    /// working condition t^2 > n(k - 1) fails; all checks run before any
    /// computation. Interpolation and factorization failures are wrapped
    /// and propagated.
    pub fn decode(
        &self,
        n: usize,
        k: usize,
        points: &[(FieldElement, FieldElement)],
        min_correct: usize,
    ) -> DecodingResult<Vec<Polynomial>> {
        if points.len() != n {
            return Err(DecodingError::parameters_too_weak(format!(
                "received {} points for code length {n}",
                points.len()
            )));
        }
        if k < 2 || k > n {
            return Err(DecodingError::parameters_too_weak(format!(
                "dimension must satisfy 2 <= k <= n (k = {k}, n = {n})"
            )));
        }
        if min_correct < 1 || min_correct > n {
            return Err(DecodingError::parameters_too_weak(format!(
                "agreement must satisfy 1 <= t <= n (t = {min_correct}, n = {n})"
            )));
        }
        if min_correct * min_correct <= n * (k - 1) {
            return Err(DecodingError::parameters_too_weak(format!(
                "t^2 must exceed n(k - 1) (t = {min_correct}, n = {n}, k = {k})"
            )));
        }

        let order = WeightedOrder::new(1, k - 1)?;
        let multiplicity = smallest_multiplicity(n, min_correct, &order);
        let max_weighted_degree = multiplicity * min_correct - 1;
        debug!(
            "decoding (n, k, t) = ({}, {}, {}) with multiplicity {} and weighted-degree budget {}",
            n, k, min_correct, multiplicity, max_weighted_degree
        );

        let q = self
            .builder
            .build(order, max_weighted_degree, points, multiplicity)?;
        let candidates = self.factorizer.factorize(&q, k - 1)?;
        debug!(
            "factorization produced {} candidate(s) before the agreement filter",
            candidates.len()
        );

        let mut decoded = Vec::new();
        for candidate in candidates {
            let mut agreement = 0;
            for (x, y) in points {
                if candidate.evaluate(x.value())? == y.value() {
                    agreement += 1;
                }
            }
            if agreement >= min_correct {
                decoded.push(candidate);
            }
        }
        info!(
            "decoded {} message polynomial(s) from {} received symbols",
            decoded.len(),
            n
        );
        Ok(decoded)
    }
}

/// The smallest multiplicity for which the number of monomials within the
/// weighted-degree budget m*t - 1 exceeds the n*m*(m+1)/2 interpolation
/// constraints, so a nonzero Q is guaranteed to exist. Terminates because
/// the caller has checked t^2 > n(k - 1).
fn smallest_multiplicity(n: usize, min_correct: usize, order: &WeightedOrder) -> usize {
    let mut multiplicity = 1;
    loop {
        let budget = multiplicity * min_correct - 1;
        let unknowns = order.monomial_count_within(budget);
        let constraints = n * multiplicity * (multiplicity + 1) / 2;
        if unknowns > constraints {
            return multiplicity;
        }
        multiplicity += 1;
    }
}
