// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Binomial coefficients reduced into a Galois field.

use std::collections::HashMap;

use gs_galois::GaloisField;

/// Memoized binomial coefficients taken in a [`GaloisField`].
///
/// `binomial(n, k)` is C(n, k) mod the field characteristic, mapped into
/// the field (the value always lands in the prime subfield). Computed by
/// Pascal's-triangle recursion with field addition, so no intermediate
/// value ever leaves the field; the memo makes repeated Hasse-derivative
/// evaluations cheap.
#[derive(Clone, Debug)]
pub struct CombinationsCalculator {
    field: GaloisField,
    cache: HashMap<(usize, usize), usize>,
}

impl CombinationsCalculator {
    pub fn new(field: &GaloisField) -> Self {
        CombinationsCalculator {
            field: field.clone(),
            cache: HashMap::new(),
        }
    }

    /// The field the coefficients are reduced into.
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// C(n, k) in the field; 0 when `k > n`.
    pub fn binomial(&mut self, n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        if k == 0 || k == n {
            return 1;
        }
        if let Some(&value) = self.cache.get(&(n, k)) {
            return value;
        }
        let left = self.binomial(n - 1, k - 1);
        let right = self.binomial(n - 1, k);
        let value = self.field.add(left, right);
        self.cache.insert((n, k), value);
        value
    }
}
