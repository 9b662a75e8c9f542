// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Process-wide memoization of constructed fields.
//!
//! Building a prime-power field costs O(order^2) table work, so long-lived
//! programs construct each field once and share the handle. The cache is
//! keyed by order and always uses the default irreducible polynomial;
//! fields built with an explicit polynomial are not cached.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::errors::FieldResult;
use crate::field::GaloisField;

static FIELD_CACHE: Lazy<Mutex<HashMap<usize, GaloisField>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl GaloisField {
    /// Returns the shared field of the given order, constructing and
    /// memoizing it on first use.
    ///
    /// # Errors
    ///
    /// Propagates the construction error of [`GaloisField::new`].
    pub fn cached(order: usize) -> FieldResult<GaloisField> {
        let mut cache = match FIELD_CACHE.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(field) = cache.get(&order) {
            return Ok(field.clone());
        }
        let field = GaloisField::new(order)?;
        cache.insert(order, field.clone());
        Ok(field)
    }
}
