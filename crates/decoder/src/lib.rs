// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # List Decoding Library
//!
//! Guruswami-Sudan list decoding of Reed-Solomon codes over the small
//! Galois fields of [`gs_galois`]. Where classical decoders give up at
//! half the minimum distance, list decoding returns every code word
//! within a larger radius, as long as the agreement t satisfies
//! t^2 > n(k - 1).
//!
//! ## Features
//!
//! - [`GsDecoder`]: the decode pipeline, from parameter validation and
//!   multiplicity selection through interpolation, factorization and
//!   agreement filtering.
//! - [`KotterBuilder`]: incremental interpolation, the production path.
//! - [`LinearSystemBuilder`]: interpolation by explicit Gaussian
//!   elimination, for cross-checking on small instances.
//! - [`RothRuckensteinFactorizer`]: extraction of the y-roots of the
//!   interpolation polynomial.
//! - [`encoding`]: evaluation encoding and noisy-word construction for
//!   tests and experiments.
//!
//! ## Mathematical Background
//!
//! The decoder interpolates a nonzero bivariate polynomial Q that
//! vanishes with multiplicity m at every received point, keeping its
//! (1, k - 1)-weighted degree under m*t. For any message polynomial f
//! agreeing with the received word in at least t positions, Q(x, f(x))
//! then has more roots (counted with multiplicity) than its degree, so it
//! is identically zero and f appears among the y-roots of Q. Factoring Q
//! and filtering by actual agreement yields the decoded list.

pub mod encoding;
pub mod errors;

mod decoder;
mod factorization;
mod interpolation;
mod kotter;
mod linear_system_builder;

pub use decoder::GsDecoder;
pub use errors::{DecodingError, DecodingResult, InterpolationError, InterpolationResult};
pub use factorization::RothRuckensteinFactorizer;
pub use interpolation::{InterpolationPolynomialBuilder, WeightedOrder};
pub use kotter::KotterBuilder;
pub use linear_system_builder::LinearSystemBuilder;
