// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Univariate and bivariate polynomial arithmetic over the Galois fields
//! of [`gs_galois`], the algebra layer under Reed-Solomon list decoding.
//!
//! ## Features
//!
//! - [`Polynomial`]: dense univariate polynomials with Euclidean division,
//!   Horner evaluation, shifting and (extended) gcd.
//! - [`BivariatePolynomial`]: sparse two-variable polynomials with partial
//!   evaluation, substitution and Hasse-derivative evaluation.
//! - [`CombinationsCalculator`]: memoized binomial coefficients reduced
//!   into the field, the arithmetic behind Hasse derivatives.
//! - Serialization: optional serde support for both polynomial types.
//!
//! ## Mathematical Background
//!
//! Over a field of characteristic p the ordinary formal derivative loses
//! information (d/dx of x^p is 0), so multiplicity-aware algorithms use
//! Hasse derivatives instead: the (r, s) Hasse derivative of x^i y^j is
//! C(i, r) C(j, s) x^(i-r) y^(j-s), with the binomial coefficients reduced
//! into the field. This crate keeps every intermediate value inside the
//! field so no big-integer arithmetic is ever needed.

pub mod errors;

mod bivariate;
mod combinations;
mod univariate;

pub use bivariate::BivariatePolynomial;
pub use combinations::CombinationsCalculator;
pub use errors::{PolynomialError, PolynomialResult};
pub use univariate::Polynomial;
