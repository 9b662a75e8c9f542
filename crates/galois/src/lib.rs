// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Galois Field Library
//!
//! Finite fields of prime and prime-power order with table-backed
//! arithmetic, built for coding-theory workloads where the same small field
//! is hammered by millions of operations.
//!
//! ## Features
//!
//! - Prime fields GF(p) with direct residue arithmetic.
//! - Prime-power fields GF(p^e) defined by an irreducible polynomial, with
//!   precomputed addition, subtraction, discrete-log and antilog tables.
//! - Built-in irreducible polynomials for the common orders, plus explicit
//!   polynomial construction and a process-wide field cache.
//! - Validated [`FieldElement`] values that carry their owning field.
//! - Serialization: optional serde support; a field serializes as its
//!   order and defining polynomial and rebuilds its tables on load.
//!
//! ## Mathematical Background
//!
//! Elements of GF(p^e) are polynomials over GF(p) modulo an irreducible
//! polynomial of degree e; each element is identified with the integer
//! whose base-p digits are its coefficients. The multiplicative group is
//! cyclic of order p^e - 1, so once a generator is found by probing,
//! multiplication and division reduce to adding and subtracting discrete
//! logarithms.

pub mod errors;

mod cache;
mod element;
mod field;

pub use element::FieldElement;
pub use errors::{FieldError, FieldResult};
pub use field::GaloisField;
