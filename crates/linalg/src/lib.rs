// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Linear Algebra Library
//!
//! Linear systems over the Galois fields of [`gs_galois`], built for the
//! interpolation step of list decoding where systems are homogeneous,
//! frequently underdetermined, and a single nonzero representative of the
//! solution family is all that is needed.
//!
//! ## Features
//!
//! - [`FieldMatrix`]: dimension- and entry-validated matrices.
//! - [`solve`]: Gauss-Jordan elimination with deterministic pivoting,
//!   supporting non-square and singular systems.
//! - [`SystemSolution`]: no solution, a unique one, or an infinite family
//!   with a concrete nonzero representative (free variables fixed to 1).

pub mod errors;

mod matrix;
mod solver;

pub use errors::{LinalgError, LinalgResult};
pub use matrix::FieldMatrix;
pub use solver::{solve, SystemSolution};
