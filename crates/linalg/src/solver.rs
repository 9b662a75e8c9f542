// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Gauss-Jordan elimination for possibly singular systems.

use crate::errors::{LinalgError, LinalgResult};
use crate::matrix::FieldMatrix;

/// Outcome of solving `A x = b` over a Galois field.
///
/// The `Infinite` variant carries one representative of the solution
/// family: every variable without a pivot is fixed to 1 and the pivot
/// variables are solved from there. Fixing free variables to 1 instead of
/// 0 means a homogeneous system with a nontrivial kernel yields a nonzero
/// representative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemSolution {
    /// The system is inconsistent.
    Empty,
    /// Exactly one solution.
    One(Vec<usize>),
    /// Infinitely many solutions; one representative is carried.
    Infinite(Vec<usize>),
}

impl SystemSolution {
    /// The carried solution vector, if the system was consistent.
    pub fn solution(&self) -> Option<&[usize]> {
        match self {
            SystemSolution::Empty => None,
            SystemSolution::One(solution) | SystemSolution::Infinite(solution) => Some(solution),
        }
    }
}

/// Solves `A x = b` by Gauss-Jordan elimination with partial pivoting.
///
/// The pivot for each column is the largest representation value among the
/// rows not yet consumed. Any nonzero entry is an equally valid pivot in a
/// finite field, so the choice is a deterministic tie-break rather than a
/// numerical stability measure. Non-square and singular systems are supported; a
/// final check substitutes the candidate back into the original system and
/// reports [`SystemSolution::Empty`] when it fails.
///
/// # Errors
///
/// Returns `DimensionMismatch` when `b` does not match the row count, and
/// `FieldError::NotFieldElement` (wrapped) if any entry of `b` is outside
/// the field.
pub fn solve(a: &FieldMatrix, b: &[usize]) -> LinalgResult<SystemSolution> {
    let field = a.field().clone();
    let rows = a.rows();
    let cols = a.cols();
    if b.len() != rows {
        return Err(LinalgError::dimension_mismatch(format!(
            "right-hand side has {} entries, expected {rows}",
            b.len()
        )));
    }
    for &value in b {
        field.ensure_element(value)?;
    }

    let mut work: Vec<Vec<usize>> = a.data().to_vec();
    let mut rhs: Vec<usize> = b.to_vec();
    let mut where_row: Vec<Option<usize>> = vec![None; cols];

    let mut pivot_row = 0;
    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }

        let mut selected = pivot_row;
        for row in pivot_row..rows {
            if work[row][col] > work[selected][col] {
                selected = row;
            }
        }
        if work[selected][col] == 0 {
            continue;
        }
        work.swap(pivot_row, selected);
        rhs.swap(pivot_row, selected);
        where_row[col] = Some(pivot_row);

        // Scale the pivot row so the pivot entry becomes 1.
        let inverse = field.inverse(work[pivot_row][col])?;
        for c in col..cols {
            work[pivot_row][c] = field.mul(work[pivot_row][c], inverse);
        }
        rhs[pivot_row] = field.mul(rhs[pivot_row], inverse);

        // Eliminate the column from every other row, above and below.
        for row in 0..rows {
            if row == pivot_row || work[row][col] == 0 {
                continue;
            }
            let factor = work[row][col];
            for c in col..cols {
                let delta = field.mul(factor, work[pivot_row][c]);
                work[row][c] = field.sub(work[row][c], delta);
            }
            rhs[row] = field.sub(rhs[row], field.mul(factor, rhs[pivot_row]));
        }

        pivot_row += 1;
    }

    // Free variables are fixed to 1; pivot variables are then determined,
    // since after the Jordan sweep a pivot row carries its pivot column
    // and free columns only.
    let mut solution = vec![0usize; cols];
    for col in 0..cols {
        if where_row[col].is_none() {
            solution[col] = 1;
        }
    }
    for col in 0..cols {
        if let Some(row) = where_row[col] {
            let mut value = rhs[row];
            for c in 0..cols {
                if c != col && work[row][c] != 0 {
                    value = field.sub(value, field.mul(work[row][c], solution[c]));
                }
            }
            solution[col] = value;
        }
    }

    // Substituting back into the original system catches inconsistency.
    let product = a.mul_vector(&solution)?;
    if product != b {
        return Ok(SystemSolution::Empty);
    }

    if where_row.iter().any(|pivot| pivot.is_none()) {
        Ok(SystemSolution::Infinite(solution))
    } else {
        Ok(SystemSolution::One(solution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_galois::GaloisField;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn gf7() -> GaloisField {
        GaloisField::cached(7).unwrap()
    }

    #[test]
    fn test_unique_solution() {
        let field = gf7();
        // 2x + y = 5, x + 3y = 5 has the single solution (2, 1) over GF(7).
        let a = FieldMatrix::new(&field, vec![vec![2, 1], vec![1, 3]]).unwrap();
        let result = solve(&a, &[5, 5]).unwrap();
        assert_eq!(result, SystemSolution::One(vec![2, 1]));
    }

    #[test]
    fn test_infinite_solutions_fix_free_variables_to_one() {
        let field = gf7();
        let a = FieldMatrix::new(&field, vec![vec![1, 2], vec![2, 4]]).unwrap();
        let result = solve(&a, &[3, 6]).unwrap();
        match result {
            SystemSolution::Infinite(solution) => {
                assert_eq!(solution, vec![1, 1]);
                assert_eq!(a.mul_vector(&solution).unwrap(), vec![3, 6]);
            }
            other => panic!("expected an infinite family, got {other:?}"),
        }
    }

    #[test]
    fn test_inconsistent_system() {
        let field = gf7();
        let a = FieldMatrix::new(&field, vec![vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(solve(&a, &[1, 2]).unwrap(), SystemSolution::Empty);
    }

    #[test]
    fn test_homogeneous_with_kernel_returns_nonzero_representative() {
        let field = gf7();
        let a = FieldMatrix::new(&field, vec![vec![1, 1]]).unwrap();
        match solve(&a, &[0]).unwrap() {
            SystemSolution::Infinite(solution) => {
                assert!(solution.iter().any(|&v| v != 0));
                assert_eq!(a.mul_vector(&solution).unwrap(), vec![0]);
            }
            other => panic!("expected an infinite family, got {other:?}"),
        }
    }

    #[test]
    fn test_overdetermined_consistent_system() {
        let field = gf7();
        let a =
            FieldMatrix::new(&field, vec![vec![1, 0], vec![0, 1], vec![1, 1]]).unwrap();
        let result = solve(&a, &[3, 4, 0]).unwrap();
        assert_eq!(result, SystemSolution::One(vec![3, 4]));
    }

    #[test]
    fn test_rhs_length_validated() {
        let field = gf7();
        let a = FieldMatrix::new(&field, vec![vec![1, 2]]).unwrap();
        assert!(matches!(
            solve(&a, &[1, 2]),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_randomized_consistent_systems_are_solved() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for order in [5, 7, 8, 9] {
            let field = GaloisField::cached(order).unwrap();
            for _ in 0..25 {
                let rows = rng.gen_range(1..6);
                let cols = rng.gen_range(1..6);
                let data: Vec<Vec<usize>> = (0..rows)
                    .map(|_| (0..cols).map(|_| rng.gen_range(0..order)).collect())
                    .collect();
                let a = FieldMatrix::new(&field, data).unwrap();
                let x: Vec<usize> = (0..cols).map(|_| rng.gen_range(0..order)).collect();
                let b = a.mul_vector(&x).unwrap();

                // Built from a known solution, so the system is consistent
                // and the returned candidate must satisfy it exactly.
                match solve(&a, &b).unwrap() {
                    SystemSolution::Empty => panic!("consistent system reported empty"),
                    SystemSolution::One(solution) | SystemSolution::Infinite(solution) => {
                        assert_eq!(a.mul_vector(&solution).unwrap(), b);
                    }
                }
            }
        }
    }
}
