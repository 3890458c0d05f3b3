//! Gaussian elimination with partial pivoting
//!
//! Row-reduces the augmented system `[A | b]` directly to a solution,
//! choosing the largest-magnitude pivot in each column. Unlike the
//! unpivoted LU path, this solver only fails for matrices that are truly
//! rank-deficient, not for matrices merely ordered unfavorably.

use crate::traits::RealScalar;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur during Gaussian elimination
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaussError {
    #[error("System is singular or inconsistent: no usable pivot in column {column}")]
    SingularOrInconsistent { column: usize },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Solve `A * x = b` by Gaussian elimination with partial pivoting.
///
/// The elimination runs on an internal augmented copy of the system; the
/// caller's matrix and vector are never modified.
///
/// Fails with [`GaussError::SingularOrInconsistent`] when the best
/// available pivot in some column is exactly zero, which means no row
/// reordering can make the system uniquely solvable.
pub fn gauss_solve<T: RealScalar>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, GaussError> {
    gauss_solve_with_tolerance(a, b, T::zero())
}

/// Gaussian elimination with a configurable singularity threshold.
///
/// A selected pivot whose absolute value is `<= tol` is treated as zero.
/// With `tol = 0` this is exactly the [`gauss_solve`] behavior.
pub fn gauss_solve_with_tolerance<T: RealScalar>(
    a: &Array2<T>,
    b: &Array1<T>,
    tol: T,
) -> Result<Array1<T>, GaussError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    // Augmented matrix [A | b], owned by this call
    let mut ab = Array2::zeros((n, n + 1));
    for i in 0..n {
        for j in 0..n {
            ab[[i, j]] = a[[i, j]];
        }
        ab[[i, n]] = b[i];
    }

    // Forward elimination
    for i in 0..n {
        // Largest |entry| in column i among rows i..n; the first maximum
        // wins ties, so the scan prefers the smaller row index.
        let mut max_row = i;
        let mut max_val = ab[[i, i]].abs();
        for k in (i + 1)..n {
            let val = ab[[k, i]].abs();
            if val > max_val {
                max_val = val;
                max_row = k;
            }
        }

        if max_row != i {
            log::trace!("column {}: swapping in pivot row {}", i, max_row);
            for j in 0..=n {
                let tmp = ab[[i, j]];
                ab[[i, j]] = ab[[max_row, j]];
                ab[[max_row, j]] = tmp;
            }
        }

        let pivot = ab[[i, i]];
        if pivot.abs() <= tol {
            log::debug!("column {}: no usable pivot, aborting", i);
            return Err(GaussError::SingularOrInconsistent { column: i });
        }

        for j in (i + 1)..n {
            let factor = ab[[j, i]] / pivot;
            for k in i..=n {
                let update = factor * ab[[i, k]];
                ab[[j, k]] -= update;
            }
        }
    }

    // Back substitution on the reduced augmented matrix
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut dot = T::zero();
        for k in (i + 1)..n {
            dot += ab[[i, k]] * x[k];
        }
        x[i] = (ab[[i, n]] - dot) / ab[[i, i]];
    }

    Ok(x)
}
