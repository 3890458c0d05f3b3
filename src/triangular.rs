//! Triangular system solvers
//!
//! Forward and backward substitution over dense triangular matrices. These
//! are the building blocks the LU path uses to turn factors into a solution,
//! and they are exposed directly for callers that already hold triangular
//! systems.
//!
//! Both routines assume every diagonal entry is nonzero. That holds for
//! factors produced by a successful [`lu_factorize`](crate::lu::lu_factorize)
//! call; it is NOT checked here. A zero or near-zero diagonal passed in
//! directly produces infinite or NaN entries that propagate to the result.

use crate::traits::RealScalar;
use ndarray::{Array1, Array2};

/// Solve `L * y = b` by forward substitution.
///
/// Only the lower triangle of `l` (diagonal included) is read; entries above
/// the diagonal are ignored.
///
/// # Panics
///
/// Panics if `l` is not square or `b`'s length does not match its dimension.
pub fn solve_lower<T: RealScalar>(l: &Array2<T>, b: &Array1<T>) -> Array1<T> {
    let n = l.nrows();
    assert_eq!(n, l.ncols(), "Triangular matrix must be square");
    assert_eq!(n, b.len(), "Vector length must match matrix dimension");

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut dot = T::zero();
        for k in 0..i {
            dot += l[[i, k]] * y[k];
        }
        y[i] = (b[i] - dot) / l[[i, i]];
    }
    y
}

/// Solve `U * x = y` by backward substitution.
///
/// Only the upper triangle of `u` (diagonal included) is read; entries below
/// the diagonal are ignored.
///
/// # Panics
///
/// Panics if `u` is not square or `y`'s length does not match its dimension.
pub fn solve_upper<T: RealScalar>(u: &Array2<T>, y: &Array1<T>) -> Array1<T> {
    let n = u.nrows();
    assert_eq!(n, u.ncols(), "Triangular matrix must be square");
    assert_eq!(n, y.len(), "Vector length must match matrix dimension");

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut dot = T::zero();
        for k in (i + 1)..n {
            dot += u[[i, k]] * x[k];
        }
        x[i] = (y[i] - dot) / u[[i, i]];
    }
    x
}
