//! Unpivoted LU decomposition
//!
//! Doolittle factorization of a square matrix into a unit lower-triangular
//! factor L and an upper-triangular factor U, without row interchange.
//!
//! Because there is no pivoting, a matrix that develops a zero pivot during
//! elimination is reported as singular even when it is nonsingular overall
//! (e.g. `[[0, 1], [1, 0]]`). That behavior is intentional; use
//! [`gauss_solve`](crate::gauss::gauss_solve) for such systems.

use crate::traits::RealScalar;
use crate::triangular::{solve_lower, solve_upper};
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur during LU factorization and solving
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LuError {
    #[error("Matrix is singular: zero pivot at elimination step {step}")]
    SingularMatrix { step: usize },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// LU factorization result
///
/// Holds the two triangular factors separately. On success `l * u`
/// reproduces the factorized matrix up to floating-point rounding.
#[derive(Debug, Clone)]
pub struct LuFactors<T: RealScalar> {
    /// Unit lower-triangular factor; the diagonal is exactly one
    pub l: Array2<T>,
    /// Upper-triangular factor; the diagonal holds the pivots
    pub u: Array2<T>,
}

impl<T: RealScalar> LuFactors<T> {
    /// Matrix dimension
    pub fn n(&self) -> usize {
        self.u.nrows()
    }

    /// Solve `A * x = b` using the precomputed factors (`L y = b`, `U x = y`).
    ///
    /// The factors are not consumed, so one factorization can serve any
    /// number of right-hand sides.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, LuError> {
        let n = self.n();
        if b.len() != n {
            return Err(LuError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }

        let y = solve_lower(&self.l, b);
        Ok(solve_upper(&self.u, &y))
    }

    /// Determinant of the factorized matrix.
    ///
    /// With no row interchange the determinant is simply the product of the
    /// pivots on U's diagonal.
    pub fn det(&self) -> T {
        let mut det = T::one();
        for i in 0..self.n() {
            det *= self.u[[i, i]];
        }
        det
    }
}

/// Compute the unpivoted LU factorization of a square matrix.
///
/// L starts as the identity and U as a copy of `a`; each elimination step
/// stores the row multiplier in L and subtracts the scaled pivot row from U.
/// The caller's matrix is never modified.
///
/// Fails with [`LuError::SingularMatrix`] as soon as a pivot is exactly
/// zero; no partial factorization is returned.
pub fn lu_factorize<T: RealScalar>(a: &Array2<T>) -> Result<LuFactors<T>, LuError> {
    lu_factorize_with_tolerance(a, T::zero())
}

/// Unpivoted LU factorization with a configurable singularity threshold.
///
/// A pivot whose absolute value is `<= tol` is treated as zero. With
/// `tol = 0` this is exactly the [`lu_factorize`] behavior; a small positive
/// `tol` additionally rejects pivots too small to divide by safely.
pub fn lu_factorize_with_tolerance<T: RealScalar>(
    a: &Array2<T>,
    tol: T,
) -> Result<LuFactors<T>, LuError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(LuError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }

    let mut l = Array2::eye(n);
    let mut u = a.clone();

    for i in 0..n {
        let pivot = u[[i, i]];
        if pivot.abs() <= tol {
            return Err(LuError::SingularMatrix { step: i });
        }

        for j in (i + 1)..n {
            let factor = u[[j, i]] / pivot;
            l[[j, i]] = factor;

            for k in i..n {
                let update = factor * u[[i, k]];
                u[[j, k]] -= update;
            }
        }
    }

    Ok(LuFactors { l, u })
}

/// Solve `A * x = b` by LU decomposition.
///
/// Convenience wrapper combining [`lu_factorize`] and [`LuFactors::solve`].
pub fn lu_solve<T: RealScalar>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, LuError> {
    let factors = lu_factorize(a)?;
    factors.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn max_abs(m: &Array2<f64>) -> f64 {
        m.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    #[test]
    fn test_factors_shape() {
        let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];

        let factors = lu_factorize(&a).expect("Factorization should succeed");

        for i in 0..3 {
            // L's diagonal is exactly one and its upper triangle untouched
            assert_eq!(factors.l[[i, i]], 1.0);
            for j in (i + 1)..3 {
                assert_eq!(factors.l[[i, j]], 0.0);
            }
            // U's lower triangle only carries elimination round-off
            for j in 0..i {
                assert!(factors.u[[i, j]].abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_reconstruction() {
        let a = array![[4.0_f64, 3.0], [6.0, 3.0]];

        let factors = lu_factorize(&a).expect("Factorization should succeed");
        let lu = factors.l.dot(&factors.u);

        assert!(max_abs(&(&lu - &a)) < 1e-9);
    }

    #[test]
    fn test_solve_3x3() {
        let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = array![8.0_f64, -11.0, -3.0];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_multiple_rhs() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        let factors = lu_factorize(&a).expect("Factorization should succeed");

        for b in [array![1.0_f64, 2.0, 3.0], array![4.0_f64, 5.0, 6.0]] {
            let x = factors.solve(&b).expect("Solve should succeed");
            let ax = a.dot(&x);
            for i in 0..3 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_singular() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];

        let result = lu_factorize(&a);
        assert_eq!(result.unwrap_err(), LuError::SingularMatrix { step: 1 });
    }

    #[test]
    fn test_zero_leading_pivot() {
        // Nonsingular, but the unpivoted path cannot reorder rows.
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];

        let result = lu_factorize(&a);
        assert_eq!(result.unwrap_err(), LuError::SingularMatrix { step: 0 });
    }

    #[test]
    fn test_non_square_rejected() {
        let a = Array2::<f64>::zeros((2, 3));

        let result = lu_factorize(&a);
        assert_eq!(
            result.unwrap_err(),
            LuError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_rhs_length_rejected() {
        let a = array![[2.0_f64, 0.0], [0.0, 2.0]];
        let factors = lu_factorize(&a).expect("Factorization should succeed");

        let b = array![1.0_f64, 2.0, 3.0];
        let result = factors.solve(&b);
        assert_eq!(
            result.unwrap_err(),
            LuError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_det() {
        let a = array![[4.0_f64, 3.0], [6.0, 3.0]];

        let factors = lu_factorize(&a).expect("Factorization should succeed");
        assert_relative_eq!(factors.det(), -6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_tolerance_rejects_tiny_pivot() {
        let a = array![[1e-14_f64, 1.0], [1.0, 1.0]];

        assert!(lu_factorize(&a).is_ok());
        let result = lu_factorize_with_tolerance(&a, 1e-12);
        assert_eq!(result.unwrap_err(), LuError::SingularMatrix { step: 0 });
    }

    #[test]
    fn test_caller_matrix_untouched() {
        let a = array![[2.0_f64, 1.0], [4.0, 3.0]];
        let before = a.clone();

        let _ = lu_factorize(&a).expect("Factorization should succeed");
        assert_eq!(a, before);
    }
}
