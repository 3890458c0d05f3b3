//! Direct solvers for dense linear systems
//!
//! This crate provides two independent direct algorithms over square dense
//! systems, built on [`ndarray`] arrays:
//!
//! - **LU decomposition**: unpivoted Doolittle factorization into separate
//!   unit lower and upper triangular factors ([`lu_factorize`]), combined
//!   with forward/backward substitution ([`solve_lower`], [`solve_upper`])
//!   to solve systems and reuse one factorization across right-hand sides.
//! - **Gaussian elimination**: row reduction of the augmented system with
//!   partial pivoting ([`gauss_solve`]), which succeeds for every
//!   nonsingular matrix, including those the unpivoted path rejects.
//!
//! Matrices are `Array2<T>` and vectors `Array1<T>` for any [`RealScalar`]
//! (`f64` or `f32`). Every solver works on an internal copy; caller-owned
//! buffers are never mutated, so independent calls can run concurrently.
//!
//! Singularity detection compares pivots against exactly zero by default,
//! which is numerically fragile: a nonzero but tiny pivot passes undetected
//! and can produce a large-error result. The `*_with_tolerance` variants
//! accept an explicit epsilon for callers that want a safety margin.
//!
//! # Example
//!
//! ```
//! use dense_solvers::{gauss_solve, lu_factorize};
//! use ndarray::array;
//!
//! let a: ndarray::Array2<f64> = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
//! let b: ndarray::Array1<f64> = array![8.0, -11.0, -3.0];
//!
//! let factors = lu_factorize(&a).expect("matrix has nonzero leading minors");
//! let x = factors.solve(&b).expect("dimensions match");
//!
//! let y = gauss_solve(&a, &b).expect("matrix is nonsingular");
//!
//! for i in 0..3 {
//!     assert!((x[i] - y[i]).abs() < 1e-10);
//! }
//! ```

pub mod gauss;
pub mod lu;
pub mod traits;
pub mod triangular;

// Re-export main types
pub use traits::RealScalar;

// Re-export solvers
pub use gauss::{GaussError, gauss_solve, gauss_solve_with_tolerance};
pub use lu::{LuError, LuFactors, lu_factorize, lu_factorize_with_tolerance, lu_solve};
pub use triangular::{solve_lower, solve_upper};
