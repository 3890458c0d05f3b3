//! Scalar abstraction for the dense solvers
//!
//! This module defines [`RealScalar`], the trait bound every solver in this
//! crate places on its matrix and vector elements.

use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Trait for real scalar types usable in the dense solvers.
///
/// This is a thin bound over [`num_traits::Float`]: the solvers need
/// arithmetic with assignment operators, absolute value for pivot
/// comparisons, and nothing else. `f64` is the primary instantiation;
/// `f32` is provided for memory-constrained callers.
pub trait RealScalar: Float + NumAssign + Debug + Send + Sync + 'static {}

impl RealScalar for f64 {}

impl RealScalar for f32 {}
