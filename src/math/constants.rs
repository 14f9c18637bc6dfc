//! Numeric constants and floating-point classification helpers.
//!
//! ## Purpose
//!
//! This module centralizes the constants shared by both evaluation regimes:
//! the Euler–Mascheroni constant, the reference iteration cap, and the
//! large/tiny floating-point sentinels used by the continued fraction.
//!
//! ## Design notes
//!
//! * **Precision-generic**: Sentinels are derived from `T::max_value()`,
//!   `T::min_positive_value()`, and `T::epsilon()`, so f32 and f64 get
//!   consistent behavior.
//! * **Epsilon policy**: "x is zero" means |x| below the machine epsilon of
//!   the working precision, matching the reference region classification.
//!
//! ## Invariants
//!
//! * `big_sentinel() * epsilon` does not overflow and `a / big_sentinel()`
//!   underflows toward zero for any bounded `a`.
//! * `tiny_floor()` is strictly positive and far below any converged
//!   denominator magnitude.
//!
//! ## Non-goals
//!
//! * This module does not perform any iterative evaluation.

// External dependencies
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Euler–Mascheroni constant (γ), the constant term of the logarithmic
/// singularity in the power-series expansion.
pub const EULER_MASCHERONI: f64 = 0.57721566490153286;

/// Iteration cap of the reference algorithm, shared by both regimes.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Upper bound accepted for a configured iteration cap.
pub const MAX_ITERATION_LIMIT: usize = 10_000;

// ============================================================================
// Floating-Point Sentinels
// ============================================================================

/// Initial value of the continued fraction's `c` scalar.
///
/// Chosen as (max finite value × machine epsilon): large enough that `a / c`
/// cannot prematurely dominate the recurrence, yet finite so the first
/// `b + a/c` update stays representable.
#[inline]
pub fn big_sentinel<T: Float>() -> T {
    T::max_value() * T::epsilon()
}

/// Floor substituted for denominators that round to zero in the hardened
/// Lentz recurrence.
///
/// (smallest positive normal / machine epsilon), the conventional `FPMIN`
/// of the textbook algorithm.
#[inline]
pub fn tiny_floor<T: Float>() -> T {
    T::min_positive_value() / T::epsilon()
}

// ============================================================================
// Classification Helpers
// ============================================================================

/// Whether `x` is indistinguishable from zero in the working precision.
#[inline]
pub fn near_zero<T: Float>(x: T) -> bool {
    x.abs() < T::epsilon()
}
