//! Modified Lentz continued fraction for E_n(x), x > 1.
//!
//! ## Purpose
//!
//! This module evaluates the exponential integral in the large-argument
//! regime via the continued-fraction representation
//!
//! ```text
//! E_n(x) = e^(-x) * 1/(x+n- 1*n/(x+n+2- 2*(n+1)/(x+n+4- ...)))
//! ```
//!
//! using the modified Lentz recurrence on the running scalars `b`, `c`, `d`.
//!
//! ## Design notes
//!
//! * **Recurrence**: b starts at x + n, c at a large finite sentinel, d at
//!   1/b; step i applies a = −i(n−1+i), b += 2, d = 1/(a·d + b),
//!   c = b + a/c, and multiplies the accumulator by delta = c·d.
//! * **Convergence**: |delta − 1| ≤ tolerance; the converged product times
//!   e^(−x) is the result.
//! * **Denominator policy**: The raw recurrence can form a denominator that
//!   rounds to exactly zero. [`DenominatorPolicy`] selects between the
//!   textbook tiny-floor clamp and the unguarded reference behavior.
//!
//! ## Invariants
//!
//! * Only called with n ≥ 1 and x > 1 (the executor owns region selection).
//! * The iteration count never exceeds the configured cap.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the validator).
//! * This module does not choose the evaluation regime.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::RegimeEval;
use crate::math::constants::{big_sentinel, tiny_floor};
use crate::primitives::errors::ExpIntError;

// ============================================================================
// Denominator Policy
// ============================================================================

/// Behavior when a Lentz denominator rounds to exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DenominatorPolicy {
    /// Substitute a tiny nonzero floor for vanishing denominators
    /// (textbook modified Lentz). Default.
    #[default]
    Clamped,

    /// Take the reciprocal as-is; a zero denominator propagates infinity
    /// through the recurrence, reproducing the reference implementation.
    Unguarded,
}

impl DenominatorPolicy {
    /// Get the name of the policy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            DenominatorPolicy::Clamped => "Clamped",
            DenominatorPolicy::Unguarded => "Unguarded",
        }
    }

    /// Apply the policy to a freshly computed denominator.
    #[inline]
    fn apply<T: Float>(&self, value: T) -> T {
        match self {
            DenominatorPolicy::Clamped if value.abs() < tiny_floor() => tiny_floor(),
            _ => value,
        }
    }
}

// ============================================================================
// Continued-Fraction Evaluation
// ============================================================================

/// Evaluate E_n(x) by the modified Lentz continued fraction.
///
/// Returns the converged value together with the number of iterations the
/// recurrence took, or [`ExpIntError::ContinuedFractionDiverged`] if the
/// iteration budget is exhausted first.
pub fn evaluate<T: Float>(
    n: i32,
    x: T,
    max_iterations: usize,
    tolerance: T,
    policy: DenominatorPolicy,
) -> Result<RegimeEval<T>, ExpIntError> {
    let nm1 = i64::from(n) - 1;

    // b = x + n > 2 in this regime, so the seed reciprocal is safe
    let mut b = x + T::from(n).unwrap_or_else(T::zero);
    let mut c = big_sentinel::<T>();
    let mut d = T::one() / b;
    let mut h = d;

    let two = T::one() + T::one();

    for i in 1..=max_iterations {
        // a_i = -i * (n - 1 + i), exact in i64 for any i32 order
        let a = T::from(-(i as i64) * (nm1 + i as i64)).unwrap_or_else(T::zero);

        b = b + two;
        d = T::one() / policy.apply(a * d + b);
        c = policy.apply(b + a / c);

        let delta = c * d;
        h = h * delta;

        if (delta - T::one()).abs() <= tolerance {
            return Ok(RegimeEval {
                value: h * (-x).exp(),
                iterations: i,
            });
        }
    }

    Err(ExpIntError::ContinuedFractionDiverged {
        iterations: max_iterations,
    })
}
