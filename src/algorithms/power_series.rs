//! Power-series evaluation of E_n(x), 0 < x ≤ 1.
//!
//! ## Purpose
//!
//! This module evaluates the exponential integral in the small-argument
//! regime via the ascending series
//!
//! ```text
//! E_n(x) = [-ln(x) + ψ(n)] * (-x)^(n-1)/(n-1)!  -  Σ_{i≠n-1} (-x)^i / (i! (i-n+1))
//! ```
//!
//! accumulated term by term with a running factorial factor.
//!
//! ## Design notes
//!
//! * **First term**: 1/(n−1) for n ≠ 1; −ln(x) − γ for n = 1.
//! * **Singular index**: At i = n − 1 the general term's denominator
//!   vanishes; that term is replaced by fact · (−ln(x) + ψ(n)), the
//!   logarithmic-singularity correction.
//! * **Convergence**: |delta| < |accumulator| · tolerance, a relative test,
//!   so the series terminates quickly for small x.
//!
//! ## Invariants
//!
//! * Only called with n ≥ 1 and 0 < x ≤ 1 (the executor owns region
//!   selection).
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
use crate::math::constants::EULER_MASCHERONI;
use crate::math::digamma::digamma;
use crate::primitives::errors::ExpIntError;

// ============================================================================
// Power-Series Evaluation
// ============================================================================

/// Evaluate E_n(x) by the ascending power series.
///
/// Returns the accumulated value together with the number of terms summed,
/// or [`ExpIntError::SeriesDiverged`] if the iteration budget is exhausted
/// before the relative convergence test passes.
pub fn evaluate<T: Float>(
    n: i32,
    x: T,
    max_iterations: usize,
    tolerance: T,
) -> Result<RegimeEval<T>, ExpIntError> {
    let nm1 = n - 1;
    let euler = T::from(EULER_MASCHERONI).unwrap_or_else(T::zero);

    // First term: 1/(n-1), or the logarithmic term when that would divide by zero
    let mut acc = if nm1 != 0 {
        T::one() / T::from(nm1).unwrap_or_else(T::one)
    } else {
        -x.ln() - euler
    };

    let mut fact = T::one();

    for i in 1..=max_iterations as i32 {
        fact = fact * (-x / T::from(i).unwrap_or_else(T::one));

        let delta = if i != nm1 {
            -fact / T::from(i - nm1).unwrap_or_else(T::one)
        } else {
            // The general term degenerates exactly at i = n - 1
            fact * (-x.ln() + digamma(1 + nm1 as u32))
        };

        acc = acc + delta;

        if delta.abs() < acc.abs() * tolerance {
            return Ok(RegimeEval {
                value: acc,
                iterations: i as usize,
            });
        }
    }

    Err(ExpIntError::SeriesDiverged {
        iterations: max_iterations,
    })
}
