//! Digamma function at positive integer arguments.
//!
//! The power series for E_n(x) develops a logarithmic singularity at the
//! series index i = n − 1; the correction term there involves
//! ψ(n) = −γ + Σ_{j=1}^{n−1} 1/j. Only integer arguments are ever needed,
//! so the harmonic-sum form is exact and no asymptotic expansion is used.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constants::EULER_MASCHERONI;

/// ψ(m) for a positive integer m: −γ + Σ_{j=1}^{m−1} 1/j.
///
/// `digamma(1)` is −γ; each further integer adds the next harmonic term.
pub fn digamma<T: Float>(m: u32) -> T {
    let mut psi = -EULER_MASCHERONI;
    for j in 1..m {
        psi += 1.0 / f64::from(j);
    }
    T::from(psi).unwrap_or_else(T::nan)
}
