#![cfg(feature = "dev")]
//! Tests for numeric constants and floating-point helpers.
//!
//! These tests verify the shared constants used by both evaluation regimes:
//! - The Euler–Mascheroni constant and iteration caps
//! - The large/tiny floating-point sentinels of the Lentz recurrence
//! - Near-zero classification of arguments
//! - Digamma values at integer arguments
//!
//! ## Test Organization
//!
//! 1. **Constants** - Values and bounds
//! 2. **Sentinels** - Magnitude and finiteness
//! 3. **Classification** - Near-zero predicate
//! 4. **Digamma** - Harmonic-sum values

use approx::assert_relative_eq;

use expint::internals::math::constants::{
    big_sentinel, near_zero, tiny_floor, DEFAULT_MAX_ITERATIONS, EULER_MASCHERONI,
    MAX_ITERATION_LIMIT,
};
use expint::internals::math::digamma::digamma;

// ============================================================================
// Constants Tests
// ============================================================================

/// Test the Euler–Mascheroni constant against its known decimal expansion.
#[test]
fn test_euler_mascheroni_value() {
    assert_relative_eq!(EULER_MASCHERONI, 0.5772156649015328606, max_relative = 1e-15);
}

/// Test the iteration caps.
///
/// The default cap is the reference algorithm's 100; the validation ceiling
/// must sit strictly above it.
#[test]
fn test_iteration_caps() {
    assert_eq!(DEFAULT_MAX_ITERATIONS, 100);
    assert!(MAX_ITERATION_LIMIT > DEFAULT_MAX_ITERATIONS);
}

// ============================================================================
// Sentinel Tests
// ============================================================================

/// Test that the big sentinel is huge but finite.
#[test]
fn test_big_sentinel_magnitude() {
    let big = big_sentinel::<f64>();
    assert!(big.is_finite());
    assert!(big > 1e200);

    // a / big underflows toward zero for bounded a
    assert!((1e100 / big).abs() < 1e-100);
}

/// Test that the tiny floor is positive and far below unity.
#[test]
fn test_tiny_floor_magnitude() {
    let tiny = tiny_floor::<f64>();
    assert!(tiny > 0.0);
    assert!(tiny < 1e-250);

    // The reciprocal of the floor is still finite
    assert!((1.0 / tiny).is_finite());
}

/// Test that sentinels scale with the working precision.
#[test]
fn test_sentinels_f32() {
    let big = big_sentinel::<f32>();
    let tiny = tiny_floor::<f32>();

    assert!(big.is_finite());
    assert!(big > 1e30);
    assert!(tiny > 0.0);
    assert!(tiny < 1e-30);
}

// ============================================================================
// Classification Tests
// ============================================================================

/// Test near-zero classification at and around machine epsilon.
#[test]
fn test_near_zero_boundaries() {
    assert!(near_zero(0.0_f64));
    assert!(near_zero(f64::EPSILON / 2.0));
    assert!(!near_zero(f64::EPSILON));
    assert!(!near_zero(1e-10_f64));
    assert!(!near_zero(1.0_f64));
}

// ============================================================================
// Digamma Tests
// ============================================================================

/// Test digamma at small integers against the harmonic-sum identity.
///
/// ψ(1) = −γ, ψ(2) = 1 − γ, ψ(5) = 25/12 − γ.
#[test]
fn test_digamma_small_integers() {
    let psi1: f64 = digamma(1);
    let psi2: f64 = digamma(2);
    let psi5: f64 = digamma(5);

    assert_relative_eq!(psi1, -EULER_MASCHERONI, max_relative = 1e-15);
    assert_relative_eq!(psi2, 1.0 - EULER_MASCHERONI, max_relative = 1e-15);
    assert_relative_eq!(psi5, 25.0 / 12.0 - EULER_MASCHERONI, max_relative = 1e-15);
}

/// Test that digamma is strictly increasing over the integers.
#[test]
fn test_digamma_monotone() {
    let mut prev: f64 = digamma(1);
    for m in 2..20 {
        let cur: f64 = digamma(m);
        assert!(cur > prev, "psi({m}) should exceed psi({})", m - 1);
        prev = cur;
    }
}
