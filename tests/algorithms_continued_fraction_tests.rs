#![cfg(feature = "dev")]
//! Tests for the modified Lentz continued fraction.
//!
//! These tests exercise the large-argument regime directly:
//! - Convergence to reference values for x > 1
//! - Iteration accounting against the configured cap
//! - Denominator policy behavior (Clamped vs Unguarded)
//! - Budget exhaustion reporting
//!
//! ## Test Organization
//!
//! 1. **Reference Values** - Known E_n(x) for x > 1
//! 2. **Iteration Accounting** - Counts within budget
//! 3. **Denominator Policy** - Agreement on well-behaved inputs
//! 4. **Non-Convergence** - Budget exhaustion errors

use approx::assert_relative_eq;

use expint::internals::algorithms::continued_fraction::{evaluate, DenominatorPolicy};
use expint::internals::primitives::errors::ExpIntError;

const MAX_ITER: usize = 100;

fn eval_default(n: i32, x: f64) -> f64 {
    evaluate(n, x, MAX_ITER, f64::EPSILON, DenominatorPolicy::Clamped)
        .unwrap()
        .value
}

// ============================================================================
// Reference Value Tests
// ============================================================================

/// Test E_1(2) against the reference value.
#[test]
fn test_e1_of_2() {
    assert_relative_eq!(eval_default(1, 2.0), 0.04890051070806112, max_relative = 1e-14);
}

/// Test E_10 at x = 2 against the reference value.
#[test]
fn test_e10_of_2() {
    assert_relative_eq!(eval_default(10, 2.0), 0.0120920851364003, max_relative = 1e-13);
}

/// Test the three-term recurrence n E_{n+1}(x) = e^(−x) − x E_n(x)
/// inside the continued-fraction regime.
#[test]
fn test_recurrence_at_x2() {
    let x = 2.0;
    let e1 = eval_default(1, x);
    let e2 = eval_default(2, x);
    let e3 = eval_default(3, x);

    assert_relative_eq!(e2, (-x).exp() - x * e1, max_relative = 1e-12);
    assert_relative_eq!(e3, ((-x).exp() - x * e2) / 2.0, max_relative = 1e-12);
}

// ============================================================================
// Iteration Accounting Tests
// ============================================================================

/// Test that convergence is reported within the budget and speeds up with x.
#[test]
fn test_iteration_counts() {
    let near = evaluate(1, 1.5, MAX_ITER, f64::EPSILON, DenominatorPolicy::Clamped).unwrap();
    let far = evaluate(1, 20.0, MAX_ITER, f64::EPSILON, DenominatorPolicy::Clamped).unwrap();

    assert!(near.iterations >= 1);
    assert!(near.iterations <= MAX_ITER);
    assert!(far.iterations <= near.iterations, "larger x should converge at least as fast");
}

// ============================================================================
// Denominator Policy Tests
// ============================================================================

/// Test that both policies agree on well-behaved inputs.
///
/// The clamp only engages when a denominator rounds to zero, which never
/// happens on this grid.
#[test]
fn test_policies_agree_on_regular_inputs() {
    for n in [1, 2, 5, 10] {
        for x in [1.1, 2.0, 5.0, 25.0] {
            let clamped = evaluate(n, x, MAX_ITER, f64::EPSILON, DenominatorPolicy::Clamped)
                .unwrap()
                .value;
            let unguarded = evaluate(n, x, MAX_ITER, f64::EPSILON, DenominatorPolicy::Unguarded)
                .unwrap()
                .value;
            assert_relative_eq!(clamped, unguarded, max_relative = 1e-14);
        }
    }
}

/// Test the policy names.
#[test]
fn test_policy_names() {
    assert_eq!(DenominatorPolicy::Clamped.name(), "Clamped");
    assert_eq!(DenominatorPolicy::Unguarded.name(), "Unguarded");
    assert_eq!(DenominatorPolicy::default(), DenominatorPolicy::Clamped);
}

// ============================================================================
// Non-Convergence Tests
// ============================================================================

/// Test that an exhausted budget is reported, not silently returned.
#[test]
fn test_budget_exhaustion() {
    let result = evaluate(1, 1.5, 1, f64::EPSILON, DenominatorPolicy::Clamped);
    assert_eq!(
        result.unwrap_err(),
        ExpIntError::ContinuedFractionDiverged { iterations: 1 }
    );
}
