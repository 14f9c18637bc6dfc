//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the crate. The prelude should provide a one-stop
//! import for common workflows.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports

use expint::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
#[test]
fn test_prelude_imports() {
    // Builder alias, policy variants, and model are all usable unqualified
    let model: ExpIntModel<f64> = ExpInt::new()
        .denominator_policy(Clamped)
        .build()
        .unwrap();

    let eval: Evaluation<f64> = model.eval(2, 0.0).unwrap();
    assert_eq!(eval.region, EvalRegion::ArgumentZero);

    let _ = Unguarded;
    let _: f64 = expint(1, 1.0);
}

/// Test error matching through the prelude.
#[test]
fn test_prelude_error_matching() {
    let err: ExpIntError = ExpInt::<f64>::new().build().unwrap().eval(-1, 1.0).unwrap_err();

    match err {
        ExpIntError::InvalidOrder(n) => assert_eq!(n, -1),
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a complete configure-build-evaluate workflow using only the prelude.
#[test]
fn test_prelude_workflow() {
    let model = ExpInt::new()
        .max_iterations(200)
        .tolerance(1e-12)
        .build()
        .unwrap();

    let evals = model.eval_many(1, &[0.5, 1.0, 2.0]).unwrap();
    assert_eq!(evals.len(), 3);
    assert!(evals[0].used_series());
    assert!(evals[2].used_continued_fraction());
}
