//! Input validation for exponential-integral configuration and inputs.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied before any
//! evaluation begins: order and argument domain checks, the divergent
//! zero-argument combinations, and configuration parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Argument validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Domain**: n ≥ 0 and finite x ≥ 0.
//! * **Divergence**: E_0(0) and E_1(0) have no finite value; rejecting them
//!   up front keeps the iterative regimes free of special cases.
//! * **Parameter Bounds**: Iteration cap in [1, 10_000], tolerance positive
//!   and finite.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the integral.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constants::{near_zero, MAX_ITERATION_LIMIT};
use crate::primitives::errors::ExpIntError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for evaluation inputs and configuration.
///
/// Provides static methods that return `Result<(), ExpIntError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the integral order.
    pub fn validate_order(n: i32) -> Result<(), ExpIntError> {
        if n < 0 {
            return Err(ExpIntError::InvalidOrder(n));
        }
        Ok(())
    }

    /// Validate the evaluation argument.
    pub fn validate_argument<T: Float>(x: T) -> Result<(), ExpIntError> {
        if !x.is_finite() || x < T::zero() {
            return Err(ExpIntError::InvalidArgument(
                x.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a complete (order, argument) pair for evaluation.
    pub fn validate_inputs<T: Float>(n: i32, x: T) -> Result<(), ExpIntError> {
        // Check 1: Non-negative order
        Self::validate_order(n)?;

        // Check 2: Finite, non-negative argument
        Self::validate_argument(x)?;

        // Check 3: Divergent combination (x = 0 with n in {0, 1})
        if near_zero(x) && (n == 0 || n == 1) {
            return Err(ExpIntError::DivergentAtZero { order: n });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the iteration cap shared by both regimes.
    pub fn validate_max_iterations(cap: usize) -> Result<(), ExpIntError> {
        if cap == 0 || cap > MAX_ITERATION_LIMIT {
            return Err(ExpIntError::InvalidMaxIterations(cap));
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), ExpIntError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(ExpIntError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ExpIntError> {
        if let Some(param) = duplicate_param {
            return Err(ExpIntError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
