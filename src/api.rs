//! High-level API for exponential-integral evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring the evaluator, the model it produces, and a
//! NaN-sentinel free function for drop-in numeric compatibility with the
//! reference implementation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Two surfaces**: `ExpIntModel::eval` reports tagged errors; `expint`
//!   collapses every failure to NaN the way the reference does.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `ExpInt::new()` → chain configuration methods →
//!   `.build()` → `.eval(n, x)`.
//! * **Duplicate Tracking**: Setting the same parameter twice is rejected at
//!   build time.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ExpIntExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::continued_fraction::DenominatorPolicy;
pub use crate::engine::executor::{EvalRegion, ExpIntConfig};
pub use crate::engine::output::Evaluation;
pub use crate::primitives::errors::ExpIntError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an exponential-integral evaluator.
#[derive(Debug, Clone)]
pub struct ExpIntBuilder<T> {
    /// Iteration cap shared by both iterative regimes.
    pub max_iterations: Option<usize>,

    /// Relative convergence tolerance (default: machine epsilon of `T`).
    pub tolerance: Option<T>,

    /// Behavior when a Lentz denominator rounds to zero (default: Clamped).
    pub denominator_policy: Option<DenominatorPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ExpIntBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ExpIntBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            max_iterations: None,
            tolerance: None,
            denominator_policy: None,
            duplicate_param: None,
        }
    }

    /// Set the iteration cap for both iterative regimes.
    pub fn max_iterations(mut self, cap: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(cap);
        self
    }

    /// Set the relative convergence tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the behavior for vanishing Lentz denominators.
    pub fn denominator_policy(mut self, policy: DenominatorPolicy) -> Self {
        if self.denominator_policy.is_some() {
            self.duplicate_param = Some("denominator_policy");
        }
        self.denominator_policy = Some(policy);
        self
    }

    /// Validate the configuration and build the evaluator.
    pub fn build(self) -> Result<ExpIntModel<T>, ExpIntError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(cap) = self.max_iterations {
            Validator::validate_max_iterations(cap)?;
        }
        if let Some(tol) = self.tolerance {
            Validator::validate_tolerance(tol)?;
        }

        let defaults = ExpIntConfig::<T>::default();
        Ok(ExpIntModel {
            config: ExpIntConfig {
                max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
                tolerance: self.tolerance,
                denominator_policy: self.denominator_policy.unwrap_or_default(),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured exponential-integral evaluator.
#[derive(Debug, Clone, Copy)]
pub struct ExpIntModel<T> {
    config: ExpIntConfig<T>,
}

impl<T: Float> ExpIntModel<T> {
    /// Evaluate E_n(x).
    pub fn eval(&self, n: i32, x: T) -> Result<Evaluation<T>, ExpIntError> {
        Validator::validate_inputs(n, x)?;

        let out = ExpIntExecutor::evaluate(n, x, &self.config)?;
        Ok(Evaluation {
            value: out.value,
            order: n,
            argument: x,
            region: out.region,
            iterations: out.iterations,
        })
    }

    /// Evaluate E_n at each argument in `xs`, failing fast on the first error.
    ///
    /// Output order matches input order.
    pub fn eval_many(&self, n: i32, xs: &[T]) -> Result<Vec<Evaluation<T>>, ExpIntError> {
        let mut results = Vec::with_capacity(xs.len());
        for &x in xs {
            results.push(self.eval(n, x)?);
        }
        Ok(results)
    }

    /// The configuration in effect for this evaluator.
    pub fn config(&self) -> &ExpIntConfig<T> {
        &self.config
    }
}

// ============================================================================
// NaN-Sentinel Shim
// ============================================================================

/// Evaluate E_n(x) with the default configuration, collapsing every error
/// to NaN.
///
/// This is the drop-in surface of the reference implementation: invalid
/// inputs and non-convergence are indistinguishable in the return value.
/// Use [`ExpIntBuilder`] and [`ExpIntModel::eval`] when the cause matters.
pub fn expint(n: i32, x: f64) -> f64 {
    let result = Validator::validate_inputs(n, x)
        .and_then(|()| ExpIntExecutor::evaluate(n, x, &ExpIntConfig::default()));

    match result {
        Ok(out) => out.value,
        Err(_) => f64::NAN,
    }
}
