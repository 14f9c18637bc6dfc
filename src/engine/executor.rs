//! Execution engine for exponential-integral evaluation.
//!
//! ## Purpose
//!
//! This module orchestrates a single evaluation of E_n(x): it classifies
//! the input into one of four evaluation regions, dispatches to the closed
//! forms or the iterative regimes, and carries the region and iteration
//! metadata back alongside the value.
//!
//! ## Design notes
//!
//! * **Region selection**: The two closed forms (n = 0, and x ≈ 0 with
//!   n ≥ 2) are exact and iteration-free; the iterative regimes partition
//!   x ∈ (0, ∞) at x = 1.
//! * **Tolerance default**: When no tolerance is configured, the machine
//!   epsilon of the working precision is used, matching the reference.
//! * **Generic over `Float`**: f32 and f64 share one code path.
//!
//! ## Invariants
//!
//! * Inputs are assumed validated (n ≥ 0, finite x ≥ 0, no divergent
//!   zero-argument combination).
//! * Closed-form regions report zero iterations.
//! * Iteration counts from the regimes never exceed the configured cap.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::continued_fraction;
use crate::algorithms::power_series;
use crate::math::constants::near_zero;
use crate::primitives::errors::ExpIntError;

// Publicly re-exported types
pub use crate::algorithms::continued_fraction::DenominatorPolicy;

// ============================================================================
// Evaluation Regions
// ============================================================================

/// The four disjoint evaluation regions of the (n, x) domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalRegion {
    /// n = 0, x > 0: closed form e^(−x) / x.
    OrderZero,

    /// x ≈ 0, n ≥ 2: closed form 1 / (n − 1).
    ArgumentZero,

    /// n ≥ 1, x > 1: modified Lentz continued fraction.
    ContinuedFraction,

    /// n ≥ 1, 0 < x ≤ 1: ascending power series.
    PowerSeries,
}

impl EvalRegion {
    /// Classify a validated (order, argument) pair into its region.
    pub fn classify<T: Float>(n: i32, x: T) -> Self {
        if n == 0 {
            EvalRegion::OrderZero
        } else if near_zero(x) {
            EvalRegion::ArgumentZero
        } else if x > T::one() {
            EvalRegion::ContinuedFraction
        } else {
            EvalRegion::PowerSeries
        }
    }

    /// Get the name of the region.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            EvalRegion::OrderZero => "Closed form (order 0)",
            EvalRegion::ArgumentZero => "Closed form (argument 0)",
            EvalRegion::ContinuedFraction => "Continued fraction",
            EvalRegion::PowerSeries => "Power series",
        }
    }

    /// Returns `true` if the region is evaluated without iteration.
    #[inline]
    pub const fn is_closed_form(&self) -> bool {
        matches!(self, EvalRegion::OrderZero | EvalRegion::ArgumentZero)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for exponential-integral evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpIntConfig<T> {
    /// Iteration cap shared by both iterative regimes.
    pub max_iterations: usize,

    /// Relative convergence tolerance.
    /// If `None`, the machine epsilon of `T` is used.
    pub tolerance: Option<T>,

    /// Behavior when a Lentz denominator rounds to zero.
    pub denominator_policy: DenominatorPolicy,
}

impl<T: Float> Default for ExpIntConfig<T> {
    fn default() -> Self {
        Self {
            max_iterations: crate::math::constants::DEFAULT_MAX_ITERATIONS,
            tolerance: None,
            denominator_policy: DenominatorPolicy::default(),
        }
    }
}

impl<T: Float> ExpIntConfig<T> {
    /// The tolerance in effect: configured value or machine epsilon.
    #[inline]
    pub fn effective_tolerance(&self) -> T {
        self.tolerance.unwrap_or_else(T::epsilon)
    }
}

// ============================================================================
// Executor Output
// ============================================================================

/// Output from a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutorOutput<T> {
    /// The value of E_n(x).
    pub value: T,

    /// The region that produced the value.
    pub region: EvalRegion,

    /// Iterations used by an iterative regime (`None` for closed forms).
    pub iterations: Option<usize>,
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates region classification and dispatch for one evaluation.
pub struct ExpIntExecutor;

impl ExpIntExecutor {
    /// Evaluate E_n(x) for validated inputs under the given configuration.
    pub fn evaluate<T: Float>(
        n: i32,
        x: T,
        config: &ExpIntConfig<T>,
    ) -> Result<ExecutorOutput<T>, ExpIntError> {
        let tolerance = config.effective_tolerance();
        let region = EvalRegion::classify(n, x);

        match region {
            EvalRegion::OrderZero => Ok(ExecutorOutput {
                value: (-x).exp() / x,
                region,
                iterations: None,
            }),

            EvalRegion::ArgumentZero => Ok(ExecutorOutput {
                value: T::one() / T::from(n - 1).unwrap_or_else(T::one),
                region,
                iterations: None,
            }),

            EvalRegion::ContinuedFraction => {
                let eval = continued_fraction::evaluate(
                    n,
                    x,
                    config.max_iterations,
                    tolerance,
                    config.denominator_policy,
                )?;
                Ok(ExecutorOutput {
                    value: eval.value,
                    region,
                    iterations: Some(eval.iterations),
                })
            }

            EvalRegion::PowerSeries => {
                let eval = power_series::evaluate(n, x, config.max_iterations, tolerance)?;
                Ok(ExecutorOutput {
                    value: eval.value,
                    region,
                    iterations: Some(eval.iterations),
                })
            }
        }
    }
}
