//! Error types for exponential-integral evaluation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while evaluating
//! E_n(x), covering input validation, configuration constraints, and
//! non-convergence of the iterative regimes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (order, argument, cap).
//! * **Tagged**: Invalid input and non-convergence are distinct variants, so
//!   callers can tell them apart; the NaN-sentinel shim collapses them again
//!   for drop-in numeric compatibility.
//! * **No-std**: Implements `Display` via `core::fmt` and `std::error::Error`
//!   only when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Negative order, negative argument, divergent
//!    zero-argument combinations.
//! 2. **Parameter validation**: Iteration cap and tolerance bounds.
//! 3. **Non-convergence**: Either iterative regime exhausting its budget.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric payloads use the same scalar types as the public API surface.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for exponential-integral evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpIntError {
    /// The order must be a non-negative integer.
    InvalidOrder(i32),

    /// The argument must be finite and non-negative.
    InvalidArgument(f64),

    /// E_0(0) and E_1(0) diverge; the integral has no finite value there.
    DivergentAtZero {
        /// The order for which the zero-argument evaluation was requested.
        order: i32,
    },

    /// The continued fraction exhausted its iteration budget.
    ContinuedFractionDiverged {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },

    /// The power series exhausted its iteration budget.
    SeriesDiverged {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },

    /// The iteration cap must be in the range [1, 10_000].
    InvalidMaxIterations(usize),

    /// The convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl ExpIntError {
    /// Returns `true` for errors caused by the inputs to a single evaluation,
    /// as opposed to configuration errors or iteration-budget exhaustion.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrder(_) | Self::InvalidArgument(_) | Self::DivergentAtZero { .. }
        )
    }

    /// Returns `true` when an iterative regime exhausted its budget.
    pub const fn is_non_convergence(&self) -> bool {
        matches!(
            self,
            Self::ContinuedFractionDiverged { .. } | Self::SeriesDiverged { .. }
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ExpIntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidOrder(n) => {
                write!(f, "Invalid order: {n} (must be a non-negative integer)")
            }
            Self::InvalidArgument(x) => {
                write!(f, "Invalid argument: {x} (must be finite and >= 0)")
            }
            Self::DivergentAtZero { order } => {
                write!(f, "E_{order}(0) diverges: order must be >= 2 at x = 0")
            }
            Self::ContinuedFractionDiverged { iterations } => {
                write!(
                    f,
                    "Continued fraction failed to converge after {iterations} iterations"
                )
            }
            Self::SeriesDiverged { iterations } => {
                write!(
                    f,
                    "Power series failed to converge after {iterations} iterations"
                )
            }
            Self::InvalidMaxIterations(cap) => {
                write!(f, "Invalid max_iterations: {cap} (must be in [1, 10000])")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ExpIntError {}
