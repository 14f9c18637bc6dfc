//! Output types for exponential-integral evaluation.
//!
//! ## Purpose
//!
//! This module defines the [`Evaluation`] record returned by the high-level
//! API: the value of E_n(x) together with the inputs that produced it and
//! the region/iteration metadata of the evaluation.
//!
//! ## Design notes
//!
//! * **Metadata**: Region and iteration count make convergence behavior
//!   observable without any logging layer.
//! * **Ergonomics**: Implements `Display` for human-readable output with
//!   17 significant digits, enough to round-trip an f64.
//! * **Generics**: Results are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `iterations` is `None` exactly when the region is a closed form.
//! * `value` is finite for every successfully returned evaluation under the
//!   clamped denominator policy.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::EvalRegion;

// ============================================================================
// Result Structure
// ============================================================================

/// The outcome of evaluating E_n(x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<T> {
    /// The value of E_n(x).
    pub value: T,

    /// The order n the integral was evaluated at.
    pub order: i32,

    /// The argument x the integral was evaluated at.
    pub argument: T,

    /// The region that produced the value.
    pub region: EvalRegion,

    /// Iterations used by an iterative regime (`None` for closed forms).
    pub iterations: Option<usize>,
}

impl<T: Float> Evaluation<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if the value came from the ascending power series.
    pub fn used_series(&self) -> bool {
        self.region == EvalRegion::PowerSeries
    }

    /// Check if the value came from the continued fraction.
    pub fn used_continued_fraction(&self) -> bool {
        self.region == EvalRegion::ContinuedFraction
    }

    /// Check if the value came from a closed form.
    pub fn is_closed_form(&self) -> bool {
        self.region.is_closed_form()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Evaluation<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Evaluation:")?;
        writeln!(f, "  Order:      {}", self.order)?;
        writeln!(f, "  Argument:   {}", self.argument)?;
        writeln!(f, "  Region:     {}", self.region.name())?;

        match self.iterations {
            Some(count) => writeln!(f, "  Iterations: {count}")?,
            None => writeln!(f, "  Iterations: none (closed form)")?,
        }

        // 16 fractional digits in scientific notation = 17 significant digits
        write!(
            f,
            "  Value:      {:.16e}",
            self.value.to_f64().unwrap_or(f64::NAN)
        )
    }
}
