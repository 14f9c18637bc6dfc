//! # expint — Generalized Exponential Integral for Rust
//!
//! Evaluation of E_n(x), the generalized exponential integral
//! ∫₁^∞ e^(−xt) t^(−n) dt, for integer order n ≥ 0 and real x ≥ 0.
//!
//! ## What is E_n(x)?
//!
//! The exponential integral family appears throughout radiative transfer,
//! neutron transport, and time-dependent diffusion problems. Away from the
//! boundary it has no elementary closed form; this crate evaluates it with
//! the classic two-regime scheme: a modified Lentz continued fraction for
//! x > 1 and an ascending power series for 0 < x ≤ 1, with exact closed
//! forms for n = 0 and for x = 0 with n ≥ 2.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use expint::prelude::*;
//!
//! // Build the evaluator
//! let model = ExpInt::new().build()?;
//!
//! // Evaluate E_1(1.0)
//! let eval = model.eval(1, 1.0_f64)?;
//!
//! assert!((eval.value - 0.21938393439552027).abs() < 1e-15);
//! # Result::<(), ExpIntError>::Ok(())
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use expint::prelude::*;
//!
//! let model = ExpInt::new()
//!     .max_iterations(200)            // Iteration cap for both regimes
//!     .tolerance(1e-14)               // Relative convergence tolerance
//!     .denominator_policy(Unguarded)  // Reference-faithful Lentz recurrence
//!     .build()?;
//!
//! let eval = model.eval(10, 2.0)?;
//! println!("{}", eval);
//! # Result::<(), ExpIntError>::Ok(())
//! ```
//!
//! ```text
//! Evaluation:
//!   Order:      10
//!   Argument:   2
//!   Region:     Continued fraction
//!   Iterations: 8
//!   Value:      1.2092085136400329e-2
//! ```
//!
//! ### Result and Error Handling
//!
//! `eval` returns `Result<Evaluation<T>, ExpIntError>`. Invalid inputs and
//! non-convergence are distinct error variants, so callers can tell a
//! domain error from an exhausted iteration budget:
//!
//! ```rust
//! use expint::prelude::*;
//!
//! let model = ExpInt::new().build()?;
//!
//! match model.eval(1, 0.0) {
//!     Ok(eval) => println!("E_1(0) = {}", eval.value),
//!     Err(e) => {
//!         assert!(e.is_invalid_input());
//!         // "E_1(0) diverges: order must be >= 2 at x = 0"
//!     }
//! }
//! # Result::<(), ExpIntError>::Ok(())
//! ```
//!
//! For drop-in compatibility with NaN-sentinel numeric code, the [`expint`]
//! free function collapses every failure to NaN:
//!
//! ```rust
//! use expint::prelude::*;
//!
//! assert!(expint(-1, 1.0).is_nan());
//! assert!((expint(0, 1.0) - (-1.0f64).exp()).abs() < 1e-16);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! expint = { version = "0.1", default-features = false }
//! ```
//!
//! The evaluator is generic over `num_traits::Float`, so `f32` can be used
//! where memory or bandwidth is constrained.
//!
//! ## References
//!
//! - Press, W. H. et al. (2007). *Numerical Recipes: The Art of Scientific
//!   Computing* (3rd ed). Cambridge University Press, ch. 6.3.
//! - Abramowitz, M. & Stegun, I. A. (1964). *Handbook of Mathematical
//!   Functions*, §5.1.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure mathematical building blocks.
mod math;

// Layer 3: Algorithms - the two iterative evaluation regimes.
mod algorithms;

// Layer 4: Engine - validation, region dispatch, and output records.
mod engine;

// High-level fluent API for exponential-integral evaluation.
mod api;

// Standard expint prelude.
pub mod prelude {
    pub use crate::api::{
        expint,
        DenominatorPolicy::{Clamped, Unguarded},
        EvalRegion, Evaluation, ExpIntBuilder as ExpInt, ExpIntError, ExpIntModel,
    };
}

pub use crate::api::{
    expint, DenominatorPolicy, EvalRegion, Evaluation, ExpIntBuilder, ExpIntConfig, ExpIntError,
    ExpIntModel,
};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
