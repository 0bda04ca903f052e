//! # optics_phasematch: SHG Phase-Matching Solvers
//!
//! ## Layer 2 Role
//!
//! Computes the birefringent phase-matching angle θ_p for second-harmonic
//! generation in a uniaxial crystal, from a fundamental wavelength λ (µm)
//! and an auxiliary angle `oa` (degrees):
//!
//! - **Type I** ([`type_i`]): closed form, single evaluation
//! - **Type II** ([`type_ii`]): local minimisation of the phase-mismatch
//!   residual, seeded at 0.5 rad
//!
//! Every failure is a typed [`PhaseMatchError`]: out-of-range inputs,
//! dispersion domain errors, Type I "no solution", and Type II convergence
//! failures. No path returns NaN.
//!
//! ## Usage Examples
//!
//! ```rust
//! use optics_phasematch::{compute_type1, compute_type2, PhaseMatchError};
//!
//! let theta_1 = compute_type1(1.064, 0.0).unwrap();
//! assert!((theta_1 - 23.236962).abs() < 1e-5);
//!
//! let theta_2 = compute_type2(1.064, 0.0, None, None).unwrap();
//! assert!((theta_2 - 34.241951).abs() < 1e-5);
//!
//! // oa = 45° admits no Type I phase matching
//! assert!(matches!(
//!     compute_type1(1.064, 45.0),
//!     Err(PhaseMatchError::NoSolution { .. })
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Evaluate wavelength sweeps on the rayon thread pool
//! - `serde`: Enable serialisation for inputs, results, and configuration

#![deny(missing_docs)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod sweep;
pub mod type_i;
pub mod type_ii;

pub use calculator::{CalculationReport, PhaseMatchCalculator};
pub use config::TypeIIConfig;
pub use error::{ConvergenceError, PhaseMatchError};
pub use input::PhaseMatchInput;
pub use result::{ConvergenceDiagnostic, PhaseMatchResult, PhaseMatchScheme};
pub use sweep::{sweep, SweepPoint, WavelengthGrid};
pub use type_i::{compute_type1, TypeIPhaseMatcher};
pub use type_ii::{compute_type2, TypeIIObjective, TypeIIPhaseMatcher};
