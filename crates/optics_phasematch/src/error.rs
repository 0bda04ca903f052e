//! Error types for phase-matching operations.
//!
//! This module provides:
//! - `PhaseMatchError`: Every way a phase-matching request can fail
//! - `ConvergenceError`: Type II minimisation outcomes that are not a root

use optics_core::types::{DomainError, SolverError};
use thiserror::Error;

/// Phase-matching errors.
///
/// # Variants
/// - `InputRange`: Wavelength or angle outside its documented range
/// - `InvalidConfig`: Non-positive tolerance or iteration budget
/// - `Domain`: Dispersion pole, imaginary index, or zero denominator
/// - `NoSolution`: Type I `sin²θ_p` outside `[0, 1]`
/// - `Convergence`: Type II search did not land on a physical root
///
/// # Examples
/// ```
/// use optics_phasematch::PhaseMatchError;
///
/// let err = PhaseMatchError::NoSolution { sin_squared: 6.7 };
/// assert!(format!("{}", err).contains("No phase-matching solution"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseMatchError {
    /// Input outside its documented physical range.
    #[error("Input out of range: {name} = {value} not in [{min}, {max}]")]
    InputRange {
        /// Name of the input
        name: String,
        /// The rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Invalid solver configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mathematical domain violation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The polarisation states cannot phase-match for these inputs.
    #[error("No phase-matching solution: sin²θ = {sin_squared} outside [0, 1]")]
    NoSolution {
        /// The computed `sin²θ_p`
        sin_squared: f64,
    },

    /// The Type II search failed.
    #[error(transparent)]
    Convergence(#[from] ConvergenceError),
}

/// Type II convergence failures.
///
/// Each variant carries the minimiser's best angle so callers can report
/// how close the search came.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceError {
    /// The iteration budget ran out before the simplex collapsed.
    #[error("Minimiser stopped after {iterations} iterations at θ = {theta_degrees}° (residual {residual})")]
    IterationLimit {
        /// Iterations performed
        iterations: usize,
        /// Best angle found, degrees
        theta_degrees: f64,
        /// Residual at the best angle
        residual: f64,
    },

    /// The minimiser settled on a local minimum that is not a root.
    #[error("Residual {residual} at θ = {theta_degrees}° exceeds tolerance {tolerance}")]
    ResidualAboveTolerance {
        /// Angle of the local minimum, degrees
        theta_degrees: f64,
        /// Residual at that angle
        residual: f64,
        /// Required residual bound
        tolerance: f64,
    },

    /// The root lies outside the physical range `[0°, 90°]`.
    #[error("Angle θ = {theta_degrees}° outside physical range [0, 90]")]
    AngleOutOfRange {
        /// The returned angle, degrees
        theta_degrees: f64,
    },

    /// The minimiser itself failed.
    #[error("Minimiser failure: {0}")]
    Solver(#[from] SolverError),
}

impl PhaseMatchError {
    /// Create an input range error.
    pub fn input_range(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::InputRange {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Short machine-readable category name.
    pub fn category(&self) -> &'static str {
        match self {
            PhaseMatchError::InputRange { .. } => "input_range",
            PhaseMatchError::InvalidConfig(_) => "invalid_config",
            PhaseMatchError::Domain(_) => "domain",
            PhaseMatchError::NoSolution { .. } => "no_solution",
            PhaseMatchError::Convergence(_) => "convergence",
        }
    }
}

impl From<SolverError> for PhaseMatchError {
    fn from(err: SolverError) -> Self {
        PhaseMatchError::Convergence(ConvergenceError::Solver(err))
    }
}
