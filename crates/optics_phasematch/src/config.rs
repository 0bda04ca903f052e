//! Type II solver configuration.

use optics_core::math::solvers::SolverConfig;

use crate::error::PhaseMatchError;

/// Configuration for the Type II phase-matching search.
///
/// # Example
///
/// ```
/// use optics_phasematch::TypeIIConfig;
///
/// let config = TypeIIConfig::default()
///     .with_residual_tolerance(1e-6)
///     .with_max_iterations(500);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.initial_guess, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeIIConfig {
    /// Starting angle of the search (radians).
    pub initial_guess: f64,

    /// Largest residual accepted as a root.
    pub residual_tolerance: f64,

    /// Minimiser settings.
    pub solver: SolverConfig<f64>,
}

impl Default for TypeIIConfig {
    /// Default values:
    /// - `initial_guess`: 0.5 rad
    /// - `residual_tolerance`: 1e-4
    /// - `solver`: [`SolverConfig::default`]
    fn default() -> Self {
        Self {
            initial_guess: 0.5,
            residual_tolerance: 1e-4,
            solver: SolverConfig::default(),
        }
    }
}

impl TypeIIConfig {
    /// Replace the residual bound.
    pub fn with_residual_tolerance(mut self, tolerance: f64) -> Self {
        self.residual_tolerance = tolerance;
        self
    }

    /// Replace the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.solver.max_iterations = max_iterations;
        self
    }

    /// Replace the starting angle (radians).
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Check that every setting is usable.
    ///
    /// # Errors
    ///
    /// `PhaseMatchError::InvalidConfig` naming the first bad setting.
    pub fn validate(&self) -> Result<(), PhaseMatchError> {
        if !self.initial_guess.is_finite() {
            return Err(PhaseMatchError::invalid_config(format!(
                "initial_guess must be finite, got {}",
                self.initial_guess
            )));
        }
        if !(self.residual_tolerance > 0.0 && self.residual_tolerance.is_finite()) {
            return Err(PhaseMatchError::invalid_config(format!(
                "residual_tolerance must be positive, got {}",
                self.residual_tolerance
            )));
        }
        if !(self.solver.tolerance > 0.0 && self.solver.tolerance.is_finite()) {
            return Err(PhaseMatchError::invalid_config(format!(
                "solver tolerance must be positive, got {}",
                self.solver.tolerance
            )));
        }
        if self.solver.max_iterations == 0 {
            return Err(PhaseMatchError::invalid_config("max_iterations must be > 0"));
        }
        if !(self.solver.initial_step > 0.0 && self.solver.initial_step.is_finite()) {
            return Err(PhaseMatchError::invalid_config(format!(
                "initial_step must be positive, got {}",
                self.solver.initial_step
            )));
        }
        Ok(())
    }
}
