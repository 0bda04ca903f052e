//! Solver configuration types.

use num_traits::Float;

/// Configuration for local minimisation.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerances (e.g., `f64`)
///
/// # Example
///
/// ```
/// use optics_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 100);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 400,
///     initial_step: 0.1,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// The simplex search stops once both the simplex width and the spread
    /// of objective values across its vertices fall below this value.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// A search that reaches this limit reports `converged == false`.
    pub max_iterations: usize,

    /// Size of the starting simplex relative to the initial guess.
    ///
    /// A zero initial guess uses the absolute step `0.00025` instead.
    pub initial_step: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 200
    /// - `initial_step`: 0.05
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 200,
            initial_step: T::from(0.05).unwrap(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with the default starting simplex.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use optics_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 400);
    /// assert_eq!(config.max_iterations, 400);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            ..Default::default()
        }
    }

    /// Replace the relative size of the starting simplex.
    ///
    /// # Panics
    ///
    /// Panics if `initial_step <= 0`.
    pub fn with_initial_step(mut self, initial_step: T) -> Self {
        assert!(initial_step > T::zero(), "initial_step must be positive");
        self.initial_step = initial_step;
        self
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-14) and more iterations (1000).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 1000,
            ..Default::default()
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-6) and fewer iterations (60).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 60,
            ..Default::default()
        }
    }
}
