//! Nelder–Mead downhill simplex minimiser for one-dimensional objectives.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Absolute starting step used when the initial guess is exactly zero.
const ZERO_GUESS_STEP: f64 = 0.00025;

/// Outcome of a local minimisation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimiserResult<T> {
    /// Best point found.
    pub x: T,
    /// Objective value at `x`.
    pub f: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of objective evaluations.
    pub evaluations: usize,
    /// Whether the simplex collapsed within tolerance before the iteration cap.
    pub converged: bool,
}

/// Nelder–Mead simplex minimiser.
///
/// In one dimension the simplex is a pair of points. Each iteration
/// reflects the worse point through the better one and then expands,
/// contracts, or shrinks depending on the objective value found there.
/// Only objective values are used, so kinked objectives such as `|g(x)|`
/// are handled without special treatment.
///
/// The search is local: it converges to a minimum near the initial guess,
/// which need not be the global one.
///
/// # Algorithm
///
/// Standard coefficients are used:
/// - **Reflection** α = 1
/// - **Expansion** γ = 2
/// - **Contraction** ρ = 1/2
/// - **Shrink** σ = 1/2
///
/// # Example
///
/// ```
/// use optics_core::math::solvers::{NelderMeadSolver, SolverConfig};
///
/// let solver = NelderMeadSolver::new(SolverConfig::default());
///
/// // Minimise |cos(x)| starting near 1.0 (finds π/2)
/// let result = solver.minimise(|x: f64| x.cos().abs(), 1.0).unwrap();
/// assert!((result.x - std::f64::consts::FRAC_PI_2).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct NelderMeadSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NelderMeadSolver<T> {
    /// Create a new Nelder–Mead solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Minimise `f` starting from `x0`.
    ///
    /// # Returns
    ///
    /// * `Ok(result)` - Best point found; `result.converged` is `false` when the
    ///   iteration cap was reached first
    /// * `Err(SolverError::NumericalInstability)` - Non-finite initial guess
    /// * `Err(SolverError::NonFiniteObjective)` - `f` returned NaN or infinity
    ///
    /// # Example
    ///
    /// ```
    /// use optics_core::math::solvers::{NelderMeadSolver, SolverConfig};
    ///
    /// let solver = NelderMeadSolver::new(SolverConfig::new(1e-12, 500));
    /// let result = solver.minimise(|x: f64| (x * x - 2.0).abs(), 1.0).unwrap();
    /// assert!((result.x - std::f64::consts::SQRT_2).abs() < 1e-8);
    /// ```
    pub fn minimise<F>(&self, f: F, x0: T) -> Result<MinimiserResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        if !x0.is_finite() {
            return Err(SolverError::NumericalInstability(format!(
                "initial guess is not finite: {}",
                x0.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let half = T::from(0.5).unwrap();
        let two = T::from(2.0).unwrap();

        let mut evaluations = 0usize;
        let mut eval = |x: T| -> Result<T, SolverError> {
            evaluations += 1;
            let fx = f(x);
            if fx.is_finite() {
                Ok(fx)
            } else {
                Err(SolverError::NonFiniteObjective {
                    x: x.to_f64().unwrap_or(f64::NAN),
                })
            }
        };

        let step = if x0 == T::zero() {
            T::from(ZERO_GUESS_STEP).unwrap()
        } else {
            x0 * self.config.initial_step
        };

        // (best, worst) pair
        let mut best = (x0, eval(x0)?);
        let mut worst = {
            let x1 = x0 + step;
            (x1, eval(x1)?)
        };
        if worst.1 < best.1 {
            std::mem::swap(&mut best, &mut worst);
        }

        let tol = self.config.tolerance;
        let mut iterations = 0usize;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            if (worst.0 - best.0).abs() <= tol && (worst.1 - best.1).abs() <= tol {
                converged = true;
                break;
            }
            iterations += 1;

            // Reflection through the better vertex (the 1-D centroid)
            let xr = best.0 + (best.0 - worst.0);
            let fr = eval(xr)?;

            if fr < best.1 {
                let xe = best.0 + two * (xr - best.0);
                let fe = eval(xe)?;
                worst = if fe < fr { (xe, fe) } else { (xr, fr) };
            } else {
                let contracted = if fr < worst.1 {
                    // Outside contraction
                    let xc = best.0 + half * (xr - best.0);
                    let fc = eval(xc)?;
                    (fc <= fr).then_some((xc, fc))
                } else {
                    // Inside contraction
                    let xcc = best.0 + half * (worst.0 - best.0);
                    let fcc = eval(xcc)?;
                    (fcc < worst.1).then_some((xcc, fcc))
                };

                worst = match contracted {
                    Some(point) => point,
                    None => {
                        let xs = best.0 + half * (worst.0 - best.0);
                        (xs, eval(xs)?)
                    }
                };
            }

            if worst.1 < best.1 {
                std::mem::swap(&mut best, &mut worst);
            }
        }

        if !converged && (worst.0 - best.0).abs() <= tol && (worst.1 - best.1).abs() <= tol {
            converged = true;
        }

        Ok(MinimiserResult {
            x: best.0,
            f: best.1,
            iterations,
            evaluations,
            converged,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_quadratic_minimum() {
        let solver = NelderMeadSolver::new(SolverConfig::default());

        let result = solver.minimise(|x: f64| (x - 3.0).powi(2) + 1.0, 0.5).unwrap();
        assert!(result.converged);
        assert!((result.x - 3.0).abs() < 1e-5, "x = {}", result.x);
        assert_relative_eq!(result.f, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_absolute_value_kink() {
        let solver = NelderMeadSolver::new(SolverConfig::default());

        // V-shaped residual with its root at 0.6
        let result = solver.minimise(|x: f64| (0.12 * (x - 0.6)).abs(), 0.5).unwrap();
        assert!(result.converged);
        assert!((result.x - 0.6).abs() < 1e-8, "x = {}", result.x);
        assert!(result.f < 1e-9);
    }

    #[test]
    fn test_minimum_below_initial_guess() {
        let solver = NelderMeadSolver::new(SolverConfig::default());

        let result = solver.minimise(|x: f64| (x + 1.25).powi(2), 2.0).unwrap();
        assert!(result.converged);
        assert!((result.x + 1.25).abs() < 1e-5, "x = {}", result.x);
    }

    #[test]
    fn test_zero_initial_guess() {
        let solver = NelderMeadSolver::new(SolverConfig::default());

        let result = solver.minimise(|x: f64| (x - 0.01).abs(), 0.0).unwrap();
        assert!(result.converged);
        assert!((result.x - 0.01).abs() < 1e-8);
    }

    #[test]
    fn test_local_minimum_is_reported() {
        let solver = NelderMeadSolver::new(SolverConfig::default());

        // |cos(x)| + 0.5 never reaches zero; the minimum value is 0.5 at π/2
        let result = solver.minimise(|x: f64| x.cos().abs() + 0.5, 1.2).unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.f, 0.5, epsilon = 1e-8);
    }

    #[test]
    fn test_counts_evaluations() {
        let solver = NelderMeadSolver::new(SolverConfig::default());

        let result = solver.minimise(|x: f64| (x - 1.0).powi(2), 0.5).unwrap();
        // Two initial vertices plus at least one trial point per iteration
        assert!(result.evaluations >= result.iterations + 2);
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_iteration_cap_reports_not_converged() {
        let solver = NelderMeadSolver::new(SolverConfig::new(1e-100, 3));

        let result = solver.minimise(|x: f64| (x - 10.0).powi(2), 0.5).unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_non_finite_initial_guess() {
        let solver: NelderMeadSolver<f64> = NelderMeadSolver::with_defaults();

        match solver.minimise(|x: f64| x * x, f64::NAN) {
            Err(SolverError::NumericalInstability(msg)) => assert!(msg.contains("initial guess")),
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_objective() {
        let solver: NelderMeadSolver<f64> = NelderMeadSolver::with_defaults();

        // Descends towards larger x and walks into the NaN region
        let result = solver.minimise(|x: f64| if x > 0.6 { f64::NAN } else { -x }, 0.5);
        assert!(matches!(result, Err(SolverError::NonFiniteObjective { .. })));
    }

    // ========================================
    // Accessor Tests
    // ========================================

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig::new(1e-8, 50);
        let solver = NelderMeadSolver::new(config);

        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_with_f32() {
        let solver: NelderMeadSolver<f32> = NelderMeadSolver::new(SolverConfig::new(1e-6, 200));

        let result = solver.minimise(|x: f32| (x - 2.0).abs(), 0.5_f32).unwrap();
        assert!((result.x - 2.0).abs() < 1e-4);
    }
}
