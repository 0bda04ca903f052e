//! Local minimisation solvers for numerical computation.
//!
//! This module provides a derivative-free minimiser for one-dimensional,
//! continuous, real-valued objectives such as phase-mismatch residuals.
//!
//! ## Available Solvers
//!
//! - [`NelderMeadSolver`]: Downhill simplex search, no derivatives required
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on simplex size and spread (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 200)
//! - `initial_step`: Relative size of the starting simplex (default: 0.05)
//!
//! ## Example
//!
//! ```
//! use optics_core::math::solvers::{NelderMeadSolver, SolverConfig};
//!
//! // Minimise (x - 1.5)² starting from 0.5
//! let solver = NelderMeadSolver::new(SolverConfig::default());
//! let result = solver.minimise(|x: f64| (x - 1.5) * (x - 1.5), 0.5).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.x - 1.5).abs() < 1e-6);
//! ```

mod config;
mod nelder_mead;

// Re-export public types at module level
pub use config::SolverConfig;
pub use nelder_mead::{MinimiserResult, NelderMeadSolver};
