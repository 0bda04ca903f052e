//! Type II phase matching (numerical).
//!
//! The effective harmonic index depends on the same unknown angle on both
//! sides of the matching condition, so θ_p is found as the zero of the
//! residual
//!
//! ```text
//! c(θ) = n_op·n_ep / sqrt(n_ep²·cos²θ + n_op²·sin²θ)
//! d(θ) = n_os·n_es / sqrt(n_es²·cos²θ + n_os²·sin²θ)
//! r(θ) = | 2·c(θ) − (n_os + d(θ))·cos(oa) |
//! ```
//!
//! by local Nelder–Mead minimisation from 0.5 rad. A minimum that is not a
//! root, an exhausted iteration budget, or an angle outside `[0°, 90°]` is a
//! [`ConvergenceError`].

use optics_core::dispersion::{RefractiveIndexPair, UniaxialCrystal, BBO};
use optics_core::math::solvers::NelderMeadSolver;
use optics_core::types::DomainError;
use tracing::debug;

use crate::config::TypeIIConfig;
use crate::error::{ConvergenceError, PhaseMatchError};
use crate::input::PhaseMatchInput;
use crate::result::{ConvergenceDiagnostic, PhaseMatchResult, PhaseMatchScheme};

/// Type II phase-mismatch residual for one input.
///
/// All four principal indices are evaluated once at construction; the
/// residual itself is then a cheap closed-form function of θ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeIIObjective {
    fundamental: RefractiveIndexPair<f64>,
    harmonic: RefractiveIndexPair<f64>,
    angle_cosine: f64,
}

impl TypeIIObjective {
    /// Evaluate the indices at λ and 2λ.
    ///
    /// # Errors
    ///
    /// Any `DomainError` from the dispersion model.
    pub fn new(crystal: &UniaxialCrystal, input: &PhaseMatchInput) -> Result<Self, DomainError> {
        Ok(Self {
            fundamental: crystal.indices(input.wavelength())?,
            harmonic: crystal.indices(input.harmonic_wavelength())?,
            angle_cosine: input.angle_cosine(),
        })
    }

    /// `(n_op, n_ep)` at the fundamental wavelength.
    pub fn fundamental(&self) -> RefractiveIndexPair<f64> {
        self.fundamental
    }

    /// `(n_os, n_es)` at the harmonic wavelength.
    pub fn harmonic(&self) -> RefractiveIndexPair<f64> {
        self.harmonic
    }

    /// Signed mismatch `2·c(θ) − (n_os + d(θ))·cos(oa)`.
    pub fn mismatch(&self, theta: f64) -> f64 {
        let c = self.fundamental.index_at_angle(theta);
        let d = self.harmonic.index_at_angle(theta);
        2.0 * c - (self.harmonic.n_o + d) * self.angle_cosine
    }

    /// Residual `|mismatch(θ)|`, the quantity minimised.
    pub fn evaluate(&self, theta: f64) -> f64 {
        self.mismatch(theta).abs()
    }
}

/// Numerical Type II solver for one crystal.
///
/// # Example
///
/// ```
/// use optics_phasematch::{PhaseMatchInput, TypeIIConfig, TypeIIPhaseMatcher};
///
/// let matcher = TypeIIPhaseMatcher::default();
/// let input = PhaseMatchInput::new(1.064, 0.0).unwrap();
/// let result = matcher.solve(&input).unwrap();
///
/// assert!((result.theta_p_degrees - 34.241951).abs() < 1e-5);
/// let diagnostic = result.diagnostic.unwrap();
/// assert!(diagnostic.residual < TypeIIConfig::default().residual_tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeIIPhaseMatcher {
    crystal: UniaxialCrystal,
    config: TypeIIConfig,
}

impl Default for TypeIIPhaseMatcher {
    fn default() -> Self {
        Self::new(BBO, TypeIIConfig::default())
    }
}

impl TypeIIPhaseMatcher {
    /// Create a solver for `crystal` with `config`.
    pub fn new(crystal: UniaxialCrystal, config: TypeIIConfig) -> Self {
        Self { crystal, config }
    }

    /// The crystal record in use.
    pub fn crystal(&self) -> &UniaxialCrystal {
        &self.crystal
    }

    /// The search configuration.
    pub fn config(&self) -> &TypeIIConfig {
        &self.config
    }

    /// Build the residual for `input`.
    pub fn objective(&self, input: &PhaseMatchInput) -> Result<TypeIIObjective, DomainError> {
        TypeIIObjective::new(&self.crystal, input)
    }

    /// Solve for θ_p.
    ///
    /// # Errors
    ///
    /// - `PhaseMatchError::InvalidConfig` if the configuration fails validation
    /// - `PhaseMatchError::Domain` from the dispersion model
    /// - `PhaseMatchError::Convergence` if the search ends anywhere but a
    ///   physical root
    pub fn solve(&self, input: &PhaseMatchInput) -> Result<PhaseMatchResult, PhaseMatchError> {
        self.config.validate()?;
        let objective = self.objective(input)?;

        let solver = NelderMeadSolver::new(self.config.solver);
        let minimum = solver
            .minimise(|theta| objective.evaluate(theta), self.config.initial_guess)
            .map_err(ConvergenceError::from)?;

        let theta_degrees = minimum.x.to_degrees();
        debug!(
            wavelength = input.wavelength(),
            angle = input.angle_degrees(),
            theta_degrees,
            residual = minimum.f,
            iterations = minimum.iterations,
            evaluations = minimum.evaluations,
            converged = minimum.converged,
            "type II search finished"
        );

        if !minimum.converged {
            return Err(ConvergenceError::IterationLimit {
                iterations: minimum.iterations,
                theta_degrees,
                residual: minimum.f,
            }
            .into());
        }
        if minimum.f >= self.config.residual_tolerance {
            return Err(ConvergenceError::ResidualAboveTolerance {
                theta_degrees,
                residual: minimum.f,
                tolerance: self.config.residual_tolerance,
            }
            .into());
        }
        if !(0.0..=90.0).contains(&theta_degrees) {
            return Err(ConvergenceError::AngleOutOfRange { theta_degrees }.into());
        }

        let diagnostic = ConvergenceDiagnostic {
            iterations: minimum.iterations,
            evaluations: minimum.evaluations,
            residual: minimum.f,
            converged: minimum.converged,
        };
        Ok(PhaseMatchResult::new(
            PhaseMatchScheme::TypeII,
            theta_degrees,
            Some(diagnostic),
        ))
    }
}

/// Type II phase-matching angle in degrees for BBO.
///
/// `tolerance` overrides the residual bound (default `1e-4`) and
/// `max_iterations` the minimiser budget (default 200).
///
/// # Errors
///
/// `InputRange` for out-of-range inputs, otherwise as
/// [`TypeIIPhaseMatcher::solve`].
pub fn compute_type2(
    wavelength: f64,
    angle_degrees: f64,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
) -> Result<f64, PhaseMatchError> {
    let input = PhaseMatchInput::new(wavelength, angle_degrees)?;

    let mut config = TypeIIConfig::default();
    if let Some(tolerance) = tolerance {
        config = config.with_residual_tolerance(tolerance);
    }
    if let Some(max_iterations) = max_iterations {
        config = config.with_max_iterations(max_iterations);
    }

    TypeIIPhaseMatcher::new(BBO, config)
        .solve(&input)
        .map(|result| result.theta_p_degrees)
}
