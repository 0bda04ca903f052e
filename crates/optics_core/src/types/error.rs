//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: Mathematical domain violations (poles, imaginary indices)
//! - `SolverError`: Errors from the numerical minimiser

use thiserror::Error;

/// Mathematical domain violations.
///
/// Raised whenever an evaluation would otherwise produce a silently wrong
/// number: a Sellmeier pole, a negative radicand (imaginary index), a
/// non-finite input, or a zero denominator in a derived formula.
///
/// # Variants
/// - `Pole`: `λ²` coincides with a fitted Sellmeier denominator constant
/// - `NegativeRadicand`: The index radicand is negative
/// - `NonFinite`: An input or intermediate value is NaN or infinite
/// - `DivisionByZero`: A derived formula divides by zero
///
/// # Examples
/// ```
/// use optics_core::types::DomainError;
///
/// let err = DomainError::NegativeRadicand { wavelength: 20.0, radicand: -3.5 };
/// assert!(format!("{}", err).contains("Negative radicand"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// `λ²` equals the Sellmeier pole constant.
    #[error("Sellmeier pole at λ = {wavelength}: λ² equals pole constant {pole}")]
    Pole {
        /// Wavelength at which the pole was hit
        wavelength: f64,
        /// The pole constant `C`
        pole: f64,
    },

    /// The refractive index radicand is negative.
    #[error("Negative radicand {radicand} at λ = {wavelength}")]
    NegativeRadicand {
        /// Wavelength of the evaluation
        wavelength: f64,
        /// The radicand value
        radicand: f64,
    },

    /// A value is NaN or infinite.
    #[error("Non-finite {quantity}: {value}")]
    NonFinite {
        /// Name of the offending quantity
        quantity: String,
        /// The offending value
        value: f64,
    },

    /// Division by zero in a derived formula.
    #[error("Division by zero: {context}")]
    DivisionByZero {
        /// Which denominator vanished
        context: String,
    },
}

impl DomainError {
    /// Create a non-finite value error.
    pub fn non_finite(quantity: impl Into<String>, value: f64) -> Self {
        Self::NonFinite {
            quantity: quantity.into(),
            value,
        }
    }

    /// Create a division-by-zero error.
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }
}

/// Minimiser errors.
///
/// Hitting the iteration cap is not an error at this level: the minimiser
/// reports it through `MinimiserResult::converged` so callers keep the best
/// point found.
///
/// # Variants
/// - `NonFiniteObjective`: The objective returned NaN or infinity at a trial point
/// - `NumericalInstability`: General numerical instability
///
/// # Examples
/// ```
/// use optics_core::types::SolverError;
///
/// let err = SolverError::NonFiniteObjective { x: 0.75 };
/// assert!(format!("{}", err).contains("x = 0.75"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Objective evaluated to NaN or infinity.
    #[error("Objective is not finite at x = {x}")]
    NonFiniteObjective {
        /// The trial point
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pole_display() {
        let err = DomainError::Pole {
            wavelength: 0.5,
            pole: 0.25,
        };
        assert_eq!(
            format!("{}", err),
            "Sellmeier pole at λ = 0.5: λ² equals pole constant 0.25"
        );
    }

    #[test]
    fn test_negative_radicand_display() {
        let err = DomainError::NegativeRadicand {
            wavelength: 20.0,
            radicand: -3.5,
        };
        assert_eq!(format!("{}", err), "Negative radicand -3.5 at λ = 20");
    }

    #[test]
    fn test_helper_constructors() {
        assert_eq!(
            DomainError::non_finite("wavelength", f64::INFINITY),
            DomainError::NonFinite {
                quantity: "wavelength".to_string(),
                value: f64::INFINITY,
            }
        );
        let err = DomainError::division_by_zero("n_o² − n_e²");
        assert_eq!(format!("{}", err), "Division by zero: n_o² − n_e²");
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::NumericalInstability("empty simplex".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: empty simplex");

        let err = SolverError::NonFiniteObjective { x: 1.5 };
        assert!(format!("{}", err).contains("x = 1.5"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = DomainError::division_by_zero("test");
        let _: &dyn std::error::Error = &err;
        let err = SolverError::NumericalInstability("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
