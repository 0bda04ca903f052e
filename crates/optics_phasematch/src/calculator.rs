//! Combined Type I / Type II calculation.

use optics_core::dispersion::{Crystal, UniaxialCrystal};

use crate::config::TypeIIConfig;
use crate::error::PhaseMatchError;
use crate::input::PhaseMatchInput;
use crate::result::{PhaseMatchResult, PhaseMatchScheme};
use crate::type_i::TypeIPhaseMatcher;
use crate::type_ii::TypeIIPhaseMatcher;

/// Outcome of running both schemes on one input.
///
/// The two outcomes are independent: a Type I failure does not suppress
/// the Type II result and vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationReport {
    /// The validated input
    pub input: PhaseMatchInput,
    /// Type I outcome
    pub type_i: Result<PhaseMatchResult, PhaseMatchError>,
    /// Type II outcome
    pub type_ii: Result<PhaseMatchResult, PhaseMatchError>,
}

impl CalculationReport {
    /// Outcome for `scheme`.
    pub fn outcome(&self, scheme: PhaseMatchScheme) -> &Result<PhaseMatchResult, PhaseMatchError> {
        match scheme {
            PhaseMatchScheme::TypeI => &self.type_i,
            PhaseMatchScheme::TypeII => &self.type_ii,
        }
    }
}

/// Both solvers bound to one crystal and Type II configuration.
///
/// # Example
///
/// ```
/// use optics_phasematch::{PhaseMatchCalculator, PhaseMatchInput};
///
/// let calculator = PhaseMatchCalculator::default();
/// let report = calculator.calculate(&PhaseMatchInput::new(1.064, 0.0).unwrap());
/// assert!(report.type_i.is_ok());
/// assert!(report.type_ii.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseMatchCalculator {
    type_i: TypeIPhaseMatcher,
    type_ii: TypeIIPhaseMatcher,
}

impl PhaseMatchCalculator {
    /// Create a calculator for `crystal`.
    pub fn new(crystal: UniaxialCrystal, config: TypeIIConfig) -> Self {
        Self {
            type_i: TypeIPhaseMatcher::new(crystal),
            type_ii: TypeIIPhaseMatcher::new(crystal, config),
        }
    }

    /// Create a calculator for a shipped material.
    pub fn for_crystal(crystal: Crystal, config: TypeIIConfig) -> Self {
        Self::new(*crystal.record(), config)
    }

    /// The crystal record in use.
    pub fn crystal(&self) -> &UniaxialCrystal {
        self.type_i.crystal()
    }

    /// The Type II configuration.
    pub fn config(&self) -> &TypeIIConfig {
        self.type_ii.config()
    }

    /// Run one scheme.
    pub fn solve(
        &self,
        scheme: PhaseMatchScheme,
        input: &PhaseMatchInput,
    ) -> Result<PhaseMatchResult, PhaseMatchError> {
        match scheme {
            PhaseMatchScheme::TypeI => self.type_i.solve(input),
            PhaseMatchScheme::TypeII => self.type_ii.solve(input),
        }
    }

    /// Run both schemes.
    pub fn calculate(&self, input: &PhaseMatchInput) -> CalculationReport {
        CalculationReport {
            input: *input,
            type_i: self.type_i.solve(input),
            type_ii: self.type_ii.solve(input),
        }
    }
}
