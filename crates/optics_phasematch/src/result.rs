//! Phase-matching result types.

use std::fmt;
use std::str::FromStr;

/// SHG polarisation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseMatchScheme {
    /// Both fundamental photons share one polarisation
    TypeI,
    /// The fundamental photons have orthogonal polarisations
    TypeII,
}

impl PhaseMatchScheme {
    /// Both schemes, in display order.
    pub const ALL: [PhaseMatchScheme; 2] = [PhaseMatchScheme::TypeI, PhaseMatchScheme::TypeII];
}

impl fmt::Display for PhaseMatchScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseMatchScheme::TypeI => write!(f, "Type I"),
            PhaseMatchScheme::TypeII => write!(f, "Type II"),
        }
    }
}

impl FromStr for PhaseMatchScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "type1" | "typei" | "i" | "1" => Ok(PhaseMatchScheme::TypeI),
            "type2" | "typeii" | "ii" | "2" => Ok(PhaseMatchScheme::TypeII),
            other => Err(format!("Unknown scheme: {}. Supported: type1, type2", other)),
        }
    }
}

/// Minimiser diagnostics attached to a Type II result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceDiagnostic {
    /// Simplex iterations performed
    pub iterations: usize,
    /// Objective evaluations performed
    pub evaluations: usize,
    /// Objective value at the returned angle
    pub residual: f64,
    /// Whether the simplex collapsed within tolerance
    pub converged: bool,
}

/// Phase-matching angle from one solver invocation.
///
/// # Examples
/// ```
/// use optics_phasematch::{PhaseMatchResult, PhaseMatchScheme};
///
/// let result = PhaseMatchResult::new(PhaseMatchScheme::TypeI, 23.236962, None);
/// assert_eq!(result.to_string(), "Type I - theta_p = 23.24 degrees");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseMatchResult {
    /// Scheme that produced this angle
    pub scheme: PhaseMatchScheme,
    /// Phase-matching angle θ_p in degrees
    pub theta_p_degrees: f64,
    /// Minimiser diagnostics (Type II only)
    pub diagnostic: Option<ConvergenceDiagnostic>,
}

impl PhaseMatchResult {
    /// Create a result.
    pub fn new(
        scheme: PhaseMatchScheme,
        theta_p_degrees: f64,
        diagnostic: Option<ConvergenceDiagnostic>,
    ) -> Self {
        Self {
            scheme,
            theta_p_degrees,
            diagnostic,
        }
    }

    /// θ_p in radians.
    pub fn theta_p_radians(&self) -> f64 {
        self.theta_p_degrees.to_radians()
    }
}

impl fmt::Display for PhaseMatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - theta_p = {:.2} degrees", self.scheme, self.theta_p_degrees)
    }
}
