//! Type I phase matching (closed form).
//!
//! With `n_op`, `n_ep` the principal indices at the fundamental λ and
//! `n_eθ = n_o(2λ)·cos(oa)` the harmonic term,
//!
//! ```text
//! sin²θ_p = (n_ep² / n_eθ²) · (n_op² − n_eθ²) / (n_op² − n_ep²)
//! ```
//!
//! A `sin²θ_p` outside `[0, 1]` means no real phase-matching angle exists and
//! is reported as [`PhaseMatchError::NoSolution`], never clamped.

use optics_core::dispersion::{UniaxialCrystal, BBO};
use optics_core::types::DomainError;

use crate::error::PhaseMatchError;
use crate::input::PhaseMatchInput;
use crate::result::{PhaseMatchResult, PhaseMatchScheme};

/// Closed-form Type I solver for one crystal.
///
/// # Example
///
/// ```
/// use optics_phasematch::{PhaseMatchInput, TypeIPhaseMatcher};
///
/// let matcher = TypeIPhaseMatcher::default();
/// let input = PhaseMatchInput::new(1.064, 10.0).unwrap();
/// let result = matcher.solve(&input).unwrap();
/// assert!((result.theta_p_degrees - 36.833069).abs() < 1e-5);
/// assert!(result.diagnostic.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeIPhaseMatcher {
    crystal: UniaxialCrystal,
}

impl Default for TypeIPhaseMatcher {
    fn default() -> Self {
        Self::new(BBO)
    }
}

impl TypeIPhaseMatcher {
    /// Create a solver for `crystal`.
    pub fn new(crystal: UniaxialCrystal) -> Self {
        Self { crystal }
    }

    /// The crystal record in use.
    pub fn crystal(&self) -> &UniaxialCrystal {
        &self.crystal
    }

    /// Harmonic term `n_eθ = n_o(2λ)·cos(oa)`.
    pub fn harmonic_index(&self, input: &PhaseMatchInput) -> Result<f64, DomainError> {
        let n_o_harmonic = self.crystal.index_ordinary(input.harmonic_wavelength())?;
        Ok(n_o_harmonic * input.angle_cosine())
    }

    /// `sin²θ_p` before the range check.
    ///
    /// # Errors
    ///
    /// `PhaseMatchError::Domain` for dispersion failures or a vanishing
    /// denominator (`n_eθ == 0` or `n_op² == n_ep²`).
    pub fn sin_squared(&self, input: &PhaseMatchInput) -> Result<f64, PhaseMatchError> {
        let fundamental = self.crystal.indices(input.wavelength())?;
        let n_e_theta = self.harmonic_index(input)?;

        let nop2 = fundamental.n_o * fundamental.n_o;
        let nep2 = fundamental.n_e * fundamental.n_e;
        let net2 = n_e_theta * n_e_theta;

        if net2 == 0.0 {
            return Err(DomainError::division_by_zero("n_eθ² at the harmonic wavelength").into());
        }
        let birefringence = nop2 - nep2;
        if birefringence == 0.0 {
            return Err(DomainError::division_by_zero("n_op² − n_ep² at the fundamental").into());
        }

        Ok((nep2 / net2) * ((nop2 - net2) / birefringence))
    }

    /// Solve for θ_p.
    ///
    /// # Errors
    ///
    /// - `PhaseMatchError::Domain` from [`sin_squared`](Self::sin_squared)
    /// - `PhaseMatchError::NoSolution` if `sin²θ_p ∉ [0, 1]`
    pub fn solve(&self, input: &PhaseMatchInput) -> Result<PhaseMatchResult, PhaseMatchError> {
        let sin_squared = self.sin_squared(input)?;
        // NaN fails the range test as well
        if !(0.0..=1.0).contains(&sin_squared) {
            return Err(PhaseMatchError::NoSolution { sin_squared });
        }

        let theta_p = sin_squared.sqrt().asin().to_degrees();
        Ok(PhaseMatchResult::new(PhaseMatchScheme::TypeI, theta_p, None))
    }
}

/// Type I phase-matching angle in degrees for BBO.
///
/// # Errors
///
/// `InputRange` for out-of-range inputs, otherwise as
/// [`TypeIPhaseMatcher::solve`].
pub fn compute_type1(wavelength: f64, angle_degrees: f64) -> Result<f64, PhaseMatchError> {
    let input = PhaseMatchInput::new(wavelength, angle_degrees)?;
    TypeIPhaseMatcher::default()
        .solve(&input)
        .map(|result| result.theta_p_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optics_core::dispersion::{index_ordinary, SellmeierCoefficients};
    use proptest::prelude::*;

    #[test]
    fn test_golden_normal_incidence() {
        assert_relative_eq!(compute_type1(1.064, 0.0).unwrap(), 23.236_962_130, epsilon = 1e-7);
        assert_relative_eq!(compute_type1(1.0, 0.0).unwrap(), 22.334_921_941, epsilon = 1e-7);
    }

    #[test]
    fn test_golden_tilted() {
        assert_relative_eq!(compute_type1(1.064, 5.0).unwrap(), 26.979_098_604, epsilon = 1e-7);
        assert_relative_eq!(compute_type1(1.064, 10.0).unwrap(), 36.833_068_561, epsilon = 1e-7);
    }

    #[test]
    fn test_zero_angle_harmonic_index_is_ordinary_index() {
        let matcher = TypeIPhaseMatcher::default();
        for wavelength in [0.4, 0.8, 1.064, 1.55] {
            let input = PhaseMatchInput::new(wavelength, 0.0).unwrap();
            assert_eq!(
                matcher.harmonic_index(&input).unwrap(),
                index_ordinary(2.0 * wavelength).unwrap()
            );
        }
    }

    #[test]
    fn test_no_solution_at_45_degrees() {
        match compute_type1(1.064, 45.0) {
            Err(PhaseMatchError::NoSolution { sin_squared }) => {
                assert_relative_eq!(sin_squared, 6.708_165_323, epsilon = 1e-7);
            }
            other => panic!("Expected NoSolution, got {:?}", other),
        }
    }

    #[test]
    fn test_no_solution_near_90_degrees() {
        // cos(90°) is tiny but non-zero, so sin²θ blows up rather than dividing by zero
        assert!(matches!(
            compute_type1(1.064, 90.0),
            Err(PhaseMatchError::NoSolution { .. })
        ));
    }

    #[test]
    fn test_domain_error_at_long_wavelength() {
        // n_o(20 µm) has a negative radicand
        assert!(matches!(
            compute_type1(10.0, 0.0),
            Err(PhaseMatchError::Domain(DomainError::NegativeRadicand { .. }))
        ));
    }

    #[test]
    fn test_short_wavelength_is_typed() {
        let outcome = compute_type1(0.1, 45.0);
        assert!(matches!(
            outcome,
            Err(PhaseMatchError::NoSolution { .. }) | Err(PhaseMatchError::Domain(_))
        ));
    }

    #[test]
    fn test_isotropic_crystal_division_by_zero() {
        let coeffs = SellmeierCoefficients::new(2.5, 0.02, 0.02, 0.01);
        let isotropic = UniaxialCrystal {
            name: "isotropic",
            ordinary: coeffs,
            extraordinary: coeffs,
        };
        let input = PhaseMatchInput::new(1.0, 0.0).unwrap();
        assert!(matches!(
            TypeIPhaseMatcher::new(isotropic).solve(&input),
            Err(PhaseMatchError::Domain(DomainError::DivisionByZero { .. }))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_input() {
        assert!(matches!(
            compute_type1(11.0, 0.0),
            Err(PhaseMatchError::InputRange { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_deterministic(l in 0.1f64..=10.0f64, oa in 0.0f64..=90.0f64) {
            // Compare rendered outcomes so errors carrying identical payloads match
            let first = format!("{:?}", compute_type1(l, oa));
            let second = format!("{:?}", compute_type1(l, oa));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_result_in_physical_range(l in 0.1f64..=10.0f64, oa in 0.0f64..=90.0f64) {
            if let Ok(theta) = compute_type1(l, oa) {
                prop_assert!(theta.is_finite());
                prop_assert!((0.0..=90.0).contains(&theta));
            }
        }
    }
}
