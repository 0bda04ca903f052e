//! Validated phase-matching inputs.

use crate::error::PhaseMatchError;

/// Smallest accepted fundamental wavelength (µm).
pub const WAVELENGTH_MIN: f64 = 0.1;
/// Largest accepted fundamental wavelength (µm).
pub const WAVELENGTH_MAX: f64 = 10.0;
/// Smallest accepted `oa` angle (degrees).
pub const ANGLE_MIN: f64 = 0.0;
/// Largest accepted `oa` angle (degrees).
pub const ANGLE_MAX: f64 = 90.0;

/// Fundamental wavelength and `oa` angle for one calculation.
///
/// Construction rejects non-finite values and values outside
/// `[0.1, 10] µm` and `[0°, 90°]`, so solvers never see them.
///
/// `oa` enters the formulas only as `cos(oa)` scaling one index term.
///
/// # Examples
/// ```
/// use optics_phasematch::PhaseMatchInput;
///
/// let input = PhaseMatchInput::new(1.064, 45.0).unwrap();
/// assert_eq!(input.harmonic_wavelength(), 2.128);
///
/// assert!(PhaseMatchInput::new(0.05, 45.0).is_err());
/// assert!(PhaseMatchInput::new(1.064, 91.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhaseMatchInput {
    wavelength: f64,
    angle_degrees: f64,
}

impl PhaseMatchInput {
    /// Validate and create an input.
    ///
    /// # Errors
    ///
    /// `PhaseMatchError::InputRange` if either value is non-finite or out of range.
    pub fn new(wavelength: f64, angle_degrees: f64) -> Result<Self, PhaseMatchError> {
        check_range("wavelength", wavelength, WAVELENGTH_MIN, WAVELENGTH_MAX)?;
        check_range("angle", angle_degrees, ANGLE_MIN, ANGLE_MAX)?;
        Ok(Self {
            wavelength,
            angle_degrees,
        })
    }

    /// Fundamental wavelength λ (µm).
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Second-harmonic wavelength `2λ` at which the harmonic indices are
    /// evaluated.
    pub fn harmonic_wavelength(&self) -> f64 {
        2.0 * self.wavelength
    }

    /// The `oa` angle in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// `cos(oa)`.
    pub fn angle_cosine(&self) -> f64 {
        self.angle_degrees.to_radians().cos()
    }
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), PhaseMatchError> {
    // NaN fails both comparisons and lands here too
    if !(value >= min && value <= max) {
        return Err(PhaseMatchError::input_range(name, value, min, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_inclusive_bounds() {
        assert!(PhaseMatchInput::new(WAVELENGTH_MIN, ANGLE_MIN).is_ok());
        assert!(PhaseMatchInput::new(WAVELENGTH_MAX, ANGLE_MAX).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_wavelength() {
        match PhaseMatchInput::new(10.5, 0.0) {
            Err(PhaseMatchError::InputRange { name, value, .. }) => {
                assert_eq!(name, "wavelength");
                assert_eq!(value, 10.5);
            }
            other => panic!("Expected InputRange, got {:?}", other),
        }
        assert!(PhaseMatchInput::new(0.0, 0.0).is_err());
        assert!(PhaseMatchInput::new(-1.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_angle() {
        match PhaseMatchInput::new(1.0, -0.5) {
            Err(PhaseMatchError::InputRange { name, .. }) => assert_eq!(name, "angle"),
            other => panic!("Expected InputRange, got {:?}", other),
        }
        assert!(PhaseMatchInput::new(1.0, 90.0001).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(PhaseMatchInput::new(f64::NAN, 0.0).is_err());
        assert!(PhaseMatchInput::new(1.0, f64::NAN).is_err());
        assert!(PhaseMatchInput::new(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_angle_cosine() {
        let input = PhaseMatchInput::new(1.0, 0.0).unwrap();
        assert_eq!(input.angle_cosine(), 1.0);

        let input = PhaseMatchInput::new(1.0, 60.0).unwrap();
        assert!((input.angle_cosine() - 0.5).abs() < 1e-12);
    }
}
