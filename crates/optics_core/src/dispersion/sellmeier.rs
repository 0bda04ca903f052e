//! Sellmeier dispersion relation.

use crate::types::DomainError;
use num_traits::Float;

/// Absolute distance from a pole below which `λ² − C` counts as zero.
///
/// `sqrt(C)²` rarely reproduces `C` bit for bit, so an exact comparison
/// would let the pole through as a huge finite index.
pub const POLE_TOLERANCE: f64 = 1e-12;

/// Coefficients of the relation `n²(λ) = A + B/(λ² − C) − D·λ²`.
///
/// # Example
///
/// ```
/// use optics_core::dispersion::SellmeierCoefficients;
///
/// let coeffs = SellmeierCoefficients::new(2.7405, 0.0184, 0.0179, 0.0155);
/// let n = coeffs.index(1.0_f64).unwrap();
/// assert!((n - 1.656422).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellmeierCoefficients {
    /// Constant term `A`
    pub a: f64,
    /// Pole strength `B`
    pub b: f64,
    /// Pole position `C` (µm²)
    pub c: f64,
    /// Infrared correction `D` (µm⁻²)
    pub d: f64,
}

impl SellmeierCoefficients {
    /// Create a coefficient set.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Evaluate `n²(λ)`.
    ///
    /// # Errors
    ///
    /// - `DomainError::NonFinite` if `wavelength` is NaN or infinite
    /// - `DomainError::Pole` if `|λ² − C| <= POLE_TOLERANCE`
    pub fn radicand<T: Float>(&self, wavelength: T) -> Result<T, DomainError> {
        if !wavelength.is_finite() {
            return Err(DomainError::non_finite(
                "wavelength",
                wavelength.to_f64().unwrap_or(f64::NAN),
            ));
        }

        let a = T::from(self.a).unwrap();
        let b = T::from(self.b).unwrap();
        let c = T::from(self.c).unwrap();
        let d = T::from(self.d).unwrap();

        let l2 = wavelength * wavelength;
        let denominator = l2 - c;
        if denominator.abs() <= T::from(POLE_TOLERANCE).unwrap() {
            return Err(DomainError::Pole {
                wavelength: wavelength.to_f64().unwrap_or(f64::NAN),
                pole: self.c,
            });
        }

        Ok(a + b / denominator - d * l2)
    }

    /// Evaluate the refractive index `n(λ)`.
    ///
    /// # Errors
    ///
    /// Everything [`radicand`](Self::radicand) reports, plus
    /// `DomainError::NegativeRadicand` when `n²(λ) < 0`.
    pub fn index<T: Float>(&self, wavelength: T) -> Result<T, DomainError> {
        let radicand = self.radicand(wavelength)?;
        if radicand < T::zero() {
            return Err(DomainError::NegativeRadicand {
                wavelength: wavelength.to_f64().unwrap_or(f64::NAN),
                radicand: radicand.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(radicand.sqrt())
    }
}
