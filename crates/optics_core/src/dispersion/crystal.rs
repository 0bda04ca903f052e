//! Crystal coefficient records and index evaluation.

use std::fmt;
use std::str::FromStr;

use super::SellmeierCoefficients;
use crate::types::DomainError;
use num_traits::Float;

/// Ordinary and extraordinary refractive indices at one wavelength.
///
/// Computed fresh per evaluation; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefractiveIndexPair<T> {
    /// Ordinary index `n_o`
    pub n_o: T,
    /// Extraordinary index `n_e`
    pub n_e: T,
}

impl<T: Float> RefractiveIndexPair<T> {
    /// Birefringence `n_e − n_o` (negative for negative uniaxial crystals).
    pub fn birefringence(&self) -> T {
        self.n_e - self.n_o
    }

    /// Extraordinary-wave index at angle `theta` (radians) to the optic axis.
    ///
    /// `n(θ) = n_o·n_e / sqrt(n_e²·cos²θ + n_o²·sin²θ)`
    pub fn index_at_angle(&self, theta: T) -> T {
        let (s, c) = theta.sin_cos();
        let no2 = self.n_o * self.n_o;
        let ne2 = self.n_e * self.n_e;
        (no2 * ne2 / (ne2 * c * c + no2 * s * s)).sqrt()
    }
}

/// Immutable dispersion record for one uniaxial crystal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UniaxialCrystal {
    /// Display name of the material
    pub name: &'static str,
    /// Sellmeier coefficients of the ordinary ray
    pub ordinary: SellmeierCoefficients,
    /// Sellmeier coefficients of the extraordinary ray
    pub extraordinary: SellmeierCoefficients,
}

/// β-barium borate.
pub const BBO: UniaxialCrystal = UniaxialCrystal {
    name: "BBO",
    ordinary: SellmeierCoefficients::new(2.7405, 0.0184, 0.0179, 0.0155),
    extraordinary: SellmeierCoefficients::new(2.3753, 0.01224, 0.01667, 0.01516),
};

impl UniaxialCrystal {
    /// Ordinary index `n_o(λ)`.
    pub fn index_ordinary<T: Float>(&self, wavelength: T) -> Result<T, DomainError> {
        self.ordinary.index(wavelength)
    }

    /// Extraordinary index `n_e(λ)`.
    pub fn index_extraordinary<T: Float>(&self, wavelength: T) -> Result<T, DomainError> {
        self.extraordinary.index(wavelength)
    }

    /// Both principal indices at `wavelength`.
    pub fn indices<T: Float>(&self, wavelength: T) -> Result<RefractiveIndexPair<T>, DomainError> {
        Ok(RefractiveIndexPair {
            n_o: self.index_ordinary(wavelength)?,
            n_e: self.index_extraordinary(wavelength)?,
        })
    }
}

/// Shipped crystal materials.
///
/// # Examples
/// ```
/// use optics_core::dispersion::Crystal;
///
/// let crystal: Crystal = "bbo".parse().unwrap();
/// assert_eq!(crystal, Crystal::Bbo);
/// assert_eq!(crystal.record().name, "BBO");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Crystal {
    /// β-barium borate
    #[default]
    Bbo,
}

impl Crystal {
    /// All shipped materials.
    pub const ALL: [Crystal; 1] = [Crystal::Bbo];

    /// The coefficient record of this material.
    pub fn record(self) -> &'static UniaxialCrystal {
        match self {
            Crystal::Bbo => &BBO,
        }
    }

    /// Both principal indices at `wavelength`.
    pub fn indices<T: Float>(self, wavelength: T) -> Result<RefractiveIndexPair<T>, DomainError> {
        self.record().indices(wavelength)
    }
}

impl fmt::Display for Crystal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record().name)
    }
}

impl FromStr for Crystal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bbo" | "beta-bbo" => Ok(Crystal::Bbo),
            other => Err(format!("Unknown crystal: {}. Supported: bbo", other)),
        }
    }
}

/// Ordinary index of BBO at `wavelength` (µm).
pub fn index_ordinary<T: Float>(wavelength: T) -> Result<T, DomainError> {
    BBO.index_ordinary(wavelength)
}

/// Extraordinary index of BBO at `wavelength` (µm).
pub fn index_extraordinary<T: Float>(wavelength: T) -> Result<T, DomainError> {
    BBO.index_extraordinary(wavelength)
}
