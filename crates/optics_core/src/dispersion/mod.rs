//! Refractive index dispersion for uniaxial nonlinear crystals.
//!
//! This module provides:
//! - [`SellmeierCoefficients`]: One fitted relation `n² = A + B/(λ² − C) − D·λ²`
//! - [`UniaxialCrystal`]: Immutable per-material record of ordinary and
//!   extraordinary coefficients
//! - [`Crystal`]: Lookup table of the shipped materials
//! - [`RefractiveIndexPair`]: `(n_o, n_e)` at one wavelength
//!
//! Wavelengths are in micrometres, matching the fitted constants.
//!
//! ## Example
//!
//! ```
//! use optics_core::dispersion::{index_extraordinary, index_ordinary};
//!
//! let n_o = index_ordinary(1.064_f64).unwrap();
//! let n_e = index_extraordinary(1.064_f64).unwrap();
//! assert!(n_o > n_e); // BBO is negative uniaxial
//! ```

mod crystal;
mod sellmeier;

pub use crystal::{index_extraordinary, index_ordinary, Crystal, RefractiveIndexPair, UniaxialCrystal, BBO};
pub use sellmeier::{SellmeierCoefficients, POLE_TOLERANCE};
