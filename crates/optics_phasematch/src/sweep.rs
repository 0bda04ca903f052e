//! Wavelength sweeps (tuning curves).
//!
//! Each grid point is an independent, stateless solver call, so the sweep
//! fans out over rayon when the `parallel` feature is enabled. Output order
//! always follows the grid.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::calculator::PhaseMatchCalculator;
use crate::error::PhaseMatchError;
use crate::input::{PhaseMatchInput, WAVELENGTH_MAX, WAVELENGTH_MIN};
use crate::result::{PhaseMatchResult, PhaseMatchScheme};

/// Evenly spaced fundamental wavelengths, both ends included.
///
/// # Example
///
/// ```
/// use optics_phasematch::WavelengthGrid;
///
/// let grid = WavelengthGrid::new(0.5, 1.5, 3).unwrap();
/// assert_eq!(grid.values(), vec![0.5, 1.0, 1.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WavelengthGrid {
    start: f64,
    end: f64,
    points: usize,
}

impl WavelengthGrid {
    /// Create a grid over `[start, end]` with `points` samples.
    ///
    /// # Errors
    ///
    /// - `InputRange` if either end lies outside the accepted wavelength range
    /// - `InvalidConfig` if `points == 0`, `start > end`, or `points == 1`
    ///   with `start != end`
    pub fn new(start: f64, end: f64, points: usize) -> Result<Self, PhaseMatchError> {
        for (name, value) in [("start", start), ("end", end)] {
            if !(WAVELENGTH_MIN..=WAVELENGTH_MAX).contains(&value) {
                return Err(PhaseMatchError::input_range(
                    format!("sweep {}", name),
                    value,
                    WAVELENGTH_MIN,
                    WAVELENGTH_MAX,
                ));
            }
        }
        if points == 0 {
            return Err(PhaseMatchError::invalid_config("sweep needs at least one point"));
        }
        if start > end {
            return Err(PhaseMatchError::invalid_config(format!(
                "sweep start {} exceeds end {}",
                start, end
            )));
        }
        if points == 1 && start != end {
            return Err(PhaseMatchError::invalid_config(
                "a single-point sweep needs start == end",
            ));
        }
        Ok(Self { start, end, points })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points
    }

    /// Always `false`; a grid holds at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The sample wavelengths in ascending order.
    pub fn values(&self) -> Vec<f64> {
        if self.points == 1 {
            return vec![self.start];
        }
        let step = (self.end - self.start) / (self.points - 1) as f64;
        (0..self.points)
            .map(|i| {
                if i == self.points - 1 {
                    self.end
                } else {
                    self.start + step * i as f64
                }
            })
            .collect()
    }
}

/// One row of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Fundamental wavelength (µm)
    pub wavelength: f64,
    /// Solver outcome at that wavelength
    pub outcome: Result<PhaseMatchResult, PhaseMatchError>,
}

/// Solve `scheme` at every grid wavelength for a fixed `oa`.
///
/// # Errors
///
/// `InputRange` if `angle_degrees` is outside `[0°, 90°]`. Per-point
/// failures are reported in each [`SweepPoint::outcome`].
pub fn sweep(
    calculator: &PhaseMatchCalculator,
    grid: &WavelengthGrid,
    angle_degrees: f64,
    scheme: PhaseMatchScheme,
) -> Result<Vec<SweepPoint>, PhaseMatchError> {
    // Validate the angle once, up front
    PhaseMatchInput::new(grid.start, angle_degrees)?;

    let solve_point = |wavelength: f64| SweepPoint {
        wavelength,
        outcome: PhaseMatchInput::new(wavelength, angle_degrees)
            .and_then(|input| calculator.solve(scheme, &input)),
    };

    let wavelengths = grid.values();

    #[cfg(feature = "parallel")]
    let points: Vec<SweepPoint> = wavelengths.into_par_iter().map(solve_point).collect();

    #[cfg(not(feature = "parallel"))]
    let points: Vec<SweepPoint> = wavelengths.into_iter().map(solve_point).collect();

    debug!(
        scheme = %scheme,
        angle = angle_degrees,
        points = points.len(),
        solved = points.iter().filter(|p| p.outcome.is_ok()).count(),
        "sweep finished"
    );

    Ok(points)
}
