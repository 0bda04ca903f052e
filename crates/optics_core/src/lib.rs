//! # optics_core: Numerical Foundation for SHG Phase Matching
//!
//! ## Layer 1 (Foundation) Role
//!
//! optics_core serves as the bottom layer of the workspace, providing:
//! - Sellmeier dispersion models and crystal coefficient records (`dispersion`)
//! - Derivative-free minimisation and solver configuration (`math::solvers`)
//! - Error types: `DomainError`, `SolverError` (`types::error`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use optics_core::dispersion::Crystal;
//! use optics_core::math::solvers::{NelderMeadSolver, SolverConfig};
//!
//! // Refractive indices of BBO at 1 µm
//! let pair = Crystal::Bbo.indices(1.0_f64).unwrap();
//! assert!(pair.n_o > pair.n_e);
//!
//! // Local minimisation of a 1-D objective
//! let solver = NelderMeadSolver::new(SolverConfig::default());
//! let result = solver.minimise(|x: f64| (x - 2.0).abs(), 0.5).unwrap();
//! # assert!((result.x - 2.0).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for coefficients, solver configuration, and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod dispersion;
pub mod math;
pub mod types;
