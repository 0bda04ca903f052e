//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for dispersion evaluation and solver operations
//!
//! # Re-exports
//!
//! [`DomainError`] and [`SolverError`] are re-exported at this module level.

pub mod error;

pub use error::{DomainError, SolverError};
