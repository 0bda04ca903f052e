//! Numerical methods.
//!
//! - `solvers`: Derivative-free local minimisation

pub mod solvers;
