//! CLI error types.

use optics_phasematch::PhaseMatchError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A request-level phase-matching failure (bad input or configuration)
    #[error("Phase-matching error: {0}")]
    PhaseMatch(#[from] PhaseMatchError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to write output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
