//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Rendering is kept
//! separate from printing so output can be checked in tests.

pub mod calculate;
pub mod check;
pub mod sweep;

use optics_phasematch::{PhaseMatchCalculator, PhaseMatchScheme};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Resolve a `--scheme` argument; `both` selects every scheme.
pub fn parse_schemes(scheme: &str) -> Result<Vec<PhaseMatchScheme>> {
    if scheme.eq_ignore_ascii_case("both") {
        return Ok(PhaseMatchScheme::ALL.to_vec());
    }
    scheme
        .parse::<PhaseMatchScheme>()
        .map(|s| vec![s])
        .map_err(|msg| CliError::InvalidArgument(format!("{}, both", msg)))
}

/// Build a calculator for the configured crystal and solver settings.
pub fn build_calculator(config: &CliConfig) -> Result<PhaseMatchCalculator> {
    Ok(PhaseMatchCalculator::for_crystal(
        config.crystal()?,
        config.type_ii_config(),
    ))
}
