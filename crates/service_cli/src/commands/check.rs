//! Check command implementation
//!
//! Prints the crystal coefficients and the effective configuration after
//! file and environment overrides.

use std::fmt::Write as _;
use std::io::Write;

use optics_core::dispersion::{SellmeierCoefficients, POLE_TOLERANCE};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    let text = render(config)?;
    write!(std::io::stdout().lock(), "{}", text)?;
    info!("Configuration OK");
    Ok(())
}

/// Describe the crystal and effective settings.
pub fn render(config: &CliConfig) -> Result<String> {
    let crystal = config.crystal()?.record();
    let type_ii = config.type_ii_config();

    let mut out = String::new();
    let _ = writeln!(out, "Crystal: {}", crystal.name);
    let _ = writeln!(out, "  n^2 = A + B/(lambda^2 - C) - D*lambda^2   (lambda in um)");
    let _ = writeln!(out, "  ordinary:      {}", coefficients(&crystal.ordinary));
    let _ = writeln!(out, "  extraordinary: {}", coefficients(&crystal.extraordinary));
    let _ = writeln!(out, "  pole tolerance: {:e}", POLE_TOLERANCE);
    let _ = writeln!(out, "Type II search:");
    let _ = writeln!(out, "  initial guess:      {} rad", type_ii.initial_guess);
    let _ = writeln!(out, "  residual tolerance: {:e}", type_ii.residual_tolerance);
    let _ = writeln!(out, "  solver tolerance:   {:e}", type_ii.solver.tolerance);
    let _ = writeln!(out, "  max iterations:     {}", type_ii.solver.max_iterations);
    let _ = writeln!(out, "Output:");
    let _ = writeln!(out, "  precision: {}", config.output.precision);
    let _ = writeln!(out, "  log level: {}", config.log_level);
    Ok(out)
}

fn coefficients(c: &SellmeierCoefficients) -> String {
    format!("A={} B={} C={} D={}", c.a, c.b, c.c, c.d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let text = render(&CliConfig::default()).unwrap();
        assert!(text.starts_with("Crystal: BBO\n"));
        assert!(text.contains("ordinary:      A=2.7405 B=0.0184 C=0.0179 D=0.0155"));
        assert!(text.contains("extraordinary: A=2.3753 B=0.01224 C=0.01667 D=0.01516"));
        assert!(text.contains("residual tolerance: 1e-4"));
        assert!(text.contains("max iterations:     200"));
        assert!(text.contains("log level: info"));
    }

    #[test]
    fn test_render_reflects_overrides() {
        let mut config = CliConfig::default();
        config.solver.max_iterations = 750;
        config.output.precision = 5;
        let text = render(&config).unwrap();
        assert!(text.contains("max iterations:     750"));
        assert!(text.contains("precision: 5"));
    }

    #[test]
    fn test_unknown_crystal_fails() {
        let mut config = CliConfig::default();
        config.crystal = "kdp".to_string();
        assert!(render(&config).is_err());
    }
}
