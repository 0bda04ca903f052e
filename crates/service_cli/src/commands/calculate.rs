//! Calculate command implementation
//!
//! Solves the phase-matching angle for a single wavelength and input angle.

use std::io::Write;

use optics_phasematch::{PhaseMatchCalculator, PhaseMatchInput, PhaseMatchScheme};
use tracing::{info, warn};

use super::{build_calculator, parse_schemes};
use crate::config::CliConfig;
use crate::Result;

/// Run the calculate command
pub fn run(config: &CliConfig, wavelength: f64, angle: f64, scheme: &str) -> Result<()> {
    info!("Calculating phase-matching angle...");
    info!("  Wavelength: {} µm", wavelength);
    info!("  Input angle: {}°", angle);
    info!("  Scheme: {}", scheme);

    let schemes = parse_schemes(scheme)?;
    let calculator = build_calculator(config)?;
    let input = PhaseMatchInput::new(wavelength, angle)?;

    let text = render(&calculator, &input, &schemes, config.output.precision);
    writeln!(std::io::stdout().lock(), "{}", text)?;

    info!("Calculation complete");
    Ok(())
}

/// One line per scheme: the angle on success, the reason otherwise.
///
/// A failure of one scheme does not suppress the others.
pub fn render(
    calculator: &PhaseMatchCalculator,
    input: &PhaseMatchInput,
    schemes: &[PhaseMatchScheme],
    precision: usize,
) -> String {
    schemes
        .iter()
        .map(|&scheme| match calculator.solve(scheme, input) {
            Ok(result) => format!(
                "{} - theta_p = {:.*} degrees",
                result.scheme, precision, result.theta_p_degrees
            ),
            Err(err) => {
                warn!(%scheme, kind = err.category(), "No phase matching");
                format!("{} - no phase matching: {}", scheme, err)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_normal_incidence() {
        let calculator = PhaseMatchCalculator::default();
        let input = PhaseMatchInput::new(1.064, 0.0).unwrap();
        let text = render(&calculator, &input, &PhaseMatchScheme::ALL, 2);
        assert_eq!(
            text,
            "Type I - theta_p = 23.24 degrees\nType II - theta_p = 34.24 degrees"
        );
    }

    #[test]
    fn test_render_precision() {
        let calculator = PhaseMatchCalculator::default();
        let input = PhaseMatchInput::new(1.064, 0.0).unwrap();
        let text = render(&calculator, &input, &[PhaseMatchScheme::TypeI], 4);
        assert_eq!(text, "Type I - theta_p = 23.2370 degrees");
    }

    #[test]
    fn test_render_reports_each_failure() {
        let calculator = PhaseMatchCalculator::default();
        let input = PhaseMatchInput::new(1.064, 45.0).unwrap();
        let text = render(&calculator, &input, &PhaseMatchScheme::ALL, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Type I - no phase matching: No phase-matching solution"));
        assert!(lines[1].starts_with("Type II - no phase matching: Residual"));
    }
}
