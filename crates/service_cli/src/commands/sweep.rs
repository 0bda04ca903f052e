//! Sweep command implementation
//!
//! Tabulates the phase-matching angle over an evenly spaced wavelength grid.

use std::io::Write;

use optics_phasematch::{sweep, PhaseMatchCalculator, PhaseMatchScheme, WavelengthGrid};
use serde::Serialize;
use tracing::info;

use super::{build_calculator, parse_schemes};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Sweep output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Table,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// One serialised sweep row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    /// Fundamental wavelength (µm)
    pub wavelength: f64,
    /// Scheme label
    pub scheme: String,
    /// Phase-matching angle, when one was found
    pub theta_p_degrees: Option<f64>,
    /// Failure message, when none was found
    pub error: Option<String>,
    /// Failure category
    pub error_kind: Option<&'static str>,
}

/// Run the sweep command
#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &CliConfig,
    from: f64,
    to: f64,
    points: usize,
    angle: f64,
    scheme: &str,
    format: &str,
) -> Result<()> {
    info!("Starting wavelength sweep...");
    info!("  Range: {} - {} µm ({} points)", from, to, points);
    info!("  Input angle: {}°", angle);
    info!("  Scheme: {}", scheme);
    info!("  Output format: {}", format);

    let format: OutputFormat = format.parse()?;
    let schemes = parse_schemes(scheme)?;
    let grid = WavelengthGrid::new(from, to, points)?;
    let calculator = build_calculator(config)?;

    let rows = collect_rows(&calculator, &grid, angle, &schemes)?;
    let solved = rows.iter().filter(|r| r.theta_p_degrees.is_some()).count();

    let text = match format {
        OutputFormat::Table => render_table(&rows, config.output.precision),
        OutputFormat::Json => render_json(&rows)?,
        OutputFormat::Csv => render_csv(&rows)?,
    };
    write!(std::io::stdout().lock(), "{}", text)?;

    info!("Sweep complete: {}/{} rows solved", solved, rows.len());
    Ok(())
}

/// Evaluate every scheme over the grid, grouped by scheme then wavelength.
pub fn collect_rows(
    calculator: &PhaseMatchCalculator,
    grid: &WavelengthGrid,
    angle: f64,
    schemes: &[PhaseMatchScheme],
) -> Result<Vec<SweepRow>> {
    let mut rows = Vec::with_capacity(grid.len() * schemes.len());

    for &scheme in schemes {
        for point in sweep(calculator, grid, angle, scheme)? {
            let row = match point.outcome {
                Ok(result) => SweepRow {
                    wavelength: point.wavelength,
                    scheme: scheme.to_string(),
                    theta_p_degrees: Some(result.theta_p_degrees),
                    error: None,
                    error_kind: None,
                },
                Err(err) => SweepRow {
                    wavelength: point.wavelength,
                    scheme: scheme.to_string(),
                    theta_p_degrees: None,
                    error: Some(err.to_string()),
                    error_kind: Some(err.category()),
                },
            };
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Render rows as an aligned table.
pub fn render_table(rows: &[SweepRow], precision: usize) -> String {
    let mut out = format!("{:>12}  {:<8}  {:>12}\n", "lambda (um)", "scheme", "theta_p (deg)");
    for row in rows {
        let theta = match (row.theta_p_degrees, row.error_kind) {
            (Some(theta), _) => format!("{:.*}", precision, theta),
            (None, Some(kind)) => format!("- ({})", kind),
            (None, None) => "-".to_string(),
        };
        out.push_str(&format!(
            "{:>12.4}  {:<8}  {:>12}\n",
            row.wavelength, row.scheme, theta
        ));
    }
    out
}

/// Render rows as a pretty-printed JSON array.
pub fn render_json(rows: &[SweepRow]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(rows)?;
    json.push('\n');
    Ok(json)
}

/// Render rows as CSV with a header row.
pub fn render_csv(rows: &[SweepRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
