//! SHG CLI - Phase-Matching Angles for Second-Harmonic Generation
//!
//! Command-line front end for the BBO phase-matching solvers.
//!
//! # Commands
//!
//! - `shg calculate --wavelength <um> --angle <deg>` - Solve one input
//! - `shg sweep --from <um> --to <um> --points <n> --angle <deg>` - Tuning curve
//! - `shg check` - Show crystal coefficients and effective configuration
//!
//! Settings come from `shg.toml` (see [`config::CliConfig`]) with `SHG_*`
//! environment overrides. Logs go to stderr so JSON and CSV output on
//! stdout stay machine-readable.

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::CliConfig;

/// SHG phase-matching calculator
#[derive(Parser)]
#[command(name = "shg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "shg.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the phase-matching angle for one wavelength
    Calculate {
        /// Fundamental wavelength in micrometres [0.1, 10]
        #[arg(short, long)]
        wavelength: f64,

        /// Input angle in degrees [0, 90]
        #[arg(short, long, default_value = "0")]
        angle: f64,

        /// Scheme (type1, type2, both)
        #[arg(short, long, default_value = "both")]
        scheme: String,
    },

    /// Tabulate phase-matching angles over a wavelength range
    Sweep {
        /// First wavelength in micrometres
        #[arg(long)]
        from: f64,

        /// Last wavelength in micrometres
        #[arg(long)]
        to: f64,

        /// Number of grid points
        #[arg(short, long, default_value = "17")]
        points: usize,

        /// Input angle in degrees [0, 90]
        #[arg(short, long, default_value = "0")]
        angle: f64,

        /// Scheme (type1, type2, both)
        #[arg(short, long, default_value = "both")]
        scheme: String,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check crystal data and effective configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(Path::new(&cli.config))
        .with_context(|| format!("failed to load configuration from {}", cli.config))?
        .with_env_override();
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Calculate {
            wavelength,
            angle,
            scheme,
        } => commands::calculate::run(&config, wavelength, angle, &scheme)
            .context("calculate failed")?,
        Commands::Sweep {
            from,
            to,
            points,
            angle,
            scheme,
            format,
        } => commands::sweep::run(&config, from, to, points, angle, &scheme, &format)
            .context("sweep failed")?,
        Commands::Check => commands::check::run(&config).context("check failed")?,
    }

    Ok(())
}

/// `--verbose` forces debug; otherwise `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
