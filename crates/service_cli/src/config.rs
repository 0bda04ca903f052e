//! CLI configuration management.
//!
//! Loads `shg.toml` (or the file named by `--config`), falling back to
//! defaults when the file does not exist, then applies `SHG_*`
//! environment variable overrides.
//!
//! ```toml
//! log_level = "info"
//!
//! [solver]
//! residual_tolerance = 1e-4
//! solver_tolerance = 1e-10
//! max_iterations = 200
//! initial_guess = 0.5
//!
//! [output]
//! precision = 2
//! ```

use std::path::Path;

use optics_core::dispersion::Crystal;
use optics_phasematch::TypeIIConfig;
use serde::Deserialize;
use thiserror::Error;

/// Type II search settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    /// Largest residual accepted as a root
    pub residual_tolerance: f64,
    /// Simplex collapse tolerance
    pub solver_tolerance: f64,
    /// Minimiser iteration budget
    pub max_iterations: usize,
    /// Starting angle (radians)
    pub initial_guess: f64,
}

impl Default for SolverSection {
    fn default() -> Self {
        let defaults = TypeIIConfig::default();
        Self {
            residual_tolerance: defaults.residual_tolerance,
            solver_tolerance: defaults.solver.tolerance,
            max_iterations: defaults.solver.max_iterations,
            initial_guess: defaults.initial_guess,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Decimal places for angles in table output
    pub precision: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Crystal material
    pub crystal: String,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Type II search settings
    pub solver: SolverSection,
    /// Output settings
    pub output: OutputSection,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            crystal: "bbo".to_string(),
            log_level: "info".to_string(),
            solver: SolverSection::default(),
            output: OutputSection::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise return defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `SHG_*` environment variable overrides.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(crystal) = lookup("SHG_CRYSTAL") {
            self.crystal = crystal;
        }
        if let Some(tolerance) = lookup("SHG_TOLERANCE").and_then(|v| v.parse().ok()) {
            self.solver.residual_tolerance = tolerance;
        }
        if let Some(max_iterations) = lookup("SHG_MAX_ITERATIONS").and_then(|v| v.parse().ok()) {
            self.solver.max_iterations = max_iterations;
        }
        if let Some(initial_guess) = lookup("SHG_INITIAL_GUESS").and_then(|v| v.parse().ok()) {
            self.solver.initial_guess = initial_guess;
        }
        if let Some(log_level) = lookup("SHG_LOG_LEVEL") {
            self.log_level = log_level;
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if let Err(msg) = self.crystal.parse::<Crystal>() {
            errors.push(msg);
        }

        if let Err(err) = self.type_ii_config().validate() {
            errors.push(err.to_string());
        }

        if self.output.precision > 12 {
            errors.push(format!(
                "precision {} exceeds maximum allowed (12)",
                self.output.precision
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Resolve the configured crystal.
    pub fn crystal(&self) -> Result<Crystal, ConfigError> {
        self.crystal
            .parse()
            .map_err(|msg: String| ConfigError::Validation(vec![msg]))
    }

    /// Type II solver configuration derived from the `[solver]` section.
    pub fn type_ii_config(&self) -> TypeIIConfig {
        let mut config = TypeIIConfig::default()
            .with_residual_tolerance(self.solver.residual_tolerance)
            .with_max_iterations(self.solver.max_iterations)
            .with_initial_guess(self.solver.initial_guess);
        config.solver.tolerance = self.solver.solver_tolerance;
        config
    }
}

/// Configuration error type.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_validates() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.type_ii_config(), TypeIIConfig::default());
        assert_eq!(config.crystal().unwrap(), Crystal::Bbo);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml(
            r#"
            [solver]
            max_iterations = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.solver.max_iterations, 500);
        assert_eq!(config.solver.residual_tolerance, 1e-4);
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            CliConfig::from_toml("[solver\nmax_iterations = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n[output]\nprecision = 4").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output.precision, 4);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SHG_TOLERANCE", "1e-6"),
            ("SHG_MAX_ITERATIONS", "not-a-number"),
            ("SHG_LOG_LEVEL", "warn"),
        ]
        .into_iter()
        .collect();

        let config = CliConfig::default().with_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.solver.residual_tolerance, 1e-6);
        assert_eq!(config.solver.max_iterations, 200);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        config.crystal = "lbo".to_string();
        config.solver.max_iterations = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("Unknown crystal")));
                assert!(errors.iter().any(|e| e.contains("max_iterations")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
