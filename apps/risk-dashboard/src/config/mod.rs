//! Configuration module for the risk dashboard.
//!
//! Loads a YAML file with environment variable interpolation and validates
//! every section before the dashboard runs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use risk_dashboard::config::load_config;
//!
//! // Load from default path (dashboard.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/dashboard.yaml"))?;
//!
//! println!("risk-free rate: {}", config.analysis.risk_free_rate);
//! ```

mod analysis;
mod data;
mod insights;
mod observability;
mod output;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analysis::AnalysisConfig;
pub use data::DataConfig;
pub use insights::InsightsConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use output::OutputConfig;

use crate::data::TableFilter;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "dashboard.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input data configuration.
    #[serde(default)]
    pub data: DataConfig,
    /// Date range and strategy selection.
    #[serde(default)]
    pub filter: TableFilter,
    /// Metric parameters.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Insight thresholds.
    #[serde(default)]
    pub insights: InsightsConfig,
    /// Output artifacts.
    #[serde(default)]
    pub output: OutputConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "dashboard.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match cap.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` naming the first offending field.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.data.path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.path must not be empty".to_string(),
        ));
    }

    if config.data.date_column.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.date_column must not be empty".to_string(),
        ));
    }

    if let (Some(start), Some(end)) = (config.filter.start, config.filter.end)
        && start > end
    {
        return Err(ConfigError::ValidationError(format!(
            "filter.start_date ({start}) must not be after filter.end_date ({end})"
        )));
    }

    let rf = config.analysis.risk_free_rate;
    if !rf.is_finite() || !(-1.0..=1.0).contains(&rf) {
        return Err(ConfigError::ValidationError(
            "analysis.risk_free_rate must be between -1.0 and 1.0".to_string(),
        ));
    }

    let periods = config.analysis.periods_per_year;
    if !periods.is_finite() || periods <= 0.0 {
        return Err(ConfigError::ValidationError(
            "analysis.periods_per_year must be positive".to_string(),
        ));
    }

    let insights = &config.insights;
    if !insights.strong_sharpe.is_finite() {
        return Err(ConfigError::ValidationError(
            "insights.strong_sharpe must be finite".to_string(),
        ));
    }

    if !(insights.significance_level > 0.0 && insights.significance_level < 1.0) {
        return Err(ConfigError::ValidationError(
            "insights.significance_level must be between 0.0 and 1.0 (exclusive)".to_string(),
        ));
    }

    for (name, value) in [
        ("stable_drawdown", insights.stable_drawdown),
        ("high_drawdown", insights.high_drawdown),
    ] {
        if !value.is_finite() || value > 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "insights.{name} must be a non-positive fraction"
            )));
        }
    }

    if insights.high_drawdown > insights.stable_drawdown {
        return Err(ConfigError::ValidationError(
            "insights.high_drawdown must not be above insights.stable_drawdown".to_string(),
        ));
    }

    if config.output.export_file_name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "output.export_file_name must not be empty".to_string(),
        ));
    }

    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}
