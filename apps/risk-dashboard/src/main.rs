//! Risk Dashboard Binary
//!
//! Loads strategy returns, builds the dashboard report and writes the
//! report, charts and filtered CSV to the output directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin risk-dashboard -- [CONFIG_PATH]
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Config path when none is given (default: dashboard.yaml)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`

use std::path::Path;

use anyhow::{Context, Result};
use risk_dashboard::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use risk_dashboard::dashboard::Dashboard;
use risk_dashboard::data::load_returns_csv;
use risk_dashboard::output::write_artifacts;
use risk_dashboard::telemetry::init_tracing;

fn main() -> Result<()> {
    load_dotenv();

    let config = resolve_config()?;
    init_tracing(&config.observability.logging);

    tracing::info!(
        data_path = %config.data.path,
        output_dir = %config.output.directory,
        "Starting risk dashboard"
    );

    let table = load_returns_csv(&config.data.path, &config.data.date_column)
        .with_context(|| format!("failed to load returns from '{}'", config.data.path))?;

    let filtered = config
        .filter
        .apply(&table)
        .context("invalid filter selection")?;

    let report = Dashboard::from_config(&config)
        .analyze(&filtered)
        .context("failed to build dashboard report")?;

    for line in report.summary_lines() {
        println!("{line}");
    }

    let written = write_artifacts(&report, &filtered, &config.output)
        .context("failed to write dashboard artifacts")?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    tracing::info!("Risk dashboard finished");
    Ok(())
}

/// Load `.env` from the current or an ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Config from the first CLI argument, `$DASHBOARD_CONFIG`, or
/// `dashboard.yaml`. A missing default file falls back to built-in defaults.
fn resolve_config() -> Result<Config> {
    let explicit = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DASHBOARD_CONFIG").ok().filter(|v| !v.is_empty()));

    match explicit {
        Some(path) => load_config(Some(path.as_str()))
            .with_context(|| format!("failed to load config '{path}'")),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None)
            .with_context(|| format!("failed to load config '{DEFAULT_CONFIG_PATH}'")),
        None => Ok(Config::default()),
    }
}
