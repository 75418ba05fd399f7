// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_range_loop,
        clippy::items_after_statements
    )
)]

//! Risk Dashboard - Strategy Return Analytics
//!
//! Loads periodic strategy returns, filters them by date range and strategy,
//! and reports risk metrics with rendered charts.
//!
//! # Modules
//!
//! - `metrics`: Sharpe ratio, Sharpe significance, drawdown (pure functions on `&[f64]`)
//! - `correlation`: Pairwise Pearson correlation matrix
//! - `data`: Return series and tables, filtering, CSV load/export
//! - `dashboard`: Overview, per-strategy risk, insights, report assembly
//! - `render`: SVG heatmap and drawdown charts, console formatting
//! - `output`: Writing the report, charts and filtered CSV
//! - `config`: YAML configuration with environment interpolation
//! - `telemetry`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use risk_dashboard::{Dashboard, TableFilter, load_returns_csv};
//!
//! let table = load_returns_csv("data/strategies.csv", "Date")?;
//! let report = Dashboard::default().build_report(&table, &TableFilter::all())?;
//! println!("{}", report.to_json()?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Typed analytics errors.
pub mod error;

/// Risk metrics.
pub mod metrics;

/// Correlation matrix.
pub mod correlation;

/// Return data model and CSV I/O.
pub mod data;

/// Report orchestration.
pub mod dashboard;

/// Chart rendering and formatting.
pub mod render;

/// Artifact output.
pub mod output;

/// Configuration loading.
pub mod config;

/// Tracing setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Config, ConfigError, load_config, load_config_from_string};
pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use dashboard::{Dashboard, DashboardReport, Insight, InsightKind, StrategyRisk};
pub use data::{
    DataError, DrawdownSeries, ReturnSeries, ReturnTable, TableFilter, export_returns_csv,
    load_returns_csv,
};
pub use error::{AnalyticsError, ErrorCode, ErrorReport};
pub use metrics::{SharpeResult, drawdown, max_drawdown, sharpe_ratio, sharpe_significance};
pub use output::{OutputError, write_artifacts};
