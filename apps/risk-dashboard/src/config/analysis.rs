//! Metric parameters.

use serde::{Deserialize, Serialize};

use crate::metrics::TRADING_DAYS;

/// Parameters for the risk metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Per-period risk-free rate subtracted before computing the Sharpe ratio.
    #[serde(default)]
    pub risk_free_rate: f64,
    /// Periods per year used to annualize the Sharpe ratio for display.
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.0,
            periods_per_year: default_periods_per_year(),
        }
    }
}

const fn default_periods_per_year() -> f64 {
    TRADING_DAYS
}
