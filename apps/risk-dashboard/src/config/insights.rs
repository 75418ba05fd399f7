//! Thresholds for the automated strategy insights.

use serde::{Deserialize, Serialize};

/// Insight classification thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Sharpe ratio a strategy must exceed to count as strong.
    #[serde(default = "default_strong_sharpe")]
    pub strong_sharpe: f64,
    /// p-value cut-off for statistical significance.
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
    /// Max drawdown a strong strategy must stay above.
    #[serde(default = "default_stable_drawdown")]
    pub stable_drawdown: f64,
    /// Max drawdown below which drawdown risk is flagged.
    #[serde(default = "default_high_drawdown")]
    pub high_drawdown: f64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            strong_sharpe: default_strong_sharpe(),
            significance_level: default_significance_level(),
            stable_drawdown: default_stable_drawdown(),
            high_drawdown: default_high_drawdown(),
        }
    }
}

const fn default_strong_sharpe() -> f64 {
    1.0
}

const fn default_significance_level() -> f64 {
    0.05
}

const fn default_stable_drawdown() -> f64 {
    -0.2
}

const fn default_high_drawdown() -> f64 {
    -0.3
}
