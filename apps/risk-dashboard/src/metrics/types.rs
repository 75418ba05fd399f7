//! Core types for risk metrics.

use serde::{Deserialize, Serialize};

/// Sharpe ratio with its one-sided significance test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharpeResult {
    /// Per-period Sharpe ratio.
    pub sharpe: f64,
    /// Probability of a Sharpe at least this large under H0: Sharpe <= 0.
    pub p_value: f64,
    /// Test statistic (sharpe / standard error).
    pub z_score: f64,
    /// Asymptotic standard error of the Sharpe estimate.
    pub standard_error: f64,
    /// Number of observations the estimate is based on.
    pub observations: usize,
}

impl SharpeResult {
    /// Whether the Sharpe ratio is significantly positive at `alpha`.
    #[must_use]
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Drawdown tracking point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    /// Compounded growth of one unit up to and including this period.
    pub cumulative: f64,
    /// Running maximum of `cumulative`.
    pub peak: f64,
    /// Fractional decline from the peak (non-positive, e.g. -0.10 = 10% below peak).
    pub drawdown: f64,
}

impl DrawdownPoint {
    /// Whether this period sets a new running high.
    #[must_use]
    pub fn is_at_peak(&self) -> bool {
        self.drawdown == 0.0
    }
}
