//! Serializable dashboard report.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::insights::Insight;
use super::overview::Overview;
use crate::correlation::CorrelationMatrix;
use crate::data::DrawdownSeries;
use crate::error::{AnalyticsError, ErrorReport};
use crate::metrics::SharpeResult;
use crate::render::{format_p_value, format_pct, format_ratio};

/// A computed value, or the reason it could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    /// Computed value.
    Value(T),
    /// Failure recorded in place of the value.
    Error(ErrorReport),
}

impl<T> Outcome<T> {
    /// Computed value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Error(_) => None,
        }
    }

    /// Recorded failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorReport> {
        match self {
            Self::Value(_) => None,
            Self::Error(e) => Some(e),
        }
    }
}

impl<T> From<Result<T, AnalyticsError>> for Outcome<T> {
    fn from(result: Result<T, AnalyticsError>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(e) => Self::Error(e.to_report()),
        }
    }
}

/// Date range and strategies the report was computed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    /// Inclusive start date.
    pub start_date: NaiveDate,
    /// Inclusive end date.
    pub end_date: NaiveDate,
    /// Selected strategies, in display order.
    pub strategies: Vec<String>,
}

/// Risk metrics of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRisk {
    /// Strategy name.
    pub strategy: String,
    /// Number of observations.
    pub observations: usize,
    /// Sharpe ratio with its significance test.
    pub sharpe: Outcome<SharpeResult>,
    /// Sharpe ratio scaled by sqrt(periods per year), for display.
    pub annualized_sharpe: Option<f64>,
    /// Deepest drawdown.
    pub max_drawdown: Outcome<f64>,
    /// Date of the deepest drawdown.
    pub trough_date: Option<NaiveDate>,
}

impl StrategyRisk {
    /// Console line in the form `Momentum -> Sharpe: 0.89, p-value: 0.0465`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let sharpe = match &self.sharpe {
            Outcome::Value(s) => format!(
                "Sharpe: {}, p-value: {}",
                format_ratio(s.sharpe),
                format_p_value(s.p_value)
            ),
            Outcome::Error(e) => format!("Sharpe unavailable ({})", e.message),
        };
        let drawdown = match &self.max_drawdown {
            Outcome::Value(mdd) => format!("Max drawdown: {}", format_pct(*mdd)),
            Outcome::Error(e) => format!("Max drawdown unavailable ({})", e.message),
        };
        format!("{} -> {sharpe}, {drawdown}", self.strategy)
    }
}

/// Everything the dashboard shows for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
    /// Selection the report covers.
    pub filter: AppliedFilter,
    /// Headline figures.
    pub overview: Overview,
    /// Per-strategy risk metrics, in selection order.
    pub risk: Vec<StrategyRisk>,
    /// Per-strategy insights, in selection order.
    pub insights: Vec<Insight>,
    /// Pairwise correlation of the selection.
    pub correlation: Outcome<CorrelationMatrix>,
    /// Drawdown curves of strategies where drawdown is defined.
    pub drawdowns: Vec<DrawdownSeries>,
}

impl DashboardReport {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Risk metrics of one strategy.
    #[must_use]
    pub fn risk_for(&self, strategy: &str) -> Option<&StrategyRisk> {
        self.risk.iter().find(|r| r.strategy == strategy)
    }

    /// Insight for one strategy.
    #[must_use]
    pub fn insight_for(&self, strategy: &str) -> Option<&Insight> {
        self.insights.iter().find(|i| i.strategy == strategy)
    }

    /// Drawdown curve of one strategy.
    #[must_use]
    pub fn drawdown_for(&self, strategy: &str) -> Option<&DrawdownSeries> {
        self.drawdowns.iter().find(|d| d.name == strategy)
    }

    /// Console lines: overview, one risk line per strategy, then insights.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let o = &self.overview;
        let mut lines = vec![
            format!(
                "Strategies: {}, Start: {}, End: {}, Observations: {}",
                o.total_strategies, o.start_date, o.end_date, o.observations
            ),
            format!("Best Strategy: {}", o.best_strategy),
            format!("Worst Strategy: {}", o.worst_strategy),
        ];
        lines.extend(self.risk.iter().map(StrategyRisk::summary_line));
        lines.extend(
            self.insights
                .iter()
                .map(|i| format!("{}: {}", i.strategy, i.message)),
        );
        if let Outcome::Error(e) = &self.correlation {
            lines.push(format!("Correlation unavailable: {}", e.message));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        let ok: Outcome<f64> = Ok(1.5).into();
        assert_eq!(ok.value(), Some(&1.5));
        assert!(ok.error().is_none());

        let err: Outcome<f64> = Err(AnalyticsError::zero_variance("sharpe_ratio")).into();
        let Some(report) = err.error() else {
            panic!("error outcome");
        };
        assert_eq!(report.code, "DEGENERATE_COMPUTATION");
        assert!(err.value().is_none());
    }

    #[test]
    fn test_outcome_serialization() {
        let ok: Outcome<f64> = Outcome::Value(-0.02);
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"value":-0.02}"#);

        let err: Outcome<f64> = Err(AnalyticsError::invalid_input("empty")).into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
    }

    #[test]
    fn test_summary_line() {
        let risk = StrategyRisk {
            strategy: "Momentum".to_string(),
            observations: 5,
            sharpe: Outcome::Value(SharpeResult {
                sharpe: 0.886_405_260_427_918_2,
                p_value: 0.046_533_332_406_962_835,
                z_score: 1.679_438_245_519_263,
                standard_error: 0.527_8,
                observations: 5,
            }),
            annualized_sharpe: Some(14.07),
            max_drawdown: Outcome::Value(-0.02),
            trough_date: None,
        };
        assert_eq!(
            risk.summary_line(),
            "Momentum -> Sharpe: 0.89, p-value: 0.0465, Max drawdown: -2.00%"
        );
    }
}
