//! Single-strategy return and drawdown series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::metrics::{self, SharpeResult};

/// Periodic fractional returns of one strategy, indexed by date.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    name: String,
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Create a series, checking alignment and date ordering.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `dates` and `values` differ in length or the dates
    /// are not strictly increasing.
    pub fn new(
        name: impl Into<String>,
        dates: Vec<NaiveDate>,
        values: Vec<f64>,
    ) -> Result<Self, AnalyticsError> {
        let name = name.into();
        if dates.len() != values.len() {
            return Err(AnalyticsError::invalid_input(format!(
                "series '{name}' has {} dates but {} values",
                dates.len(),
                values.len()
            ))
            .with_context("strategy", name));
        }
        validate_index(&dates)?;
        Ok(Self {
            name,
            dates,
            values,
        })
    }

    /// Strategy name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date index.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Return values, aligned with [`Self::dates`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean return.
    #[must_use]
    pub fn mean_return(&self) -> Option<f64> {
        metrics::mean(&self.values)
    }

    /// Sharpe ratio against a per-period risk-free rate.
    ///
    /// # Errors
    ///
    /// See [`metrics::sharpe_ratio`].
    pub fn sharpe_ratio(&self, risk_free_rate: f64) -> Result<f64, AnalyticsError> {
        metrics::sharpe_ratio(&self.values, risk_free_rate)
            .map_err(|e| e.with_context("strategy", self.name.as_str()))
    }

    /// Sharpe ratio with its one-sided p-value.
    ///
    /// # Errors
    ///
    /// See [`metrics::sharpe_significance_with_rate`].
    pub fn sharpe_significance(&self, risk_free_rate: f64) -> Result<SharpeResult, AnalyticsError> {
        metrics::sharpe_significance_with_rate(&self.values, risk_free_rate)
            .map_err(|e| e.with_context("strategy", self.name.as_str()))
    }

    /// Drawdown series on the same date index.
    ///
    /// # Errors
    ///
    /// See [`metrics::drawdown`].
    pub fn drawdown(&self) -> Result<DrawdownSeries, AnalyticsError> {
        let values = metrics::drawdown(&self.values)
            .map_err(|e| e.with_context("strategy", self.name.as_str()))?;
        Ok(DrawdownSeries {
            name: self.name.clone(),
            dates: self.dates.clone(),
            values,
        })
    }
}

/// Fractional decline from the running peak, aligned with its return series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownSeries {
    /// Strategy name.
    pub name: String,
    /// Date index shared with the source returns.
    pub dates: Vec<NaiveDate>,
    /// Non-positive drawdown values.
    pub values: Vec<f64>,
}

impl DrawdownSeries {
    /// Deepest drawdown (`<= 0`).
    #[must_use]
    pub fn max_drawdown(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::min)
    }

    /// Date and depth of the deepest drawdown.
    #[must_use]
    pub fn trough(&self) -> Option<(NaiveDate, f64)> {
        self.dates
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Iterate `(date, drawdown)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// Check that a date index is strictly increasing.
pub(crate) fn validate_index(dates: &[NaiveDate]) -> Result<(), AnalyticsError> {
    if let Some(pos) = dates.windows(2).position(|w| w[0] >= w[1]) {
        return Err(AnalyticsError::invalid_input(format!(
            "dates must be strictly increasing: {} is followed by {}",
            dates[pos],
            dates[pos + 1]
        ))
        .with_context("index", (pos + 1).to_string()));
    }
    Ok(())
}
