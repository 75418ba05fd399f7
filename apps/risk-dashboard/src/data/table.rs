//! Multi-strategy return table sharing one date index.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::series::{ReturnSeries, validate_index};
use crate::error::AnalyticsError;
use crate::metrics;

/// Strategy returns keyed by unique name, all aligned on a single date index.
///
/// Columns are stored column-major in insertion order. Subsetting by date or
/// by strategy slices the existing data; nothing is reindexed or interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTable {
    index: Vec<NaiveDate>,
    strategies: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ReturnTable {
    /// Build a table from a date index and named columns.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the index is not strictly increasing, a column
    /// length differs from the index length, a value is non-finite, or a
    /// strategy name repeats.
    pub fn new(
        index: Vec<NaiveDate>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self, AnalyticsError> {
        validate_index(&index)?;

        let mut seen = HashSet::new();
        let mut strategies = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            if !seen.insert(name.clone()) {
                return Err(
                    AnalyticsError::invalid_input(format!("duplicate strategy name '{name}'"))
                        .with_context("strategy", name),
                );
            }
            if values.len() != index.len() {
                return Err(AnalyticsError::invalid_input(format!(
                    "strategy '{name}' has {} values but the index has {} dates",
                    values.len(),
                    index.len()
                ))
                .with_context("strategy", name));
            }
            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(AnalyticsError::invalid_input(format!(
                    "strategy '{name}' has a non-finite value on {}",
                    index[row]
                ))
                .with_context("strategy", name)
                .with_context("date", index[row].to_string()));
            }
            strategies.push(name);
            data.push(values);
        }

        Ok(Self {
            index,
            strategies,
            columns: data,
        })
    }

    /// Date index.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Strategy names in column order.
    #[must_use]
    pub fn strategies(&self) -> &[String] {
        &self.strategies
    }

    /// Number of rows (dates).
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Number of strategy columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the table has no rows or no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.strategies.is_empty()
    }

    /// First and last date.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.index.first()?, *self.index.last()?))
    }

    /// Values of one strategy.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.position(name).map(|i| self.columns[i].as_slice())
    }

    /// Iterate `(name, values)` in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.strategies
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Owned series for one strategy.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<ReturnSeries> {
        let values = self.column(name)?;
        ReturnSeries::new(name, self.index.clone(), values.to_vec()).ok()
    }

    /// Values of row `row` across all strategies, in column order.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.index.len() {
            return None;
        }
        Some(self.columns.iter().map(|c| c[row]).collect())
    }

    /// Mean return per strategy, in column order.
    #[must_use]
    pub fn mean_returns(&self) -> Vec<(String, Option<f64>)> {
        self.columns()
            .map(|(name, values)| (name.to_string(), metrics::mean(values)))
            .collect()
    }

    /// Rows with `start <= date <= end`, all columns kept.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `start > end`.
    pub fn filter_dates(&self, start: NaiveDate, end: NaiveDate) -> Result<Self, AnalyticsError> {
        if start > end {
            return Err(AnalyticsError::invalid_input(format!(
                "start date {start} is after end date {end}"
            ))
            .with_context("start", start.to_string())
            .with_context("end", end.to_string()));
        }

        let lo = self.index.partition_point(|d| *d < start);
        let hi = self.index.partition_point(|d| *d <= end);

        Ok(Self {
            index: self.index[lo..hi].to_vec(),
            strategies: self.strategies.clone(),
            columns: self.columns.iter().map(|c| c[lo..hi].to_vec()).collect(),
        })
    }

    /// Same columns with every row dropped.
    #[must_use]
    pub fn without_rows(&self) -> Self {
        Self {
            index: Vec::new(),
            strategies: self.strategies.clone(),
            columns: vec![Vec::new(); self.columns.len()],
        }
    }

    /// Columns named in `names`, in that order, all rows kept.
    ///
    /// An empty selection yields a table with no columns.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when a name is unknown or selected twice.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, AnalyticsError> {
        let mut seen = HashSet::new();
        let mut strategies = Vec::with_capacity(names.len());
        let mut columns = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let Some(pos) = self.position(name) else {
                return Err(
                    AnalyticsError::invalid_input(format!("unknown strategy '{name}'"))
                        .with_context("strategy", name),
                );
            };
            if !seen.insert(name) {
                return Err(AnalyticsError::invalid_input(format!(
                    "strategy '{name}' selected more than once"
                ))
                .with_context("strategy", name));
            }
            strategies.push(self.strategies[pos].clone());
            columns.push(self.columns[pos].clone());
        }

        Ok(Self {
            index: self.index.clone(),
            strategies,
            columns,
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.strategies.iter().position(|s| s == name)
    }
}
