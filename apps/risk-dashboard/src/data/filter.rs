//! Date range and strategy selection applied before analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::table::ReturnTable;
use crate::error::AnalyticsError;

/// Subset of a return table to analyse.
///
/// Unset bounds fall back to the table's first/last date and an unset
/// selection keeps every strategy, so `TableFilter::default()` is the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFilter {
    /// Inclusive lower date bound.
    #[serde(default, alias = "start_date")]
    pub start: Option<NaiveDate>,
    /// Inclusive upper date bound.
    #[serde(default, alias = "end_date")]
    pub end: Option<NaiveDate>,
    /// Strategies to keep, in display order.
    #[serde(default)]
    pub strategies: Option<Vec<String>>,
}

impl TableFilter {
    /// Filter keeping everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Set the date range.
    #[must_use]
    pub const fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Set the strategy selection.
    #[must_use]
    pub fn with_strategies<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.strategies = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Effective `(start, end)` against `table`.
    #[must_use]
    pub fn resolve_range(&self, table: &ReturnTable) -> Option<(NaiveDate, NaiveDate)> {
        let (first, last) = table.date_range()?;
        Some((self.start.unwrap_or(first), self.end.unwrap_or(last)))
    }

    /// Apply the date range first, then the strategy selection.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the range is inverted or a selected strategy is
    /// not in the table.
    pub fn apply(&self, table: &ReturnTable) -> Result<ReturnTable, AnalyticsError> {
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            return Err(AnalyticsError::invalid_input(format!(
                "start date {start} is after end date {end}"
            )));
        }

        let dated = match self.resolve_range(table) {
            Some((start, end)) if start <= end => table.filter_dates(start, end)?,
            // One bound was defaulted past the other, which selects no rows.
            Some(_) => table.without_rows(),
            None => table.clone(),
        };

        match &self.strategies {
            Some(names) => dated.select(names),
            None => Ok(dated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, d).unwrap()
    }

    fn sample() -> ReturnTable {
        ReturnTable::new(
            (1..=4).map(day).collect(),
            vec![
                ("A".to_string(), vec![0.01, 0.02, 0.03, 0.04]),
                ("B".to_string(), vec![-0.01, 0.00, 0.01, 0.02]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_default_filter_is_identity() {
        let table = sample();
        let Ok(filtered) = TableFilter::all().apply(&table) else {
            panic!("identity filter should succeed");
        };
        assert_eq!(filtered, table);
    }

    #[test]
    fn test_range_and_selection() {
        let filter = TableFilter::all()
            .with_range(day(2), day(3))
            .with_strategies(["B"]);
        let Ok(filtered) = filter.apply(&sample()) else {
            panic!("valid filter");
        };
        assert_eq!(filtered.index(), &[day(2), day(3)]);
        assert_eq!(filtered.strategies(), &["B".to_string()]);
        assert_eq!(filtered.column("B"), Some(&[0.00, 0.01][..]));
    }

    #[test]
    fn test_open_ended_start() {
        let filter = TableFilter {
            start: Some(day(3)),
            ..TableFilter::default()
        };
        let Ok(filtered) = filter.apply(&sample()) else {
            panic!("valid filter");
        };
        assert_eq!(filtered.index(), &[day(3), day(4)]);
    }

    #[test]
    fn test_start_after_data_end_selects_nothing() {
        let filter = TableFilter {
            start: Some(day(20)),
            ..TableFilter::default()
        };
        let Ok(filtered) = filter.apply(&sample()) else {
            panic!("defaulted end should not invert the range");
        };
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let filter = TableFilter::all().with_range(day(3), day(1));
        assert!(filter.apply(&sample()).is_err_and(|e| e.is_invalid_input()));
    }

    #[test]
    fn test_empty_selection_yields_empty_table() {
        let filter = TableFilter::all().with_strategies(Vec::<String>::new());
        let Ok(filtered) = filter.apply(&sample()) else {
            panic!("empty selection is allowed");
        };
        assert!(filtered.is_empty());
    }
}
