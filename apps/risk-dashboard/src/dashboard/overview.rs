//! Key performance indicators for the filtered table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::ReturnTable;
use crate::error::AnalyticsError;

/// Mean periodic return of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMean {
    /// Strategy name.
    pub strategy: String,
    /// Arithmetic mean return.
    pub mean_return: f64,
}

/// Headline figures for the filtered selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Number of selected strategies.
    pub total_strategies: usize,
    /// First date in the selection.
    pub start_date: NaiveDate,
    /// Last date in the selection.
    pub end_date: NaiveDate,
    /// Number of dates in the selection.
    pub observations: usize,
    /// Mean return per strategy, in column order.
    pub mean_returns: Vec<StrategyMean>,
    /// Strategy with the highest mean return.
    pub best_strategy: String,
    /// Strategy with the lowest mean return.
    pub worst_strategy: String,
}

impl Overview {
    /// Summarize a non-empty table.
    ///
    /// Ties for best or worst go to the strategy that comes first.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the table has no rows or no columns.
    pub fn from_table(table: &ReturnTable) -> Result<Self, AnalyticsError> {
        let Some((start_date, end_date)) = table.date_range().filter(|_| !table.is_empty()) else {
            return Err(AnalyticsError::invalid_input(
                "overview requires at least one strategy and one date",
            ));
        };

        let mean_returns: Vec<StrategyMean> = table
            .mean_returns()
            .into_iter()
            .filter_map(|(strategy, mean)| {
                mean.map(|mean_return| StrategyMean {
                    strategy,
                    mean_return,
                })
            })
            .collect();

        let Some((first, rest)) = mean_returns.split_first() else {
            return Err(AnalyticsError::invalid_input("overview found no strategy means"));
        };
        let mut best = first;
        let mut worst = first;
        for m in rest {
            if m.mean_return > best.mean_return {
                best = m;
            }
            if m.mean_return < worst.mean_return {
                worst = m;
            }
        }
        let best_strategy = best.strategy.clone();
        let worst_strategy = worst.strategy.clone();

        Ok(Self {
            total_strategies: table.width(),
            start_date,
            end_date,
            observations: table.len(),
            mean_returns,
            best_strategy,
            worst_strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 7, d).unwrap()
    }

    #[test]
    fn test_overview_kpis() {
        let table = ReturnTable::new(
            vec![day(1), day(2), day(5)],
            vec![
                ("Momentum".to_string(), vec![0.01, 0.02, 0.03]),
                ("Carry".to_string(), vec![-0.01, 0.00, 0.01]),
                ("Value".to_string(), vec![0.03, 0.03, 0.03]),
            ],
        )
        .unwrap();

        let Ok(overview) = Overview::from_table(&table) else {
            panic!("non-empty table has an overview");
        };
        assert_eq!(overview.total_strategies, 3);
        assert_eq!(overview.start_date, day(1));
        assert_eq!(overview.end_date, day(5));
        assert_eq!(overview.observations, 3);
        assert_eq!(overview.best_strategy, "Value");
        assert_eq!(overview.worst_strategy, "Carry");
        assert!((overview.mean_returns[0].mean_return - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_ties_go_to_first_strategy() {
        let table = ReturnTable::new(
            vec![day(1)],
            vec![("A".to_string(), vec![0.01]), ("B".to_string(), vec![0.01])],
        )
        .unwrap();
        let overview = Overview::from_table(&table).unwrap();
        assert_eq!(overview.best_strategy, "A");
        assert_eq!(overview.worst_strategy, "A");
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = ReturnTable::new(vec![day(1)], Vec::new()).unwrap();
        assert!(Overview::from_table(&table).is_err_and(|e| e.is_invalid_input()));
    }
}
