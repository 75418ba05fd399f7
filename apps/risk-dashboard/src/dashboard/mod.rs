//! Dashboard orchestration.
//!
//! Takes a loaded [`ReturnTable`] and a [`TableFilter`], and produces a
//! [`DashboardReport`]:
//! - Overview: strategy count, date range, best/worst strategy by mean return
//! - Risk analysis: Sharpe significance and max drawdown per strategy
//! - Insights: rule-based classification per strategy
//! - Correlation: computed once over the filtered selection
//!
//! A metric that fails for one strategy is recorded in the report for that
//! strategy; it never aborts the report.

mod insights;
mod overview;
mod report;

pub use insights::{Insight, InsightKind, InsightLevel, classify};
pub use overview::{Overview, StrategyMean};
pub use report::{AppliedFilter, DashboardReport, Outcome, StrategyRisk};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::{AnalysisConfig, Config, InsightsConfig};
use crate::correlation::correlation_matrix;
use crate::data::{DrawdownSeries, ReturnSeries, ReturnTable, TableFilter};
use crate::error::AnalyticsError;
use crate::metrics::annualize_sharpe;

/// Message returned when a filter leaves nothing to analyse.
pub const EMPTY_SELECTION_MESSAGE: &str =
    "Please select at least one strategy and a valid date range.";

/// Report builder holding the metric parameters and insight thresholds.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    analysis: AnalysisConfig,
    insights: InsightsConfig,
}

impl Dashboard {
    /// Create a dashboard with explicit settings.
    #[must_use]
    pub const fn new(analysis: AnalysisConfig, insights: InsightsConfig) -> Self {
        Self { analysis, insights }
    }

    /// Create a dashboard from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.analysis.clone(), config.insights.clone())
    }

    /// Apply `filter` to `table` and build the report for the selection.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the filter is invalid (inverted range, unknown
    /// strategy) or leaves no rows or no columns.
    pub fn build_report(
        &self,
        table: &ReturnTable,
        filter: &TableFilter,
    ) -> Result<DashboardReport, AnalyticsError> {
        let filtered = filter.apply(table)?;
        self.analyze(&filtered)
    }

    /// Build the report for an already filtered table.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the table has no rows or no columns.
    pub fn analyze(&self, table: &ReturnTable) -> Result<DashboardReport, AnalyticsError> {
        let Some((start_date, end_date)) = table.date_range().filter(|_| !table.is_empty()) else {
            warn!(
                rows = table.len(),
                strategies = table.width(),
                "Empty selection, no report built"
            );
            return Err(AnalyticsError::invalid_input(EMPTY_SELECTION_MESSAGE));
        };

        info!(
            start_date = %start_date,
            end_date = %end_date,
            rows = table.len(),
            strategies = table.width(),
            "Building dashboard report"
        );

        let overview = Overview::from_table(table)?;

        let mut risk = Vec::with_capacity(table.width());
        let mut insights = Vec::with_capacity(table.width());
        let mut drawdowns = Vec::with_capacity(table.width());

        for (name, values) in table.columns() {
            let series = ReturnSeries::new(name, table.index().to_vec(), values.to_vec())?;
            let (strategy_risk, drawdown) = self.strategy_risk(&series);
            insights.push(self.insight(&strategy_risk));
            risk.push(strategy_risk);
            drawdowns.extend(drawdown);
        }

        let correlation = correlation_matrix(table);
        if let Err(e) = &correlation {
            warn!(error = %e, "Correlation matrix unavailable");
        }

        let report = DashboardReport {
            generated_at: Utc::now(),
            filter: AppliedFilter {
                start_date,
                end_date,
                strategies: table.strategies().to_vec(),
            },
            overview,
            risk,
            insights,
            correlation: correlation.into(),
            drawdowns,
        };

        info!(
            best_strategy = %report.overview.best_strategy,
            worst_strategy = %report.overview.worst_strategy,
            strategies = report.risk.len(),
            "Dashboard report built"
        );

        Ok(report)
    }

    fn strategy_risk(&self, series: &ReturnSeries) -> (StrategyRisk, Option<DrawdownSeries>) {
        let sharpe = series.sharpe_significance(self.analysis.risk_free_rate);
        let drawdown = series.drawdown();

        match &sharpe {
            Ok(s) => debug!(
                strategy = series.name(),
                sharpe = s.sharpe,
                p_value = s.p_value,
                z_score = s.z_score,
                "Sharpe significance computed"
            ),
            Err(e) => warn!(strategy = series.name(), error = %e, "Sharpe ratio unavailable"),
        }
        if let Err(e) = &drawdown {
            warn!(strategy = series.name(), error = %e, "Drawdown unavailable");
        }

        let annualized_sharpe = sharpe
            .as_ref()
            .ok()
            .map(|s| annualize_sharpe(s.sharpe, self.analysis.periods_per_year));
        let max_drawdown = drawdown.as_ref().map(DrawdownSeries::max_drawdown);
        let trough_date = drawdown
            .as_ref()
            .ok()
            .and_then(DrawdownSeries::trough)
            .map(|(date, _)| date);

        let risk = StrategyRisk {
            strategy: series.name().to_string(),
            observations: series.len(),
            sharpe: sharpe.into(),
            annualized_sharpe,
            max_drawdown: max_drawdown.map_err(Clone::clone).into(),
            trough_date,
        };
        (risk, drawdown.ok())
    }

    fn insight(&self, risk: &StrategyRisk) -> Insight {
        match (&risk.sharpe, &risk.max_drawdown) {
            (Outcome::Value(sharpe), Outcome::Value(mdd)) => {
                let kind = classify(sharpe, *mdd, &self.insights);
                debug!(strategy = %risk.strategy, kind = ?kind, "Insight classified");
                Insight::new(risk.strategy.as_str(), kind)
            }
            (Outcome::Error(e), _) | (_, Outcome::Error(e)) => {
                Insight::unavailable(risk.strategy.as_str(), &e.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, d).unwrap()
    }

    fn sample() -> ReturnTable {
        ReturnTable::new(
            (1..=5).map(day).collect(),
            vec![
                ("Momentum".to_string(), vec![0.05, 0.03, -0.02, 0.04, 0.01]),
                ("Carry".to_string(), vec![0.02, -0.01, 0.03, -0.02, 0.01]),
                ("Flat".to_string(), vec![0.01, 0.01, 0.01, 0.01, 0.01]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_report_metrics() {
        let Ok(report) = Dashboard::default().build_report(&sample(), &TableFilter::all()) else {
            panic!("report should build");
        };

        let Some(momentum) = report.risk_for("Momentum") else {
            panic!("momentum present");
        };
        let Some(sharpe) = momentum.sharpe.value() else {
            panic!("momentum sharpe is defined");
        };
        assert!((sharpe.sharpe - 0.886_405_260_427_918_2).abs() < 1e-9);
        assert!((sharpe.p_value - 0.046_533_332_406_962_835).abs() < 1e-9);
        let Some(annualized) = momentum.annualized_sharpe else {
            panic!("annualized sharpe present");
        };
        assert!((annualized - 0.886_405_260_427_918_2 * 252.0_f64.sqrt()).abs() < 1e-9);

        let Some(carry) = report.risk_for("Carry") else {
            panic!("carry present");
        };
        let Some(mdd) = carry.max_drawdown.value() else {
            panic!("carry drawdown defined");
        };
        assert!((mdd - (-0.02)).abs() < 1e-12);
        assert_eq!(carry.trough_date, Some(day(4)));
    }

    #[test]
    fn test_degenerate_strategy_is_recorded_not_fatal() {
        let report = Dashboard::default()
            .build_report(&sample(), &TableFilter::all())
            .unwrap();

        let Some(flat) = report.risk_for("Flat") else {
            panic!("flat present");
        };
        let Some(err) = flat.sharpe.error() else {
            panic!("flat sharpe must be an error");
        };
        assert_eq!(err.code, "DEGENERATE_COMPUTATION");
        assert!(flat.annualized_sharpe.is_none());
        assert_eq!(flat.max_drawdown.value().copied(), Some(0.0));

        let Some(insight) = report.insight_for("Flat") else {
            panic!("flat insight present");
        };
        assert_eq!(insight.kind, InsightKind::Unavailable);

        // The flat column makes the full correlation matrix undefined.
        assert!(report.correlation.error().is_some());
    }

    #[test]
    fn test_insights_follow_rules() {
        let filter = TableFilter::all().with_strategies(["Momentum", "Carry"]);
        let report = Dashboard::default().build_report(&sample(), &filter).unwrap();

        // Momentum: sharpe 0.89 < 1 with p 0.047 < 0.05 and shallow drawdown.
        assert_eq!(report.insight_for("Momentum").map(|i| i.kind), Some(InsightKind::Moderate));
        // Carry: p 0.24 > 0.05.
        assert_eq!(report.insight_for("Carry").map(|i| i.kind), Some(InsightKind::NotSignificant));

        let Some(corr) = report.correlation.value() else {
            panic!("correlation defined without the flat column");
        };
        assert_eq!(corr.strategies, vec!["Momentum".to_string(), "Carry".to_string()]);
        assert_eq!(report.drawdowns.len(), 2);
        assert_eq!(report.overview.best_strategy, "Momentum");
    }

    #[test]
    fn test_filter_recorded_in_report() {
        let filter = TableFilter::all()
            .with_range(day(2), day(4))
            .with_strategies(["Carry"]);
        let report = Dashboard::default().build_report(&sample(), &filter).unwrap();
        assert_eq!(report.filter.start_date, day(2));
        assert_eq!(report.filter.end_date, day(4));
        assert_eq!(report.overview.observations, 3);
        assert_eq!(report.risk.len(), 1);
    }

    #[test]
    fn test_empty_selection_refused() {
        let filter = TableFilter::all().with_strategies(Vec::<String>::new());
        let Err(err) = Dashboard::default().build_report(&sample(), &filter) else {
            panic!("empty selection must not build a report");
        };
        assert!(err.is_invalid_input());
        assert_eq!(err.message(), EMPTY_SELECTION_MESSAGE);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let filter = TableFilter::all().with_strategies(["Nope"]);
        assert!(
            Dashboard::default()
                .build_report(&sample(), &filter)
                .is_err_and(|e| e.is_invalid_input())
        );
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = Dashboard::default()
            .build_report(&sample(), &TableFilter::all())
            .unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"best_strategy\": \"Momentum\""));
        let parsed: DashboardReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.risk.len(), report.risk.len());
        assert_eq!(parsed.overview, report.overview);
    }

    #[test]
    fn test_summary_lines() {
        let filter = TableFilter::all().with_strategies(["Momentum"]);
        let report = Dashboard::default().build_report(&sample(), &filter).unwrap();
        let lines = report.summary_lines();
        assert!(lines.iter().any(|l| l.contains("Momentum -> Sharpe: 0.89, p-value: 0.0465")));
        assert!(lines.iter().any(|l| l == "Best Strategy: Momentum"));
    }
}
