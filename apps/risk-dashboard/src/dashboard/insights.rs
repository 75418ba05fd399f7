//! Rule-based classification of each strategy's risk profile.

use serde::{Deserialize, Serialize};

use crate::config::InsightsConfig;
use crate::metrics::SharpeResult;

/// Outcome of the insight rules, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// High, significant Sharpe with a shallow drawdown.
    StrongAndStable,
    /// Drawdown deeper than the high-risk threshold.
    HighDrawdownRisk,
    /// p-value above the significance level.
    NotSignificant,
    /// None of the above.
    Moderate,
    /// Metrics could not be computed.
    Unavailable,
}

/// Display severity of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLevel {
    /// Positive finding.
    Success,
    /// Risk worth attention.
    Warning,
    /// Negative finding.
    Error,
    /// Neutral note.
    Info,
}

impl InsightKind {
    /// Human-readable message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::StrongAndStable => "Strong and stable performance",
            Self::HighDrawdownRisk => "High drawdown risk detected",
            Self::NotSignificant => "Returns not statistically significant",
            Self::Moderate => "Moderate performance, monitor closely",
            Self::Unavailable => "Metrics unavailable",
        }
    }

    /// Display severity.
    #[must_use]
    pub const fn level(&self) -> InsightLevel {
        match self {
            Self::StrongAndStable => InsightLevel::Success,
            Self::HighDrawdownRisk | Self::Unavailable => InsightLevel::Warning,
            Self::NotSignificant => InsightLevel::Error,
            Self::Moderate => InsightLevel::Info,
        }
    }
}

/// Insight attached to one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Strategy name.
    pub strategy: String,
    /// Classification.
    pub kind: InsightKind,
    /// Display severity.
    pub level: InsightLevel,
    /// Message shown to the user.
    pub message: String,
}

impl Insight {
    /// Insight for a classified strategy.
    #[must_use]
    pub fn new(strategy: impl Into<String>, kind: InsightKind) -> Self {
        Self {
            strategy: strategy.into(),
            kind,
            level: kind.level(),
            message: kind.message().to_string(),
        }
    }

    /// Insight for a strategy whose metrics failed, carrying the reason.
    #[must_use]
    pub fn unavailable(strategy: impl Into<String>, reason: &str) -> Self {
        Self {
            message: format!("{}: {reason}", InsightKind::Unavailable.message()),
            ..Self::new(strategy, InsightKind::Unavailable)
        }
    }
}

/// Classify a strategy from its Sharpe test and max drawdown.
///
/// The first matching rule wins:
/// 1. sharpe > strong_sharpe, p < significance_level, mdd > stable_drawdown
/// 2. mdd < high_drawdown
/// 3. p > significance_level
/// 4. otherwise moderate
#[must_use]
pub fn classify(sharpe: &SharpeResult, max_drawdown: f64, thresholds: &InsightsConfig) -> InsightKind {
    let alpha = thresholds.significance_level;
    if sharpe.sharpe > thresholds.strong_sharpe
        && sharpe.p_value < alpha
        && max_drawdown > thresholds.stable_drawdown
    {
        InsightKind::StrongAndStable
    } else if max_drawdown < thresholds.high_drawdown {
        InsightKind::HighDrawdownRisk
    } else if sharpe.p_value > alpha {
        InsightKind::NotSignificant
    } else {
        InsightKind::Moderate
    }
}
