//! Sharpe ratio and its statistical significance.

use crate::error::AnalyticsError;

use super::constants::{LO_VARIANCE_COEFFICIENT, ZERO_VARIANCE_TOLERANCE};
use super::math::{mean, norm_sf, population_std_dev};
use super::types::SharpeResult;

/// Calculate Sharpe ratio.
/// Sharpe = Mean(Returns - Risk Free Rate) / PopulationStdDev(Returns - Risk Free Rate)
///
/// `risk_free_rate` is per period and is subtracted from every element.
///
/// # Errors
///
/// - `InvalidInput` for an empty series, a non-finite element or a non-finite rate.
/// - `DegenerateComputation` when the excess series has zero variance, which
///   includes every single-observation and every constant series, or when the
///   mean, standard deviation or ratio overflows.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> Result<f64, AnalyticsError> {
    const OP: &str = "sharpe_ratio";

    if returns.is_empty() {
        return Err(AnalyticsError::too_few_observations(OP, 1, 0));
    }
    if !risk_free_rate.is_finite() {
        return Err(AnalyticsError::invalid_input("risk_free_rate must be finite")
            .with_context("operation", OP)
            .with_context("risk_free_rate", risk_free_rate.to_string()));
    }
    if let Some(idx) = returns.iter().position(|r| !r.is_finite()) {
        return Err(AnalyticsError::non_finite(OP, idx));
    }

    let excess: Vec<f64> = returns.iter().map(|r| r - risk_free_rate).collect();
    let (Some(avg), Some(std)) = (mean(&excess), population_std_dev(&excess)) else {
        return Err(AnalyticsError::too_few_observations(OP, 1, 0));
    };

    if !avg.is_finite() || !std.is_finite() {
        return Err(overflow(OP, avg, std));
    }
    if std <= ZERO_VARIANCE_TOLERANCE {
        return Err(AnalyticsError::zero_variance(OP)
            .with_context("observations", excess.len().to_string())
            .with_context("mean_excess_return", avg.to_string()));
    }

    let sharpe = avg / std;
    if !sharpe.is_finite() {
        return Err(overflow(OP, avg, std));
    }
    Ok(sharpe)
}

fn overflow(operation: &str, avg: f64, std: f64) -> AnalyticsError {
    AnalyticsError::degenerate(format!(
        "{operation} overflowed: mean or standard deviation of excess returns is not finite"
    ))
    .with_context("operation", operation)
    .with_context("mean_excess_return", avg.to_string())
    .with_context("std_dev", std.to_string())
}

/// Standard error and z statistic, rejecting a Sharpe ratio too large to square.
fn z_statistic(
    operation: &str,
    sharpe: f64,
    observations: usize,
) -> Result<(f64, f64), AnalyticsError> {
    let standard_error = sharpe_standard_error(sharpe, observations);
    let z = sharpe / standard_error;
    if !standard_error.is_finite() || !z.is_finite() {
        return Err(AnalyticsError::degenerate(format!(
            "{operation} overflowed computing the standard error"
        ))
        .with_context("operation", operation)
        .with_context("sharpe", sharpe.to_string())
        .with_context("observations", observations.to_string()));
    }
    Ok((standard_error, z))
}

/// Asymptotic standard error of an estimated Sharpe ratio (Lo, 2002).
///
/// SE = sqrt((1 + 0.5 * sharpe²) / n)
pub fn sharpe_standard_error(sharpe: f64, observations: usize) -> f64 {
    ((1.0 + LO_VARIANCE_COEFFICIENT * sharpe * sharpe) / observations as f64).sqrt()
}

/// One-sided p-value of H0: Sharpe <= 0 for an observed Sharpe over `observations` periods.
///
/// The z statistic `sharpe / SE` is strictly increasing in `sharpe`, so the
/// p-value is strictly decreasing in it for fixed `observations`.
///
/// # Errors
///
/// - `InvalidInput` when `observations` is zero or `sharpe` is not finite.
/// - `DegenerateComputation` when the standard error overflows.
pub fn sharpe_p_value(sharpe: f64, observations: usize) -> Result<f64, AnalyticsError> {
    const OP: &str = "sharpe_p_value";

    if observations == 0 {
        return Err(AnalyticsError::too_few_observations(OP, 1, 0));
    }
    if !sharpe.is_finite() {
        return Err(AnalyticsError::invalid_input("sharpe must be finite")
            .with_context("operation", OP)
            .with_context("sharpe", sharpe.to_string()));
    }

    let (_, z) = z_statistic(OP, sharpe, observations)?;
    Ok(norm_sf(z))
}

/// Sharpe ratio and p-value with a zero risk-free rate.
///
/// # Errors
///
/// Same conditions as [`sharpe_ratio`].
pub fn sharpe_significance(returns: &[f64]) -> Result<SharpeResult, AnalyticsError> {
    sharpe_significance_with_rate(returns, 0.0)
}

/// Sharpe ratio and p-value against a per-period risk-free rate.
///
/// # Errors
///
/// Same conditions as [`sharpe_ratio`], plus `DegenerateComputation` when the
/// standard error overflows.
pub fn sharpe_significance_with_rate(
    returns: &[f64],
    risk_free_rate: f64,
) -> Result<SharpeResult, AnalyticsError> {
    let sharpe = sharpe_ratio(returns, risk_free_rate)?;
    let observations = returns.len();
    let (standard_error, z_score) = z_statistic("sharpe_significance", sharpe, observations)?;

    Ok(SharpeResult {
        sharpe,
        p_value: norm_sf(z_score),
        z_score,
        standard_error,
        observations,
    })
}

/// Scale a per-period Sharpe ratio by sqrt(periods per year).
pub fn annualize_sharpe(sharpe: f64, periods_per_year: f64) -> f64 {
    sharpe * periods_per_year.sqrt()
}
