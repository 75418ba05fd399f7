//! Drawdown from the running peak of compounded returns.

use crate::error::AnalyticsError;

use super::types::DrawdownPoint;

/// Running product of `(1 + r)`, starting from the first period.
///
/// # Errors
///
/// - `InvalidInput` for an empty series or a non-finite element.
/// - `DegenerateComputation` when any prefix product is `<= 0`, i.e. a return
///   of -100% or worse wiped the series out, or when it overflows.
pub fn cumulative_returns(returns: &[f64]) -> Result<Vec<f64>, AnalyticsError> {
    const OP: &str = "cumulative_returns";

    if returns.is_empty() {
        return Err(AnalyticsError::too_few_observations(OP, 1, 0));
    }

    let mut cumulative = Vec::with_capacity(returns.len());
    let mut growth = 1.0;
    for (idx, r) in returns.iter().enumerate() {
        if !r.is_finite() {
            return Err(AnalyticsError::non_finite(OP, idx));
        }
        growth *= 1.0 + r;
        if growth <= 0.0 {
            return Err(AnalyticsError::degenerate(format!(
                "cumulative return is non-positive at index {idx}; drawdown is undefined once the series is wiped out"
            ))
            .with_context("operation", OP)
            .with_context("index", idx.to_string())
            .with_context("return", r.to_string()));
        }
        if !growth.is_finite() {
            return Err(AnalyticsError::degenerate(format!(
                "cumulative return overflowed at index {idx}"
            ))
            .with_context("operation", OP)
            .with_context("index", idx.to_string())
            .with_context("return", r.to_string()));
        }
        cumulative.push(growth);
    }

    Ok(cumulative)
}

/// Cumulative value, running peak and drawdown for every period.
///
/// # Errors
///
/// Same conditions as [`cumulative_returns`].
pub fn drawdown_points(returns: &[f64]) -> Result<Vec<DrawdownPoint>, AnalyticsError> {
    let cumulative = cumulative_returns(returns)?;

    let mut peak = f64::NEG_INFINITY;
    let points = cumulative
        .into_iter()
        .map(|value| {
            peak = peak.max(value);
            DrawdownPoint {
                cumulative: value,
                peak,
                drawdown: (value - peak) / peak,
            }
        })
        .collect();

    Ok(points)
}

/// Drawdown series, index-aligned with `returns`.
///
/// drawdown[i] = (cumulative[i] - peak[i]) / peak[i]. Every value is `<= 0`
/// and exactly `0.0` wherever the cumulative value sets a new running high.
///
/// # Errors
///
/// Same conditions as [`cumulative_returns`].
pub fn drawdown(returns: &[f64]) -> Result<Vec<f64>, AnalyticsError> {
    Ok(drawdown_points(returns)?
        .into_iter()
        .map(|p| p.drawdown)
        .collect())
}

/// Deepest drawdown of the series (the minimum, so `<= 0`).
///
/// # Errors
///
/// Same conditions as [`cumulative_returns`].
pub fn max_drawdown(returns: &[f64]) -> Result<f64, AnalyticsError> {
    Ok(drawdown(returns)?.into_iter().fold(0.0, f64::min))
}
