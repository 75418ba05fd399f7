//! Risk and performance metrics for strategy return series.
//!
//! Implements the metrics component of the dashboard:
//! - Sharpe ratio (mean excess return over population standard deviation)
//! - Sharpe significance (one-sided test using Lo's standard error)
//! - Drawdown (decline from the running peak of compounded returns)
//!
//! Every function is pure, borrows its input, and reports undefined cases as
//! typed [`AnalyticsError`](crate::error::AnalyticsError) values.

mod constants;
mod drawdown;
mod math;
mod sharpe;
mod types;

pub use constants::{LO_VARIANCE_COEFFICIENT, TRADING_DAYS, ZERO_VARIANCE_TOLERANCE};
pub use drawdown::{cumulative_returns, drawdown, drawdown_points, max_drawdown};
pub use math::{mean, norm_sf, pearson, population_std_dev, population_variance};
pub use sharpe::{
    annualize_sharpe, sharpe_p_value, sharpe_ratio, sharpe_significance,
    sharpe_significance_with_rate, sharpe_standard_error,
};
pub use types::{DrawdownPoint, SharpeResult};
