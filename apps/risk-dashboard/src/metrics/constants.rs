//! Numeric constants for performance metric calculations.

/// Population standard deviation at or below this is treated as zero variance.
pub const ZERO_VARIANCE_TOLERANCE: f64 = 1e-12;

/// Coefficient on sharpe² in Lo's asymptotic variance of the Sharpe estimator.
pub const LO_VARIANCE_COEFFICIENT: f64 = 0.5;

/// Trading periods per year for daily returns.
pub const TRADING_DAYS: f64 = 252.0;
