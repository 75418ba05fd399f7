//! Statistical math utilities for performance metric calculations.

use std::f64::consts::SQRT_2;

/// Calculate mean of a slice of floats.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Calculate population variance (divisor `n`) of a slice of floats.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance_sum: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    Some(variance_sum / values.len() as f64)
}

/// Calculate population standard deviation (divisor `n`) of a slice of floats.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

/// Pearson correlation coefficient of two aligned slices.
///
/// Returns `None` when the slices differ in length, hold fewer than two
/// observations, or either side has zero variance. The result is clamped
/// into `[-1, 1]`.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }

    Some((cov / denom).clamp(-1.0, 1.0))
}

/// Standard normal survival function, `1 - Φ(x)`.
///
/// Evaluated through `erfc` so the upper tail keeps its precision for large `x`.
/// `x` must not be NaN; callers reject non-finite statistics before this point.
pub fn norm_sf(x: f64) -> f64 {
    debug_assert!(!x.is_nan(), "norm_sf called with NaN");
    (0.5 * libm::erfc(x / SQRT_2)).clamp(0.0, 1.0)
}
