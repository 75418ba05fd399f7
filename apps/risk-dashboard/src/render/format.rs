//! Console formatting for metric values.

/// Fraction as a percentage with two decimals, e.g. `-0.0235` -> `-2.35%`.
#[must_use]
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Ratio with two decimals.
#[must_use]
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// p-value with four decimals, or `<0.0001` below that.
#[must_use]
pub fn format_p_value(value: f64) -> String {
    if value < 1e-4 {
        "<0.0001".to_string()
    } else {
        format!("{value:.4}")
    }
}
