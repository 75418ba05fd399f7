//! SVG charts and console formatting for dashboard output.
//!
//! Charts are self-contained SVG documents built as strings, so they can be
//! written straight to disk or embedded in HTML.

mod drawdown_chart;
mod format;
mod heatmap;
mod svg;

pub use drawdown_chart::render_drawdown_chart;
pub use format::{format_p_value, format_pct, format_ratio};
pub use heatmap::{coolwarm, render_correlation_heatmap};
