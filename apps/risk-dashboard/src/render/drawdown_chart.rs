//! Drawdown ("underwater") line chart.

use super::svg::{
    GUIDE_COLOR, HEIGHT, LINE_COLOR, PADDING, WIDTH, hline, polyline, scale_value, svg_footer,
    svg_header, text, title, x_positions,
};
use crate::data::DrawdownSeries;
use crate::render::format_pct;

/// Render a drawdown series as an SVG line chart with a zero guide, the
/// deepest drawdown labelled, and first/last date labels.
pub fn render_drawdown_chart(series: &DrawdownSeries) -> String {
    let mut svg = svg_header(WIDTH, HEIGHT);
    title(&mut svg, &format!("{} - Drawdown", series.name), WIDTH);

    if series.values.is_empty() {
        svg.push_str(svg_footer());
        return svg;
    }

    // Drawdowns are <= 0, so zero is always the top of the range.
    let max = 0.0;
    let min = series.max_drawdown();
    let zero_y = scale_value(0.0, min, max, HEIGHT);

    hline(&mut svg, zero_y, PADDING, WIDTH - PADDING, GUIDE_COLOR, true);
    text(&mut svg, PADDING - 4.0, zero_y + 3.0, "end", "#808080", "0%");

    let xs = x_positions(series.values.len(), WIDTH);
    let points: Vec<(f64, f64)> = xs
        .iter()
        .copied()
        .zip(series.values.iter().map(|v| scale_value(*v, min, max, HEIGHT)))
        .collect();
    svg.push_str(&polyline(&points, LINE_COLOR));

    if min < 0.0 {
        let min_y = scale_value(min, min, max, HEIGHT);
        text(&mut svg, PADDING - 4.0, min_y + 3.0, "end", "#808080", &format_pct(min));
    }

    let axis_y = HEIGHT - PADDING + 14.0;
    if let (Some(first), Some(last)) = (series.dates.first(), series.dates.last()) {
        text(&mut svg, PADDING, axis_y, "start", "#808080", &first.to_string());
        if series.dates.len() > 1 {
            text(&mut svg, WIDTH - PADDING, axis_y, "end", "#808080", &last.to_string());
        }
    }

    svg.push_str(svg_footer());
    svg
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn series(values: Vec<f64>) -> DrawdownSeries {
        let dates = (1..=values.len() as u32)
            .map(|d| NaiveDate::from_ymd_opt(2024, 2, d).unwrap())
            .collect();
        DrawdownSeries {
            name: "Momentum".to_string(),
            dates,
            values,
        }
    }

    #[test]
    fn test_chart_structure() {
        let svg = render_drawdown_chart(&series(vec![0.0, -0.01, 0.0, -0.02, -0.0102]));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Momentum - Drawdown"));
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains("stroke-dasharray=\"4 3\""));
        assert!(svg.contains(">2024-02-01<"));
        assert!(svg.contains(">2024-02-05<"));
        assert!(svg.contains(">-2.00%<"));
    }

    #[test]
    fn test_flat_series_has_no_trough_label() {
        let svg = render_drawdown_chart(&series(vec![0.0, 0.0]));
        assert!(svg.contains("<polyline"));
        assert!(!svg.contains("-0.00%"));
    }

    #[test]
    fn test_empty_series() {
        let svg = render_drawdown_chart(&series(Vec::new()));
        assert!(!svg.contains("<polyline"));
    }
}
