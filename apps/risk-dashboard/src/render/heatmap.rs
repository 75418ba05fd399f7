//! Annotated correlation heatmap.

use std::fmt::Write;

use super::svg::{HEIGHT, WIDTH, escape, svg_footer, svg_header, text, title};
use crate::correlation::CorrelationMatrix;

const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

const LEFT_PAD: f64 = 90.0;
const RIGHT_PAD: f64 = 20.0;
const TOP_PAD: f64 = 36.0;
const BOTTOM_PAD: f64 = 40.0;

/// Diverging blue-white-red colour for a correlation in `[-1, 1]`.
///
/// Values outside the range are clamped.
pub fn coolwarm(value: f64) -> (u8, u8, u8) {
    let v = if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 };
    let (to, t) = if v < 0.0 { (COOL, -v) } else { (WARM, v) };
    let mix = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    (
        mix(NEUTRAL.0, to.0),
        mix(NEUTRAL.1, to.1),
        mix(NEUTRAL.2, to.2),
    )
}

/// Render a correlation matrix as an SVG heatmap titled
/// "Strategy Correlation", each cell annotated to two decimals.
pub fn render_correlation_heatmap(matrix: &CorrelationMatrix) -> String {
    let n = matrix.size();
    let mut svg = svg_header(WIDTH, HEIGHT);
    title(&mut svg, "Strategy Correlation", WIDTH);

    if n == 0 {
        svg.push_str(svg_footer());
        return svg;
    }

    let cell_w = (WIDTH - LEFT_PAD - RIGHT_PAD) / n as f64;
    let cell_h = (HEIGHT - TOP_PAD - BOTTOM_PAD) / n as f64;

    for (row, name) in matrix.strategies.iter().enumerate() {
        let y_top = TOP_PAD + row as f64 * cell_h;
        let y_center = y_top + cell_h / 2.0;
        text(&mut svg, LEFT_PAD - 6.0, y_center + 3.0, "end", "#808080", name);

        for (col, value) in matrix.values[row].iter().copied().enumerate() {
            let x_left = LEFT_PAD + col as f64 * cell_w;
            let (r, g, b) = coolwarm(value);
            let _ = write!(
                svg,
                r##"<rect x="{x_left:.2}" y="{y_top:.2}" width="{cell_w:.2}" height="{cell_h:.2}" fill="rgb({r},{g},{b})" stroke="#ffffff" stroke-width="1" />"##
            );

            let text_color = if value.abs() > 0.6 { "#ffffff" } else { "#262626" };
            let _ = write!(
                svg,
                r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="10" fill="{text_color}">{value:.2}</text>"#,
                x = x_left + cell_w / 2.0,
                y = y_center + 4.0,
            );
        }
    }

    for (col, name) in matrix.strategies.iter().enumerate() {
        let _ = write!(
            svg,
            r##"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" fill="#808080">{name}</text>"##,
            x = LEFT_PAD + (col as f64 + 0.5) * cell_w,
            y = HEIGHT - BOTTOM_PAD + 14.0,
            name = escape(name)
        );
    }

    svg.push_str(svg_footer());
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CorrelationMatrix {
        CorrelationMatrix {
            strategies: vec!["Momentum".to_string(), "Carry".to_string()],
            values: vec![vec![1.0, -0.53], vec![-0.53, 1.0]],
        }
    }

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), (59, 76, 192));
        assert_eq!(coolwarm(0.0), (221, 221, 221));
        assert_eq!(coolwarm(1.0), (180, 4, 38));
        assert_eq!(coolwarm(7.0), coolwarm(1.0));
        assert_eq!(coolwarm(f64::NAN), coolwarm(0.0));
    }

    #[test]
    fn test_heatmap_cells_and_annotations() {
        let svg = render_correlation_heatmap(&sample());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Strategy Correlation"));
        assert_eq!(svg.matches("<rect").count(), 4);
        assert_eq!(svg.matches(">1.00<").count(), 2);
        assert_eq!(svg.matches(">-0.53<").count(), 2);
        assert!(svg.contains(">Momentum<"));
        assert!(svg.contains("rgb(180,4,38)"));
    }

    #[test]
    fn test_empty_matrix_renders_title_only() {
        let svg = render_correlation_heatmap(&CorrelationMatrix {
            strategies: Vec::new(),
            values: Vec::new(),
        });
        assert!(svg.contains("Strategy Correlation"));
        assert!(!svg.contains("<rect"));
    }
}
