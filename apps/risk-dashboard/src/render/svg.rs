//! Shared SVG building blocks.

use std::fmt::Write;

pub(super) const WIDTH: f64 = 576.0;
pub(super) const HEIGHT: f64 = 288.0;
pub(super) const PADDING: f64 = 36.0;
pub(super) const LINE_COLOR: &str = "#348dc1";
pub(super) const GUIDE_COLOR: &str = "#8c8c8c";

pub(super) fn svg_header(width: f64, height: f64) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width:.0} {height:.0}" width="{width:.0}" height="{height:.0}"><style>text{{font-family:Arial,sans-serif;font-size:10px;fill:#666}}</style>"#
    )
}

pub(super) const fn svg_footer() -> &'static str {
    "</svg>"
}

pub(super) fn title(svg: &mut String, text: &str, width: f64) {
    let _ = write!(
        svg,
        r##"<text x="{x:.2}" y="20" text-anchor="middle" font-size="13" fill="#262626">{text}</text>"##,
        x = width / 2.0,
        text = escape(text)
    );
}

pub(super) fn text(svg: &mut String, x: f64, y: f64, anchor: &str, fill: &str, content: &str) {
    let _ = write!(
        svg,
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="{anchor}" fill="{fill}">{content}</text>"#,
        content = escape(content)
    );
}

pub(super) fn hline(svg: &mut String, y: f64, x1: f64, x2: f64, color: &str, dash: bool) {
    let dash = if dash { "4 3" } else { "0" };
    let _ = write!(
        svg,
        r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{color}" stroke-width="1" stroke-dasharray="{dash}" />"#
    );
}

/// Evenly spaced x coordinates across the padded plot width.
pub(super) fn x_positions(len: usize, width: f64) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![width / 2.0],
        _ => {
            let inner = width - 2.0 * PADDING;
            let step = inner / (len - 1) as f64;
            (0..len).map(|i| PADDING + step * i as f64).collect()
        }
    }
}

/// Map `value` from `[min, max]` onto the padded plot height, top = `max`.
pub(super) fn scale_value(value: f64, min: f64, max: f64, height: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return height / 2.0;
    }
    let inner = height - 2.0 * PADDING;
    let norm = (value - min) / (max - min);
    PADDING + (1.0 - norm) * inner
}

pub(super) fn polyline(points: &[(f64, f64)], stroke: &str) -> String {
    if points.is_empty() {
        return String::new();
    }
    let coords = points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(r#"<polyline fill="none" stroke="{stroke}" stroke-width="1.5" points="{coords}" />"#)
}

/// Escape text content for embedding in SVG.
pub(super) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_positions_span_padded_width() {
        let xs = x_positions(3, 100.0);
        assert_eq!(xs, vec![PADDING, 50.0, 100.0 - PADDING]);
        assert_eq!(x_positions(1, 100.0), vec![50.0]);
        assert!(x_positions(0, 100.0).is_empty());
    }

    #[test]
    fn test_scale_value_orientation() {
        assert_eq!(scale_value(1.0, 0.0, 1.0, HEIGHT), PADDING);
        assert_eq!(scale_value(0.0, 0.0, 1.0, HEIGHT), HEIGHT - PADDING);
        assert_eq!(scale_value(0.3, 0.3, 0.3, HEIGHT), HEIGHT / 2.0);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("A&B <x>"), "A&amp;B &lt;x&gt;");
    }
}
