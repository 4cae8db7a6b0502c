//! SVG markup builders for chart descriptors.
//!
//! Each builder turns one `ChartDescriptor` variant into a self-contained
//! `<svg>` string the panels inject into the page. Only presentation lives
//! here: colors come in as arguments, data comes in already dispatched.

use crate::core::chart::TrendLine;
use crate::core::format::{format_count, format_number};
use crate::core::palette::ColorScheme;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

const GAUGE_HEIGHT: f64 = 150.0;
const HBAR_ROW_HEIGHT: f64 = 28.0;

/// Horizontal gauge meter with half-range shading, the value needle, and
/// the range endpoints.
pub fn gauge_svg(value: f64, range: (f64, f64), unit: &str, color: &str) -> String {
    let (low, high) = range;
    let span = if high > low { high - low } else { 1.0 };
    let track_x = MARGIN_LEFT;
    let track_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let track_y = 70.0;
    let track_h = 28.0;

    let fill_w = ((value - low) / span).clamp(0.0, 1.0) * track_w;
    let unit_suffix = if unit.is_empty() {
        String::new()
    } else {
        format!(" {unit}")
    };

    let mut svg = open_tag(CHART_WIDTH, GAUGE_HEIGHT, "chart chart--gauge");
    svg.push_str(&format!(
        "<rect x='{track_x}' y='{track_y}' width='{half}' height='{track_h}' fill='lightgray'/>\
         <rect x='{mid}' y='{track_y}' width='{half}' height='{track_h}' fill='gray'/>",
        half = track_w / 2.0,
        mid = track_x + track_w / 2.0,
    ));
    svg.push_str(&format!(
        "<rect x='{track_x}' y='{track_y}' width='{fill_w}' height='{track_h}' fill='{color}'/>"
    ));
    svg.push_str(&format!(
        "<text x='{x}' y='52' text-anchor='middle' class='chart__value'>{value}{unit_suffix}</text>",
        x = CHART_WIDTH / 2.0,
        value = axis_label(value),
    ));
    svg.push_str(&format!(
        "<text x='{track_x}' y='{y}' class='chart__tick'>{low}</text>\
         <text x='{end}' y='{y}' text-anchor='end' class='chart__tick'>{high}</text>",
        y = track_y + track_h + 22.0,
        end = track_x + track_w,
        low = axis_label(low),
        high = axis_label(high),
    ));
    svg.push_str("</svg>");
    svg
}

/// Vertical bars, one per label. Handles negative values by anchoring bars
/// to the zero baseline.
pub fn bar_svg(labels: &[String], values: &[f64], color: &str) -> String {
    render_vertical_bars(labels, values, |_| color.to_string())
}

/// Vertical key-value bars colored per key from the discrete scheme.
pub fn keyed_bar_svg(pairs: &[(String, f64)], scheme: ColorScheme) -> String {
    let labels: Vec<String> = pairs.iter().map(|(key, _)| key.clone()).collect();
    let values: Vec<f64> = pairs.iter().map(|(_, value)| *value).collect();
    render_vertical_bars(&labels, &values, |index| scheme.color_at(index).to_string())
}

fn render_vertical_bars(
    labels: &[String],
    values: &[f64],
    color_at: impl Fn(usize) -> String,
) -> String {
    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let data_min = values.iter().copied().fold(0.0_f64, f64::min);
    let data_max = values.iter().copied().fold(0.0_f64, f64::max);
    let span = if data_max > data_min {
        data_max - data_min
    } else {
        1.0
    };

    let y_of = |value: f64| MARGIN_TOP + (data_max - value) / span * plot_h;
    let baseline = y_of(0.0);

    let count = values.len().max(1) as f64;
    let step = plot_w / count;
    let bar_w = (step * 0.7).max(1.0);

    let mut svg = open_tag(CHART_WIDTH, CHART_HEIGHT, "chart chart--bars");
    svg.push_str(&axis_frame(data_min, data_max, baseline));

    for (index, value) in values.iter().enumerate() {
        let x = MARGIN_LEFT + index as f64 * step + (step - bar_w) / 2.0;
        let top = y_of(value.max(0.0));
        let bottom = y_of(value.min(0.0));
        let height = (bottom - top).max(1.0);
        svg.push_str(&format!(
            "<rect x='{x:.1}' y='{top:.1}' width='{bar_w:.1}' height='{height:.1}' fill='{color}'><title>{label}: {value}</title></rect>",
            color = color_at(index),
            label = escape_text(labels.get(index).map(String::as_str).unwrap_or("")),
            value = axis_label(*value),
        ));
        svg.push_str(&format!(
            "<text x='{cx:.1}' y='{ty:.1}' text-anchor='middle' class='chart__tick'>{label}</text>",
            cx = x + bar_w / 2.0,
            ty = CHART_HEIGHT - MARGIN_BOTTOM + 18.0,
            label = escape_text(labels.get(index).map(String::as_str).unwrap_or("")),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Horizontal key-value bars with value-graded colors from the scheme.
/// Height grows with the pair count so labels stay legible.
pub fn horizontal_bar_svg(pairs: &[(String, f64)], scheme: ColorScheme) -> String {
    let label_w = 150.0;
    let plot_w = CHART_WIDTH - label_w - MARGIN_RIGHT - 60.0;
    let height = (pairs.len() as f64 * HBAR_ROW_HEIGHT + MARGIN_TOP * 2.0).max(CHART_HEIGHT / 2.0);

    let data_min = pairs.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let data_max = pairs
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = if data_max > data_min {
        data_max - data_min
    } else {
        1.0
    };
    let bar_base = data_min.min(0.0);
    let full_span = if data_max > bar_base {
        data_max - bar_base
    } else {
        1.0
    };

    let mut svg = open_tag(CHART_WIDTH, height, "chart chart--hbars");
    for (index, (key, value)) in pairs.iter().enumerate() {
        let y = MARGIN_TOP + index as f64 * HBAR_ROW_HEIGHT;
        let bar_w = ((value - bar_base) / full_span * plot_w).max(1.0);
        let fraction = (value - data_min) / span;
        svg.push_str(&format!(
            "<text x='{lx}' y='{ty:.1}' text-anchor='end' class='chart__tick'>{label}</text>",
            lx = label_w - 8.0,
            ty = y + HBAR_ROW_HEIGHT * 0.65,
            label = escape_text(key),
        ));
        svg.push_str(&format!(
            "<rect x='{label_w}' y='{ry:.1}' width='{bar_w:.1}' height='{rh:.1}' fill='{color}'><title>{label}: {value}</title></rect>",
            ry = y + 4.0,
            rh = HBAR_ROW_HEIGHT - 8.0,
            color = scheme.color_for_fraction(fraction),
            label = escape_text(key),
            value = axis_label(*value),
        ));
        svg.push_str(&format!(
            "<text x='{vx:.1}' y='{ty:.1}' class='chart__tick'>{value}</text>",
            vx = label_w + bar_w + 6.0,
            ty = y + HBAR_ROW_HEIGHT * 0.65,
            value = axis_label(*value),
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Line series over index positions, with point markers.
pub fn line_svg(values: &[f64], color: &str) -> String {
    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (data_min, data_max) = if values.is_empty() {
        (0.0, 1.0)
    } else {
        (data_min, data_max)
    };
    let span = if data_max > data_min {
        data_max - data_min
    } else {
        1.0
    };

    let last = (values.len().saturating_sub(1)).max(1) as f64;
    let x_of = |index: usize| MARGIN_LEFT + index as f64 / last * plot_w;
    let y_of = |value: f64| MARGIN_TOP + (data_max - value) / span * plot_h;

    let points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(index, value)| format!("{:.1},{:.1}", x_of(index), y_of(*value)))
        .collect();

    let mut svg = open_tag(CHART_WIDTH, CHART_HEIGHT, "chart chart--line");
    svg.push_str(&axis_frame(data_min, data_max, CHART_HEIGHT - MARGIN_BOTTOM));
    svg.push_str(&format!(
        "<polyline points='{points}' fill='none' stroke='{color}' stroke-width='2'/>",
        points = points.join(" "),
    ));
    for (index, value) in values.iter().enumerate() {
        svg.push_str(&format!(
            "<circle cx='{cx:.1}' cy='{cy:.1}' r='3' fill='{color}'><title>{index}: {value}</title></circle>",
            cx = x_of(index),
            cy = y_of(*value),
            value = axis_label(*value),
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Scatter plot of paired points with optional trend overlay and axis
/// captions.
pub fn scatter_svg(
    x: &[f64],
    y: &[f64],
    trend: Option<TrendLine>,
    x_label: &str,
    y_label: &str,
    color: &str,
) -> String {
    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let count = x.len().min(y.len());
    let (x_min, x_max) = bounds(&x[..count]);
    let (y_min, y_max) = bounds(&y[..count]);
    let x_span = if x_max > x_min { x_max - x_min } else { 1.0 };
    let y_span = if y_max > y_min { y_max - y_min } else { 1.0 };

    let px = |value: f64| MARGIN_LEFT + (value - x_min) / x_span * plot_w;
    let py = |value: f64| MARGIN_TOP + (y_max - value) / y_span * plot_h;

    let mut svg = open_tag(CHART_WIDTH, CHART_HEIGHT, "chart chart--scatter");
    svg.push_str(&axis_frame(y_min, y_max, CHART_HEIGHT - MARGIN_BOTTOM));

    if let Some(line) = trend {
        svg.push_str(&format!(
            "<line x1='{x1:.1}' y1='{y1:.1}' x2='{x2:.1}' y2='{y2:.1}' stroke='{color}' stroke-width='2' stroke-dasharray='6 3' class='chart__trend'/>",
            x1 = px(x_min),
            y1 = py(line.y_at(x_min)),
            x2 = px(x_max),
            y2 = py(line.y_at(x_max)),
        ));
    }

    for index in 0..count {
        svg.push_str(&format!(
            "<circle cx='{cx:.1}' cy='{cy:.1}' r='5' fill='{color}' fill-opacity='0.85'><title>{xv}, {yv}</title></circle>",
            cx = px(x[index]),
            cy = py(y[index]),
            xv = axis_label(x[index]),
            yv = axis_label(y[index]),
        ));
    }

    svg.push_str(&format!(
        "<text x='{cx}' y='{by}' text-anchor='middle' class='chart__axis-label'>{label}</text>",
        cx = MARGIN_LEFT + plot_w / 2.0,
        by = CHART_HEIGHT - 6.0,
        label = escape_text(x_label),
    ));
    svg.push_str(&format!(
        "<text x='14' y='{cy}' text-anchor='middle' transform='rotate(-90 14 {cy})' class='chart__axis-label'>{label}</text>",
        cy = MARGIN_TOP + plot_h / 2.0,
        label = escape_text(y_label),
    ));
    svg.push_str("</svg>");
    svg
}

fn open_tag(width: f64, height: f64, class: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {width} {height}' \
         width='100%' height='{height}' role='img' class='{class}'>"
    )
}

fn axis_frame(data_min: f64, data_max: f64, baseline: f64) -> String {
    format!(
        "<line x1='{left}' y1='{top}' x2='{left}' y2='{bottom}' class='chart__axis'/>\
         <line x1='{left}' y1='{baseline:.1}' x2='{right}' y2='{baseline:.1}' class='chart__axis'/>\
         <text x='{tick_x}' y='{top_text}' text-anchor='end' class='chart__tick'>{max}</text>\
         <text x='{tick_x}' y='{bottom_text}' text-anchor='end' class='chart__tick'>{min}</text>",
        left = MARGIN_LEFT,
        right = CHART_WIDTH - MARGIN_RIGHT,
        top = MARGIN_TOP,
        bottom = CHART_HEIGHT - MARGIN_BOTTOM,
        tick_x = MARGIN_LEFT - 8.0,
        top_text = MARGIN_TOP + 4.0,
        bottom_text = CHART_HEIGHT - MARGIN_BOTTOM + 4.0,
        max = axis_label(data_max),
        min = axis_label(data_min),
    )
}

fn bounds(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn axis_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format_count(value as i64)
    } else {
        format_number(value, 2)
    }
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_shades_both_half_ranges() {
        let svg = gauge_svg(42.0, (0.0, 84.0), "ppm", "#2196F3");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("fill='lightgray'"));
        assert!(svg.contains("fill='gray'"));
        assert!(svg.contains("42 ppm"));
        assert!(svg.contains("84"));
    }

    #[test]
    fn bar_chart_draws_one_rect_per_value() {
        let labels = vec!["0".to_string(), "1".to_string(), "2".to_string()];
        let svg = bar_svg(&labels, &[1.0, 2.0, 3.0], "#4CAF50");
        assert_eq!(svg.matches("<rect").count(), 3);
    }

    #[test]
    fn scatter_overlays_a_trend_only_when_given_one() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0];
        let trend = TrendLine {
            slope: 2.0,
            intercept: 0.0,
        };
        let with = scatter_svg(&x, &y, Some(trend), "rt", "intensity", "#9C27B0");
        let without = scatter_svg(&x, &y, None, "rt", "intensity", "#9C27B0");
        assert!(with.contains("chart__trend"));
        assert!(!without.contains("chart__trend"));
    }

    #[test]
    fn axis_captions_are_escaped() {
        let svg = scatter_svg(&[1.0], &[1.0], None, "m/z <raw>", "count", "#000000");
        assert!(svg.contains("m/z &lt;raw&gt;"));
    }

    #[test]
    fn horizontal_bars_grow_with_the_pair_count() {
        let pairs: Vec<(String, f64)> = (0..12)
            .map(|i| (format!("fraction {i}"), i as f64))
            .collect();
        let svg = horizontal_bar_svg(&pairs, ColorScheme::Viridis);
        assert_eq!(svg.matches("<rect").count(), 12);
    }

    #[test]
    fn constant_line_series_does_not_divide_by_zero() {
        let svg = line_svg(&[5.0; 12], "#FFC107");
        assert!(!svg.contains("NaN"));
    }
}
