//! Inline-SVG charts for the dashboard. The geometry math lives here as
//! plain functions so the coordinate mapping can be unit-tested without
//! rendering anything.

pub mod savings_chart;
pub mod water_usage_chart;
pub mod yield_chart;

pub(crate) const CHART_WIDTH: f64 = 320.0;
pub(crate) const CHART_HEIGHT: f64 = 160.0;
pub(crate) const CHART_PAD: f64 = 24.0;

/// Map `value` from `[min, max]` into the padded vertical span, with the
/// SVG y-axis pointing down. A flat series maps to the vertical middle.
pub(crate) fn y_position(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let fraction = if span == 0.0 {
        0.5
    } else {
        (value - min) / span
    };
    CHART_HEIGHT - CHART_PAD - fraction * (CHART_HEIGHT - 2.0 * CHART_PAD)
}

/// Evenly spaced x position for point `i` of `n`.
pub(crate) fn x_position(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return CHART_PAD;
    }
    CHART_PAD + i as f64 * (CHART_WIDTH - 2.0 * CHART_PAD) / (n - 1) as f64
}

/// `points` attribute for an SVG polyline over the series.
pub(crate) fn polyline_points(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{:.1},{:.1}", x_position(i, values.len()), y_position(v, min, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short "Mar 1" style label for an ISO date.
pub(crate) fn short_date(iso: &str) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let mut parts = iso.split('-');
    let _year = parts.next();
    let month = parts.next().and_then(|m| m.parse::<usize>().ok());
    let day = parts.next().and_then(|d| d.parse::<u32>().ok());
    match (month, day) {
        (Some(m), Some(d)) if (1..=12).contains(&m) => format!("{} {d}", MONTHS[m - 1]),
        _ => iso.to_string(),
    }
}
