use leptos::prelude::*;

use super::{polyline_points, short_date, CHART_HEIGHT, CHART_PAD, CHART_WIDTH};
use crate::engine::PredictionPoint;

/// 30-day yield forecast as a line chart.
#[component]
pub fn YieldChart(data: Vec<PredictionPoint>) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|p| p.yield_tons as f64).collect();
    let points = polyline_points(&values);

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let first_label = data.first().map(|p| short_date(&p.date)).unwrap_or_default();
    let last_label = data.last().map(|p| short_date(&p.date)).unwrap_or_default();

    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let baseline_y = CHART_HEIGHT - CHART_PAD;

    view! {
        <svg class="chart yield-chart" viewBox=view_box>
            <line
                class="chart-axis"
                x1={CHART_PAD}
                y1={baseline_y}
                x2={CHART_WIDTH - CHART_PAD}
                y2={baseline_y}
            />
            <polyline class="chart-line" fill="none" points=points />
            <text class="chart-label" x={CHART_PAD} y={CHART_PAD - 8.0}>
                {format!("{max} t")}
            </text>
            <text class="chart-label" x={CHART_PAD} y={baseline_y + 16.0}>
                {first_label}
            </text>
            <text
                class="chart-label chart-label-end"
                x={CHART_WIDTH - CHART_PAD}
                y={baseline_y + 16.0}
            >
                {last_label}
            </text>
        </svg>
    }
}
