use leptos::prelude::*;

use super::{short_date, y_position, CHART_HEIGHT, CHART_PAD, CHART_WIDTH};
use crate::engine::PredictionPoint;

/// Daily water usage for the first week as bars. Days the engine marked
/// `recommended` are drawn in the accent color.
#[component]
pub fn WaterUsageChart(data: Vec<PredictionPoint>) -> impl IntoView {
    let week: Vec<PredictionPoint> = data.into_iter().take(7).collect();
    let max = week
        .iter()
        .map(|p| p.water_usage as f64)
        .fold(f64::NEG_INFINITY, f64::max);

    let n = week.len().max(1);
    let slot = (CHART_WIDTH - 2.0 * CHART_PAD) / n as f64;
    let bar_width = slot * 0.6;
    let baseline_y = CHART_HEIGHT - CHART_PAD;
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    let bars = week
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = CHART_PAD + i as f64 * slot + (slot - bar_width) / 2.0;
            let top = y_position(point.water_usage as f64, 0.0, max);
            let class = if point.recommended {
                "chart-bar bar-recommended"
            } else {
                "chart-bar"
            };
            let label = short_date(&point.date);
            view! {
                <g>
                    <rect
                        class=class
                        x={x}
                        y={top}
                        width={bar_width}
                        height={baseline_y - top}
                    />
                    <text class="chart-label" x={x} y={baseline_y + 16.0}>
                        {label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart water-usage-chart" viewBox=view_box>
            <line
                class="chart-axis"
                x1={CHART_PAD}
                y1={baseline_y}
                x2={CHART_WIDTH - CHART_PAD}
                y2={baseline_y}
            />
            {bars}
        </svg>
    }
}
