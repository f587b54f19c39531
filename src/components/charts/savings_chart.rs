use leptos::prelude::*;

use super::{y_position, CHART_HEIGHT, CHART_PAD, CHART_WIDTH};
use crate::engine::SavingsEstimate;

/// Saved-versus-cost bars for the three savings categories.
#[component]
pub fn SavingsChart(data: SavingsEstimate) -> impl IntoView {
    let lines = [
        ("Water", data.water),
        ("Fertilizer", data.fertilizer),
        ("Labor", data.labor),
    ];
    let max = lines
        .iter()
        .flat_map(|(_, line)| [line.saved, line.cost])
        .fold(f64::NEG_INFINITY, f64::max);

    let slot = (CHART_WIDTH - 2.0 * CHART_PAD) / lines.len() as f64;
    let bar_width = slot * 0.28;
    let baseline_y = CHART_HEIGHT - CHART_PAD;
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    let groups = lines
        .iter()
        .map(|(label, line)| (label.to_string(), *line))
        .enumerate()
        .map(|(i, (label, line))| {
            let group_x = CHART_PAD + i as f64 * slot;
            let saved_x = group_x + slot / 2.0 - bar_width;
            let cost_x = group_x + slot / 2.0;
            let saved_top = y_position(line.saved.max(0.0), 0.0, max);
            let cost_top = y_position(line.cost, 0.0, max);
            view! {
                <g>
                    <rect
                        class="chart-bar bar-saved"
                        x={saved_x}
                        y={saved_top}
                        width={bar_width}
                        height={baseline_y - saved_top}
                    />
                    <rect
                        class="chart-bar bar-cost"
                        x={cost_x}
                        y={cost_top}
                        width={bar_width}
                        height={baseline_y - cost_top}
                    />
                    <text class="chart-label" x={saved_x} y={baseline_y + 16.0}>
                        {label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart savings-chart" viewBox=view_box>
            <line
                class="chart-axis"
                x1={CHART_PAD}
                y1={baseline_y}
                x2={CHART_WIDTH - CHART_PAD}
                y2={baseline_y}
            />
            {groups}
        </svg>
    }
}
