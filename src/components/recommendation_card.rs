use leptos::prelude::*;

use crate::components::severity_badge::SeverityBadge;
use crate::engine::Recommendation;

#[component]
pub fn RecommendationCard(rec: Recommendation) -> impl IntoView {
    let savings = rec.expected_savings;

    view! {
        <div class="recommendation-card">
            <div class="recommendation-header">
                <h4 class="recommendation-title">{rec.title}</h4>
                <div class="recommendation-meta">
                    <SeverityBadge severity=rec.severity />
                    // Hovering the confidence figure reveals the reasoning.
                    <span class="confidence" title=rec.explanation>
                        {rec.confidence} "%"
                    </span>
                </div>
            </div>

            <p class="recommendation-description">{rec.description}</p>

            <div class="recommendation-savings">
                <Show when=move || { savings.water > 0.0 }>
                    <span class="savings-water">{format!("💧 ₹{}", savings.water)}</span>
                </Show>
                <Show when=move || { savings.fertilizer > 0.0 }>
                    <span class="savings-fertilizer">{format!("🌱 ₹{}", savings.fertilizer)}</span>
                </Show>
                <Show when=move || savings.labor != 0.0>
                    <span class="savings-labor">{format!("👨‍🌾 ₹{}", savings.labor.abs())}</span>
                </Show>
            </div>
        </div>
    }
}
