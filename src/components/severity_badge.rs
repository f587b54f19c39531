use leptos::prelude::*;

use crate::engine::Severity;

#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    let class = match severity {
        Severity::Low => "severity-badge severity-low",
        Severity::Medium => "severity-badge severity-medium",
        Severity::High => "severity-badge severity-high",
    };

    view! { <span class=class>{severity.label()}</span> }
}
