use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// The stat label, e.g. "Expected Yield"
    #[prop(into)]
    title: String,
    /// The formatted value, e.g. "173 tons"
    #[prop(into)]
    value: String,
    /// Small line under the value
    #[prop(into)]
    caption: String,
    /// Accent class, e.g. "stat-green"
    #[prop(optional, into)]
    accent: String,
) -> impl IntoView {
    let class = if accent.is_empty() {
        String::from("stat-card")
    } else {
        format!("stat-card {accent}")
    };

    view! {
        <div class=class>
            <span class="stat-title">{title}</span>
            <span class="stat-value">{value}</span>
            <span class="stat-caption">{caption}</span>
        </div>
    }
}
