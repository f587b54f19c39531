use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, HistoryEntry};

/// Share of a day's total savings attributed to each resource, matching
/// the summary the dashboard charts show.
fn breakdown(savings: i64) -> (i64, i64, i64) {
    let total = savings as f64;
    (
        (total * 0.6).floor() as i64,
        (total * 0.3).floor() as i64,
        (total * 0.1).floor() as i64,
    )
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let (entries, set_entries) = signal::<Option<Vec<HistoryEntry>>>(None);

    // Tracks nothing, so it fetches exactly once on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(history) = api::get_historical_data().await {
                set_entries.set(Some(history));
            }
        });
    });

    view! {
        <div class="page history-page">
            <header class="history-header">
                <a href="/dashboard" class="btn">"← Back to Dashboard"</a>
                <div>
                    <h2>"Historical Data"</h2>
                    <p class="page-description">"View your past recommendations and savings"</p>
                </div>
            </header>

            {move || match entries.get() {
                None => view! { <div class="loading">"Loading history…"</div> }.into_any(),
                Some(entries) => view! {
                    <div class="history-list">
                        {entries
                            .into_iter()
                            .map(|entry| {
                                let (water, fertilizer, labor) = breakdown(entry.savings);
                                view! {
                                    <div class="history-card">
                                        <div class="history-card-header">
                                            <div>
                                                <h3>{entry.date}</h3>
                                                <p class="section-description">
                                                    {format!(
                                                        "{} recommendations generated",
                                                        entry.recommendations
                                                    )}
                                                </p>
                                            </div>
                                            <div class="history-card-totals">
                                                <span class="crop-badge">{entry.crop_type}</span>
                                                <span class="history-savings">
                                                    {format!("₹{}", entry.savings)}
                                                </span>
                                            </div>
                                        </div>
                                        <div class="history-breakdown">
                                            <span>{format!("Water Saved: {water}L")}</span>
                                            <span>{format!("Fertilizer Saved: {fertilizer}kg")}</span>
                                            <span>{format!("Labor Saved: {labor}hrs")}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
