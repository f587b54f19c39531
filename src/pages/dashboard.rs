use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::charts::savings_chart::SavingsChart;
use crate::components::charts::water_usage_chart::WaterUsageChart;
use crate::components::charts::yield_chart::YieldChart;
use crate::components::recommendation_card::RecommendationCard;
use crate::components::share_modal::ShareModal;
use crate::components::stat_card::StatCard;
use crate::components::theme_toggle::ThemeToggle;
use crate::engine::DashboardData;
use crate::share;
use crate::store::{ScenarioPatch, StoreContext};

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}%")
    } else {
        format!("{value}%")
    }
}

fn signed_degrees(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}°C")
    } else {
        format!("{value}°C")
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<StoreContext>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Apply shared-link parameters, then redirect to onboarding when the
    // farm is still unconfigured. One effect so ordering is fixed.
    Effect::new(move |_| {
        let map = query.get();
        let decoded = share::decode(|key| map.get(key));
        let has_inputs = decoded.inputs.is_some();
        if let Some(patch) = decoded.inputs.clone() {
            store.set_inputs(patch);
        }
        if let Some(scenario) = decoded.scenario.clone() {
            store.set_scenario(ScenarioPatch {
                rainfall_change: Some(scenario.rainfall_change),
                soil_nutrient_level: Some(scenario.soil_nutrient_level),
                temperature_change: Some(scenario.temperature_change),
            });
        }
        if !decoded.is_empty() {
            store.save();
        }
        if !has_inputs && !store.inputs_untracked().is_configured() {
            navigate("/onboarding", Default::default());
        }
    });

    // Recompute whenever the (inputs, scenario) key changes. Responses
    // carry a sequence number so a stale in-flight result never
    // overwrites a newer one.
    let (data, set_data) = signal::<Option<DashboardData>>(None);
    let request_seq = StoredValue::new(0u64);
    Effect::new(move |_| {
        let inputs = store.inputs();
        let scenario = store.scenario();
        if !inputs.is_configured() {
            return;
        }
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        spawn_local(async move {
            if let Ok(result) = api::get_dashboard_data(&inputs, &scenario).await {
                if request_seq.get_value() == seq {
                    set_data.set(Some(result));
                }
            }
        });
    });

    let (show_share, set_show_share) = signal(false);
    let (share_link, set_share_link) = signal(String::new());
    let (status, set_status) = signal::<Option<String>>(None);

    let open_share = move |_| {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let url = share::share_url(
            &origin,
            &store.inputs_untracked(),
            &store.scenario_untracked(),
        );
        set_share_link.set(url);
        set_show_share.set(true);
    };

    let export_pdf = move |_| {
        set_status.set(Some("PDF export feature will be implemented".to_string()));
    };

    let navigate_reset = use_navigate();
    let reset_farm = move |_| {
        store.reset();
        store.save();
        navigate_reset("/onboarding", Default::default());
    };

    let set_scenario_field = move |patch: ScenarioPatch| {
        store.set_scenario(patch);
        store.save();
    };

    let summary = move || {
        let inputs = store.inputs();
        format!(
            "{} • {} • {} acres",
            capitalize(&inputs.crop_type),
            inputs.region,
            inputs.farm_size
        )
    };

    view! {
        <div class="page dashboard-page">
            <header class="dashboard-header">
                <div>
                    <h2>"Farm Dashboard"</h2>
                    <p class="page-description">{summary}</p>
                </div>
                <div class="header-actions">
                    <a href="/history" class="btn">"History"</a>
                    <button class="btn" on:click=open_share>"Share"</button>
                    <button class="btn" on:click=export_pdf>"Export PDF"</button>
                    <button class="btn" on:click=reset_farm>"Reset Farm"</button>
                    <ThemeToggle />
                </div>
            </header>

            <Show when=move || status.get().is_some()>
                <span class="status-text">{move || status.get().unwrap_or_default()}</span>
            </Show>

            {move || match data.get() {
                None => view! { <div class="loading">"Crunching your projections…"</div> }.into_any(),
                Some(d) => {
                    let scenario = store.scenario();
                    let stats = d.quick_stats.clone();
                    let recommendations = d.recommendations.clone();
                    let savings = d.savings_estimate.clone();
                    let forecast = d.predicted_yield.clone();
                    view! {
                        <div class="stat-grid">
                            <StatCard
                                title="Expected Yield"
                                value=format!("{} tons", stats.expected_yield)
                                caption="+12% from last season"
                                accent="stat-green"
                            />
                            <StatCard
                                title="Daily Savings"
                                value=format!("₹{}", stats.daily_savings)
                                caption="Water + fertilizer savings"
                                accent="stat-blue"
                            />
                            <StatCard
                                title="Active Alerts"
                                value=stats.alerts.to_string()
                                caption="Requires attention"
                                accent="stat-orange"
                            />
                        </div>

                        <div class="dashboard-columns">
                            <div class="dashboard-column">
                                <section class="panel">
                                    <h3>"Scenario Simulation"</h3>
                                    <p class="section-description">
                                        "Adjust conditions to see how they affect recommendations"
                                    </p>

                                    <div class="form-group">
                                        <div class="slider-label">
                                            <label for="rainfall">"Rainfall Change"</label>
                                            <span>{signed_percent(scenario.rainfall_change)}</span>
                                        </div>
                                        <input
                                            id="rainfall"
                                            type="range"
                                            min="-50"
                                            max="50"
                                            step="5"
                                            prop:value=scenario.rainfall_change.to_string()
                                            on:input=move |ev| {
                                                if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                                    set_scenario_field(ScenarioPatch {
                                                        rainfall_change: Some(v.clamp(-50.0, 50.0)),
                                                        ..Default::default()
                                                    });
                                                }
                                            }
                                        />
                                    </div>

                                    <div class="form-group">
                                        <div class="slider-label">
                                            <label for="nutrients">"Soil Nutrient Level"</label>
                                            <span>{format!("{}%", scenario.soil_nutrient_level)}</span>
                                        </div>
                                        <input
                                            id="nutrients"
                                            type="range"
                                            min="0"
                                            max="100"
                                            step="5"
                                            prop:value=scenario.soil_nutrient_level.to_string()
                                            on:input=move |ev| {
                                                if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                                    set_scenario_field(ScenarioPatch {
                                                        soil_nutrient_level: Some(v.clamp(0.0, 100.0)),
                                                        ..Default::default()
                                                    });
                                                }
                                            }
                                        />
                                    </div>

                                    <div class="form-group">
                                        <div class="slider-label">
                                            <label for="temperature">"Temperature Change"</label>
                                            <span>{signed_degrees(scenario.temperature_change)}</span>
                                        </div>
                                        <input
                                            id="temperature"
                                            type="range"
                                            min="-5"
                                            max="5"
                                            step="0.5"
                                            prop:value=scenario.temperature_change.to_string()
                                            on:input=move |ev| {
                                                if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                                    set_scenario_field(ScenarioPatch {
                                                        temperature_change: Some(v.clamp(-5.0, 5.0)),
                                                        ..Default::default()
                                                    });
                                                }
                                            }
                                        />
                                    </div>
                                </section>

                                <section class="panel">
                                    <h3>"Monthly Savings"</h3>
                                    <SavingsChart data=savings />
                                </section>
                            </div>

                            <div class="dashboard-column">
                                <section class="panel">
                                    <h3>"Today's Recommendations"</h3>
                                    <p class="section-description">
                                        "AI-powered suggestions based on current conditions"
                                    </p>
                                    {recommendations
                                        .into_iter()
                                        .map(|rec| view! { <RecommendationCard rec=rec /> })
                                        .collect_view()}
                                </section>
                            </div>

                            <div class="dashboard-column">
                                <section class="panel">
                                    <h3>"Yield Prediction"</h3>
                                    <p class="section-description">"Next 30 days forecast"</p>
                                    <YieldChart data=forecast.clone() />
                                </section>
                                <section class="panel">
                                    <h3>"Water Usage"</h3>
                                    <p class="section-description">"Weekly usage vs recommended"</p>
                                    <WaterUsageChart data=forecast />
                                </section>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}

            <Show when=move || show_share.get()>
                <ShareModal
                    share_url=share_link.get()
                    on_close=move |_: ()| set_show_share.set(false)
                />
            </Show>
        </div>
    }
}
