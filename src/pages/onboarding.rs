use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::store::{FarmInputsPatch, StoreContext};

pub const CROP_OPTIONS: &[(&str, &str)] = &[
    ("wheat", "🌾 Wheat"),
    ("rice", "🌾 Rice"),
    ("tomato", "🍅 Tomato"),
];

pub const REGION_OPTIONS: &[(&str, &str)] = &[
    ("north-india", "🏔 North India"),
    ("south-india", "🌴 South India"),
    ("west-india", "🏖 West India"),
    ("east-india", "🌊 East India"),
];

pub const SOIL_OPTIONS: &[(&str, &str)] = &[
    ("clay", "Clay Soil — heavy, nutrient-rich"),
    ("sandy", "Sandy Soil — light, well-draining"),
    ("loamy", "Loamy Soil — balanced, fertile"),
];

fn select_options(options: &'static [(&'static str, &'static str)]) -> impl IntoView {
    options
        .iter()
        .map(|(value, label)| view! { <option value={*value}>{*label}</option> })
        .collect_view()
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let store = expect_context::<StoreContext>();
    let navigate = use_navigate();

    let (crop, set_crop) = signal(String::new());
    let (region, set_region) = signal(String::new());
    let (soil, set_soil) = signal(String::new());
    let (size, set_size) = signal(String::new());
    let (previous_yield, set_previous_yield) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if crop.get().is_empty() || region.get().is_empty() || soil.get().is_empty() {
            set_error.set(Some("Please fill in all required fields".to_string()));
            return;
        }
        let farm_size = match size.get().parse::<f64>() {
            Ok(acres) if acres > 0.0 => acres,
            _ => {
                set_error.set(Some("Farm size must be a positive number".to_string()));
                return;
            }
        };

        store.set_inputs(FarmInputsPatch {
            crop_type: Some(crop.get()),
            region: Some(region.get()),
            soil_type: Some(soil.get()),
            farm_size: Some(farm_size),
            previous_yield: previous_yield.get().parse::<f64>().ok(),
        });
        store.save();
        navigate("/dashboard", Default::default());
    };

    view! {
        <div class="page onboarding-page">
            <div class="onboarding-intro">
                <span class="brand-icon">"🌿"</span>
                <h2>"Setup Your Farm"</h2>
                <p>"Tell us about your farm to get personalized recommendations"</p>
            </div>

            <form class="onboarding-form" on:submit=submit>
                <div class="form-group">
                    <label for="crop-type" title="Select the primary crop you're growing this season">
                        "Crop Type *"
                    </label>
                    <select
                        id="crop-type"
                        class="input"
                        prop:value=move || crop.get()
                        on:change=move |ev| set_crop.set(event_target_value(&ev))
                    >
                        <option value="">"Choose your crop"</option>
                        {select_options(CROP_OPTIONS)}
                    </select>
                </div>

                <div class="form-group">
                    <label for="region" title="Your farm's geographic region">"Region *"</label>
                    <select
                        id="region"
                        class="input"
                        prop:value=move || region.get()
                        on:change=move |ev| set_region.set(event_target_value(&ev))
                    >
                        <option value="">"Choose your region"</option>
                        {select_options(REGION_OPTIONS)}
                    </select>
                </div>

                <div class="form-group">
                    <label for="soil-type" title="Dominant soil type on your land">"Soil Type *"</label>
                    <select
                        id="soil-type"
                        class="input"
                        prop:value=move || soil.get()
                        on:change=move |ev| set_soil.set(event_target_value(&ev))
                    >
                        <option value="">"Choose your soil"</option>
                        {select_options(SOIL_OPTIONS)}
                    </select>
                </div>

                <div class="form-group">
                    <label for="farm-size">"Farm Size (acres) *"</label>
                    <input
                        id="farm-size"
                        type="number"
                        min="0"
                        step="0.1"
                        class="input"
                        placeholder="e.g. 5"
                        prop:value=move || size.get()
                        on:input=move |ev| set_size.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="previous-yield">"Previous Yield (tons, optional)"</label>
                    <input
                        id="previous-yield"
                        type="number"
                        min="0"
                        step="0.1"
                        class="input"
                        placeholder="Leave blank if unknown"
                        prop:value=move || previous_yield.get()
                        on:input=move |ev| set_previous_yield.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || error.get().is_some()>
                    <span class="status-text status-error">
                        {move || error.get().unwrap_or_default()}
                    </span>
                </Show>

                <button type="submit" class="btn btn-primary">
                    "Get My Recommendations →"
                </button>
            </form>
        </div>
    }
}
