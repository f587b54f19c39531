use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page landing-page">
            <header class="landing-header">
                <div class="brand">
                    <span class="brand-icon">"🌿"</span>
                    <h1>"FarmAssist"</h1>
                </div>
                <ThemeToggle />
            </header>

            <main class="landing-hero">
                <h2>"Sustainable Farming " <span class="accent">"Assistant"</span></h2>
                <p class="hero-subtitle">
                    "Optimize your farm's productivity while reducing environmental impact. \
                     Get personalized recommendations, track resource usage, and increase \
                     yields sustainably."
                </p>
                <a href="/onboarding" class="btn btn-primary btn-large">
                    "Get Started →"
                </a>

                <div class="card-grid">
                    <div class="card">
                        <span class="card-icon">"🌱"</span>
                        <h3>"Smart Recommendations"</h3>
                        <p>"AI-powered insights for optimal farming practices"</p>
                    </div>
                    <div class="card">
                        <span class="card-icon">"💧"</span>
                        <h3>"Water Conservation"</h3>
                        <p>"Reduce water usage by up to 30% while maintaining yield"</p>
                    </div>
                    <div class="card">
                        <span class="card-icon">"📈"</span>
                        <h3>"Yield Prediction"</h3>
                        <p>"Accurate forecasting for better planning and profitability"</p>
                    </div>
                    <div class="card">
                        <span class="card-icon">"🧑‍🌾"</span>
                        <h3>"Expert Support"</h3>
                        <p>"Access to agricultural experts and community knowledge"</p>
                    </div>
                </div>
            </main>
        </div>
    }
}
