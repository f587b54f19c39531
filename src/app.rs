use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::history::HistoryPage;
use crate::pages::landing::LandingPage;
use crate::pages::onboarding::OnboardingPage;
use crate::store::StoreContext;
use crate::theme::{apply_theme, load_theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    // Restore whatever the last session saved before the first render.
    let store = StoreContext::load();
    provide_context(store);

    let (theme, set_theme) = signal(load_theme());
    provide_context(ThemeContext { theme, set_theme });

    // Apply theme to DOM whenever the signal changes
    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(&t);
    });

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/onboarding") view=OnboardingPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/history") view=HistoryPage />
                </Routes>
            </main>
        </Router>
    }
}
