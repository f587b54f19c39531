use leptos::prelude::*;

use crate::theme::{save_theme, ThemeContext};

/// Cycles system → light → dark. The app root applies and the toggle
/// persists, so the preference survives reloads.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    let cycle = move |_| {
        let next = match ctx.theme.get().as_str() {
            "system" => "light",
            "light" => "dark",
            _ => "system",
        };
        ctx.set_theme.set(next.to_string());
        save_theme(next);
    };

    let icon = move || match ctx.theme.get().as_str() {
        "light" => "☀",
        "dark" => "🌙",
        _ => "🖥",
    };

    view! {
        <button class="btn btn-theme" title="Toggle theme" on:click=cycle>
            {icon}
        </button>
    }
}
