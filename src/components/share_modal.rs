use leptos::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::api;

/// Modal with the shareable dashboard link, a copy-to-clipboard button
/// and an email shortcut. The parent controls visibility with `<Show>`.
#[component]
pub fn ShareModal(
    #[prop(into)] share_url: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let (status, set_status) = signal::<Option<String>>(None);

    let url_for_copy = share_url.clone();
    let copy = move |_| {
        let url = url_for_copy.clone();
        spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&url);
            match JsFuture::from(promise).await {
                Ok(_) => {
                    set_copied.set(true);
                    set_status.set(Some("Link copied to clipboard!".to_string()));
                    api::sleep_ms(2000).await;
                    set_copied.set(false);
                }
                Err(_) => {
                    set_status.set(Some("Failed to copy link".to_string()));
                }
            }
        });
    };

    let url_for_email = share_url.clone();
    let email = move |_| {
        let subject = "Check out my farming scenario";
        let body = format!(
            "I've created a farming scenario that might interest you: {}",
            url_for_email
        );
        let mailto = format!(
            "mailto:?subject={}&body={}",
            js_sys::encode_uri_component(subject),
            js_sys::encode_uri_component(&body)
        );
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&mailto, "_blank");
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Share Your Farming Scenario"</h3>
                    <button class="btn btn-close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <div class="form-group">
                    <label>"Shareable Link"</label>
                    <div class="input-row">
                        <input type="text" class="input" readonly prop:value=share_url.clone() />
                        <button class="btn btn-save" on:click=copy>
                            {move || if copied.get() { "✓" } else { "Copy" }}
                        </button>
                    </div>
                    <Show when=move || status.get().is_some()>
                        <span class="status-text">{move || status.get().unwrap_or_default()}</span>
                    </Show>
                </div>

                <div class="form-group">
                    <label>"Share via"</label>
                    <button class="btn" on:click=email>
                        "✉ Email"
                    </button>
                </div>

                <p class="modal-note">
                    "Anyone with this link can view your farming scenario and recommendations."
                </p>
            </div>
        </div>
    }
}
