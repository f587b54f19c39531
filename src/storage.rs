//! Thin wrapper over `window.localStorage`. Storage can be missing or
//! denied (private browsing, sandboxed webviews); every access degrades
//! to "no persistence" instead of failing the caller.

/// localStorage key for the theme preference.
pub const THEME_KEY: &str = "farming-assistant-theme";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}
