use leptos::prelude::*;

use crate::storage;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<String>,
    pub set_theme: WriteSignal<String>,
}

/// Saved theme preference, defaulting to "system".
pub fn load_theme() -> String {
    storage::get_item(storage::THEME_KEY).unwrap_or_else(|| String::from("system"))
}

pub fn save_theme(theme: &str) {
    storage::set_item(storage::THEME_KEY, theme);
}

/// Apply the theme by setting or removing the `data-theme` attribute on `<html>`.
/// - "light" → forces light
/// - "dark" → forces dark
/// - anything else ("system") → removes attribute, CSS @media handles it
pub fn apply_theme(theme: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                match theme {
                    "light" => {
                        let _ = html.set_attribute("data-theme", "light");
                    }
                    "dark" => {
                        let _ = html.set_attribute("data-theme", "dark");
                    }
                    _ => {
                        let _ = html.remove_attribute("data-theme");
                    }
                }
            }
        }
    }
}
