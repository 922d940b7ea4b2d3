//! Theme preference handling.
//!
//! The flag lives in browser local storage; when absent, the OS
//! preference decides. The active theme is the `data-theme` attribute on
//! the document element, which the stylesheet keys off.

use gloo_storage::{LocalStorage, Storage};
use web_sys::window;

const THEME_KEY: &str = "portico.theme";

/// Apply the stored theme, or the OS preference when none is stored.
pub fn apply_initial_theme() {
    let stored: Option<String> = LocalStorage::get(THEME_KEY).ok();
    let theme = stored.unwrap_or_else(|| {
        if prefers_dark() { "dark" } else { "light" }.to_string()
    });
    set_document_theme(&theme);
}

/// The currently applied theme, defaulting to dark.
#[must_use]
pub fn current_theme() -> String {
    window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|element| element.get_attribute("data-theme"))
        .filter(|theme| !theme.is_empty())
        .unwrap_or_else(|| "dark".to_string())
}

/// Switch to the other theme, persist the choice, and return it.
pub fn toggle_theme() -> String {
    let next = if current_theme() == "dark" {
        "light"
    } else {
        "dark"
    };
    let _ = LocalStorage::set(THEME_KEY, next.to_string());
    set_document_theme(next);
    next.to_string()
}

fn prefers_dark() -> bool {
    window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .is_some_and(|media_query| media_query.matches())
}

fn set_document_theme(theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.document_element()
    {
        let _ = element.set_attribute("data-theme", theme);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn initial_theme_is_applied_to_the_document() {
        apply_initial_theme();
        let theme = current_theme();
        assert!(theme == "dark" || theme == "light");
    }

    #[wasm_bindgen_test]
    fn toggle_flips_and_flips_back() {
        apply_initial_theme();
        let before = current_theme();
        let flipped = toggle_theme();
        assert_ne!(flipped, before);
        let back = toggle_theme();
        assert_eq!(back, before);
    }
}
