//! Durable theme preference.
//!
//! On wasm the preference lives in browser local storage under
//! [`THEME_STORAGE_KEY`], so it survives reloads. On other targets (tests,
//! native tooling) a process-local fallback keeps the same API.

use crate::theme::Theme;

/// The single local-storage key this application persists.
pub const THEME_STORAGE_KEY: &str = "theme";

#[cfg(target_arch = "wasm32")]
pub fn load_theme() -> Theme {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return Theme::default();
    };
    storage
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
static FALLBACK: std::sync::Mutex<Option<Theme>> = std::sync::Mutex::new(None);

#[cfg(not(target_arch = "wasm32"))]
pub fn load_theme() -> Theme {
    FALLBACK.lock().unwrap_or_else(|e| e.into_inner()).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_theme(theme: Theme) {
    *FALLBACK.lock().unwrap_or_else(|e| e.into_inner()) = Some(theme);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_persistence_round_trip() {
        // Unset storage yields the default.
        assert_eq!(load_theme(), Theme::Light);

        // Toggling twice restores the original persisted value.
        save_theme(load_theme().toggled());
        assert_eq!(load_theme(), Theme::Dark);
        save_theme(load_theme().toggled());
        assert_eq!(load_theme(), Theme::Light);
    }
}
