//! Light/dark theme context.
//!
//! The active [`Theme`] lives in a context signal provided by the app shell.
//! Switching it updates the `data-theme` attribute on the document root (the
//! stylesheet keys its variables off that attribute) and persists the choice
//! so it survives reloads.

use dioxus::prelude::*;
use store::Theme;

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

/// Context signal holding the active theme.
pub type ThemeSignal = Signal<Theme>;

/// Get the theme signal from context.
pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Restore the persisted theme into the signal and apply it to the document.
/// Call once on mount from the app shell.
pub fn load_theme_from_storage(mut theme: ThemeSignal) {
    let stored = store::load_theme();
    theme.set(stored);
    apply_theme(stored);
}

/// Reflect the theme onto the document root as a `data-theme` attribute.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("theme set to {}", theme.as_str());
    }
}

/// Navbar button that flips between light and dark. Shows the theme you
/// would switch to, not the active one.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    let onclick = move |_| {
        let next = theme().toggled();
        theme.set(next);
        store::save_theme(next);
        apply_theme(next);
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: onclick,
            match theme() {
                Theme::Light => rsx! { Icon { icon: FaMoon } },
                Theme::Dark => rsx! { Icon { icon: FaSun } },
            }
        }
    }
}
