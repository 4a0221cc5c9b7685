//! Loading and error placeholders shared by the views.

use dioxus::prelude::*;

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
            p { "{label}" }
        }
    }
}

#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div { class: "error-notice",
            p { "{message}" }
        }
    }
}
