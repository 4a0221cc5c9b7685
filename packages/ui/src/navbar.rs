//! Top navigation bar container.

use dioxus::prelude::*;

/// Fixed navigation bar. The app shell fills it with brand, links and the
/// session controls.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "navbar",
            nav { class: "navbar-inner", {children} }
        }
    }
}
