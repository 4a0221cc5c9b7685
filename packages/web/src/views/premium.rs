//! Premium plan page and checkout entry point.

use dioxus::prelude::*;
use ui::{use_auth, Failure};

use crate::Route;

fn open_checkout(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let opened = web_sys::window()
            .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
            .flatten();
        if opened.is_none() {
            tracing::warn!("checkout popup blocked");
        }
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(
                "Complete your purchase in the new tab. Premium unlocks once payment is confirmed.",
            );
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("checkout URL: {url}");
    }
}

#[component]
pub fn Premium() -> Element {
    let auth = use_auth();
    let mut busy = use_signal(|| false);

    let upgrade = move |_| {
        spawn(async move {
            busy.set(true);
            match api::create_checkout().await {
                Ok(url) => open_checkout(&url),
                Err(e) => Failure::classify(&e).report(),
            }
            busy.set(false);
        });
    };

    let user = auth().user;

    rsx! {
        section { class: "page-header",
            h1 { "Go Premium" }
        }

        div { class: "pricing-card",
            h2 { "Blogify Premium" }
            p { class: "price", "$9.99" span { class: "price-period", "/month" } }
            ul { class: "feature-list",
                li { "Unlimited AI-generated posts" }
                li { "Premium badge on your profile" }
                li { "Priority AI model access" }
                li { "Support independent blogging" }
            }

            match user {
                None => rsx! {
                    Link { class: "btn btn-primary", to: Route::Signup {},
                        "Sign up to upgrade"
                    }
                },
                Some(user) if user.is_premium => rsx! {
                    button { class: "btn btn-primary", disabled: true, "You are premium" }
                },
                Some(_) => rsx! {
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: upgrade,
                        if busy() { "Opening checkout..." } else { "Upgrade Now" }
                    }
                },
            }
        }
    }
}
