//! Account dashboard: profile, quota and content stats.

use dioxus::prelude::*;
use ui::{use_auth, ErrorNotice, Failure, Loading, ThemeToggle};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let stats = use_resource(|| async move { api::user_stats().await });

    // Fold freshly fetched premium/quota fields back into the session so
    // the rest of the app sees them.
    use_effect(move || {
        if let Some(Ok(fetched)) = &*stats.read() {
            let mut state = auth.peek().clone();
            if let Some(user) = state.user.as_mut() {
                user.merge_stats(fetched);
                auth.set(state);
            }
        }
    });

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let user = auth().user;

    rsx! {
        section { class: "page-header",
            h1 { "Dashboard" }
        }

        match &*stats.read() {
            None => rsx! { Loading {} },
            Some(Err(e)) => {
                let failure = Failure::classify(e);
                if failure == Failure::Unauthorized {
                    nav.replace(Route::Login {});
                }
                rsx! { ErrorNotice { message: failure.user_message() } }
            }
            Some(Ok(fetched)) => {
                let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
                let quota = if fetched.is_premium {
                    "Unlimited".to_string()
                } else {
                    format!(
                        "{} of {} used",
                        fetched.ai_posts_generated_count, fetched.free_tier_ai_limit
                    )
                };

                rsx! {
                    section { class: "stats-row",
                        div { class: "stat-card",
                            span { class: "stat-value", "{username}" }
                            span { class: "stat-label",
                                if fetched.is_premium { "Premium account" } else { "Free account" }
                            }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{fetched.posts_count}" }
                            span { class: "stat-label", "Posts published" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{fetched.total_views_on_posts}" }
                            span { class: "stat-label", "Total reads" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{quota}" }
                            span { class: "stat-label", "AI generations" }
                        }
                    }

                    if !fetched.is_premium {
                        section { class: "upgrade-hint",
                            p { "Want unlimited AI drafts and a premium badge?" }
                            Link { class: "btn btn-primary", to: Route::Premium {}, "Go Premium" }
                        }
                    }

                    section { class: "dashboard-theme",
                        h2 { "Appearance" }
                        p { "Switch between light and dark mode. Your choice is remembered on this device." }
                        ThemeToggle {}
                    }
                }
            }
        }
    }
}
