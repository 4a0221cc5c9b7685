//! App shell: navbar plus the routed view.

use dioxus::prelude::*;
use ui::{use_auth, AuthState, Navbar, ThemeToggle};

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let logout = move |_| {
        spawn(async move {
            if let Err(e) = api::logout().await {
                tracing::error!("logout failed: {e}");
                return;
            }
            auth.set(AuthState {
                user: None,
                loading: false,
            });
            nav.push(Route::Landing {});
        });
    };

    let user = auth().user;

    rsx! {
        Navbar {
            Link { class: "navbar-brand", to: Route::Landing {}, "Blogify" }

            div { class: "navbar-links",
                Link { to: Route::Posts { query: String::new() }, "All Posts" }
                if user.is_some() {
                    Link { to: Route::Write {}, "New Post" }
                    Link { to: Route::Generate {}, "AI Writer" }
                    Link { to: Route::MyPosts {}, "My Posts" }
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    Link { to: Route::Premium {}, "Premium" }
                }
            }

            div { class: "navbar-session",
                ThemeToggle {}
                match user {
                    Some(user) => rsx! {
                        span { class: "navbar-greeting",
                            "Hi, {user.username}"
                            if user.is_premium {
                                span { class: "premium-badge", "PREMIUM" }
                            }
                        }
                        button { class: "btn btn-secondary", onclick: logout, "Logout" }
                    },
                    None => rsx! {
                        Link { class: "btn btn-secondary", to: Route::Login {}, "Login" }
                        Link { class: "btn btn-primary", to: Route::Signup {}, "Sign Up" }
                    },
                }
            }
        }

        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
