//! Public landing page with site totals and trending AI posts.

use dioxus::prelude::*;
use ui::{use_auth, ErrorNotice, Failure, Loading, PostCard};

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let data = use_resource(move || async move {
        futures::join!(api::global_stats(), api::trending_ai_posts())
    });

    let write_route = if auth().user.is_some() {
        Route::Write {}
    } else {
        Route::Signup {}
    };

    rsx! {
        section { class: "hero",
            h1 { "Write more. Think less." }
            p { "Blogify pairs your ideas with an AI co-writer, free to start." }
            div { class: "hero-actions",
                Link { class: "btn btn-primary", to: write_route, "Start Writing" }
                Link { class: "btn btn-secondary", to: Route::Generate {}, "Try the AI Writer" }
            }
        }

        match &*data.read() {
            None => rsx! { Loading {} },
            Some((stats, trending)) => {
                let stats_section = match stats {
                    Ok(stats) => rsx! {
                        section { class: "stats-row",
                            div { class: "stat-card",
                                span { class: "stat-value", "{stats.total_users}" }
                                span { class: "stat-label", "Writers" }
                            }
                            div { class: "stat-card",
                                span { class: "stat-value", "{stats.total_posts}" }
                                span { class: "stat-label", "Posts" }
                            }
                            div { class: "stat-card",
                                span { class: "stat-value", "{stats.total_views}" }
                                span { class: "stat-label", "Reads" }
                            }
                        }
                    },
                    Err(e) => rsx! { ErrorNotice { message: Failure::classify(e).user_message() } },
                };
                let trending_section = match trending {
                    Ok(posts) if posts.is_empty() => rsx! {},
                    Ok(posts) => rsx! {
                        section { class: "trending",
                            h2 { "Trending AI posts" }
                            div { class: "post-grid",
                                for post in posts.clone() {
                                    PostCard {
                                        key: "{post.id}",
                                        post,
                                        on_open: move |id| { nav.push(Route::PostDetail { id }); },
                                        on_author: move |user_id| {
                                            nav.push(Route::UserPosts { user_id, query: String::new() });
                                        },
                                    }
                                }
                            }
                        }
                    },
                    Err(e) => rsx! { ErrorNotice { message: Failure::classify(e).user_message() } },
                };
                rsx! {
                    {stats_section}
                    {trending_section}
                }
            }
        }
    }
}
