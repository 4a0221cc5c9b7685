//! All-posts listing with search. The query lives in the route so results
//! are shareable and survive back navigation.

use dioxus::prelude::*;
use ui::{ErrorNotice, Failure, Loading, PostCard};

use crate::Route;

#[component]
pub fn Posts(query: String) -> Element {
    let nav = use_navigator();
    let mut search = use_signal(|| query.clone());

    let searching = !query.trim().is_empty();

    // Keep the input in step with the route on back/forward navigation
    {
        let query = query.clone();
        use_effect(use_reactive!(|(query,)| {
            search.set(query);
        }));
    }

    let data = use_resource(use_reactive!(|(query,)| async move {
        let filter = api::normalize_query(Some(query));
        futures::join!(api::list_posts(filter), api::global_stats())
    }));

    let submit_search = move |evt: FormEvent| {
        evt.prevent_default();
        nav.push(Route::Posts { query: search() });
    };

    rsx! {
        section { class: "page-header",
            h1 { "All Posts" }
            form { class: "search-bar", onsubmit: submit_search,
                input {
                    r#type: "search",
                    placeholder: "Search posts...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Search" }
                if searching {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| { nav.push(Route::Posts { query: String::new() }); },
                        "Clear"
                    }
                }
            }
        }

        match &*data.read() {
            None => rsx! { Loading {} },
            Some((Err(e), _)) => rsx! { ErrorNotice { message: Failure::classify(e).user_message() } },
            Some((Ok(posts), stats)) => rsx! {
                if let Ok(stats) = stats {
                    p { class: "listing-stats",
                        "{stats.total_posts} posts from {stats.total_users} writers, {stats.total_views} reads"
                    }
                }
                if posts.is_empty() {
                    div { class: "empty-state",
                        if searching {
                            p { "No posts match your search." }
                        } else {
                            p { "No posts yet. Be the first to write one!" }
                        }
                    }
                } else {
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
        }
    }
}
