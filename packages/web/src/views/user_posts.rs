//! Public profile: one author's posts, searchable.

use dioxus::prelude::*;
use ui::{ErrorNotice, Failure, Loading, PostCard};

use crate::Route;

#[component]
pub fn UserPosts(user_id: i64, query: String) -> Element {
    let nav = use_navigator();
    let mut search = use_signal(|| query.clone());

    let searching = !query.trim().is_empty();

    {
        let query = query.clone();
        use_effect(use_reactive!(|(query,)| {
            search.set(query);
        }));
    }

    let posts = use_resource(use_reactive!(|(user_id, query)| async move {
        let filter = api::normalize_query(Some(query));
        api::user_posts(user_id, filter).await
    }));

    let submit_search = move |evt: FormEvent| {
        evt.prevent_default();
        nav.push(Route::UserPosts {
            user_id,
            query: search(),
        });
    };

    rsx! {
        match &*posts.read() {
            None => rsx! { Loading {} },
            Some(Err(e)) => rsx! { ErrorNotice { message: Failure::classify(e).user_message() } },
            Some(Ok(list)) => {
                let author = list
                    .first()
                    .map(|p| p.username.clone())
                    .unwrap_or_else(|| "Unknown User".to_string());

                rsx! {
                    section { class: "page-header",
                        h1 { "Posts by {author}" }
                        form { class: "search-bar", onsubmit: submit_search,
                            input {
                                r#type: "search",
                                placeholder: "Search this author...",
                                value: search(),
                                oninput: move |evt| search.set(evt.value()),
                            }
                            button { class: "btn btn-primary", r#type: "submit", "Search" }
                            if searching {
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| {
                                        nav.push(Route::UserPosts { user_id, query: String::new() });
                                    },
                                    "Clear"
                                }
                            }
                        }
                    }

                    if list.is_empty() {
                        div { class: "empty-state",
                            if searching {
                                p { "No posts match your search." }
                            } else {
                                p { "This author has not published anything yet." }
                            }
                        }
                    } else {
                        div { class: "post-grid",
                            for post in list.clone() {
                                PostCard {
                                    key: "{post.id}",
                                    post,
                                    on_open: move |id| { nav.push(Route::PostDetail { id }); },
                                    on_author: move |_| {},
                                }
                            }
                        }
                    }

                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| { nav.push(Route::Posts { query: String::new() }); },
                        "Back to all posts"
                    }
                }
            }
        }
    }
}
