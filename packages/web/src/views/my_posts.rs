//! The logged-in user's own posts with owner controls.

use dioxus::prelude::*;
use ui::{use_auth, ErrorNotice, Failure, Loading, PostCard};

use crate::Route;

#[component]
pub fn MyPosts() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let mut posts = use_resource(|| async move { api::my_posts().await });

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let delete = move |id: i64| {
        spawn(async move {
            match api::delete_post(id).await {
                Ok(()) => posts.restart(),
                Err(e) => Failure::classify(&e).report(),
            }
        });
    };

    rsx! {
        section { class: "page-header",
            h1 { "My Posts" }
            Link { class: "btn btn-primary", to: Route::Write {}, "New Post" }
        }

        match &*posts.read() {
            None => rsx! { Loading {} },
            Some(Err(e)) => {
                let failure = Failure::classify(e);
                if failure == Failure::Unauthorized {
                    nav.replace(Route::Login {});
                }
                rsx! { ErrorNotice { message: failure.user_message() } }
            }
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "empty-state",
                    p { "You have not written anything yet." }
                    Link { class: "btn btn-primary", to: Route::Write {}, "Create Your First Post" }
                }
            },
            Some(Ok(list)) => rsx! {
                div { class: "post-grid",
                    for post in list.clone() {
                        PostCard {
                            key: "{post.id}",
                            post: post.clone(),
                            on_open: move |id| { nav.push(Route::PostDetail { id }); },
                            on_author: move |user_id| {
                                nav.push(Route::UserPosts { user_id, query: String::new() });
                            },
                            actions: rsx! {
                                button {
                                    class: "btn btn-secondary",
                                    onclick: {
                                        let id = post.id;
                                        move |_| { nav.push(Route::EditPost { id }); }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-danger",
                                    onclick: {
                                        let id = post.id;
                                        move |_| delete(id)
                                    },
                                    "Delete"
                                }
                            },
                        }
                    }
                }
            },
        }
    }
}
