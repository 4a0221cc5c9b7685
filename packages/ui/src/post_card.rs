//! Post summary card used by every listing view.

use api::PostInfo;
use dioxus::prelude::*;

use crate::icons::{FaEye, FaRobot};
use crate::Icon;

const EXCERPT_CHARS: usize = 100;

/// One post in a grid. `on_open` fires with the post id, `on_author` with
/// the author's user id. `actions` renders owner controls under the card
/// when the listing provides them.
#[component]
pub fn PostCard(
    post: PostInfo,
    on_open: EventHandler<i64>,
    on_author: EventHandler<i64>,
    #[props(default)] actions: Option<Element>,
) -> Element {
    let post_id = post.id;
    let author_id = post.user_id;
    let excerpt = post.excerpt(EXCERPT_CHARS);

    rsx! {
        article { class: "post-card",
            if let Some(image) = post.image_url.as_deref() {
                img {
                    class: "post-card-image",
                    src: "{image}",
                    alt: "{post.title}",
                    onclick: move |_| on_open.call(post_id),
                }
            }
            div { class: "post-card-body",
                h3 {
                    class: "post-card-title",
                    onclick: move |_| on_open.call(post_id),
                    "{post.title}"
                    if post.is_ai_generated {
                        span { class: "ai-badge", title: "AI generated",
                            Icon { icon: FaRobot }
                        }
                    }
                }
                p { class: "post-card-excerpt", "{excerpt}" }
                div { class: "post-card-meta",
                    button {
                        class: "post-card-author",
                        onclick: move |_| on_author.call(author_id),
                        "by {post.username}"
                    }
                    span { class: "post-card-views",
                        Icon { icon: FaEye }
                        " {post.views}"
                    }
                }
            }
            if let Some(actions) = actions {
                div { class: "post-card-actions", {actions} }
            }
        }
    }
}
