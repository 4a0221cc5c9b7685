//! Full post view with sharing and owner controls.

use dioxus::prelude::*;
use ui::icons::{FaEnvelope, FaEye, FaFacebook, FaLinkedin, FaRobot, FaWhatsapp, FaTwitter};
use ui::{
    current_origin, use_auth, CopyLinkButton, ErrorNotice, Failure, Icon, Loading, ShareLinks,
};

use crate::Route;

fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

#[component]
pub fn PostDetail(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let post = use_resource(use_reactive!(|(id,)| async move { api::get_post(id).await }));

    let delete = move |_| {
        if !confirm("Delete this post? This cannot be undone.") {
            return;
        }
        spawn(async move {
            match api::delete_post(id).await {
                Ok(()) => {
                    nav.push(Route::Posts {
                        query: String::new(),
                    });
                }
                Err(e) => Failure::classify(&e).report(),
            }
        });
    };

    let current = post.read();
    match &*current {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorNotice { message: Failure::classify(e).user_message() } },
        Some(Ok(post)) => {
            let links = ShareLinks::for_post(&current_origin(), post);
            let editable = post.editable_by(auth().user.as_ref());
            let author_id = post.user_id;

            rsx! {
                article { class: "post-detail",
                    if let Some(image) = post.image_url.as_deref() {
                        img { class: "post-detail-image", src: "{image}", alt: "{post.title}" }
                    }

                    h1 {
                        "{post.title}"
                        if post.is_ai_generated {
                            span { class: "ai-badge", title: "AI generated",
                                Icon { icon: FaRobot }
                            }
                        }
                    }

                    div { class: "post-detail-meta",
                        button {
                            class: "post-card-author",
                            onclick: move |_| {
                                nav.push(Route::UserPosts {
                                    user_id: author_id,
                                    query: String::new(),
                                });
                            },
                            "by {post.username}"
                        }
                        span { class: "post-card-views",
                            Icon { icon: FaEye }
                            " {post.views}"
                        }
                    }

                    div { class: "post-detail-content", dangerous_inner_html: "{post.content}" }

                    section { class: "share-row",
                        span { "Share:" }
                        a { href: "{links.facebook}", target: "_blank", rel: "noopener", title: "Facebook",
                            Icon { icon: FaFacebook }
                        }
                        a { href: "{links.twitter}", target: "_blank", rel: "noopener", title: "X",
                            Icon { icon: FaTwitter }
                        }
                        a { href: "{links.whatsapp}", target: "_blank", rel: "noopener", title: "WhatsApp",
                            Icon { icon: FaWhatsapp }
                        }
                        a { href: "{links.linkedin}", target: "_blank", rel: "noopener", title: "LinkedIn",
                            Icon { icon: FaLinkedin }
                        }
                        a { href: "{links.gmail}", target: "_blank", rel: "noopener", title: "Email",
                            Icon { icon: FaEnvelope }
                        }
                        CopyLinkButton { url: links.post_url.clone() }
                    }

                    if editable {
                        div { class: "owner-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| { nav.push(Route::EditPost { id }); },
                                "Edit"
                            }
                            button { class: "btn btn-danger", onclick: delete, "Delete" }
                        }
                    }
                }
            }
        }
    }
}
