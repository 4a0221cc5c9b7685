//! Post editor: compose a new post (optionally from a staged AI draft) or
//! edit an existing one.

use dioxus::prelude::*;
use store::AiDraft;
use ui::{use_ai_draft, use_auth, ErrorNotice, Failure, Loading};

use crate::Route;

/// What the form hands back on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFormData {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

#[component]
fn PostForm(
    #[props(default)] initial_title: String,
    #[props(default)] initial_content: String,
    #[props(default)] initial_image_url: String,
    submit_label: String,
    busy: bool,
    #[props(default)] error: Option<String>,
    on_submit: EventHandler<PostFormData>,
) -> Element {
    let mut title = use_signal(|| initial_title.clone());
    let mut content = use_signal(|| initial_content.clone());
    let mut image_url = use_signal(|| initial_image_url.clone());
    let mut validation = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        validation.set(None);

        if title().trim().is_empty() || content().trim().is_empty() {
            validation.set(Some("Title and content cannot be empty".to_string()));
            return;
        }

        let image = image_url().trim().to_string();
        on_submit.call(PostFormData {
            title: title().trim().to_string(),
            content: content(),
            image_url: (!image.is_empty()).then_some(image),
        });
    };

    rsx! {
        form { class: "post-form", onsubmit: handle_submit,
            if let Some(msg) = validation().or(error) {
                ErrorNotice { message: msg }
            }

            label { "Title"
                input {
                    r#type: "text",
                    placeholder: "Post title",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }
            }

            label { "Cover image URL (optional)"
                input {
                    r#type: "url",
                    placeholder: "https://...",
                    value: image_url(),
                    oninput: move |evt| image_url.set(evt.value()),
                }
            }

            label { "Content"
                textarea {
                    rows: 14,
                    placeholder: "Write your post...",
                    value: content(),
                    oninput: move |evt| content.set(evt.value()),
                }
            }

            button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                if busy { "Saving..." } else { "{submit_label}" }
            }
        }
    }
}

/// Compose a new post. A draft staged by the AI writer prefills the form
/// exactly once and marks the post as AI generated.
#[component]
pub fn Write() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut draft_slot = use_ai_draft();

    // Consume the staged draft on mount; a reload starts from a blank form.
    let staged: Option<AiDraft> = use_hook(|| draft_slot.write().take());
    let from_ai = staged.is_some();

    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let submit = move |data: PostFormData| {
        spawn(async move {
            busy.set(true);
            error.set(None);
            match api::create_post(data.title, data.content, data.image_url, from_ai).await {
                Ok(resp) => {
                    let mut state = auth();
                    state.user = Some(resp.user);
                    auth.set(state);
                    nav.push(Route::PostDetail { id: resp.post.id });
                }
                Err(e) => {
                    busy.set(false);
                    error.set(Some(Failure::classify(&e).user_message()));
                }
            }
        });
    };

    let draft = staged.unwrap_or(AiDraft {
        title: String::new(),
        content: String::new(),
        image_url: None,
    });

    rsx! {
        section { class: "page-header",
            h1 { if from_ai { "Review your AI draft" } else { "New Post" } }
            AiEntryPoint {}
        }

        PostForm {
            initial_title: draft.title,
            initial_content: draft.content,
            initial_image_url: draft.image_url.unwrap_or_default(),
            submit_label: "Publish",
            busy: busy(),
            error: error(),
            on_submit: submit,
        }
    }
}

/// Link into the AI writer, gated on the session's quota.
#[component]
fn AiEntryPoint() -> Element {
    let auth = use_auth();

    let Some(user) = auth().user else {
        return rsx! {};
    };

    if user.is_premium {
        rsx! {
            Link { class: "btn btn-secondary", to: Route::Generate {}, "Write with AI" }
        }
    } else if user.can_generate_ai() {
        let remaining = user.ai_remaining();
        rsx! {
            Link { class: "btn btn-secondary", to: Route::Generate {},
                "Write with AI ({remaining} free left)"
            }
        }
    } else {
        rsx! {
            p { class: "quota-notice",
                "You have used all your free AI generations. "
                Link { to: Route::Premium {}, "Upgrade to premium" }
                " for unlimited posts."
            }
        }
    }
}

/// Edit an existing post. Only the owner gets past the guard.
#[component]
pub fn EditPost(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let post = use_resource(use_reactive!(|(id,)| async move { api::get_post(id).await }));

    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |data: PostFormData| {
        spawn(async move {
            busy.set(true);
            error.set(None);
            match api::update_post(id, data.title, data.content, data.image_url).await {
                Ok(post) => {
                    nav.push(Route::PostDetail { id: post.id });
                }
                Err(e) => {
                    busy.set(false);
                    error.set(Some(Failure::classify(&e).user_message()));
                }
            }
        });
    };

    let current = post.read();
    match &*current {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorNotice { message: Failure::classify(e).user_message() } },
        Some(Ok(post)) => {
            if !auth().loading && !post.editable_by(auth().user.as_ref()) {
                Failure::Unauthorized.report();
                nav.replace(Route::MyPosts {});
                return rsx! {};
            }

            rsx! {
                section { class: "page-header",
                    h1 { "Edit Post" }
                }

                PostForm {
                    initial_title: post.title.clone(),
                    initial_content: post.content.clone(),
                    initial_image_url: post.image_url.clone().unwrap_or_default(),
                    submit_label: "Save Changes",
                    busy: busy(),
                    error: error(),
                    on_submit: submit,
                }
            }
        }
    }
}
