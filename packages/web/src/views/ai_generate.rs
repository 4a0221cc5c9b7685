//! AI writer: turn a prompt into a staged draft for the editor.

use dioxus::prelude::*;
use ui::{use_ai_draft, use_auth, ErrorNotice, Failure};

use crate::Route;

#[component]
pub fn Generate() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut draft_slot = use_ai_draft();

    let mut prompt = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Quota gating happens before the form is ever shown; the server checks
    // again on submit.
    if !auth().loading {
        match auth().user {
            None => {
                nav.replace(Route::Login {});
                return rsx! {};
            }
            Some(user) if !user.can_generate_ai() => {
                nav.replace(Route::Premium {});
                return rsx! {};
            }
            Some(_) => {}
        }
    }

    let generate = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let text = prompt().trim().to_string();
            if text.is_empty() {
                error.set(Some("Tell the AI what to write about".to_string()));
                return;
            }

            busy.set(true);
            error.set(None);
            match api::generate_ai_post(text).await {
                Ok(draft) => {
                    draft_slot.write().stage(draft);
                    // Reflect the spent generation without a refetch
                    let mut state = auth();
                    if let Some(user) = state.user.as_mut() {
                        user.ai_posts_generated_count += 1;
                    }
                    auth.set(state);
                    nav.push(Route::Write {});
                }
                Err(e) => {
                    busy.set(false);
                    match Failure::classify(&e) {
                        Failure::QuotaExceeded => {
                            nav.push(Route::Premium {});
                        }
                        failure => error.set(Some(failure.user_message())),
                    }
                }
            }
        });
    };

    let remaining_note = auth().user.map(|user| {
        if user.is_premium {
            "Premium: unlimited generations".to_string()
        } else {
            format!("{} free generation(s) left", user.ai_remaining())
        }
    });

    rsx! {
        section { class: "page-header",
            h1 { "AI Writer" }
            if let Some(note) = remaining_note {
                p { class: "quota-notice", "{note}" }
            }
        }

        form { class: "post-form", onsubmit: generate,
            if let Some(msg) = error() {
                ErrorNotice { message: msg }
            }

            label { "What should the post be about?"
                textarea {
                    rows: 4,
                    placeholder: "e.g. why every home cook needs a cast iron pan",
                    value: prompt(),
                    oninput: move |evt| prompt.set(evt.value()),
                }
            }

            button { class: "btn btn-primary", r#type: "submit", disabled: busy(),
                if busy() { "Generating..." } else { "Generate Draft" }
            }
        }
    }
}
