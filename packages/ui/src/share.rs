//! Social share links for a post.

use api::PostInfo;
use dioxus::prelude::*;
use urlencoding::encode;

/// Prebuilt share URLs for one post. Each opens the target network's share
/// dialog in a new tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLinks {
    pub post_url: String,
    pub facebook: String,
    pub twitter: String,
    pub whatsapp: String,
    pub linkedin: String,
    pub gmail: String,
}

impl ShareLinks {
    pub fn for_post(origin: &str, post: &PostInfo) -> Self {
        let post_url = format!("{origin}/posts/{}", post.id);
        let url = encode(&post_url);
        let title = encode(&post.title);
        let title_and_url_raw = format!("{} {post_url}", post.title);
        let title_and_url = encode(&title_and_url_raw);

        Self {
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            twitter: format!("https://twitter.com/intent/tweet?url={url}&text={title}"),
            whatsapp: format!("https://wa.me/?text={title_and_url}"),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
            gmail: format!("https://mail.google.com/mail/?view=cm&su={title}&body={url}"),
            post_url,
        }
    }
}

/// Copies the post URL to the clipboard and confirms for a moment.
#[component]
pub fn CopyLinkButton(url: String) -> Element {
    let mut copied = use_signal(|| false);

    let onclick = move |_| {
        let url = url.clone();
        async move {
            #[cfg(target_arch = "wasm32")]
            {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let promise = window.navigator().clipboard().write_text(&url);
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                    tracing::warn!("clipboard write failed");
                    return;
                }
                copied.set(true);
                gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                copied.set(false);
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                tracing::debug!("copy link: {url}");
                copied.set(true);
            }
        }
    };

    rsx! {
        button { class: "btn btn-secondary", onclick: onclick,
            if copied() { "Copied!" } else { "Copy Link" }
        }
    }
}

/// Origin of the page we are running on, for building absolute post URLs.
pub fn current_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    "http://localhost:8080".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> PostInfo {
        PostInfo {
            id: 42,
            user_id: 1,
            username: "ana".to_string(),
            title: "Hello & Welcome".to_string(),
            content: "<p>hi</p>".to_string(),
            image_url: None,
            is_ai_generated: false,
            views: 0,
        }
    }

    #[test]
    fn test_post_url_uses_origin_and_id() {
        let links = ShareLinks::for_post("https://blog.example", &sample_post());
        assert_eq!(links.post_url, "https://blog.example/posts/42");
    }

    #[test]
    fn test_links_encode_url_and_title() {
        let links = ShareLinks::for_post("https://blog.example", &sample_post());
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fblog.example%2Fposts%2F42"
        );
        assert!(links.twitter.contains("text=Hello%20%26%20Welcome"));
        assert!(links.whatsapp.contains("Hello%20%26%20Welcome%20https%3A%2F%2F"));
        assert!(links.gmail.contains("su=Hello%20%26%20Welcome"));
        assert!(links.linkedin.ends_with("url=https%3A%2F%2Fblog.example%2Fposts%2F42"));
    }
}
