//! AI draft generation.
//!
//! Produces an [`AiDraft`] from a user prompt: the post body comes from an
//! OpenAI chat completion, the header image from a best-effort Pexels search
//! on the generated title. Both providers are reached over plain HTTPS with
//! keys from the environment; everything past the HTTP contract is opaque.

use serde::Deserialize;
use store::AiDraft;
use thiserror::Error;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-3.5-turbo";
const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingKey,
    #[error("AI provider request failed: {0}")]
    Provider(#[from] reqwest::Error),
    #[error("AI provider returned no content")]
    EmptyCompletion,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Generate a draft post for the given prompt.
pub async fn generate_draft(prompt: &str) -> Result<AiDraft, AiError> {
    let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| AiError::MissingKey)?;

    let body = serde_json::json!({
        "model": OPENAI_MODEL,
        "messages": [{
            "role": "user",
            "content": format!(
                "Write a blog post about: {prompt}. \
                 Reply with the title on the first line, then the post body \
                 as simple HTML paragraphs."
            ),
        }],
        "max_tokens": 700,
    });

    let completion: ChatCompletion = reqwest::Client::new()
        .post(OPENAI_CHAT_URL)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let text = completion
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(AiError::EmptyCompletion)?;

    let (title, content) = split_completion(&text);
    if title.is_empty() {
        return Err(AiError::EmptyCompletion);
    }

    let image_url = fetch_image_for_topic(&title).await;

    Ok(AiDraft {
        title,
        content,
        image_url,
    })
}

/// Split a completion into (title, body). The first non-empty line is the
/// title, stripped of markdown heading markers and surrounding quotes; the
/// rest is the body. A single-line completion becomes title-only with an
/// empty body the user fills in.
fn split_completion(text: &str) -> (String, String) {
    let mut lines = text.trim().lines();
    let title = lines
        .next()
        .unwrap_or_default()
        .trim()
        .trim_start_matches('#')
        .trim()
        .trim_matches('"')
        .to_string();
    let content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    (title, content)
}

#[derive(Debug, Deserialize)]
struct PexelsResponse {
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    src: PexelsSrc,
}

#[derive(Debug, Deserialize)]
struct PexelsSrc {
    large: String,
}

/// Look up a header image for the topic. Best effort: a missing key, a
/// provider error or an empty result all yield `None` and the draft simply
/// has no image.
async fn fetch_image_for_topic(topic: &str) -> Option<String> {
    let api_key = std::env::var("PEXELS_API_KEY").ok()?;

    let response = reqwest::Client::new()
        .get(PEXELS_SEARCH_URL)
        .header("Authorization", api_key)
        .query(&[("query", topic), ("per_page", "1")])
        .send()
        .await;

    let response = match response {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("Pexels request failed: {e}");
            return None;
        }
    };

    let parsed: PexelsResponse = match response.json().await {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Pexels response unreadable: {e}");
            return None;
        }
    };

    parsed.photos.into_iter().next().map(|p| p.src.large)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_title_and_body() {
        let (title, content) = split_completion("Rust in 2026\n\n<p>Still fast.</p>");
        assert_eq!(title, "Rust in 2026");
        assert_eq!(content, "<p>Still fast.</p>");
    }

    #[test]
    fn test_split_strips_heading_markers_and_quotes() {
        let (title, _) = split_completion("## \"Why Ferris?\"\n<p>body</p>");
        assert_eq!(title, "Why Ferris?");
    }

    #[test]
    fn test_single_line_completion_is_title_only() {
        let (title, content) = split_completion("Just a headline");
        assert_eq!(title, "Just a headline");
        assert!(content.is_empty());
    }
}
