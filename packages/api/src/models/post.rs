//! Post wire type and its display helpers.

use serde::{Deserialize, Serialize};

use super::user::SessionUser;

/// A blog post as exchanged with the client. `content` is HTML authored in
/// the editor (or produced by AI generation); listings render a tag-stripped
/// excerpt of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct PostInfo {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub is_ai_generated: bool,
    pub views: i64,
}

impl PostInfo {
    /// Whether edit/delete controls should be shown for this session.
    /// Display convenience only; the server re-checks ownership on every
    /// mutating call.
    pub fn editable_by(&self, user: Option<&SessionUser>) -> bool {
        user.is_some_and(|u| u.id == self.user_id)
    }

    /// Tag-stripped prefix of the content for listing cards, truncated to
    /// `max_chars` characters with a trailing ellipsis.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = strip_html(&self.content);
        let mut excerpt: String = text.chars().take(max_chars).collect();
        if text.chars().count() > max_chars {
            excerpt.push_str("...");
        }
        excerpt
    }
}

/// Remove HTML tags, leaving text content only. Unterminated tags at the end
/// of the input are dropped rather than echoed back.
fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &str, user_id: i64) -> PostInfo {
        PostInfo {
            id: 42,
            user_id,
            username: "ana".to_string(),
            title: "Hello".to_string(),
            content: content.to_string(),
            image_url: None,
            is_ai_generated: false,
            views: 0,
        }
    }

    fn session(id: i64) -> SessionUser {
        SessionUser {
            id,
            username: "ana".to_string(),
            is_premium: false,
            ai_posts_generated_count: 0,
            free_tier_ai_limit: 3,
        }
    }

    #[test]
    fn test_owner_sees_edit_controls() {
        let p = post("<p>x</p>", 1);
        assert!(p.editable_by(Some(&session(1))));
    }

    #[test]
    fn test_other_users_and_anonymous_do_not() {
        let p = post("<p>x</p>", 1);
        assert!(!p.editable_by(Some(&session(2))));
        assert!(!p.editable_by(None));
    }

    #[test]
    fn test_excerpt_strips_tags() {
        let p = post("<p>Hello <strong>world</strong></p>", 1);
        assert_eq!(p.excerpt(100), "Hello world");
    }

    #[test]
    fn test_excerpt_truncates_with_ellipsis() {
        let p = post("<p>abcdefghij</p>", 1);
        assert_eq!(p.excerpt(4), "abcd...");
    }

    #[test]
    fn test_excerpt_drops_unterminated_tag() {
        let p = post("before <img src=\"x", 1);
        assert_eq!(p.excerpt(100), "before ");
    }
}
