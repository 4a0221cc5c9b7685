//! # API crate — shared fullstack server functions for Blogify
//!
//! Every HTTP/JSON call the frontends make is a Dioxus server function
//! defined here. The generated client stubs issue the request and
//! deserialize the response; the server bodies (behind the `server` feature)
//! talk to Postgres and the external AI/billing providers.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly | Session user-id key, session lookup helpers, Argon2 password hashing |
//! | [`ai`] | `server` | OpenAI draft generation and Pexels header-image lookup |
//! | [`billing`] | `server` | Hosted checkout URL and HMAC-verified premium webhooks |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Wire types (`SessionUser`, `PostInfo`, stats) and the server-side `User` row |
//!
//! ## Server functions exposed here
//!
//! - **Session**: `get_current_user`, `signup`, `login`, `logout`
//! - **Posts**: `list_posts` (optional search), `get_post`, `create_post`,
//!   `update_post`, `delete_post`, `my_posts`, `user_posts`, `trending_ai_posts`
//! - **Stats**: `global_stats`, `user_stats`
//! - **AI / premium**: `generate_ai_post`, `create_checkout`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
pub mod ai;
pub mod auth;
#[cfg(feature = "server")]
pub mod billing;
#[cfg(feature = "server")]
pub mod db;
pub mod models;

pub use models::{GlobalStats, PostInfo, SessionUser, UserStats};
pub use store::AiDraft;

/// Server error message prefix for an exhausted free-tier AI quota. The
/// client recognizes it to redirect to the upgrade flow instead of showing
/// a generic alert.
pub const QUOTA_ERROR_MESSAGE: &str = "AI generation limit reached";

/// Server error message for calls that need a logged-in session.
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Treat empty and whitespace-only search input as no filter.
pub fn normalize_query(query: Option<String>) -> Option<String> {
    query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
}

/// Response to post creation: the stored post plus the refreshed session
/// user, which the client merges into its auth state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePostResponse {
    pub post: PostInfo,
    pub user: SessionUser,
}

#[cfg(feature = "server")]
const POST_COLUMNS: &str =
    "p.id, p.user_id, u.username, p.title, p.content, p.image_url, p.is_ai_generated, p.views";

/// Get the current authenticated user from the session cookie, if any.
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    Ok(auth::current_user(&session).await?.map(|u| u.to_session()))
}

/// Create an account and log it in.
#[server]
pub async fn signup(username: String, password: String) -> Result<SessionUser, ServerFnError> {
    use crate::db::get_pool;

    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(ServerFnError::new("Username is required"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new("Password must be at least 8 characters"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = $1")
        .bind(&username)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("Username already taken"));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&username)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    session
        .insert(auth::SESSION_USER_ID_KEY, user.id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = user.id, "account created");
    Ok(user.to_session())
}

/// Log in with username and password.
#[server]
pub async fn login(username: String, password: String) -> Result<SessionUser, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(username.trim())
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid username or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash).map_err(ServerFnError::new)?;
    if !valid {
        return Err(ServerFnError::new("Invalid username or password"));
    }

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    session
        .insert(auth::SESSION_USER_ID_KEY, user.id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_session())
}

/// Log out the current user by clearing the session.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

/// List all posts, newest first. A non-empty `query` filters on title or
/// content.
#[server]
pub async fn list_posts(query: Option<String>) -> Result<Vec<PostInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let posts = match normalize_query(query) {
        Some(q) => {
            let sql = format!(
                "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.user_id \
                 WHERE p.title ILIKE $1 OR p.content ILIKE $1 \
                 ORDER BY p.created_at DESC"
            );
            sqlx::query_as(&sql)
                .bind(format!("%{q}%"))
                .fetch_all(pool)
                .await
        }
        None => {
            let sql = format!(
                "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.user_id \
                 ORDER BY p.created_at DESC"
            );
            sqlx::query_as(&sql).fetch_all(pool).await
        }
    }
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(posts)
}

/// Fetch one post and count the view.
#[server]
pub async fn get_post(id: i64) -> Result<PostInfo, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE posts SET views = views + 1 WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let sql = format!(
        "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.user_id WHERE p.id = $1"
    );
    let post: Option<PostInfo> = sqlx::query_as(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    post.ok_or_else(|| ServerFnError::new("Post not found"))
}

/// Publish a new post. Returns the refreshed session user alongside the
/// post so the client can merge quota fields.
#[server]
pub async fn create_post(
    title: String,
    content: String,
    image_url: Option<String>,
    is_ai_generated: bool,
) -> Result<CreatePostResponse, ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    let user = auth::require_user(&session).await?;

    let title = title.trim().to_string();
    if title.is_empty() || content.trim().is_empty() {
        return Err(ServerFnError::new("Title and content cannot be empty"));
    }
    let image_url = image_url.filter(|u| !u.trim().is_empty());

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (post_id,): (i64,) = sqlx::query_as(
        "INSERT INTO posts (user_id, title, content, image_url, is_ai_generated) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(user.id)
    .bind(&title)
    .bind(content.trim())
    .bind(&image_url)
    .bind(is_ai_generated)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let sql = format!(
        "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.user_id WHERE p.id = $1"
    );
    let post: PostInfo = sqlx::query_as(&sql)
        .bind(post_id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Re-read the user so the response reflects any quota change from a
    // generation that produced this post.
    let user = auth::require_user(&session).await?;

    Ok(CreatePostResponse {
        post,
        user: user.to_session(),
    })
}

/// Update an owned post.
#[server]
pub async fn update_post(
    id: i64,
    title: String,
    content: String,
    image_url: Option<String>,
) -> Result<PostInfo, ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    let user = auth::require_user(&session).await?;

    let title = title.trim().to_string();
    if title.is_empty() || content.trim().is_empty() {
        return Err(ServerFnError::new("Title and content cannot be empty"));
    }
    let image_url = image_url.filter(|u| !u.trim().is_empty());

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    owned_post_guard(pool, id, user.id).await?;

    sqlx::query("UPDATE posts SET title = $1, content = $2, image_url = $3 WHERE id = $4")
        .bind(&title)
        .bind(content.trim())
        .bind(&image_url)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let sql = format!(
        "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.user_id WHERE p.id = $1"
    );
    sqlx::query_as(&sql)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Delete an owned post.
#[server]
pub async fn delete_post(id: i64) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    let user = auth::require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    owned_post_guard(pool, id, user.id).await?;

    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Fail unless the post exists and belongs to `user_id`. Client-side control
/// hiding is a display convenience; this is the real check.
#[cfg(feature = "server")]
async fn owned_post_guard(
    pool: &sqlx::PgPool,
    post_id: i64,
    user_id: i64,
) -> Result<(), ServerFnError> {
    let owner: Option<(i64,)> = sqlx::query_as("SELECT user_id FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    match owner {
        None => Err(ServerFnError::new("Post not found")),
        Some((owner_id,)) if owner_id != user_id => {
            Err(ServerFnError::new("You are not authorized to modify this post"))
        }
        Some(_) => Ok(()),
    }
}

/// The logged-in user's own posts, newest first.
#[server]
pub async fn my_posts() -> Result<Vec<PostInfo>, ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    let user = auth::require_user(&session).await?;
    user_posts(user.id, None).await
}

/// A user's public posts, newest first, optionally filtered by `query`.
#[server]
pub async fn user_posts(
    user_id: i64,
    query: Option<String>,
) -> Result<Vec<PostInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let posts = match normalize_query(query) {
        Some(q) => {
            let sql = format!(
                "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.user_id \
                 WHERE p.user_id = $1 AND (p.title ILIKE $2 OR p.content ILIKE $2) \
                 ORDER BY p.created_at DESC"
            );
            sqlx::query_as(&sql)
                .bind(user_id)
                .bind(format!("%{q}%"))
                .fetch_all(pool)
                .await
        }
        None => {
            let sql = format!(
                "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.user_id \
                 WHERE p.user_id = $1 ORDER BY p.created_at DESC"
            );
            sqlx::query_as(&sql).bind(user_id).fetch_all(pool).await
        }
    }
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(posts)
}

/// Site-wide totals for the landing page and post listing.
#[server(GlobalStatsFn)]
pub async fn global_stats() -> Result<GlobalStats, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM users) AS total_users, \
                (SELECT COUNT(*) FROM posts) AS total_posts, \
                (SELECT COALESCE(SUM(views), 0) FROM posts) AS total_views",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Dashboard counters for the logged-in user, including refreshed premium
/// and quota fields for the client-side merge.
#[server(UserStatsFn)]
pub async fn user_stats() -> Result<UserStats, ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    let user = auth::require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (posts_count, total_views): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(SUM(views), 0) FROM posts WHERE user_id = $1",
    )
    .bind(user.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(UserStats {
        posts_count,
        total_views_on_posts: total_views,
        is_premium: user.is_premium,
        ai_posts_generated_count: user.ai_posts_generated_count,
        free_tier_ai_limit: user.free_tier_ai_limit,
    })
}

/// Most-viewed AI-generated posts for the landing page.
#[server]
pub async fn trending_ai_posts() -> Result<Vec<PostInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let sql = format!(
        "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.user_id \
         WHERE p.is_ai_generated ORDER BY p.views DESC LIMIT 6"
    );
    sqlx::query_as(&sql)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Generate a draft post from a prompt. Free-tier accounts are limited;
/// the usage counter increments per successful generation.
#[server]
pub async fn generate_ai_post(prompt: String) -> Result<AiDraft, ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    let user = auth::require_user(&session).await?;

    if !user.to_session().can_generate_ai() {
        return Err(ServerFnError::new(format!(
            "{QUOTA_ERROR_MESSAGE}. Please upgrade to premium for unlimited AI posts."
        )));
    }

    let prompt = prompt.trim().to_string();
    if prompt.is_empty() {
        return Err(ServerFnError::new("Prompt cannot be empty"));
    }

    let draft = ai::generate_draft(&prompt)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE users SET ai_posts_generated_count = ai_posts_generated_count + 1 WHERE id = $1",
    )
    .bind(user.id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = user.id, "AI draft generated");
    Ok(draft)
}

/// Create a hosted checkout redirect URL for upgrading to premium.
#[server]
pub async fn create_checkout() -> Result<String, ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|(_, msg)| ServerFnError::new(msg))?;
    let user = auth::require_user(&session).await?;

    billing::checkout_url(user.id).map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query_drops_blank_input() {
        assert_eq!(normalize_query(None), None);
        assert_eq!(normalize_query(Some(String::new())), None);
        assert_eq!(normalize_query(Some("   ".to_string())), None);
    }

    #[test]
    fn test_normalize_query_trims() {
        assert_eq!(
            normalize_query(Some("  cast iron  ".to_string())),
            Some("cast iron".to_string())
        );
    }
}
