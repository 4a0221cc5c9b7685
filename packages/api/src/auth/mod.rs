//! Session lookup helpers and password hashing.

/// Session key under which the authenticated user's id is stored.
pub const SESSION_USER_ID_KEY: &str = "user_id";

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};

#[cfg(feature = "server")]
use dioxus::prelude::ServerFnError;

/// Load the user for the current session, if any.
#[cfg(feature = "server")]
pub async fn current_user(
    session: &tower_sessions::Session,
) -> Result<Option<crate::models::User>, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<i64> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user)
}

/// Like [`current_user`], but fails when nobody is logged in.
#[cfg(feature = "server")]
pub async fn require_user(
    session: &tower_sessions::Session,
) -> Result<crate::models::User, ServerFnError> {
    current_user(session)
        .await?
        .ok_or_else(|| ServerFnError::new(crate::NOT_AUTHENTICATED))
}
