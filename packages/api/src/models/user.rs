//! # User model
//!
//! Two representations of a Blogify account:
//!
//! - [`User`] (server only) — the complete `users` row, including the Argon2
//!   password hash and audit timestamp. Loaded directly from queries via
//!   [`sqlx::FromRow`] and projected with [`User::to_session`].
//! - [`SessionUser`] — the client-safe profile that crosses the server/client
//!   boundary through server functions. It always carries the AI quota fields
//!   (`ai_posts_generated_count`, `free_tier_ai_limit`), so AI-related UI can
//!   rely on them being present whenever a session exists.

use serde::{Deserialize, Serialize};

use super::stats::UserStats;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_premium: bool,
    pub ai_posts_generated_count: i32,
    pub free_tier_ai_limit: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to the client-safe session profile.
    pub fn to_session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            username: self.username.clone(),
            is_premium: self.is_premium,
            ai_posts_generated_count: self.ai_posts_generated_count,
            free_tier_ai_limit: self.free_tier_ai_limit,
        }
    }
}

/// The currently authenticated account as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub is_premium: bool,
    pub ai_posts_generated_count: i32,
    pub free_tier_ai_limit: i32,
}

impl SessionUser {
    /// Free-tier generations left. Premium accounts ignore this.
    pub fn ai_remaining(&self) -> i32 {
        (self.free_tier_ai_limit - self.ai_posts_generated_count).max(0)
    }

    /// Whether the AI generation entry point may issue a request.
    /// When this is false the UI redirects to the upgrade flow instead.
    pub fn can_generate_ai(&self) -> bool {
        self.is_premium || self.ai_remaining() > 0
    }

    /// Merge freshly fetched per-user stats into the session profile.
    /// Dashboard fetches refresh premium status and quota usage without
    /// replacing the rest of the session state.
    pub fn merge_stats(&mut self, stats: &UserStats) {
        self.is_premium = stats.is_premium;
        self.ai_posts_generated_count = stats.ai_posts_generated_count;
        self.free_tier_ai_limit = stats.free_tier_ai_limit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_user(used: i32, limit: i32) -> SessionUser {
        SessionUser {
            id: 1,
            username: "ana".to_string(),
            is_premium: false,
            ai_posts_generated_count: used,
            free_tier_ai_limit: limit,
        }
    }

    #[test]
    fn test_remaining_is_limit_minus_used() {
        assert_eq!(free_user(0, 3).ai_remaining(), 3);
        assert_eq!(free_user(2, 3).ai_remaining(), 1);
    }

    #[test]
    fn test_remaining_never_goes_negative() {
        assert_eq!(free_user(5, 3).ai_remaining(), 0);
    }

    #[test]
    fn test_exhausted_free_tier_cannot_generate() {
        // ana has used all three free generations and is not premium.
        let ana = free_user(3, 3);
        assert_eq!(ana.ai_remaining(), 0);
        assert!(!ana.can_generate_ai());
    }

    #[test]
    fn test_premium_ignores_quota() {
        let mut user = free_user(10, 3);
        user.is_premium = true;
        assert!(user.can_generate_ai());
    }

    #[test]
    fn test_merge_stats_refreshes_quota_and_premium() {
        let mut user = free_user(1, 3);
        let stats = UserStats {
            posts_count: 7,
            total_views_on_posts: 42,
            is_premium: true,
            ai_posts_generated_count: 2,
            free_tier_ai_limit: 3,
        };
        user.merge_stats(&stats);
        assert!(user.is_premium);
        assert_eq!(user.ai_posts_generated_count, 2);
        // Identity fields are untouched by a stats merge.
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "ana");
    }
}
