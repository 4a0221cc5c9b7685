//! Read-only aggregate counters. Fetched per-view, never cached.

use serde::{Deserialize, Serialize};

/// Site-wide totals shown on the landing page and post listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct GlobalStats {
    pub total_users: i64,
    pub total_posts: i64,
    pub total_views: i64,
}

/// Per-account counters for the dashboard. Carries the refreshed premium
/// and quota fields so the client can merge them into the session profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct UserStats {
    pub posts_count: i64,
    pub total_views_on_posts: i64,
    pub is_premium: bool,
    pub ai_posts_generated_count: i32,
    pub free_tier_ai_limit: i32,
}
