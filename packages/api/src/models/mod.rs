pub mod post;
pub mod stats;
pub mod user;

pub use post::PostInfo;
pub use stats::{GlobalStats, UserStats};
pub use user::SessionUser;

#[cfg(feature = "server")]
pub use user::User;
