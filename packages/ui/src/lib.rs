//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, use_theme, ThemeSignal, ThemeToggle};

mod draft;
pub use draft::{use_ai_draft, DraftProvider, DraftSignal};

mod error;
pub use error::Failure;

mod share;
pub use share::{current_origin, CopyLinkButton, ShareLinks};

mod navbar;
pub use navbar::Navbar;

mod post_card;
pub use post_card::PostCard;

mod feedback;
pub use feedback::{ErrorNotice, Loading};
