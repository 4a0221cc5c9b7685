//! Client-side state that survives outside a single view: the persisted
//! theme preference and the transient single-slot AI draft.

pub mod draft;
pub mod prefs;
pub mod theme;

pub use draft::{AiDraft, DraftSlot};
pub use prefs::{load_theme, save_theme, THEME_STORAGE_KEY};
pub use theme::Theme;
