//! Single-slot staging area for AI-generated drafts.
//!
//! A successful generation stages one draft; the next render of the
//! authoring form takes it. Consumption is at-most-once: after `take` the
//! slot is empty until another generation stages a new draft.

use serde::{Deserialize, Serialize};

/// Draft fields returned by AI generation, pending user review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiDraft {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Holds at most one [`AiDraft`]. Staging replaces any previous draft.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftSlot {
    staged: Option<AiDraft>,
}

impl DraftSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a draft for the next authoring-form render.
    pub fn stage(&mut self, draft: AiDraft) {
        self.staged = Some(draft);
    }

    /// Consume the staged draft, leaving the slot empty.
    pub fn take(&mut self) -> Option<AiDraft> {
        self.staged.take()
    }

    pub fn is_staged(&self) -> bool {
        self.staged.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> AiDraft {
        AiDraft {
            title: title.to_string(),
            content: format!("<p>{title}</p>"),
            image_url: None,
        }
    }

    #[test]
    fn test_take_is_at_most_once() {
        let mut slot = DraftSlot::new();
        slot.stage(draft("Rust on the web"));
        assert!(slot.is_staged());

        let first = slot.take();
        assert_eq!(first.map(|d| d.title), Some("Rust on the web".to_string()));

        // A second take without a new generation yields nothing.
        assert_eq!(slot.take(), None);
        assert!(!slot.is_staged());
    }

    #[test]
    fn test_staging_replaces_previous_draft() {
        let mut slot = DraftSlot::new();
        slot.stage(draft("first"));
        slot.stage(draft("second"));
        assert_eq!(slot.take().map(|d| d.title), Some("second".to_string()));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_empty_slot_takes_nothing() {
        let mut slot = DraftSlot::new();
        assert!(!slot.is_staged());
        assert_eq!(slot.take(), None);
    }
}
