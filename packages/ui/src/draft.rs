//! AI draft staging context.
//!
//! The generate view stages a draft here and navigates to the editor, which
//! takes it exactly once. The slot lives at the app shell so it survives the
//! route change but not a page reload.

use dioxus::prelude::*;
use store::DraftSlot;

/// Context signal holding the staged AI draft, if any.
pub type DraftSignal = Signal<DraftSlot>;

/// Get the draft slot from context.
pub fn use_ai_draft() -> DraftSignal {
    use_context::<DraftSignal>()
}

/// Provider component owning the draft slot.
#[component]
pub fn DraftProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(DraftSlot::new()));

    rsx! {
        {children}
    }
}
