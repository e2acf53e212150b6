//! Headless view projections.
//!
//! Each projection is a plain description of what one part of the editable
//! should look like, computed from the controller. Widget toolkits map these
//! onto real elements; nothing here feeds back into the session.

pub mod area;
pub mod form;
pub mod input_field;
pub mod preview;
pub mod trigger;

use serde::Serialize;

use crate::editable::Editable;

pub use area::{AreaView, RootView};
pub use form::FormField;
pub use input_field::InputView;
pub use preview::PreviewView;
pub use trigger::{TriggerKind, TriggerView};

/// Zero-advance filler that keeps an empty shared layout cell from collapsing
/// under auto-resize. Never part of a value.
pub const LAYOUT_FILLER: char = '\u{200B}';

/// Drop the filler a widget echoes back for an empty cell.
///
/// Only text made of nothing but filler is cleared; a U+200B the user typed
/// among other text is kept.
pub fn strip_filler(text: &str) -> &str {
    if !text.is_empty() && text.chars().all(|c| c == LAYOUT_FILLER) {
        ""
    } else {
        text
    }
}

/// How an element participates in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Painted and laid out
    Visible,
    /// Laid out but not painted (keeps its size)
    Invisible,
    /// Removed from layout
    Hidden,
}

/// Every projection for one editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableView {
    pub root: RootView,
    pub area: AreaView,
    pub preview: PreviewView,
    pub input: InputView,
    pub edit_trigger: TriggerView,
    pub submit_trigger: TriggerView,
    pub cancel_trigger: TriggerView,
    pub form_field: Option<FormField>,
}

impl EditableView {
    pub fn new(editable: &Editable) -> Self {
        Self {
            root: RootView::new(editable),
            area: AreaView::new(editable),
            preview: PreviewView::new(editable),
            input: InputView::new(editable),
            edit_trigger: TriggerView::new(editable, TriggerKind::Edit),
            submit_trigger: TriggerView::new(editable, TriggerKind::Submit),
            cancel_trigger: TriggerView::new(editable, TriggerKind::Cancel),
            form_field: FormField::new(editable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_filler() {
        assert_eq!(strip_filler("\u{200B}"), "");
        assert_eq!(strip_filler("\u{200B}\u{200B}"), "");
        assert_eq!(strip_filler("a\u{200B}b"), "a\u{200B}b");
        assert_eq!(strip_filler(""), "");
        assert_eq!(strip_filler("plain"), "plain");
    }
}
