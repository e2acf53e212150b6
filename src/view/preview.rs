//! Read view projection.

use serde::Serialize;

use crate::editable::Editable;

use super::{Visibility, LAYOUT_FILLER};

/// What the read view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewView {
    /// Text content, None when nothing should render
    pub content: Option<String>,
    pub placeholder_shown: bool,
    pub empty: bool,
    pub visibility: Visibility,
    /// Focusable with a button role
    pub interactive: bool,
}

impl PreviewView {
    pub fn new(editable: &Editable) -> Self {
        let config = editable.config();
        let auto_resize = config.auto_resize;
        let editing = editable.is_editing();

        // Under auto-resize the read view sizes the shared cell, so it tracks the draft
        let tracks_draft = auto_resize && editing;
        let display = if tracks_draft {
            editable.draft()
        } else {
            editable.value().unwrap_or_default()
        };
        let placeholder_shown = if tracks_draft {
            editable.draft().is_empty()
        } else {
            editable.is_empty()
        };

        let text = if placeholder_shown {
            config
                .placeholder
                .as_ref()
                .map(|p| p.for_preview())
                .unwrap_or_default()
        } else {
            display
        };
        let content = if !text.is_empty() {
            Some(text.to_string())
        } else if auto_resize {
            Some(LAYOUT_FILLER.to_string())
        } else {
            None
        };

        let visibility = match (editing, auto_resize) {
            (false, _) => Visibility::Visible,
            (true, true) => Visibility::Invisible,
            (true, false) => Visibility::Hidden,
        };

        Self {
            content,
            placeholder_shown,
            empty: editable.is_empty(),
            visibility,
            interactive: config.activation_mode.is_interactive()
                && config.constraints().can_edit(),
        }
    }
}
