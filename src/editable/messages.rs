//! Message types for the edit-in-place lifecycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which signal opened the current edit session.
///
/// Advisory metadata for render adapters (caret placement). The core
/// transitions never branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationSource {
    /// Single click or focus on the read view
    Click,
    /// Double-click on the read view
    #[serde(rename = "dblclick", alias = "double_click")]
    DoubleClick,
    /// Edit button, keyboard activation of the read view
    Trigger,
}

impl ActivationSource {
    /// Whether the input should select its whole text on focus.
    /// A click puts the caret at the end instead.
    pub fn selects_all(self) -> bool {
        !matches!(self, ActivationSource::Click)
    }
}

/// Lifecycle transitions reported through `on_state_change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditState {
    Edit,
    Submit,
    Cancel,
}

impl EditState {
    pub fn as_str(self) -> &'static str {
        match self {
            EditState::Edit => "edit",
            EditState::Submit => "submit",
            EditState::Cancel => "cancel",
        }
    }
}

impl fmt::Display for EditState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single observer notification. Transitions return these in firing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Notification {
    /// `on_change` with the committed text
    Change(String),
    /// `on_submit` with the committed text
    Submit(String),
    /// `on_state_change`
    StateChange(EditState),
}

/// The action surface. Every raw UI signal folds into one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditableMsg {
    /// Enter edit mode
    Edit {
        #[serde(default)]
        source: Option<ActivationSource>,
    },
    /// Replace the draft (clamped to the max length)
    SetDraft { text: String },
    /// Commit the draft
    Submit,
    /// Discard the draft and restore the snapshot
    Cancel,
    /// Focus left the editable region; resolves to submit or cancel
    Dismiss,
}

impl EditableMsg {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            EditableMsg::Edit { .. } => "edit",
            EditableMsg::SetDraft { .. } => "set_draft",
            EditableMsg::Submit => "submit",
            EditableMsg::Cancel => "cancel",
            EditableMsg::Dismiss => "dismiss",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_keeps_caret_others_select_all() {
        assert!(!ActivationSource::Click.selects_all());
        assert!(ActivationSource::DoubleClick.selects_all());
        assert!(ActivationSource::Trigger.selects_all());
    }

    #[test]
    fn test_activation_source_wire_names() {
        let source: ActivationSource = serde_yaml::from_str("dblclick").unwrap();
        assert_eq!(source, ActivationSource::DoubleClick);
        assert_eq!(
            serde_json::to_string(&ActivationSource::Trigger).unwrap(),
            "\"trigger\""
        );
    }

    #[test]
    fn test_msg_from_yaml() {
        let msg: EditableMsg = serde_yaml::from_str("action: set_draft\ntext: hi").unwrap();
        assert_eq!(
            msg,
            EditableMsg::SetDraft {
                text: "hi".to_string()
            }
        );

        let msg: EditableMsg = serde_yaml::from_str("action: edit").unwrap();
        assert_eq!(msg, EditableMsg::Edit { source: None });
    }
}
