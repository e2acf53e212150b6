//! Submission policy: when a draft is committed and when it is discarded.

use serde::{Deserialize, Serialize};

use super::messages::EditableMsg;

/// When the draft is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitMode {
    /// Leaving the field submits; Enter does nothing
    #[default]
    Blur,
    /// Enter submits; leaving the field cancels
    Enter,
    /// Only explicit submit; leaving the field cancels
    None,
    /// Enter and leaving the field both submit
    Both,
}

impl SubmitMode {
    /// Whether Enter in the input submits
    pub fn submits_on_enter(self) -> bool {
        matches!(self, SubmitMode::Enter | SubmitMode::Both)
    }

    /// Whether dismissal submits (otherwise it cancels)
    pub fn submits_on_blur(self) -> bool {
        matches!(self, SubmitMode::Blur | SubmitMode::Both)
    }

    /// The action a dismissal resolves to
    pub fn dismiss_action(self) -> EditableMsg {
        if self.submits_on_blur() {
            EditableMsg::Submit
        } else {
            EditableMsg::Cancel
        }
    }
}

/// Keys the pipeline has an opinion about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitKey {
    Enter,
    Escape,
}

/// Keyboard tie-break: Escape always cancels, Enter submits only when the
/// mode allows it.
pub fn key_action(mode: SubmitMode, key: CommitKey) -> Option<EditableMsg> {
    match key {
        CommitKey::Escape => Some(EditableMsg::Cancel),
        CommitKey::Enter if mode.submits_on_enter() => Some(EditableMsg::Submit),
        CommitKey::Enter => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [SubmitMode; 4] = [
        SubmitMode::Blur,
        SubmitMode::Enter,
        SubmitMode::None,
        SubmitMode::Both,
    ];

    #[test]
    fn test_escape_cancels_in_every_mode() {
        for mode in ALL_MODES {
            assert_eq!(
                key_action(mode, CommitKey::Escape),
                Some(EditableMsg::Cancel),
                "mode {:?}",
                mode
            );
        }
    }

    #[test]
    fn test_enter_submits_only_for_enter_and_both() {
        assert_eq!(
            key_action(SubmitMode::Enter, CommitKey::Enter),
            Some(EditableMsg::Submit)
        );
        assert_eq!(
            key_action(SubmitMode::Both, CommitKey::Enter),
            Some(EditableMsg::Submit)
        );
        assert_eq!(key_action(SubmitMode::Blur, CommitKey::Enter), None);
        assert_eq!(key_action(SubmitMode::None, CommitKey::Enter), None);
    }

    #[test]
    fn test_dismiss_action() {
        assert_eq!(SubmitMode::Blur.dismiss_action(), EditableMsg::Submit);
        assert_eq!(SubmitMode::Both.dismiss_action(), EditableMsg::Submit);
        assert_eq!(SubmitMode::Enter.dismiss_action(), EditableMsg::Cancel);
        assert_eq!(SubmitMode::None.dismiss_action(), EditableMsg::Cancel);
    }
}
