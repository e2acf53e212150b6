//! EditableState - per-instance session: committed value, draft, snapshot.
//!
//! Transitions are pure with respect to observers: each one mutates the
//! session completely and then returns the notifications to fire, in order.
//! Dispatching them is the controller's job.

use super::constraints::EditConstraints;
use super::messages::{ActivationSource, EditState, Notification};
use super::value::ValueSource;

/// Session state for one editable instance.
#[derive(Debug, Clone)]
pub struct EditableState {
    /// Authoritative committed value
    value: ValueSource,
    /// Text being edited (authoritative only while editing)
    draft: String,
    /// Snapshot of the value taken when editing began
    previous_value: Option<String>,
    editing: bool,
    activation_source: Option<ActivationSource>,
    /// Fixed at construction
    constraints: EditConstraints,
}

impl EditableState {
    /// Create a session, optionally already in edit mode.
    ///
    /// Starting in edit mode snapshots the initial value but does not
    /// report an `edit` transition.
    pub fn new(value: ValueSource, constraints: EditConstraints, start_editing: bool) -> Self {
        let initial = value.get().map(str::to_owned);
        let draft = constraints
            .clamp(initial.as_deref().unwrap_or_default())
            .into_owned();
        Self {
            value,
            draft,
            previous_value: initial,
            editing: start_editing,
            activation_source: None,
            constraints,
        }
    }

    /// Committed value
    pub fn value(&self) -> Option<&str> {
        self.value.get()
    }

    /// Current draft
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Snapshot restored by cancel
    pub fn previous_value(&self) -> Option<&str> {
        self.previous_value.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn activation_source(&self) -> Option<ActivationSource> {
        self.activation_source
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// Text currently shown: the draft while editing, else the value
    pub fn display_text(&self) -> Option<&str> {
        if self.editing {
            Some(&self.draft)
        } else {
            self.value.get()
        }
    }

    /// True when the shown text is missing or empty
    pub fn is_empty(&self) -> bool {
        self.display_text().map_or(true, str::is_empty)
    }

    /// Every draft write passes through here so the max length always holds.
    fn write_draft(&mut self, text: &str) {
        self.draft = self.constraints.clamp(text).into_owned();
    }

    /// Enter edit mode. Returns no notifications when refused or already editing.
    pub fn edit(&mut self, source: Option<ActivationSource>) -> Vec<Notification> {
        if !self.constraints.can_edit() {
            tracing::trace!(
                disabled = self.constraints.disabled,
                read_only = self.constraints.read_only,
                "edit refused"
            );
            return Vec::new();
        }
        if self.editing {
            tracing::trace!("edit ignored, already editing");
            return Vec::new();
        }

        self.previous_value = self.value.get().map(str::to_owned);
        let initial = self.previous_value.clone().unwrap_or_default();
        self.write_draft(&initial);
        self.activation_source = source;
        self.editing = true;

        tracing::debug!(?source, "editing started");
        vec![Notification::StateChange(EditState::Edit)]
    }

    /// Replace the draft, silently clamped. Returns true if the draft changed.
    pub fn set_draft(&mut self, text: &str) -> bool {
        let before_len = self.draft.len();
        let clamped = self.constraints.clamp(text);
        if clamped == self.draft {
            return false;
        }
        if clamped.len() != text.len() {
            tracing::trace!(max_length = ?self.constraints.max_length, "draft clamped");
        }
        self.draft = clamped.into_owned();
        tracing::trace!(before_len, after_len = self.draft.len(), "draft updated");
        true
    }

    /// Commit the draft and leave edit mode.
    ///
    /// Fires change, then submit, then the `submit` state change.
    pub fn submit(&mut self) -> Vec<Notification> {
        if !self.editing {
            tracing::trace!("submit ignored, not editing");
            return Vec::new();
        }

        let committed = self.draft.clone();
        self.value.commit(&committed);
        self.editing = false;
        self.activation_source = None;

        tracing::debug!(controlled = self.value.is_controlled(), "draft submitted");
        vec![
            Notification::Change(committed.clone()),
            Notification::Submit(committed),
            Notification::StateChange(EditState::Submit),
        ]
    }

    /// Discard the draft, restore the snapshot for display, leave edit mode.
    /// The committed value is untouched.
    pub fn cancel(&mut self) -> Vec<Notification> {
        if !self.editing {
            tracing::trace!("cancel ignored, not editing");
            return Vec::new();
        }

        let restored = self.previous_value.clone().unwrap_or_default();
        self.write_draft(&restored);
        self.editing = false;
        self.activation_source = None;

        tracing::debug!("edit cancelled");
        vec![Notification::StateChange(EditState::Cancel)]
    }

    /// Accept a value fed back by the external owner (controlled mode only)
    pub fn sync_value(&mut self, value: Option<String>) -> bool {
        self.value.sync(value)
    }
}
