//! Raw UI event routing.
//!
//! Render adapters report what happened to which widget; this module folds
//! those signals into the three core commands (plus draft edits and
//! dismissal), and says whether the widget's default key behavior should be
//! suppressed.

use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::dismiss::{Containment, ElementId, OutsideEvent};
use crate::editable::{key_action, ActivationSignal, CommitKey, Editable, EditableMsg};
use crate::update::update;
use crate::view::strip_filler;

/// Keys the editable reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Enter,
    Escape,
    Space,
    Tab,
    Char(char),
}

/// A raw signal from the render adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// Single click on the read view
    PreviewClick,
    /// Double-click on the read view
    PreviewDoubleClick,
    /// Key pressed while the read view has focus
    PreviewKey { key: Key },
    /// The input received focus
    InputFocus,
    /// Double-click on the input
    InputDoubleClick,
    /// Key pressed in the input
    InputKey { key: Key },
    /// The input's text changed
    InputChange { text: String },
    /// Edit button clicked
    EditTrigger,
    /// Submit button clicked
    SubmitTrigger,
    /// Cancel button clicked
    CancelTrigger,
    /// Pointer pressed anywhere in the document
    PointerDown {
        #[serde(default)]
        target: Option<ElementId>,
    },
    /// Focus left an element inside the root; `related` is gaining focus
    FocusOut {
        #[serde(default)]
        related: Option<ElementId>,
    },
}

/// Outcome of routing one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Routed {
    pub msg: Option<EditableMsg>,
    /// Suppress the widget's default handling of the event
    pub prevent_default: bool,
}

impl Routed {
    fn ignored() -> Self {
        Self::default()
    }

    fn msg(msg: EditableMsg) -> Self {
        Self {
            msg: Some(msg),
            prevent_default: false,
        }
    }

    fn prevent(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}

/// Outcome of handling one event end to end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventResult {
    pub cmd: Option<Cmd>,
    pub prevent_default: bool,
}

/// Decide which message (if any) an event maps to. Reads state, never mutates.
pub fn route_event(editable: &Editable, tree: &dyn Containment, event: &UiEvent) -> Routed {
    let config = editable.config();
    let mode = config.activation_mode;

    let activate = |signal: ActivationSignal| match mode.resolve(signal) {
        Some(source) => Routed::msg(EditableMsg::Edit {
            source: Some(source),
        }),
        None => Routed::ignored(),
    };

    let dismiss = |outside: OutsideEvent| match editable.dismiss_signal(tree, outside) {
        Some(_) => Routed::msg(EditableMsg::Dismiss),
        None => Routed::ignored(),
    };

    match event {
        UiEvent::PreviewClick => activate(ActivationSignal::Click),
        UiEvent::PreviewDoubleClick | UiEvent::InputDoubleClick => {
            activate(ActivationSignal::DoubleClick)
        }

        UiEvent::PreviewKey { key: Key::Enter | Key::Space } => {
            if !config.constraints().can_edit() {
                return Routed::ignored();
            }
            let routed = activate(ActivationSignal::Keyboard);
            if routed.msg.is_some() {
                routed.prevent()
            } else {
                routed
            }
        }
        UiEvent::PreviewKey { .. } => Routed::ignored(),

        UiEvent::InputFocus => {
            if editable.is_editing() {
                Routed::ignored()
            } else {
                activate(ActivationSignal::Click)
            }
        }

        UiEvent::InputKey { key } => {
            let commit_key = match key {
                Key::Escape => CommitKey::Escape,
                Key::Enter => CommitKey::Enter,
                _ => return Routed::ignored(),
            };
            match key_action(config.submit_mode, commit_key) {
                Some(msg) => Routed::msg(msg).prevent(),
                None => Routed::ignored(),
            }
        }

        UiEvent::InputChange { text } => {
            let text = if config.auto_resize {
                strip_filler(text).to_string()
            } else {
                text.clone()
            };
            Routed::msg(EditableMsg::SetDraft { text })
        }

        UiEvent::EditTrigger => activate(ActivationSignal::Trigger),
        UiEvent::SubmitTrigger => Routed::msg(EditableMsg::Submit),
        UiEvent::CancelTrigger => Routed::msg(EditableMsg::Cancel),

        UiEvent::PointerDown { target } => dismiss(OutsideEvent::PointerDown(*target)),
        UiEvent::FocusOut { related } => dismiss(OutsideEvent::FocusOut(*related)),
    }
}

/// Route an event and apply the resulting message.
pub fn handle_event(editable: &mut Editable, tree: &dyn Containment, event: UiEvent) -> EventResult {
    let routed = route_event(editable, tree, &event);
    let cmd = routed.msg.and_then(|msg| update(editable, msg));
    EventResult {
        cmd,
        prevent_default: routed.prevent_default,
    }
}
