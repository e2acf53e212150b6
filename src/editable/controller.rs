//! Editable - the controller render adapters talk to.
//!
//! Owns the session, the config, the registered callbacks and the dismissal
//! watcher. Every action mutates the session to completion first, then
//! re-syncs the watcher, then fires callbacks in the order the session
//! reported them.

use std::fmt;

use serde::Serialize;

use crate::commands::Cmd;
use crate::config::EditableConfig;
use crate::dismiss::{Containment, DismissSignal, DismissalWatcher, ElementId, OutsideEvent};
use crate::update::update;

use super::messages::{ActivationSource, EditState, Notification};
use super::state::EditableState;
use super::value::ValueSource;

/// Callback receiving committed text
pub type ValueCallback = Box<dyn FnMut(&str)>;
/// Callback receiving lifecycle transitions
pub type StateCallback = Box<dyn FnMut(EditState)>;

/// Registered observers. All optional.
#[derive(Default)]
pub struct Callbacks {
    on_change: Option<ValueCallback>,
    on_submit: Option<ValueCallback>,
    on_state_change: Option<StateCallback>,
}

impl Callbacks {
    fn dispatch(&mut self, notifications: &[Notification]) {
        for notification in notifications {
            match notification {
                Notification::Change(value) => {
                    if let Some(cb) = self.on_change.as_mut() {
                        cb(value);
                    }
                }
                Notification::Submit(value) => {
                    if let Some(cb) = self.on_submit.as_mut() {
                        cb(value);
                    }
                }
                Notification::StateChange(state) => {
                    if let Some(cb) = self.on_state_change.as_mut() {
                        cb(*state);
                    }
                }
            }
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .field("on_state_change", &self.on_state_change.is_some())
            .finish()
    }
}

/// Read surface at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableSnapshot {
    pub value: Option<String>,
    pub draft: String,
    pub is_editing: bool,
    pub is_empty: bool,
    pub activation_source: Option<ActivationSource>,
}

/// Builder for [`Editable`].
#[derive(Debug, Default)]
pub struct EditableBuilder {
    config: EditableConfig,
    value: Option<Option<String>>,
    default_value: Option<String>,
    root: Option<ElementId>,
    callbacks: Callbacks,
}

impl EditableBuilder {
    pub fn new(config: EditableConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Make the editable controlled by an externally owned value
    pub fn value(mut self, value: Option<String>) -> Self {
        self.value = Some(value);
        self
    }

    /// Initial value for uncontrolled mode (ignored when controlled)
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Bind the editable root element up front
    pub fn root(mut self, root: ElementId) -> Self {
        self.root = Some(root);
        self
    }

    pub fn on_change(mut self, cb: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_change = Some(Box::new(cb));
        self
    }

    pub fn on_submit(mut self, cb: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_submit = Some(Box::new(cb));
        self
    }

    pub fn on_state_change(mut self, cb: impl FnMut(EditState) + 'static) -> Self {
        self.callbacks.on_state_change = Some(Box::new(cb));
        self
    }

    pub fn build(self) -> Editable {
        let source = ValueSource::select(self.value, self.default_value);
        let state = EditableState::new(
            source,
            self.config.constraints(),
            self.config.start_with_edit_mode,
        );
        let mut editable = Editable {
            config: self.config,
            state,
            watcher: DismissalWatcher::new(),
            root: self.root,
            callbacks: self.callbacks,
        };
        editable.sync_watcher();
        editable
    }
}

/// One editable instance.
#[derive(Debug)]
pub struct Editable {
    config: EditableConfig,
    state: EditableState,
    watcher: DismissalWatcher,
    root: Option<ElementId>,
    callbacks: Callbacks,
}

impl Editable {
    pub fn builder(config: EditableConfig) -> EditableBuilder {
        EditableBuilder::new(config)
    }

    /// Uncontrolled editable with no callbacks
    pub fn new(config: EditableConfig, default_value: impl Into<String>) -> Self {
        Self::builder(config).default_value(default_value).build()
    }

    // === Read surface ===

    pub fn config(&self) -> &EditableConfig {
        &self.config
    }

    pub fn state(&self) -> &EditableState {
        &self.state
    }

    pub fn value(&self) -> Option<&str> {
        self.state.value()
    }

    pub fn draft(&self) -> &str {
        self.state.draft()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn activation_source(&self) -> Option<ActivationSource> {
        self.state.activation_source()
    }

    pub fn watcher(&self) -> &DismissalWatcher {
        &self.watcher
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    pub fn snapshot(&self) -> EditableSnapshot {
        EditableSnapshot {
            value: self.value().map(str::to_owned),
            draft: self.draft().to_string(),
            is_editing: self.is_editing(),
            is_empty: self.is_empty(),
            activation_source: self.activation_source(),
        }
    }

    /// Side effects owed to the host right after construction.
    ///
    /// An editable that starts in edit mode needs its input focused; the
    /// caret goes to the end unless `select_on_focus` is set.
    pub fn initial_cmd(&self) -> Option<Cmd> {
        self.is_editing().then(|| {
            Cmd::batch(vec![
                Cmd::FocusInput {
                    select_all: self.config.select_on_focus,
                },
                Cmd::Redraw,
            ])
        })
    }

    // === Action surface ===

    /// Enter edit mode. Returns true if editing started.
    pub fn edit(&mut self, source: Option<ActivationSource>) -> bool {
        let notes = self.state.edit(source);
        self.finish(notes)
    }

    /// Replace the draft. Returns true if the draft changed.
    pub fn set_draft(&mut self, text: &str) -> bool {
        self.state.set_draft(text)
    }

    /// Commit the draft. Returns true if a submit happened.
    pub fn submit(&mut self) -> bool {
        let notes = self.state.submit();
        self.finish(notes)
    }

    /// Discard the draft. Returns true if a cancel happened.
    pub fn cancel(&mut self) -> bool {
        let notes = self.state.cancel();
        self.finish(notes)
    }

    /// Resolve a dismissal per the submit mode. Returns true if editing ended.
    pub fn handle_dismiss(&mut self) -> bool {
        let action = self.config.submit_mode.dismiss_action();
        update(self, action).is_some()
    }

    /// Whether an outside interaction should end editing right now.
    pub fn dismiss_signal(
        &self,
        tree: &dyn Containment,
        event: OutsideEvent,
    ) -> Option<DismissSignal> {
        let signal = self.watcher.check(tree, self.root, event)?;
        tracing::debug!(?signal, ?event, "dismissal");
        Some(signal)
    }

    /// Document-level pointer-down. Dismisses when outside the root.
    pub fn pointer_down(&mut self, tree: &dyn Containment, target: Option<ElementId>) -> bool {
        self.dismiss_on(tree, OutsideEvent::PointerDown(target))
    }

    /// Focus-out from the root. Dismisses when focus moved to a known outside element.
    pub fn focus_out(&mut self, tree: &dyn Containment, related: Option<ElementId>) -> bool {
        self.dismiss_on(tree, OutsideEvent::FocusOut(related))
    }

    fn dismiss_on(&mut self, tree: &dyn Containment, event: OutsideEvent) -> bool {
        self.dismiss_signal(tree, event).is_some() && self.handle_dismiss()
    }

    /// Feed back the externally owned value (controlled mode).
    /// Returns false when the editable is uncontrolled.
    pub fn sync_value(&mut self, value: Option<String>) -> bool {
        self.state.sync_value(value)
    }

    /// Bind the editable root element
    pub fn bind_root(&mut self, root: ElementId) {
        self.root = Some(root);
    }

    /// Unbind the root; dismissal signals become no-ops
    pub fn unbind_root(&mut self) {
        self.root = None;
    }

    fn finish(&mut self, notes: Vec<Notification>) -> bool {
        if notes.is_empty() {
            return false;
        }
        self.sync_watcher();
        self.callbacks.dispatch(&notes);
        true
    }

    fn sync_watcher(&mut self) {
        if self.state.is_editing() {
            self.watcher.attach();
        } else {
            self.watcher.detach();
        }
    }
}
