//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use inline_edit::config::EditableConfig;
use inline_edit::dismiss::{ElementTree, StandardLayout};
use inline_edit::editable::{
    ActivationMode, EditState, Editable, EditableBuilder, Notification, SubmitMode,
};

/// Collects every notification an editable emits, in order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire all three callbacks of a builder into this recorder
    pub fn attach(&self, builder: EditableBuilder) -> EditableBuilder {
        let change = Rc::clone(&self.log);
        let submit = Rc::clone(&self.log);
        let state = Rc::clone(&self.log);
        builder
            .on_change(move |v| change.borrow_mut().push(Notification::Change(v.to_string())))
            .on_submit(move |v| submit.borrow_mut().push(Notification::Submit(v.to_string())))
            .on_state_change(move |s| state.borrow_mut().push(Notification::StateChange(s)))
    }

    pub fn all(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    pub fn submits(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Submit(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn changes(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Change(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn states(&self) -> Vec<EditState> {
        self.log
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::StateChange(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

/// Config with the given submit mode, everything else default
pub fn config_with_submit(mode: SubmitMode) -> EditableConfig {
    EditableConfig {
        submit_mode: mode,
        ..EditableConfig::default()
    }
}

/// Config with the given activation mode, everything else default
pub fn config_with_activation(mode: ActivationMode) -> EditableConfig {
    EditableConfig {
        activation_mode: mode,
        ..EditableConfig::default()
    }
}

/// Uncontrolled editable bound to the standard layout root, with a recorder
pub fn recorded(config: EditableConfig, default_value: &str) -> (Editable, Recorder) {
    let recorder = Recorder::new();
    let builder = Editable::builder(config)
        .default_value(default_value)
        .root(StandardLayout::ROOT);
    (recorder.attach(builder).build(), recorder)
}

/// Controlled editable bound to the standard layout root, with a recorder
pub fn recorded_controlled(config: EditableConfig, value: Option<&str>) -> (Editable, Recorder) {
    let recorder = Recorder::new();
    let builder = Editable::builder(config)
        .value(value.map(str::to_owned))
        .root(StandardLayout::ROOT);
    (recorder.attach(builder).build(), recorder)
}

pub fn layout() -> ElementTree {
    ElementTree::standard()
}

pub const ALL_SUBMIT_MODES: [SubmitMode; 4] = [
    SubmitMode::Blur,
    SubmitMode::Enter,
    SubmitMode::None,
    SubmitMode::Both,
];
