//! Scenario replay: drive one editable through a scripted list of steps.
//!
//! A scenario is a YAML document:
//!
//! ```yaml
//! config:
//!   submit_mode: blur
//! default_value: Original
//! steps:
//!   - event: preview_click
//!   - event: input_change
//!     text: New Value
//!   - event: pointer_down
//!     target: 100
//! ```
//!
//! Elements follow [`StandardLayout`]; `100` is outside the editable.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::config::EditableConfig;
use crate::dismiss::{ElementTree, StandardLayout};
use crate::editable::{Editable, EditableMsg, EditableSnapshot, EditState, Notification};
use crate::input::{handle_event, UiEvent};
use crate::update::update;
use crate::view::EditableView;

/// A scripted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub config: EditableConfig,
    /// Initial value when uncontrolled
    #[serde(default)]
    pub default_value: Option<String>,
    /// Present when the value is owned externally
    #[serde(default)]
    pub controlled: Option<ControlledValue>,
    pub steps: Vec<Step>,
}

/// Externally owned value for a controlled scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlledValue {
    #[serde(default)]
    pub value: Option<String>,
    /// Feed each change straight back, as an owner storing it would
    #[serde(default)]
    pub feedback: bool,
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// Raw UI signal, routed like a render adapter would
    Event(UiEvent),
    /// Direct action on the controller
    Action(EditableMsg),
    /// External owner pushes a new value
    Sync(SyncStep),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncStep {
    pub sync: Option<String>,
}

/// What one step produced.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub step: Step,
    pub notifications: Vec<Notification>,
    pub commands: Vec<Cmd>,
    /// The host must repaint after this step
    pub redraw: bool,
    pub prevent_default: bool,
    pub snapshot: EditableSnapshot,
}

/// Full replay output.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    /// Commands owed before the first step (focus when starting in edit mode)
    pub initial_commands: Vec<Cmd>,
    pub steps: Vec<StepRecord>,
    pub final_state: EditableSnapshot,
    pub view: EditableView,
}

impl Transcript {
    /// All notifications across every step, in firing order
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.steps.iter().flat_map(|s| s.notifications.iter())
    }
}

impl Scenario {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// Replay every step against a fresh editable in the standard layout.
    pub fn run(&self) -> Transcript {
        let log: Rc<RefCell<Vec<Notification>>> = Rc::default();
        let mut builder = Editable::builder(self.config.clone()).root(StandardLayout::ROOT);

        if let Some(controlled) = &self.controlled {
            builder = builder.value(controlled.value.clone());
        }
        if let Some(default_value) = &self.default_value {
            builder = builder.default_value(default_value.clone());
        }

        let change_log = log.clone();
        let submit_log = log.clone();
        let state_log = log.clone();
        let mut editable = builder
            .on_change(move |v| {
                change_log
                    .borrow_mut()
                    .push(Notification::Change(v.to_string()))
            })
            .on_submit(move |v| {
                submit_log
                    .borrow_mut()
                    .push(Notification::Submit(v.to_string()))
            })
            .on_state_change(move |s: EditState| {
                state_log.borrow_mut().push(Notification::StateChange(s))
            })
            .build();

        let initial_commands = editable.initial_cmd().map(Cmd::flatten).unwrap_or_default();
        let feedback = self.controlled.as_ref().is_some_and(|c| c.feedback);
        let tree = ElementTree::standard();
        let mut records = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            let (cmd, prevent_default) = match step {
                Step::Event(event) => {
                    let result = handle_event(&mut editable, &tree, event.clone());
                    (result.cmd, result.prevent_default)
                }
                Step::Action(msg) => (update(&mut editable, msg.clone()), false),
                Step::Sync(sync) => {
                    let cmd = editable
                        .sync_value(sync.sync.clone())
                        .then_some(Cmd::Redraw);
                    (cmd, false)
                }
            };

            let notifications: Vec<Notification> = log.borrow_mut().drain(..).collect();
            if feedback {
                for note in &notifications {
                    if let Notification::Change(value) = note {
                        editable.sync_value(Some(value.clone()));
                    }
                }
            }

            tracing::debug!(index, notifications = notifications.len(), "step replayed");
            records.push(StepRecord {
                index,
                step: step.clone(),
                notifications,
                redraw: cmd.as_ref().is_some_and(Cmd::needs_redraw),
                commands: cmd.map(Cmd::flatten).unwrap_or_default(),
                prevent_default,
                snapshot: editable.snapshot(),
            });
        }

        Transcript {
            initial_commands,
            steps: records,
            final_state: editable.snapshot(),
            view: EditableView::new(&editable),
        }
    }
}
