//! Command types for the Elm-style architecture
//!
//! Commands are side effects the render adapter performs after an update.
//! The core never touches widgets itself.

use serde::Serialize;

/// Side effects requested by [`crate::update::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the editable
    Redraw,
    /// Move focus into the input after entering edit mode
    FocusInput {
        /// Select the whole text; otherwise put the caret at the end
        select_all: bool,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::FocusInput { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// The focus request carried by this command, if any
    pub fn focus_request(&self) -> Option<bool> {
        match self {
            Cmd::FocusInput { select_all } => Some(*select_all),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::focus_request),
            _ => None,
        }
    }
}
