//! Activation policy: which read-view signals open the editor.

use serde::{Deserialize, Serialize};

use super::messages::ActivationSource;

/// How editing is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    /// Click or focus on the read view starts editing
    #[default]
    Focus,
    /// Only double-click starts editing
    #[serde(rename = "dblclick", alias = "double_click")]
    DblClick,
    /// Only the explicit trigger starts editing
    None,
}

/// A raw signal that may open the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationSignal {
    /// Single click on the read view, or focus landing on the input
    Click,
    /// Double-click on the read view or input
    DoubleClick,
    /// Enter/Space on the focused read view
    Keyboard,
    /// Edit trigger or programmatic request
    Trigger,
}

impl ActivationMode {
    /// Resolve a signal to the source `edit()` should be called with,
    /// or None when this mode ignores the signal.
    pub fn resolve(self, signal: ActivationSignal) -> Option<ActivationSource> {
        match (self, signal) {
            (_, ActivationSignal::Trigger) => Some(ActivationSource::Trigger),
            (ActivationMode::Focus, ActivationSignal::Click) => Some(ActivationSource::Click),
            (ActivationMode::Focus | ActivationMode::DblClick, ActivationSignal::DoubleClick) => {
                Some(ActivationSource::DoubleClick)
            }
            // Keyboard activation selects all, same as the trigger
            (ActivationMode::Focus | ActivationMode::DblClick, ActivationSignal::Keyboard) => {
                Some(ActivationSource::Trigger)
            }
            _ => None,
        }
    }

    /// Whether the read view itself reacts to pointer or keyboard input
    pub fn is_interactive(self) -> bool {
        !matches!(self, ActivationMode::None)
    }
}
