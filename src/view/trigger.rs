//! Edit / submit / cancel button projections.

use serde::Serialize;

use crate::editable::Editable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    Edit,
    Submit,
    Cancel,
}

impl TriggerKind {
    /// Accessible label
    pub fn label(self) -> &'static str {
        match self {
            TriggerKind::Edit => "edit",
            TriggerKind::Submit => "submit",
            TriggerKind::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerView {
    pub kind: TriggerKind,
    pub label: &'static str,
    pub disabled: bool,
    pub hidden: bool,
}

impl TriggerView {
    pub fn new(editable: &Editable, kind: TriggerKind) -> Self {
        let config = editable.config();
        let (disabled, hidden) = match kind {
            TriggerKind::Edit => (config.disabled || config.read_only, false),
            TriggerKind::Submit | TriggerKind::Cancel => {
                (config.disabled, !editable.is_editing())
            }
        };
        Self {
            kind,
            label: kind.label(),
            disabled,
            hidden,
        }
    }
}
