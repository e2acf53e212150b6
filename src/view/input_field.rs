//! Edit input projection.

use serde::Serialize;

use crate::editable::Editable;

use super::Visibility;

/// What the edit input renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub value: String,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub read_only: bool,
    pub max_length: Option<usize>,
    pub visibility: Visibility,
}

impl InputView {
    pub fn new(editable: &Editable) -> Self {
        let config = editable.config();
        let visibility = match (editable.is_editing(), config.auto_resize) {
            (true, _) => Visibility::Visible,
            (false, true) => Visibility::Invisible,
            (false, false) => Visibility::Hidden,
        };

        Self {
            value: editable.draft().to_string(),
            placeholder: config
                .placeholder
                .as_ref()
                .map(|p| p.for_edit().to_string()),
            disabled: config.disabled,
            read_only: config.read_only,
            max_length: config.max_length,
            visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditableConfig;

    #[test]
    fn test_visible_only_while_editing() {
        let mut editable = Editable::new(EditableConfig::default(), "x");
        assert_eq!(InputView::new(&editable).visibility, Visibility::Hidden);
        editable.edit(None);
        let view = InputView::new(&editable);
        assert_eq!(view.visibility, Visibility::Visible);
        assert_eq!(view.value, "x");
    }

    #[test]
    fn test_auto_resize_keeps_input_in_layout() {
        let config = EditableConfig {
            auto_resize: true,
            ..EditableConfig::default()
        };
        let editable = Editable::new(config, "x");
        assert_eq!(InputView::new(&editable).visibility, Visibility::Invisible);
    }

    #[test]
    fn test_read_only_attribute() {
        let config = EditableConfig {
            read_only: true,
            max_length: Some(8),
            ..EditableConfig::default()
        };
        let view = InputView::new(&Editable::new(config, "x"));
        assert!(view.read_only);
        assert_eq!(view.max_length, Some(8));
    }
}
