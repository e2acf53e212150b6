//! Root and area projections (state attributes for styling).

use serde::Serialize;

use crate::config::Dir;
use crate::editable::Editable;

/// Attributes of the editable root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootView {
    pub dir: Dir,
    pub disabled: bool,
    pub read_only: bool,
}

impl RootView {
    pub fn new(editable: &Editable) -> Self {
        let config = editable.config();
        Self {
            dir: config.dir,
            disabled: config.disabled,
            read_only: config.read_only,
        }
    }
}

/// Attributes of the container holding the read view and the input.
///
/// `focused` tracks edit mode, not raw widget focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaView {
    pub disabled: bool,
    pub read_only: bool,
    pub placeholder_shown: bool,
    pub empty: bool,
    pub focused: bool,
    /// Read view and input overlap in one grid cell
    pub inline_grid: bool,
}

impl AreaView {
    pub fn new(editable: &Editable) -> Self {
        let config = editable.config();
        let editing = editable.is_editing();
        Self {
            disabled: config.disabled,
            read_only: config.read_only,
            placeholder_shown: !editing,
            empty: editable.is_empty(),
            focused: editing,
            inline_grid: config.auto_resize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditableConfig;

    #[test]
    fn test_focused_follows_editing() {
        let mut editable = Editable::new(EditableConfig::default(), "x");
        assert!(!AreaView::new(&editable).focused);
        editable.edit(None);
        assert!(AreaView::new(&editable).focused);
        editable.cancel();
        assert!(!AreaView::new(&editable).focused);
    }

    #[test]
    fn test_root_attributes() {
        let config = EditableConfig {
            dir: Dir::Rtl,
            disabled: true,
            ..EditableConfig::default()
        };
        let view = RootView::new(&Editable::new(config, ""));
        assert_eq!(view.dir, Dir::Rtl);
        assert!(view.disabled);
        assert!(!view.read_only);
    }
}
