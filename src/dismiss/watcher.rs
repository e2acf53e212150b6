//! DismissalWatcher - routes outside interactions while editing.

use super::tree::{Containment, ElementId};

/// Which signal reported the dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissSignal {
    /// Pointer pressed outside the editable root
    PointerDownOutside,
    /// Focus moved to a known element outside the editable root
    FocusMovedOutside,
}

/// A document-level interaction that may end editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutsideEvent {
    /// Pointer pressed on `target`; None when it hit nothing the tree knows
    PointerDown(Option<ElementId>),
    /// Focus left an element inside the root; the element now gaining focus
    FocusOut(Option<ElementId>),
}

/// Watches for outside interactions. Listening only while attached.
///
/// Attach and detach are idempotent, so at most one listener pair is ever
/// live. The root is owned by the controller and passed in read-only.
#[derive(Debug, Clone, Default)]
pub struct DismissalWatcher {
    attached: bool,
}

impl DismissalWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening. Returns true if this call changed anything.
    pub fn attach(&mut self) -> bool {
        let changed = !self.attached;
        self.attached = true;
        if changed {
            tracing::trace!("dismissal listeners attached");
        }
        changed
    }

    /// Stop listening. Returns true if this call changed anything.
    pub fn detach(&mut self) -> bool {
        let changed = self.attached;
        self.attached = false;
        if changed {
            tracing::trace!("dismissal listeners detached");
        }
        changed
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// A pointer-down anywhere in the document.
    ///
    /// A missing target counts as outside: it hit nothing the tree knows.
    pub fn pointer_down(
        &self,
        tree: &dyn Containment,
        root: Option<ElementId>,
        target: Option<ElementId>,
    ) -> Option<DismissSignal> {
        let root = self.listening_root(root)?;
        let inside = target.is_some_and(|t| tree.contains(root, t));
        (!inside).then_some(DismissSignal::PointerDownOutside)
    }

    /// A focus-out from inside the root. `related` is the element receiving focus.
    pub fn focus_out(
        &self,
        tree: &dyn Containment,
        root: Option<ElementId>,
        related: Option<ElementId>,
    ) -> Option<DismissSignal> {
        let root = self.listening_root(root)?;
        // No new target: ambiguous, the pointer-down signal decides
        let related = related?;
        (!tree.contains(root, related)).then_some(DismissSignal::FocusMovedOutside)
    }

    /// Classify any outside interaction.
    pub fn check(
        &self,
        tree: &dyn Containment,
        root: Option<ElementId>,
        event: OutsideEvent,
    ) -> Option<DismissSignal> {
        match event {
            OutsideEvent::PointerDown(target) => self.pointer_down(tree, root, target),
            OutsideEvent::FocusOut(related) => self.focus_out(tree, root, related),
        }
    }

    fn listening_root(&self, root: Option<ElementId>) -> Option<ElementId> {
        if !self.attached {
            return None;
        }
        if root.is_none() {
            tracing::trace!("dismissal signal before root is bound");
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dismiss::{ElementTree, StandardLayout as L};

    fn attached() -> DismissalWatcher {
        let mut watcher = DismissalWatcher::new();
        watcher.attach();
        watcher
    }

    #[test]
    fn test_attach_detach_idempotent() {
        let mut watcher = DismissalWatcher::new();
        assert!(watcher.attach());
        assert!(!watcher.attach());
        assert!(watcher.is_attached());
        assert!(watcher.detach());
        assert!(!watcher.detach());
        assert!(!watcher.is_attached());
    }

    #[test]
    fn test_detached_watcher_ignores_everything() {
        let tree = ElementTree::standard();
        let watcher = DismissalWatcher::new();
        assert_eq!(
            watcher.pointer_down(&tree, Some(L::ROOT), Some(L::OUTSIDE)),
            None
        );
        assert_eq!(
            watcher.focus_out(&tree, Some(L::ROOT), Some(L::OUTSIDE)),
            None
        );
    }

    #[test]
    fn test_pointer_down_inside_and_outside() {
        let tree = ElementTree::standard();
        let watcher = attached();
        assert_eq!(
            watcher.pointer_down(&tree, Some(L::ROOT), Some(L::INPUT)),
            None
        );
        assert_eq!(
            watcher.pointer_down(&tree, Some(L::ROOT), Some(L::OUTSIDE)),
            Some(DismissSignal::PointerDownOutside)
        );
        assert_eq!(
            watcher.pointer_down(&tree, Some(L::ROOT), None),
            Some(DismissSignal::PointerDownOutside)
        );
    }

    #[test]
    fn test_focus_out_null_target_ignored() {
        let tree = ElementTree::standard();
        let watcher = attached();
        assert_eq!(watcher.focus_out(&tree, Some(L::ROOT), None), None);
    }

    #[test]
    fn test_focus_out_to_own_triggers_ignored() {
        let tree = ElementTree::standard();
        let watcher = attached();
        for trigger in [L::SUBMIT_TRIGGER, L::CANCEL_TRIGGER, L::EDIT_TRIGGER] {
            assert_eq!(watcher.focus_out(&tree, Some(L::ROOT), Some(trigger)), None);
        }
        assert_eq!(
            watcher.focus_out(&tree, Some(L::ROOT), Some(L::OUTSIDE)),
            Some(DismissSignal::FocusMovedOutside)
        );
    }

    #[test]
    fn test_check_dispatches_by_event() {
        let tree = ElementTree::standard();
        let watcher = attached();
        assert_eq!(
            watcher.check(&tree, Some(L::ROOT), OutsideEvent::PointerDown(None)),
            Some(DismissSignal::PointerDownOutside)
        );
        assert_eq!(
            watcher.check(&tree, Some(L::ROOT), OutsideEvent::FocusOut(None)),
            None
        );
        assert_eq!(
            watcher.check(&tree, Some(L::ROOT), OutsideEvent::FocusOut(Some(L::OUTSIDE))),
            Some(DismissSignal::FocusMovedOutside)
        );
    }

    #[test]
    fn test_unbound_root_is_guarded() {
        let tree = ElementTree::standard();
        let watcher = attached();
        assert_eq!(watcher.pointer_down(&tree, None, Some(L::OUTSIDE)), None);
        assert_eq!(watcher.focus_out(&tree, None, Some(L::OUTSIDE)), None);
    }
}
