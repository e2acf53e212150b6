//! Element containment for outside-region tests.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Answers "is this node inside that root?" for the dismissal watcher.
pub trait Containment {
    /// Whether `node` is `root` itself or one of its descendants
    fn contains(&self, root: ElementId, node: ElementId) -> bool;
}

/// A parent-linked element tree.
///
/// Unknown elements have no parent, so they are never inside any root
/// other than themselves.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    parents: HashMap<ElementId, ElementId>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `child` under `parent`, replacing any previous parent
    pub fn insert(&mut self, child: ElementId, parent: ElementId) {
        self.parents.insert(child, parent);
    }

    pub fn parent(&self, node: ElementId) -> Option<ElementId> {
        self.parents.get(&node).copied()
    }

    /// The default editable layout, see [`StandardLayout`]
    pub fn standard() -> Self {
        use StandardLayout as L;

        let mut tree = Self::new();
        tree.insert(L::AREA, L::ROOT);
        tree.insert(L::PREVIEW, L::AREA);
        tree.insert(L::INPUT, L::AREA);
        tree.insert(L::EDIT_TRIGGER, L::ROOT);
        tree.insert(L::SUBMIT_TRIGGER, L::ROOT);
        tree.insert(L::CANCEL_TRIGGER, L::ROOT);
        tree.insert(L::OUTSIDE, L::DOCUMENT);
        tree
    }
}

impl Containment for ElementTree {
    fn contains(&self, root: ElementId, node: ElementId) -> bool {
        let mut current = node;
        // Bounded walk so a malformed cycle cannot hang the UI thread
        for _ in 0..=self.parents.len() {
            if current == root {
                return true;
            }
            match self.parents.get(&current) {
                Some(&parent) => current = parent,
                None => return false,
            }
        }
        false
    }
}

/// Element ids for the default layout built by [`ElementTree::standard`]:
///
/// ```text
/// document
/// ├── outside
/// root
/// ├── area
/// │   ├── preview
/// │   └── input
/// ├── edit trigger
/// ├── submit trigger
/// └── cancel trigger
/// ```
pub struct StandardLayout;

impl StandardLayout {
    pub const DOCUMENT: ElementId = ElementId(0);
    pub const ROOT: ElementId = ElementId(1);
    pub const AREA: ElementId = ElementId(2);
    pub const PREVIEW: ElementId = ElementId(3);
    pub const INPUT: ElementId = ElementId(4);
    pub const EDIT_TRIGGER: ElementId = ElementId(5);
    pub const SUBMIT_TRIGGER: ElementId = ElementId(6);
    pub const CANCEL_TRIGGER: ElementId = ElementId(7);
    pub const OUTSIDE: ElementId = ElementId(100);
}
