//! Dismissal detection: deciding when focus has left the editable region.
//!
//! Two independent signals feed one decision:
//! - a pointer-down whose target lies outside the editable root
//! - a focus-out whose new focus target is known and outside the root
//!
//! A focus-out with no new target is ambiguous (a click on something
//! non-focusable) and is left to the pointer-down signal.

mod tree;
mod watcher;

pub use tree::{Containment, ElementId, ElementTree, StandardLayout};
pub use watcher::{DismissSignal, DismissalWatcher, OutsideEvent};
