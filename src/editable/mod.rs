//! Edit-in-place core.
//!
//! One piece of text, shown in a read view and edited in place. Many UI
//! signals (click, double-click, keys, buttons, focus loss) fold into three
//! commands on one controller: `edit`, `submit` and `cancel`.
//!
//! # Architecture
//!
//! - [`ValueSource`]: controlled or uncontrolled committed value
//! - [`EditableState`]: session state (value, draft, snapshot, editing flag)
//! - [`EditConstraints`]: max length clamp, disabled/read-only gates
//! - [`ActivationMode`]: which read-view signals open the editor
//! - [`SubmitMode`]: Enter and dismissal policy
//! - [`Editable`]: controller owning the session, callbacks and dismissal watcher
//! - [`EditableContext`]: explicit shared handle for render adapters
//!
//! # Example
//!
//! ```
//! use inline_edit::config::EditableConfig;
//! use inline_edit::editable::Editable;
//!
//! let mut editable = Editable::new(EditableConfig::default(), "Original");
//! editable.edit(None);
//! editable.set_draft("Updated");
//! editable.submit();
//!
//! assert_eq!(editable.value(), Some("Updated"));
//! assert!(!editable.is_editing());
//! ```

mod activation;
mod constraints;
mod context;
mod controller;
mod messages;
mod state;
mod submission;
mod value;

pub use activation::{ActivationMode, ActivationSignal};
pub use constraints::EditConstraints;
pub use context::{EditableContext, EditableError};
pub use controller::{
    Callbacks, Editable, EditableBuilder, EditableSnapshot, StateCallback, ValueCallback,
};
pub use messages::{ActivationSource, EditState, EditableMsg, Notification};
pub use state::EditableState;
pub use submission::{key_action, CommitKey, SubmitMode};
pub use value::ValueSource;
