//! Shared handle for passing one controller to several render adapters.
//!
//! Adapters receive an [`EditableContext`] explicitly; there is no global
//! registry. Using a context that was never bound to a controller is a
//! programmer error and fails on first use.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::controller::{Editable, EditableSnapshot};
use super::messages::ActivationSource;

/// Errors from using the action/read surface through a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableError {
    /// The context is not bound to any editable
    OutsideScope,
    /// A callback re-entered the controller while it was dispatching
    Reentrant,
}

impl fmt::Display for EditableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditableError::OutsideScope => {
                write!(f, "editable context used outside of an editable scope")
            }
            EditableError::Reentrant => {
                write!(f, "editable re-entered from its own callback")
            }
        }
    }
}

impl std::error::Error for EditableError {}

/// Cloneable handle to one [`Editable`].
#[derive(Clone, Default)]
pub struct EditableContext {
    inner: Option<Rc<RefCell<Editable>>>,
}

impl EditableContext {
    pub fn new(editable: Editable) -> Self {
        Self {
            inner: Some(Rc::new(RefCell::new(editable))),
        }
    }

    /// A context not bound to any editable
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        self.inner.is_some()
    }

    /// Run `f` against the controller
    pub fn with<R>(&self, f: impl FnOnce(&Editable) -> R) -> Result<R, EditableError> {
        let cell = self.inner.as_ref().ok_or(EditableError::OutsideScope)?;
        let editable = cell.try_borrow().map_err(|_| EditableError::Reentrant)?;
        Ok(f(&editable))
    }

    /// Run `f` against the controller mutably
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Editable) -> R) -> Result<R, EditableError> {
        let cell = self.inner.as_ref().ok_or(EditableError::OutsideScope)?;
        let mut editable = cell
            .try_borrow_mut()
            .map_err(|_| EditableError::Reentrant)?;
        Ok(f(&mut editable))
    }

    pub fn edit(&self, source: Option<ActivationSource>) -> Result<bool, EditableError> {
        self.with_mut(|e| e.edit(source))
    }

    pub fn submit(&self) -> Result<bool, EditableError> {
        self.with_mut(Editable::submit)
    }

    pub fn cancel(&self) -> Result<bool, EditableError> {
        self.with_mut(Editable::cancel)
    }

    pub fn set_draft(&self, text: &str) -> Result<bool, EditableError> {
        self.with_mut(|e| e.set_draft(text))
    }

    pub fn snapshot(&self) -> Result<EditableSnapshot, EditableError> {
        self.with(Editable::snapshot)
    }
}

impl fmt::Debug for EditableContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableContext")
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditableConfig;

    #[test]
    fn test_detached_context_fails_fast() {
        let ctx = EditableContext::detached();
        assert_eq!(ctx.edit(None), Err(EditableError::OutsideScope));
        assert_eq!(ctx.snapshot(), Err(EditableError::OutsideScope));
    }

    #[test]
    fn test_clones_share_one_controller() {
        let ctx = EditableContext::new(Editable::new(EditableConfig::default(), "a"));
        let preview = ctx.clone();
        let input = ctx.clone();

        assert_eq!(preview.edit(Some(ActivationSource::Click)), Ok(true));
        assert_eq!(input.set_draft("b"), Ok(true));
        assert_eq!(ctx.submit(), Ok(true));

        assert_eq!(preview.snapshot().unwrap().value.as_deref(), Some("b"));
    }

    #[test]
    fn test_reentrant_use_is_reported() {
        let ctx = EditableContext::new(Editable::new(EditableConfig::default(), "a"));
        let inner = ctx.clone();
        let result = ctx.with(|_| inner.cancel()).unwrap();
        assert_eq!(result, Err(EditableError::Reentrant));
    }

    #[test]
    fn test_error_messages() {
        assert!(EditableError::OutsideScope
            .to_string()
            .contains("outside of an editable scope"));
    }
}
