//! Authoritative value storage.
//!
//! The value is either owned by the caller (controlled) or held locally
//! (uncontrolled). The variant is chosen once at construction and never
//! switches; nothing outside this module branches on it.

/// Source of the committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Value owned by the caller. `commit` does not touch it; the owner feeds
    /// the accepted value back through [`ValueSource::sync`].
    Controlled { external: Option<String> },
    /// Value held locally, initialized from the default.
    Uncontrolled { cell: Option<String> },
}

impl ValueSource {
    /// Controlled source mirroring `value`
    pub fn controlled(value: Option<String>) -> Self {
        ValueSource::Controlled { external: value }
    }

    /// Uncontrolled source starting at `default`
    pub fn uncontrolled(default: impl Into<String>) -> Self {
        ValueSource::Uncontrolled {
            cell: Some(default.into()),
        }
    }

    /// Pick the variant from what the caller supplied. `value` wins when present.
    pub fn select(value: Option<Option<String>>, default_value: Option<String>) -> Self {
        match value {
            Some(external) => Self::controlled(external),
            None => Self::uncontrolled(default_value.unwrap_or_default()),
        }
    }

    /// Current committed value
    pub fn get(&self) -> Option<&str> {
        match self {
            ValueSource::Controlled { external } => external.as_deref(),
            ValueSource::Uncontrolled { cell } => cell.as_deref(),
        }
    }

    /// Commit a new value.
    ///
    /// Uncontrolled sources update immediately. Controlled sources keep the
    /// external value; the change notification is the only forward path.
    pub fn commit(&mut self, value: &str) {
        match self {
            ValueSource::Controlled { .. } => {
                tracing::trace!("controlled commit forwarded to owner, local value untouched");
            }
            ValueSource::Uncontrolled { cell } => {
                *cell = Some(value.to_string());
            }
        }
    }

    /// Accept a value fed back by the external owner.
    /// Returns false (and ignores the value) for uncontrolled sources.
    pub fn sync(&mut self, value: Option<String>) -> bool {
        match self {
            ValueSource::Controlled { external } => {
                *external = value;
                true
            }
            ValueSource::Uncontrolled { .. } => {
                tracing::warn!("ignoring external value sync on an uncontrolled editable");
                false
            }
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, ValueSource::Controlled { .. })
    }
}

impl Default for ValueSource {
    fn default() -> Self {
        Self::uncontrolled("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_commit_is_immediate() {
        let mut source = ValueSource::uncontrolled("Original");
        source.commit("Updated");
        assert_eq!(source.get(), Some("Updated"));
    }

    #[test]
    fn test_controlled_commit_leaves_external_value() {
        let mut source = ValueSource::controlled(Some("Owner".to_string()));
        source.commit("Draft");
        assert_eq!(source.get(), Some("Owner"));

        assert!(source.sync(Some("Draft".to_string())));
        assert_eq!(source.get(), Some("Draft"));
    }

    #[test]
    fn test_sync_ignored_when_uncontrolled() {
        let mut source = ValueSource::uncontrolled("Local");
        assert!(!source.sync(Some("Other".to_string())));
        assert_eq!(source.get(), Some("Local"));
    }

    #[test]
    fn test_select_prefers_supplied_value() {
        let source = ValueSource::select(Some(None), Some("default".to_string()));
        assert!(source.is_controlled());
        assert_eq!(source.get(), None);

        let source = ValueSource::select(None, None);
        assert!(!source.is_controlled());
        assert_eq!(source.get(), Some(""));
    }
}
