//! Edit constraints for an editable field.
//!
//! Constraints gate entry into edit mode and bound every draft write.

use std::borrow::Cow;

/// Constraints that limit what an editable allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditConstraints {
    /// Maximum draft length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// All interaction disabled
    pub disabled: bool,

    /// Read view stays focusable, editing is refused
    pub read_only: bool,
}

impl EditConstraints {
    /// Constraints bounded to `max` characters
    pub fn with_max_length(max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..Self::default()
        }
    }

    /// Check if entering edit mode is allowed
    pub fn can_edit(&self) -> bool {
        !self.disabled && !self.read_only
    }

    /// Truncate `text` to the max length, counted in characters.
    ///
    /// Silent: callers never learn that a clamp happened.
    pub fn clamp<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(max) = self.max_length else {
            return Cow::Borrowed(text);
        };
        match text.char_indices().nth(max) {
            Some((byte_idx, _)) => Cow::Owned(text[..byte_idx].to_string()),
            None => Cow::Borrowed(text),
        }
    }
}
