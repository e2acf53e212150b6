//! Hidden form field mirroring the committed value.
//!
//! A one-way projection of the value; it never feeds back into the session.

use serde::Serialize;

use crate::editable::Editable;

/// Read-only, non-interactive form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub disabled: bool,
}

impl FormField {
    /// The mirror, present only when the editable has a name
    pub fn new(editable: &Editable) -> Option<Self> {
        let config = editable.config();
        let name = config.name.as_ref()?;
        Some(Self {
            name: name.clone(),
            value: editable.value().unwrap_or_default().to_string(),
            required: config.required,
            disabled: config.disabled,
        })
    }

    /// `(name, value)` pair for form submission; disabled fields are left out
    pub fn entry(&self) -> Option<(&str, &str)> {
        (!self.disabled).then_some((self.name.as_str(), self.value.as_str()))
    }

    /// Form-level validation: a required mirror must not be empty
    pub fn is_valid(&self) -> bool {
        !self.required || !self.value.is_empty()
    }
}
