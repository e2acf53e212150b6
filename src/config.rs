//! Editable configuration
//!
//! Everything an editable is constructed with, apart from its value and
//! callbacks. Loadable from `~/.config/inline-edit/config.yaml`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{ActivationMode, EditConstraints, SubmitMode};

/// Placeholder text shown when the value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Placeholder {
    /// Same text in both views
    Text(String),
    /// Separate texts for the input and the read view
    Split { edit: String, preview: String },
}

impl Placeholder {
    /// Placeholder for the edit input
    pub fn for_edit(&self) -> &str {
        match self {
            Placeholder::Text(text) => text,
            Placeholder::Split { edit, .. } => edit,
        }
    }

    /// Placeholder for the read view
    pub fn for_preview(&self) -> &str {
        match self {
            Placeholder::Text(text) => text,
            Placeholder::Split { preview, .. } => preview,
        }
    }
}

/// Text direction of the editable root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dir {
    #[default]
    Ltr,
    Rtl,
}

/// Immutable per-instance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditableConfig {
    /// How editing is activated
    pub activation_mode: ActivationMode,
    /// When the draft is submitted
    pub submit_mode: SubmitMode,
    /// Maximum draft length in characters
    pub max_length: Option<usize>,
    pub disabled: bool,
    pub read_only: bool,
    /// Select all text whenever the input takes focus
    pub select_on_focus: bool,
    /// Start already in edit mode
    pub start_with_edit_mode: bool,
    /// Read view and input share one layout cell so the input tracks text width
    pub auto_resize: bool,
    pub placeholder: Option<Placeholder>,
    pub dir: Dir,
    /// Form field name for the hidden mirror
    pub name: Option<String>,
    /// Mark the form mirror as mandatory
    pub required: bool,
}

impl Default for EditableConfig {
    fn default() -> Self {
        Self {
            activation_mode: ActivationMode::Focus,
            submit_mode: SubmitMode::Blur,
            max_length: None,
            disabled: false,
            read_only: false,
            select_on_focus: false,
            start_with_edit_mode: false,
            auto_resize: false,
            placeholder: None,
            dir: Dir::Ltr,
            name: None,
            required: false,
        }
    }
}

impl EditableConfig {
    /// Constraints derived from this config
    pub fn constraints(&self) -> EditConstraints {
        EditConstraints {
            max_length: self.max_length,
            disabled: self.disabled,
            read_only: self.read_only,
        }
    }

    /// Parse a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse editable config")
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Save to a specific file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
