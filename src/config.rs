//! Control configuration
//!
//! Options may change between render passes. Stored as YAML in
//! `~/.config/inline-edit/config.yaml` when loaded from disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::text_field::EditConstraints;

/// Errors that can occur when saving a config
#[derive(Debug, Clone)]
pub enum ConfigError {
    IoError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Options recognised by an editable control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditableConfig {
    /// Suppress every edit-entry transition and mark both surfaces aria-disabled
    pub is_disabled: bool,
    /// Blur of the input surface confirms the edit like Enter
    pub submit_on_blur: bool,
    /// Start in edit mode with the input surface focused
    pub start_with_edit_view: bool,
    /// Select the whole text when the input surface gains focus
    pub select_all_on_focus: bool,
    /// Preview surface takes part in tab order
    pub is_preview_focusable: bool,
    /// Text shown by the preview surface when the value is empty
    pub placeholder: Option<String>,
    /// Seed for the committed value of an uncontrolled control
    pub default_value: Option<String>,
    /// Maximum pending value length in characters
    pub max_length: Option<usize>,
}

impl Default for EditableConfig {
    fn default() -> Self {
        Self {
            is_disabled: false,
            submit_on_blur: false,
            start_with_edit_view: false,
            select_all_on_focus: true,
            is_preview_focusable: true,
            placeholder: None,
            default_value: None,
            max_length: None,
        }
    }
}

impl EditableConfig {
    /// Parse a config from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load config from a file, or return defaults if missing or invalid
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load the per-user config, or defaults when there is none
    pub fn load_default() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load(&path)
    }

    /// Save config to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Input constraints implied by this config
    pub fn constraints(&self) -> EditConstraints {
        EditConstraints::with_max_length(self.max_length)
    }

    /// Edit-entry transitions are allowed
    pub fn is_interactive(&self) -> bool {
        !self.is_disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditableConfig::default();
        assert!(!config.is_disabled);
        assert!(!config.submit_on_blur);
        assert!(!config.start_with_edit_view);
        assert!(config.select_all_on_focus);
        assert!(config.is_preview_focusable);
        assert_eq!(config.placeholder, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EditableConfig::from_yaml("submitOnBlur: true\nplaceholder: Untitled\n").unwrap();
        assert!(config.submit_on_blur);
        assert_eq!(config.placeholder.as_deref(), Some("Untitled"));
        assert!(config.select_all_on_focus);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(EditableConfig::from_yaml("isDisabled: [not, a, bool]").is_err());
    }

    #[test]
    fn test_constraints_follow_max_length() {
        let config = EditableConfig {
            max_length: Some(8),
            ..Default::default()
        };
        assert_eq!(config.constraints().max_length, Some(8));
    }
}
