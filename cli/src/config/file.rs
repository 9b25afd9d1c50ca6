//! Configuration file structure and operations.

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, write};
use std::path::Path;

use super::types::{AnimationSettings, DisplaySettings};

/// The complete configuration file structure.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub display: DisplaySettings,
    pub animation: AnimationSettings,
}

impl ConfigFile {
    /// Parse a TOML document.
    pub(crate) fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str::<ConfigFile>(content)
            .map_err(|e| ConfigError::Message(format!("Failed to parse config file: {}", e)))
    }

    pub(crate) fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config file: {}", e)))
    }

    /// Save the config file to the given path.
    pub(crate) fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {}", e))
            })?;
        }
        let body = self.to_toml()?;
        write(path, body)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {}", e)))
    }
}
