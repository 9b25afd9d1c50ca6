//! Resolved application configuration.

use config::ConfigError;
use slidedeck_tui::{AppStateOptions, LayoutDirection, Panel};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::SLIDEDECK_CONFIG_PATH;
use super::file::ConfigFile;
use super::types::{AnimationSettings, DisplaySettings};

/// Values given on the command line. `None` keeps the file's value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub start: Option<Panel>,
    pub animation_ms: Option<u64>,
    pub frame_ms: Option<u64>,
    pub layout_direction: Option<LayoutDirection>,
}

/// Effective configuration after layering defaults, file and flags.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub start_panel: Panel,
    pub layout_direction: LayoutDirection,
    pub animation_ms: u64,
    pub frame_ms: u64,
    /// File the configuration was read from (it may not exist).
    pub config_path: PathBuf,
}

impl AppConfig {
    /// Load the config file, falling back to defaults when it is missing.
    pub fn load<P: AsRef<Path>>(custom_config_path: Option<P>) -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path(custom_config_path);
        let config_file = Self::load_config_file(&config_path)?;
        let config = Self::build(config_path, config_file);
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config path from an explicit path or the home directory.
    pub fn get_config_path<P: AsRef<Path>>(path: Option<P>) -> PathBuf {
        match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::home_dir()
                .unwrap_or_default()
                .join(SLIDEDECK_CONFIG_PATH),
        }
    }

    pub(crate) fn load_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> Result<ConfigFile, ConfigError> {
        match std::fs::read_to_string(config_path.as_ref()) {
            Ok(content) => ConfigFile::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Failed to read config file: {}",
                e
            ))),
        }
    }

    fn build(config_path: PathBuf, config_file: ConfigFile) -> Self {
        AppConfig {
            start_panel: config_file.display.start,
            layout_direction: config_file.display.layout_direction,
            animation_ms: config_file.animation.duration_ms,
            frame_ms: config_file.animation.frame_ms,
            config_path,
        }
    }

    /// Apply command line values on top of the loaded configuration.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(start) = overrides.start {
            self.start_panel = start;
        }
        if let Some(layout_direction) = overrides.layout_direction {
            self.layout_direction = layout_direction;
        }
        if let Some(animation_ms) = overrides.animation_ms {
            self.animation_ms = animation_ms;
        }
        if let Some(frame_ms) = overrides.frame_ms {
            self.frame_ms = frame_ms;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_ms == 0 {
            return Err(ConfigError::Message(
                "animation.frame_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn state_options(&self) -> AppStateOptions {
        AppStateOptions {
            start_panel: self.start_panel,
            animation_duration: Duration::from_millis(self.animation_ms),
            frame_interval: Duration::from_millis(self.frame_ms),
            layout_direction: self.layout_direction,
        }
    }

    /// Configuration in file form, as `config show` prints it.
    pub fn to_config_file(&self) -> ConfigFile {
        ConfigFile {
            display: DisplaySettings {
                start: self.start_panel,
                layout_direction: self.layout_direction,
            },
            animation: AnimationSettings {
                duration_ms: self.animation_ms,
                frame_ms: self.frame_ms,
            },
        }
    }
}
