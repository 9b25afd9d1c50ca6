//! Configuration management for the slidedeck CLI.
//!
//! Settings are layered: built-in defaults, then the config file, then
//! command line flags.

mod app;
mod file;
mod types;


pub use app::{AppConfig, Overrides};
#[allow(unused_imports)]
pub use file::ConfigFile;

#[allow(unused_imports)]
pub use types::{AnimationSettings, DisplaySettings};

// Constants
pub const SLIDEDECK_CONFIG_PATH: &str = ".slidedeck/config.toml";
pub const SLIDEDECK_LOG_DIR: &str = ".slidedeck/logs";
