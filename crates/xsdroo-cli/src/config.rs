use std::path::{Path, PathBuf};

/// Name of the configuration file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "Xsdroo.toml";

/// Configuration for xsdroo CLI operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Configuration file read when `--config` is not given. Missing files
    /// are ignored.
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default configuration file path
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
