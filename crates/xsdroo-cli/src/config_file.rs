use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use xsdroo::{Database, GeneratorConfig, Options, WebOptions};

const CONFIG_FILE_VERSION: u32 = 1;

/// Settings stored in `Xsdroo.toml`. Every setting is optional; missing
/// ones keep the generator's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Config file format version
    version: u32,

    /// Package the entities are generated in, instead of the one derived
    /// from the target namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Database name, such as `H2_IN_MEMORY` or `POSTGRES`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_record: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_only: Option<bool>,
}

impl ConfigFile {
    /// Create an empty config file
    pub fn new() -> Self {
        Self {
            version: CONFIG_FILE_VERSION,
            package: None,
            database: None,
            active_record: None,
            tests: None,
            web: None,
        }
    }

    /// A config file spelling out every default setting
    pub fn with_defaults() -> Self {
        let options = Options::default();

        Self {
            database: Some(options.database.to_string()),
            active_record: Some(options.active_record),
            tests: Some(options.tests),
            web: Some(WebSection {
                enabled: Some(options.web.enabled),
                json_only: Some(options.web.json_only),
            }),
            ..Self::new()
        }
    }

    /// Load a config file from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        contents.parse()
    }

    /// Save the config file to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_string())?;
        Ok(())
    }

    /// Loads the config file, or returns an empty one if it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }

    /// Applies the stored settings on top of `config`
    pub fn apply(&self, mut config: GeneratorConfig) -> Result<GeneratorConfig> {
        if let Some(package) = &self.package {
            config = config.package(package);
        }
        if let Some(database) = &self.database {
            config = config.database(database.parse::<Database>()?);
        }
        if let Some(active_record) = self.active_record {
            config = config.active_record(active_record);
        }
        if let Some(tests) = self.tests {
            config = config.tests(tests);
        }
        if let Some(web) = self.web {
            let defaults = config.options.web;
            config = config.web(WebOptions {
                enabled: web.enabled.unwrap_or(defaults.enabled),
                json_only: web.json_only.unwrap_or(defaults.json_only),
            });
        }
        Ok(config)
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ConfigFile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(s)?;

        // Validate version
        if file.version != CONFIG_FILE_VERSION {
            bail!(
                "Unsupported config file version: {}. Expected version {}",
                file.version,
                CONFIG_FILE_VERSION
            );
        }

        Ok(file)
    }
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip() {
        let file = ConfigFile::with_defaults();
        let parsed: ConfigFile = file.to_string().parse().unwrap();
        assert_eq!(parsed, file);

        let config = parsed.apply(GeneratorConfig::new()).unwrap();
        assert_eq!(config, GeneratorConfig::new());
    }

    #[test]
    fn partial_file() {
        let file: ConfigFile = r#"
version = 1
package = "org.example.model"
database = "mysql"

[web]
json_only = false
"#
        .parse()
        .unwrap();

        let config = file.apply(GeneratorConfig::new()).unwrap();
        assert_eq!(config.package.as_deref(), Some("org.example.model"));
        assert_eq!(config.options.database, Database::Mysql);
        assert_eq!(config.options.web, WebOptions::full());
        assert!(config.options.tests);
    }

    #[test]
    fn rejects_unknown_version() {
        let err = "version = 7".parse::<ConfigFile>().unwrap_err();
        assert!(err.to_string().contains("Unsupported config file version: 7"));
    }

    #[test]
    fn rejects_unknown_database() {
        let file: ConfigFile = "version = 1\ndatabase = \"sqlite\"".parse().unwrap();
        let err = file.apply(GeneratorConfig::new()).unwrap_err();
        assert!(err.to_string().starts_with("unknown database `sqlite`"));
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = ConfigFile::load_or_default(dir.path().join("Xsdroo.toml")).unwrap();
        assert_eq!(file, ConfigFile::new());
    }
}
