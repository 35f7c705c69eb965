use crate::{Config, ConfigFile};
use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct InitCommand {
    /// Where to write the configuration file
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let path = self
            .path
            .unwrap_or_else(|| config.get_config_path().to_path_buf());

        if !self.force && std::fs::exists(&path)? {
            bail!(
                "{} already exists; pass --force to overwrite it",
                path.display()
            );
        }

        ConfigFile::with_defaults().save(&path)?;

        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!("Created config file: {}", path.display())).dim()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Xsdroo.toml");
        let config = Config::new().config_path(&path);

        InitCommand::try_parse_from(["init"]).unwrap().run(&config).unwrap();
        assert_eq!(ConfigFile::load(&path).unwrap(), ConfigFile::with_defaults());

        let err = InitCommand::try_parse_from(["init"])
            .unwrap()
            .run(&config)
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));

        InitCommand::try_parse_from(["init", "--force"])
            .unwrap()
            .run(&config)
            .unwrap();
    }
}
