use crate::{Config, ConfigFile};
use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;
use xsdroo::{Database, Generator, GeneratorConfig, WebOptions};

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// XML Schema document to generate scripts for
    #[arg(short, long)]
    schema: PathBuf,

    /// Path of the full script. The update script is written beside it.
    #[arg(short, long)]
    target: PathBuf,

    /// Database the persistence layer is configured for, such as
    /// `H2_IN_MEMORY` or `POSTGRES`
    #[arg(short, long)]
    database: Option<Database>,

    /// Package for the generated classes. Derived from the target namespace
    /// when not given.
    #[arg(short, long)]
    package: Option<String>,

    /// Entities manage their own persistence; no repositories are generated
    #[arg(long)]
    active_record: bool,

    /// Skip the web tier
    #[arg(long, conflicts_with = "full_web")]
    no_web: bool,

    /// Generate the full MVC web tier, not only the JSON controllers
    #[arg(long)]
    full_web: bool,

    /// Skip the selenium tests
    #[arg(long)]
    no_tests: bool,

    /// Configuration file to read settings from
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GenerateCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        println!();
        println!("  {}", style("Generate Scripts").cyan().bold().underlined());
        println!();

        let generator_config = self.generator_config(config)?;
        let written = Generator::new(generator_config).run(&self.schema, &self.target)?;

        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!("Created full script: {}", written.full.display())).dim()
        );
        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!("Created update script: {}", written.update.display())).dim()
        );
        println!();

        Ok(())
    }

    /// Settings from the config file, overridden by the command line.
    fn generator_config(&self, config: &Config) -> Result<GeneratorConfig> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::load_or_default(config.get_config_path())?,
        };

        let mut generator_config = file.apply(GeneratorConfig::new())?;

        if let Some(package) = &self.package {
            generator_config = generator_config.package(package);
        }
        if let Some(database) = self.database {
            generator_config = generator_config.database(database);
        }
        if self.active_record {
            generator_config = generator_config.active_record(true);
        }
        if self.no_web {
            generator_config = generator_config.web(WebOptions::disabled());
        } else if self.full_web {
            generator_config = generator_config.web(WebOptions::full());
        }
        if self.no_tests {
            generator_config = generator_config.tests(false);
        }

        log::debug!("generator config: {generator_config:?}");
        Ok(generator_config)
    }
}
