mod config;
mod config_file;
mod generate;
mod init;

pub use config::*;
pub use config_file::{ConfigFile, WebSection};
pub use generate::GenerateCommand;
pub use init::InitCommand;

use anyhow::Result;
use clap::Parser;

/// xsdroo CLI library for building custom command-line tools
pub struct XsdrooCli {
    config: Config,
}

impl XsdrooCli {
    /// Create a new XsdrooCli instance with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a new XsdrooCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::parse_from(args);
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        init_logger(cli.verbose);

        match cli.command {
            Command::Gen(cmd) => cmd.run(&self.config),
            Command::Init(cmd) => cmd.run(&self.config),
        }
    }
}

impl Default for XsdrooCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs warnings by default; each `-v` raises the level. `RUST_LOG` wins
/// when set.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger installed by the embedding program stays in place
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(name = "xsdroo")]
#[command(about = "xsdroo - generate Spring Roo scripts from an XML Schema")]
#[command(version)]
struct Cli {
    /// Log more detail (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate the full and update scripts for a schema
    Gen(GenerateCommand),

    /// Write a configuration file with the default settings
    Init(InitCommand),
}
