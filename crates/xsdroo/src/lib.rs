//! Turns an XML Schema into the scripts that scaffold a Spring Roo project
//! for it.
//!
//! ```no_run
//! use xsdroo::{Generator, GeneratorConfig};
//!
//! # fn main() -> xsdroo::Result<()> {
//! let config = GeneratorConfig::new().package("com.example.model");
//! let written = Generator::new(config).run("model.xsd", "out/build.roo")?;
//! println!("wrote {}", written.update.display());
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::GeneratorConfig;

mod generator;
pub use generator::Generator;

mod output;
pub use output::{update_path, Generated, Written};

pub use xsdroo_core::{bail, err, Error, Model, Package, Resolution, Result, Schema};
pub use xsdroo_script::{Database, Options, WebOptions};
