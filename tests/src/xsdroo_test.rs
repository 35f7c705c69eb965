use crate::fixture;
use xsdroo::{Generated, Generator, GeneratorConfig};

/// Runs the generator over schema fixtures with a given configuration.
pub struct XsdrooTest {
    generator: Generator,
}

impl XsdrooTest {
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        Self {
            generator: Generator::new(config),
        }
    }

    /// Generates the scripts for `xsd`, failing the test on error.
    pub fn generate(&self, xsd: &str) -> Generated {
        match self.generator.generate(xsd) {
            Ok(generated) => generated,
            Err(err) => panic!("generation failed: {err}"),
        }
    }

    /// Generates the scripts for the fixture `name`.
    pub fn generate_fixture(&self, name: &str) -> Generated {
        self.generate(&fixture(name))
    }
}

impl Default for XsdrooTest {
    fn default() -> Self {
        Self::new()
    }
}
