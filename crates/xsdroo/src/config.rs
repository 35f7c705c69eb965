use xsdroo_script::{Database, Options, WebOptions};

/// Configuration for a generator run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Package the entities are generated in. Derived from the schema's
    /// target namespace when not set.
    pub package: Option<String>,

    /// Settings shaping the generated scripts
    pub options: Options,
}

impl GeneratorConfig {
    /// Create a new GeneratorConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the package derived from the target namespace
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Set the script options
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the database the persistence layer is configured for
    pub fn database(mut self, database: Database) -> Self {
        self.options.database = database;
        self
    }

    /// Make entities manage their own persistence instead of generating a
    /// repository for each
    pub fn active_record(mut self, active_record: bool) -> Self {
        self.options.active_record = active_record;
        self
    }

    /// Set the web tier options
    pub fn web(mut self, web: WebOptions) -> Self {
        self.options.web = web;
        self
    }

    /// Enable or disable the generated selenium tests
    pub fn tests(mut self, tests: bool) -> Self {
        self.options.tests = tests;
        self
    }
}
