use crate::{GeneratorConfig, Generated, Written};

use xsdroo_core::{err, Error, Model, Package, Resolution, Result, Schema};
use xsdroo_script::{Emitter, Serializer};

use std::fs;
use std::path::Path;

/// Runs the whole pipeline: parse the schema, build the entity model,
/// resolve relationships and render both scripts.
#[derive(Debug, Default, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates both scripts for the schema document `xsd`.
    pub fn generate(&self, xsd: &str) -> Result<Generated> {
        let schema = Schema::parse(xsd)?;
        let model = Model::from_schema(&schema)?;
        let resolution = Resolution::from_model(&model);

        let package = match &self.config.package {
            Some(name) => Package::new(name),
            None => Package::from_namespace(&model.namespace),
        };

        log::info!(
            "generating scripts; entities={} relations={} package={}",
            model.entities().len(),
            resolution.relations().count(),
            package
        );

        let scripts = Emitter::new(&model, &resolution, &self.config.options).emit();
        let serializer = Serializer::new(&package);
        let full = scripts.full.render(&serializer);
        let update = scripts.update.render(&serializer);

        Ok(Generated {
            package,
            full,
            update,
        })
    }

    /// Reads the schema at `schema`, then writes the full script to `target`
    /// and the update script beside it.
    pub fn run(&self, schema: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<Written> {
        let schema = schema.as_ref();
        let xsd = fs::read_to_string(schema)
            .map_err(|source| Error::io(source).context(err!("reading `{}`", schema.display())))?;

        let generated = self
            .generate(&xsd)
            .map_err(|e| e.context(err!("generating scripts for `{}`", schema.display())))?;

        generated.write(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std_util::prelude::*;

    const LIBRARY: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:lib="http://www.example.com/library"
           targetNamespace="http://www.example.com/library">
  <xs:complexType name="Book">
    <xs:sequence>
      <xs:element name="title" type="xs:string"/>
    </xs:sequence>
  </xs:complexType>
</xs:schema>"#;

    #[test]
    fn package_is_derived_from_the_namespace() {
        let generated = assert_ok!(Generator::default().generate(LIBRARY));

        assert_eq!(generated.package.to_string(), "com.example.library");
        assert_line!(
            generated.full,
            "entity jpa --class com.example.library.Book --activeRecord false --testAutomatically"
        );
    }

    #[test]
    fn package_override() {
        let config = GeneratorConfig::new().package("org.books");
        let generated = assert_ok!(Generator::new(config).generate(LIBRARY));

        assert_line!(generated.full, "project --topLevelPackage org.books");
        assert_line!(
            generated.update,
            "field string --fieldName title --class org.books.Book --notNull"
        );
    }

    #[test]
    fn run_writes_both_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("library.xsd");
        fs::write(&schema, LIBRARY).unwrap();

        let target = dir.path().join("out/library.roo");
        let written = assert_ok!(Generator::default().run(&schema, &target));

        let full = fs::read_to_string(&written.full).unwrap();
        let update = fs::read_to_string(&written.update).unwrap();
        assert!(written.update.ends_with("libraryUpdate.roo"));
        assert_line!(full, "project --topLevelPackage com.example.library");
        assert_no_line!(update, "project --topLevelPackage com.example.library");
    }

    #[test]
    fn run_reports_missing_schema() {
        let dir = tempfile::tempdir().unwrap();
        let err = assert_err!(Generator::default().run(dir.path().join("none.xsd"), dir.path().join("out.roo")));

        assert!(err.is_io());
        assert!(err.to_string().starts_with("reading `"));
    }

    #[test]
    fn schema_errors_abort_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("broken.xsd");
        fs::write(
            &schema,
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           targetNamespace="urn:broken">
  <xs:complexType name="Person">
    <xs:sequence><xs:element name="address"/></xs:sequence>
  </xs:complexType>
</xs:schema>"#,
        )
        .unwrap();

        let target = dir.path().join("broken.roo");
        let err = assert_err!(Generator::default().run(&schema, &target));

        assert!(err.is_schema_error());
        assert!(err.is_undetermined_type());
        assert!(!target.exists());
    }
}
