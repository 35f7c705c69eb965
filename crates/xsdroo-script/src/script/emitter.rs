use super::{Script, Scripts};
use crate::{
    stmt::{Statement, Web},
    Options,
};
use xsdroo_core::{
    model::Entity,
    resolve::{Relation, Resolution, Resolved},
    Model,
};

const UPDATE_NOTICE: [&str; 4] = [
    "This script only contains the entities",
    "and should be run against an existing",
    "roo projects to update any changes in",
    "the model",
];

/// Lays out the statements of the full and update scripts for a resolved
/// model.
#[derive(Debug)]
pub struct Emitter<'a> {
    model: &'a Model,
    resolution: &'a Resolution,
    options: &'a Options,
}

impl<'a> Emitter<'a> {
    pub fn new(model: &'a Model, resolution: &'a Resolution, options: &'a Options) -> Self {
        Emitter {
            model,
            resolution,
            options,
        }
    }

    pub fn emit(&self) -> Scripts {
        let scripts = Scripts {
            full: self.full_script(),
            update: self.update_script(),
        };

        log::debug!(
            "emitted scripts; full_commands={} update_commands={}",
            scripts.full.commands().count(),
            scripts.update.commands().count()
        );
        scripts
    }

    pub fn full_script(&self) -> Script {
        let mut script = Script::new();

        script.push(Statement::banner("Project Initialisation"));
        script.push(Statement::Blank);
        script.push(Statement::comment("Create the project"));
        script.push(Statement::project());
        script.push(Statement::Blank);
        script.push(Statement::comment("Setup persistence"));
        script.push(Statement::jpa_setup(self.options.database));
        script.push(Statement::Blank);

        script.push(Statement::banner("Create the entities"));
        script.push(Statement::Blank);
        self.entities(&mut script);
        self.relationships(&mut script);

        if self.options.web.enabled {
            script.push(Statement::Blank);
            script.push(Statement::banner("Web Tier"));
            script.push(Web::JsonAll);
            script.push(Web::MvcJsonSetup);
            script.push(Web::MvcJsonAll);

            if !self.options.web.json_only {
                script.push(Web::MvcSetup);
                script.push(Web::MvcAll);
            }
        }

        if self.options.tests {
            script.push(Statement::Blank);
            script.push(Statement::banner("Add Selenium Tests"));
            script.extend(self.model.entities().map(Statement::selenium_test));
        }

        script
    }

    pub fn update_script(&self) -> Script {
        let mut script = Script::new();

        script.push(Statement::banner_lines(UPDATE_NOTICE));
        script.push(Statement::banner("Update the entities"));
        script.push(Statement::Blank);
        self.entities(&mut script);
        self.relationships(&mut script);

        if self.options.web.enabled {
            script.push(Statement::Blank);
            script.push(Web::JsonAll);
            script.push(Statement::Blank);
        }

        script
    }

    fn entities(&self, script: &mut Script) {
        for entity in self.model.entities() {
            self.entity(script, entity);
        }
    }

    fn entity(&self, script: &mut Script, entity: &Entity) {
        script.push(Statement::comment(&entity.name.raw));
        script.push(Statement::create_entity(entity, self.options.active_record));

        for field in entity.scalars() {
            script.push(Statement::add_field(field, &entity.name));
        }

        if !self.options.active_record {
            script.push(Statement::create_repository(entity));
        }

        script.push(Statement::Blank);
    }

    fn relationships(&self, script: &mut Script) {
        script.push(Statement::banner("Entity Relationships"));

        for resolved in &self.resolution.resolved {
            match resolved {
                Resolved::Relation(relation) => {
                    script.push(Statement::Blank);
                    script.push(Statement::comment(self.describe(relation)));
                    script.push(Statement::add_relation(relation, self.model));
                }
                Resolved::Scalar(id) => {
                    let owner = &self.model.entity(id.entity).name;
                    script.push(Statement::add_field(self.model.field(*id), owner));
                }
            }
        }
    }

    /// `Source to Target [Kind]`, using the names as declared.
    fn describe(&self, relation: &Relation) -> String {
        let source = &self.model.entity(relation.source).name.raw;
        let target = &relation.target.raw;

        match relation.kind.label() {
            Some(label) => format!("{source} to {target} [{label}]"),
            None => format!("{source} to {target}"),
        }
    }
}
