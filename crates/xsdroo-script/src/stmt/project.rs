use super::Statement;
use crate::Database;

/// Creates the project with the serializer's package as its top-level
/// package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project;

/// Configures the persistence provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpaSetup {
    pub database: Database,
}

impl Statement {
    pub fn project() -> Self {
        Project.into()
    }

    pub fn jpa_setup(database: Database) -> Self {
        JpaSetup { database }.into()
    }
}

impl From<Project> for Statement {
    fn from(value: Project) -> Self {
        Self::Project(value)
    }
}

impl From<JpaSetup> for Statement {
    fn from(value: JpaSetup) -> Self {
        Self::JpaSetup(value)
    }
}
