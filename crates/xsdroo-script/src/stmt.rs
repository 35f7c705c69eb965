//! Commands understood by the scaffolding tool.

mod banner;
pub use banner::Banner;

mod entity;
pub use entity::{CreateEntity, CreateRepository};

mod field;
pub use field::{AddField, FieldClauses};

mod project;
pub use project::{JpaSetup, Project};

mod relation;
pub use relation::AddRelation;

mod selenium;
pub use selenium::SeleniumTest;

mod web;
pub use web::Web;

/// One line, or block of lines, of a generated script.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AddField(AddField),
    AddRelation(AddRelation),
    Banner(Banner),
    Blank,
    Comment(String),
    CreateEntity(CreateEntity),
    CreateRepository(CreateRepository),
    JpaSetup(JpaSetup),
    Project(Project),
    SeleniumTest(SeleniumTest),
    Web(Web),
}

impl Statement {
    pub fn comment(text: impl Into<String>) -> Self {
        Statement::Comment(text.into())
    }

    /// Returns `true` for statements the scaffolding tool executes, as
    /// opposed to comments and layout.
    pub fn is_command(&self) -> bool {
        !matches!(
            self,
            Statement::Banner(_) | Statement::Blank | Statement::Comment(_)
        )
    }
}
