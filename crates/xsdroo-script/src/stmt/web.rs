use super::Statement;

/// Web tier commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Web {
    /// Adds JSON support to every entity.
    JsonAll,

    MvcJsonSetup,

    /// JSON controllers for every entity, in the project package.
    MvcJsonAll,

    MvcSetup,

    /// MVC controllers for every entity, in the project package.
    MvcAll,
}

impl From<Web> for Statement {
    fn from(value: Web) -> Self {
        Self::Web(value)
    }
}
