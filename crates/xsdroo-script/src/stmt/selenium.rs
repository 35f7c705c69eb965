use super::Statement;
use xsdroo_core::model::Entity;

/// Generates a browser test for an entity's controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeleniumTest {
    /// Unqualified class name of the entity.
    pub entity: String,
}

impl Statement {
    pub fn selenium_test(entity: &Entity) -> Self {
        SeleniumTest {
            entity: entity.name.ident.clone(),
        }
        .into()
    }
}

impl SeleniumTest {
    pub fn controller(&self) -> String {
        format!("{}Controller", self.entity)
    }
}

impl From<SeleniumTest> for Statement {
    fn from(value: SeleniumTest) -> Self {
        Self::SeleniumTest(value)
    }
}
