use super::Statement;
use xsdroo_core::model::Entity;

/// Declares an entity class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEntity {
    /// Unqualified class name.
    pub class: String,

    pub active_record: bool,

    /// Unqualified name of the class extended, if any.
    pub extends: Option<String>,
}

/// Declares the repository of a repository-backed entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRepository {
    /// Unqualified class name of the entity.
    pub entity: String,
}

impl Statement {
    pub fn create_entity(entity: &Entity, active_record: bool) -> Self {
        CreateEntity {
            class: entity.name.ident.clone(),
            active_record,
            extends: entity.base.as_ref().map(|base| base.ident.clone()),
        }
        .into()
    }

    pub fn create_repository(entity: &Entity) -> Self {
        CreateRepository {
            entity: entity.name.ident.clone(),
        }
        .into()
    }
}

impl CreateRepository {
    /// Unqualified name of the repository interface.
    pub fn interface(&self) -> String {
        format!("{}Repository", self.entity)
    }
}

impl From<CreateEntity> for Statement {
    fn from(value: CreateEntity) -> Self {
        Self::CreateEntity(value)
    }
}

impl From<CreateRepository> for Statement {
    fn from(value: CreateRepository) -> Self {
        Self::CreateRepository(value)
    }
}
