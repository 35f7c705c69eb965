use super::Statement;
use xsdroo_core::{
    resolve::{Relation, RelationKind},
    Model,
};

/// Adds a relationship field to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRelation {
    pub kind: RelationKind,

    /// Field name.
    pub name: String,

    /// Unqualified class name of the referenced entity.
    pub target: String,

    /// Unqualified class name of the owning entity.
    pub class: String,

    pub mapped_by: Option<String>,
}

impl Statement {
    pub fn add_relation(relation: &Relation, model: &Model) -> Self {
        AddRelation {
            kind: relation.kind,
            name: model.field(relation.field).name.ident.clone(),
            target: relation.target.ident.clone(),
            class: model.entity(relation.source).name.ident.clone(),
            mapped_by: relation.mapped_by.clone(),
        }
        .into()
    }
}

impl From<AddRelation> for Statement {
    fn from(value: AddRelation) -> Self {
        Self::AddRelation(value)
    }
}
