use crate::model::{EntityId, FieldId, Name};
use std::fmt;

/// A classified relationship from a field of one entity to another entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub kind: RelationKind,

    /// The entity declaring the field.
    pub source: EntityId,

    /// The field the relationship is declared on.
    pub field: FieldId,

    /// The referenced type. Not necessarily a modeled entity for plain
    /// references.
    pub target: Name,

    /// Name of the reciprocal field owning the other side, for
    /// many-to-many relationships.
    pub mapped_by: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RelationKind {
    ManyToMany,
    OneToMany,
    ManyToOne,
    OneToOne,

    /// A unidirectional reference with no cardinality.
    Reference,
}

impl RelationKind {
    /// The label used when describing the relationship, if it has one.
    pub fn label(self) -> Option<&'static str> {
        match self {
            RelationKind::ManyToMany => Some("Many to Many"),
            RelationKind::OneToMany => Some("One to Many"),
            RelationKind::ManyToOne => Some("Many to One"),
            RelationKind::OneToOne => Some("One to One"),
            RelationKind::Reference => None,
        }
    }

    /// The `--cardinality` argument, if the relationship carries one.
    pub fn cardinality(self) -> Option<&'static str> {
        match self {
            RelationKind::ManyToMany => Some("MANY_TO_MANY"),
            RelationKind::OneToMany => Some("ONE_TO_MANY"),
            RelationKind::ManyToOne => Some("MANY_TO_ONE"),
            RelationKind::OneToOne => Some("ONE_TO_ONE"),
            RelationKind::Reference => None,
        }
    }

    /// Returns `true` if the field holds a collection.
    pub fn is_collection(self) -> bool {
        matches!(self, RelationKind::ManyToMany | RelationKind::OneToMany)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("Reference"))
    }
}
