use super::{Cardinality, EntityId, Facets, Name};
use crate::ty::{Primitive, TargetType};
use std::fmt;

/// One modeled property of an entity.
#[derive(Debug, Clone)]
pub struct Field {
    /// Set once, when the field is pushed onto its entity.
    id: Option<FieldId>,

    pub name: Name,

    /// The type as written in the schema, possibly prefixed.
    pub source_type: String,

    /// The built-in type the source type resolves to, if any.
    pub primitive: Option<Primitive>,

    pub cardinality: Cardinality,

    pub facets: Facets,

    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Emitted with its entity as a plain field.
    Scalar,

    /// Possibly a relationship to the entity named `target`. Decided by the
    /// resolver.
    Candidate { target: String },
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub entity: EntityId,
    pub index: usize,
}

impl Field {
    pub fn new(name: Name, source_type: impl Into<String>, kind: FieldKind) -> Field {
        Field {
            id: None,
            name,
            source_type: source_type.into(),
            primitive: None,
            cardinality: Cardinality::None,
            facets: Facets::default(),
            kind,
        }
    }

    pub fn id(&self) -> Option<FieldId> {
        self.id
    }

    /// The entity owning this field, once assigned.
    pub fn owner(&self) -> Option<EntityId> {
        self.id.map(|id| id.entity)
    }

    pub(super) fn set_owner(&mut self, id: FieldId) {
        self.id = Some(id);
    }

    pub fn is_candidate(&self) -> bool {
        matches!(self.kind, FieldKind::Candidate { .. })
    }

    /// Name of the entity a candidate field refers to.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Candidate { target } => Some(target),
            FieldKind::Scalar => None,
        }
    }

    /// The target type descriptor. Fields with no resolved built-in type
    /// map to `string`.
    pub fn target_type(&self) -> TargetType {
        self.primitive
            .map(Primitive::target_type)
            .unwrap_or_else(TargetType::string)
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.entity.0, self.index)
    }
}
