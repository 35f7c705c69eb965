use super::{Field, FieldId, Name};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Entity {
    /// Position of the entity in the model.
    pub id: EntityId,

    pub name: Name,

    /// Fields in declaration order.
    pub fields: Vec<Field>,

    /// Entity this one extends, if any.
    pub base: Option<Name>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct EntityId(pub usize);

impl Entity {
    pub fn new(raw: &str) -> Entity {
        Entity {
            id: EntityId::placeholder(),
            name: Name::new(raw),
            fields: vec![],
            base: None,
        }
    }

    /// Appends `field`, making this entity its owner.
    pub fn push(&mut self, mut field: Field) {
        field.set_owner(self.id.field(self.fields.len()));
        self.fields.push(field);
    }

    pub fn field_by_name(&self, raw: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.raw == raw)
    }

    /// Fields still waiting for relationship resolution.
    pub fn candidates(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_candidate())
    }

    /// Fields emitted as plain scalars together with the entity.
    pub fn scalars(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.is_candidate())
    }

    pub(super) fn set_id(&mut self, id: EntityId) {
        self.id = id;
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.set_owner(id.field(index));
        }
    }
}

impl EntityId {
    pub const fn field(self, index: usize) -> FieldId {
        FieldId {
            entity: self,
            index,
        }
    }

    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&Entity> for EntityId {
    fn from(value: &Entity) -> Self {
        value.id
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}
