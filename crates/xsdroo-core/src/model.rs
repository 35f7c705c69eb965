mod cardinality;
pub use cardinality::Cardinality;

mod entity;
pub use entity::{Entity, EntityId};

mod facets;
pub use facets::Facets;

mod field;
pub use field::{Field, FieldId, FieldKind};

mod name;
pub use name::{escape, Name};

mod reserved;

use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// Every entity declared by a schema, keyed by raw declared name.
///
/// The map is complete before relationship resolution starts and is not
/// changed afterwards.
#[derive(Clone, Default)]
pub struct Model {
    /// Target namespace the entities were declared in.
    pub namespace: String,

    /// Entities in declaration order.
    pub entities: IndexMap<String, Entity>,

    /// Names of every named `complexType` in the schema, modeled or not.
    pub complex_types: IndexSet<String>,
}

impl Model {
    pub fn new(namespace: impl Into<String>) -> Model {
        Model {
            namespace: namespace.into(),
            ..Model::default()
        }
    }

    /// Adds `entity`, keyed by its raw name.
    ///
    /// A later declaration with the same raw name replaces the earlier one
    /// but keeps its position.
    pub fn insert(&mut self, mut entity: Entity) {
        let raw = entity.name.raw.clone();
        let id = match self.entities.get_index_of(&raw) {
            Some(index) => {
                log::warn!("entity `{raw}` is declared more than once; keeping the last declaration");
                EntityId(index)
            }
            None => EntityId(self.entities.len()),
        };

        entity.set_id(id);
        self.entities.insert(raw, entity);
    }

    pub fn entity(&self, id: impl Into<EntityId>) -> &Entity {
        &self.entities[id.into().0]
    }

    pub fn entity_by_name(&self, raw: &str) -> Option<&Entity> {
        self.entities.get(raw)
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.entity(id.entity).fields[id.index]
    }

    pub fn entities(&self) -> impl ExactSizeIterator<Item = &Entity> + '_ {
        self.entities.values()
    }

    /// Returns `true` if `name` is a modeled entity or any named complex
    /// type in the schema.
    pub fn is_known_complex_type(&self, name: &str) -> bool {
        self.entities.contains_key(name) || self.complex_types.contains(name)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Model")
            .field("namespace", &self.namespace)
            .field("entities", &self.entities.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_keep_position() {
        let mut model = Model::new("urn:test");
        model.insert(Entity::new("A"));
        model.insert(Entity::new("B"));

        let mut replacement = Entity::new("A");
        replacement.base = Some(Name::new("Base"));
        model.insert(replacement);

        let names: Vec<_> = model.entities().map(|e| e.name.raw.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(model.entity_by_name("A").unwrap().base.is_some());
        assert_eq!(model.entity_by_name("A").unwrap().id, EntityId(0));
    }

    #[test]
    fn known_complex_types() {
        let mut model = Model::new("urn:test");
        model.insert(Entity::new("A"));
        model.complex_types.insert("Nested".to_string());

        assert!(model.is_known_complex_type("A"));
        assert!(model.is_known_complex_type("Nested"));
        assert!(!model.is_known_complex_type("PostCode"));
    }
}
