//! Builds the entity [`Model`] from a loaded [`Schema`].

mod extract;
mod unique;

use crate::model::{Entity, FieldKind, Model, Name};
use crate::schema::{descendants_until_element, field_declarations, is_xs, split_qname, Namespaces};
use crate::ty::{self, Primitive};
use crate::{err, Result, Schema};

use roxmltree::Node;

struct Builder<'a, 'input> {
    schema: &'a Schema<'input>,
    model: Model,
}

impl Model {
    /// Walks every top-level declaration of `schema` and models it as an
    /// entity.
    ///
    /// Fields are only classified here; relationships are decided later by
    /// the resolver. A field whose type cannot be determined aborts the
    /// whole build.
    pub fn from_schema(schema: &Schema<'_>) -> Result<Model> {
        Builder::new(schema).build()
    }
}

impl<'a, 'input> Builder<'a, 'input> {
    fn new(schema: &'a Schema<'input>) -> Self {
        let mut model = Model::new(schema.target_namespace());
        model
            .complex_types
            .extend(schema.complex_type_names().map(String::from));

        Builder { schema, model }
    }

    fn build(mut self) -> Result<Model> {
        let schema = self.schema;

        for decl in schema.top_level_declarations() {
            let Some(name) = decl.attribute("name").filter(|name| !name.is_empty()) else {
                continue;
            };

            let entity = self
                .entity(name, decl)
                .map_err(|e| e.context(err!("extracting fields of `{name}`")))?;
            self.model.insert(entity);
        }

        log::debug!(
            "built model; entities={} namespace={}",
            self.model.entities.len(),
            self.model.namespace
        );

        Ok(self.model)
    }

    fn entity(&self, name: &str, decl: Node<'a, 'input>) -> Result<Entity> {
        let mut entity = Entity::new(name);
        entity.base = self.base(decl);

        for element in field_declarations(decl) {
            let Some(mut field) = extract::field(self.schema, decl, element)? else {
                continue;
            };

            field.kind = classify(self.schema.namespaces(), &field.source_type);

            if !field.is_candidate() && field.primitive.is_none() {
                ty::warn_unknown(split_qname(&field.source_type).1);
            }

            entity.push(field);
        }

        Ok(entity)
    }

    /// The entity `decl` extends, unless it only extends a built-in type.
    fn base(&self, decl: Node<'a, 'input>) -> Option<Name> {
        let base = descendants_until_element(decl)
            .into_iter()
            .filter(|node| is_xs(node, "extension"))
            .find_map(|node| node.attribute("base"))?;

        let (prefix, local) = split_qname(base);
        if local.is_empty() || is_builtin(self.schema.namespaces(), prefix, local) {
            return None;
        }

        Some(Name::new(local))
    }
}

/// Decides whether a field is a relationship candidate from the prefix of
/// its type.
///
/// Types in the target namespace, and unprefixed types, may name another
/// entity. Types in any other namespace are plain fields.
fn classify(namespaces: &Namespaces, source_type: &str) -> FieldKind {
    match split_qname(source_type) {
        (Some(prefix), local) if namespaces.is_target(prefix) => FieldKind::Candidate {
            target: local.to_string(),
        },
        (Some(_), _) => FieldKind::Scalar,
        (None, local) => FieldKind::Candidate {
            target: local.to_string(),
        },
    }
}

fn is_builtin(namespaces: &Namespaces, prefix: Option<&str>, local: &str) -> bool {
    match prefix {
        Some(prefix) => namespaces.is_schema(prefix),
        None => namespaces.schema_prefix().is_none() && Primitive::from_name(local).is_some(),
    }
}
