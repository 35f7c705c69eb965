//! Decides which candidate fields are relationships, and of what kind.
//!
//! Resolution runs over a complete [`Model`]. For every candidate field `F`
//! of an entity `E` referring to `T`, the reciprocal field is the first
//! candidate on `T` referring back to `E`. The pair of cardinalities then
//! decides the relationship:
//!
//! | `F`         | reciprocal  | relationship          |
//! |-------------|-------------|-----------------------|
//! | many        | many        | many-to-many          |
//! | many        | other       | one-to-many           |
//! | mandatory   | many        | many-to-one           |
//! | mandatory   | mandatory   | one-to-one            |
//! | anything else             || plain reference       |
//!
//! where "many" is `UNBOUNDED` or `ONE_OR_MORE`. A field whose target is not
//! modeled becomes a plain reference when a complex type of that name exists
//! and a scalar field otherwise.

mod relation;
pub use relation::{Relation, RelationKind};

mod state;
pub use state::Pending;
use state::State;

use crate::model::{Cardinality, Entity, Field, FieldId, Model, Name};
use crate::ty;

/// The outcome of resolving every candidate field of a model.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Relationships and re-classified scalar fields, in emission order.
    pub resolved: Vec<Resolved>,

    /// Many-to-one sides whose counterpart never appeared.
    pub pending: Vec<Pending>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Relation(Relation),

    /// A candidate field that turned out to be a plain scalar.
    Scalar(FieldId),
}

struct Resolver<'a> {
    model: &'a Model,
    state: State,
    resolved: Vec<Resolved>,
}

impl Resolution {
    pub fn from_model(model: &Model) -> Resolution {
        Resolver::new(model).resolve()
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.resolved.iter().filter_map(|resolved| match resolved {
            Resolved::Relation(relation) => Some(relation),
            Resolved::Scalar(_) => None,
        })
    }

    pub fn scalars(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.resolved.iter().filter_map(|resolved| match resolved {
            Resolved::Scalar(field) => Some(*field),
            Resolved::Relation(_) => None,
        })
    }
}

impl<'a> Resolver<'a> {
    fn new(model: &'a Model) -> Self {
        Resolver {
            model,
            state: State::default(),
            resolved: vec![],
        }
    }

    fn resolve(mut self) -> Resolution {
        let model = self.model;

        for entity in model.entities() {
            for field in entity.candidates() {
                self.resolve_field(entity, field);
            }
        }

        let pending = self.state.into_pending();
        for entry in &pending {
            log::debug!(
                "many-to-one `{}.{}` has no one-to-many counterpart on `{}`",
                entry.source,
                entry.field,
                entry.owner
            );
        }

        Resolution {
            resolved: self.resolved,
            pending,
        }
    }

    fn resolve_field(&mut self, entity: &Entity, field: &Field) {
        let Some(target_name) = field.target() else {
            return;
        };
        let source_name = entity.name.raw.as_str();
        let model = self.model;

        let Some(target) = model.entity_by_name(target_name) else {
            self.unmodeled(field, target_name);
            return;
        };

        let reciprocal = target
            .candidates()
            .find(|candidate| candidate.target() == Some(source_name));
        let reciprocal_cardinality = reciprocal.map(|f| f.cardinality);
        let reciprocal_many = reciprocal_cardinality.is_some_and(Cardinality::is_many);

        let kind = if field.cardinality.is_many() && reciprocal_many {
            if !self.state.claim_many_to_many(source_name, target_name) {
                return;
            }
            RelationKind::ManyToMany
        } else if field.cardinality.is_many() {
            if let Some(back) = self.state.take_deferred(source_name, target_name) {
                log::debug!("`{target_name}.{back}` completes `{source_name}.{}`", field.name.raw);
            }
            RelationKind::OneToMany
        } else if field.cardinality.is_mandatory() && reciprocal_many {
            if self.state.emitted(target_name, source_name).is_none() {
                self.state
                    .defer(target_name, source_name, &field.name.ident);
            }
            RelationKind::ManyToOne
        } else if field.cardinality.is_mandatory()
            && reciprocal_cardinality == Some(Cardinality::Mandatory)
        {
            RelationKind::OneToOne
        } else {
            RelationKind::Reference
        };

        let mapped_by = match (kind, reciprocal) {
            (RelationKind::ManyToMany, Some(reciprocal)) => Some(reciprocal.name.ident.clone()),
            _ => None,
        };

        self.emit(field, kind, target.name.clone(), mapped_by);
    }

    /// A candidate whose target is not a modeled entity.
    fn unmodeled(&mut self, field: &Field, target_name: &str) {
        if self.model.is_known_complex_type(target_name) {
            self.emit(field, RelationKind::Reference, Name::new(target_name), None);
            return;
        }

        if field.primitive.is_none() {
            ty::warn_unknown(target_name);
        }

        if let Some(id) = field.id() {
            self.resolved.push(Resolved::Scalar(id));
        }
    }

    fn emit(&mut self, field: &Field, kind: RelationKind, target: Name, mapped_by: Option<String>) {
        let Some(id) = field.id() else {
            return;
        };
        let model = self.model;
        let source = model.entity(id.entity);

        self.state.record(&source.name.raw, &target.raw, kind);
        self.resolved.push(Resolved::Relation(Relation {
            kind,
            source: source.id,
            field: id,
            target,
            mapped_by,
        }));
    }
}
