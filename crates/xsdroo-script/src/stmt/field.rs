use super::Statement;
use xsdroo_core::{
    model::{Field, Name},
    ty::TargetType,
};

/// Adds a plain field to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct AddField {
    /// Field name.
    pub name: String,

    /// Unqualified class name of the owning entity.
    pub class: String,

    pub ty: TargetType,

    pub clauses: FieldClauses,
}

/// Optional clauses of a field declaration. Rendered in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldClauses {
    pub unique: bool,
    pub not_null: bool,
    pub null_required: bool,
    pub regexp: Option<String>,
    pub size_min: Option<u64>,
    pub size_max: Option<u64>,
    pub min: Option<i128>,
    pub max: Option<i128>,
    pub decimal_min: Option<String>,
    pub decimal_max: Option<String>,
    pub transient: bool,
    pub value: Option<String>,
    pub lob: bool,
}

impl Statement {
    /// Declares `field` on the entity named `owner`.
    ///
    /// The bounds implied by the field's type apply unless the field
    /// declares its own.
    pub fn add_field(field: &Field, owner: &Name) -> Self {
        let ty = field.target_type();
        let facets = &field.facets;

        AddField {
            name: field.name.ident.clone(),
            class: owner.ident.clone(),
            ty,
            clauses: FieldClauses {
                unique: facets.unique,
                not_null: facets.not_null,
                null_required: facets.null_required,
                regexp: facets.pattern.clone(),
                size_min: facets.size_min,
                size_max: facets.size_max,
                min: facets.min.or(ty.min),
                max: facets.max.or(ty.max),
                decimal_min: facets.decimal_min.clone(),
                decimal_max: facets.decimal_max.clone(),
                transient: facets.transient,
                value: facets.default_value.clone(),
                lob: facets.lob,
            },
        }
        .into()
    }
}

impl From<AddField> for Statement {
    fn from(value: AddField) -> Self {
        Self::AddField(value)
    }
}
