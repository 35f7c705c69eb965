use super::unique;
use crate::model::{Cardinality, Facets, Field, FieldKind, Name};
use crate::schema::{descendants_until_element, facet_value, first_base, is_xs, split_qname};
use crate::ty::{Numeric, Primitive};
use crate::{Error, Result, Schema};

use roxmltree::Node;
use std::str::FromStr;

/// Documentation containing this marker makes a field unique.
const KEY_MARKER: &str = "key";

/// Named simple types are followed at most this deep.
const MAX_TYPE_DEPTH: usize = 32;

/// Converts one element declaration of `owner` into a [`Field`].
///
/// Returns `Ok(None)` for an element with neither a `name` nor a `ref`. The
/// field's kind is left as [`FieldKind::Scalar`]; the builder classifies it.
pub(super) fn field<'a, 'input>(
    schema: &'a Schema<'input>,
    owner: Node<'a, 'input>,
    element: Node<'a, 'input>,
) -> Result<Option<Field>> {
    let reference = element.attribute("ref");
    let Some(name) = element
        .attribute("name")
        .or_else(|| reference.map(|r| split_qname(r).1))
        .filter(|name| !name.is_empty())
    else {
        return Ok(None);
    };

    let source_type = element
        .attribute("type")
        .or(reference)
        .or_else(|| first_base(element))
        .ok_or_else(|| Error::undetermined_type(name))?;

    let (primitive, inherited) = resolve_type(schema, source_type);

    let mut raw = RawFacets::read(element);
    raw.fill_from(&inherited);
    let mut facets = raw.convert(name, primitive)?;

    let max_occurs = element.attribute("maxOccurs");
    let cardinality = Cardinality::from_occurs(element.attribute("minOccurs"), max_occurs);

    facets.not_null = cardinality.not_null();
    facets.null_required = max_occurs.map(str::trim) == Some("0");
    facets.default_value = element.attribute("default").map(String::from);

    if let Some(text) = documentation(element) {
        apply_markers(&mut facets, &text);
        facets.comment = Some(text);
    }

    if unique::is_declared_unique(schema, owner, element) {
        facets.unique = true;
    }

    let mut field = Field::new(Name::new(name), source_type, FieldKind::Scalar);
    field.primitive = primitive;
    field.cardinality = cardinality;
    field.facets = facets;

    Ok(Some(field))
}

/// Follows named simple types down to a built-in, collecting their facets
/// on the way.
fn resolve_type<'a>(
    schema: &'a Schema<'_>,
    source_type: &'a str,
) -> (Option<Primitive>, RawFacets<'a>) {
    let namespaces = schema.namespaces();
    let mut inherited = RawFacets::default();
    let mut current = source_type;

    for _ in 0..MAX_TYPE_DEPTH {
        let (prefix, local) = split_qname(current);

        if prefix.map_or(true, |prefix| namespaces.is_target(prefix)) {
            if let Some(simple) = schema.simple_type(local) {
                inherited.fill_from(&RawFacets::read(simple));

                match first_base(simple) {
                    Some(base) => {
                        current = base;
                        continue;
                    }
                    None => return (None, inherited),
                }
            }
        }

        let builtin = match prefix {
            Some(prefix) => namespaces.is_schema(prefix),
            None => true,
        };
        return (builtin.then(|| Primitive::from_name(local)).flatten(), inherited);
    }

    log::warn!("simple type chain of `{source_type}` is too deep; using string");
    (None, inherited)
}

/// Facet values as written in the schema.
#[derive(Debug, Default, Clone, Copy)]
struct RawFacets<'a> {
    pattern: Option<&'a str>,
    min_inclusive: Option<&'a str>,
    min_exclusive: Option<&'a str>,
    max_inclusive: Option<&'a str>,
    max_exclusive: Option<&'a str>,
    length: Option<&'a str>,
    min_length: Option<&'a str>,
    max_length: Option<&'a str>,
}

impl<'a> RawFacets<'a> {
    fn read(node: Node<'a, '_>) -> RawFacets<'a> {
        RawFacets {
            pattern: facet_value(node, "pattern"),
            min_inclusive: facet_value(node, "minInclusive"),
            min_exclusive: facet_value(node, "minExclusive"),
            max_inclusive: facet_value(node, "maxInclusive"),
            max_exclusive: facet_value(node, "maxExclusive"),
            length: facet_value(node, "length"),
            min_length: facet_value(node, "minLength"),
            max_length: facet_value(node, "maxLength"),
        }
    }

    fn fill_from(&mut self, other: &RawFacets<'a>) {
        self.pattern = self.pattern.or(other.pattern);
        self.min_inclusive = self.min_inclusive.or(other.min_inclusive);
        self.min_exclusive = self.min_exclusive.or(other.min_exclusive);
        self.max_inclusive = self.max_inclusive.or(other.max_inclusive);
        self.max_exclusive = self.max_exclusive.or(other.max_exclusive);
        self.length = self.length.or(other.length);
        self.min_length = self.min_length.or(other.min_length);
        self.max_length = self.max_length.or(other.max_length);
    }

    /// Parses the facet values for a field of type `primitive`.
    ///
    /// Numeric bounds are only read for integer-like and decimal-like types.
    /// Inclusive bounds win over exclusive ones.
    fn convert(&self, element: &str, primitive: Option<Primitive>) -> Result<Facets> {
        let mut facets = Facets {
            pattern: self.pattern.map(String::from),
            ..Facets::default()
        };

        facets.size_min = self
            .min_length
            .map(|v| ("minLength", v))
            .or(self.length.map(|v| ("length", v)))
            .map(|(facet, value)| parse(element, facet, value))
            .transpose()?;
        facets.size_max = self
            .max_length
            .map(|v| ("maxLength", v))
            .or(self.length.map(|v| ("length", v)))
            .map(|(facet, value)| parse(element, facet, value))
            .transpose()?;

        let min = self
            .min_inclusive
            .map(|v| ("minInclusive", v))
            .or(self.min_exclusive.map(|v| ("minExclusive", v)));
        let max = self
            .max_inclusive
            .map(|v| ("maxInclusive", v))
            .or(self.max_exclusive.map(|v| ("maxExclusive", v)));

        match primitive.map(Primitive::numeric).unwrap_or(Numeric::None) {
            Numeric::Integer => {
                facets.min = min.map(|(f, v)| parse(element, f, v)).transpose()?;
                facets.max = max.map(|(f, v)| parse(element, f, v)).transpose()?;
            }
            Numeric::Decimal => {
                facets.decimal_min = min.map(|(f, v)| decimal(element, f, v)).transpose()?;
                facets.decimal_max = max.map(|(f, v)| decimal(element, f, v)).transpose()?;
            }
            Numeric::None => {}
        }

        Ok(facets)
    }
}

fn parse<T: FromStr>(element: &str, facet: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_facet(element, facet, value))
}

/// Checks that `value` is a number and keeps its trimmed text.
fn decimal(element: &str, facet: &str, value: &str) -> Result<String> {
    parse::<f64>(element, facet, value)?;
    Ok(value.trim().to_string())
}

/// The trimmed text of the element's first `documentation` annotation.
fn documentation(element: Node<'_, '_>) -> Option<String> {
    let node = descendants_until_element(element)
        .into_iter()
        .find(|node| is_xs(node, "documentation"))?;

    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let text = text.trim();

    (!text.is_empty()).then(|| text.to_string())
}

fn apply_markers(facets: &mut Facets, text: &str) {
    if text.to_lowercase().contains(KEY_MARKER) {
        facets.unique = true;
    }

    let has_word = |word: &str| {
        text.split(|c: char| !c.is_alphanumeric())
            .any(|w| w.eq_ignore_ascii_case(word))
    };
    facets.transient |= has_word("transient");
    facets.lob |= has_word("lob");
}
