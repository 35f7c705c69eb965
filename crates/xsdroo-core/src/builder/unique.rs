use crate::schema::{is_xs, split_qname, Namespaces};
use crate::Schema;

use roxmltree::Node;

/// Returns `true` if `owner` declares a `unique` or `key` constraint that
/// selects `owner` itself and names `element` as its field.
///
/// Selectors outside the target namespace are skipped.
pub(super) fn is_declared_unique<'a, 'input>(
    schema: &'a Schema<'input>,
    owner: Node<'a, 'input>,
    element: Node<'a, 'input>,
) -> bool {
    let Some(name) = element.attribute("name") else {
        return false;
    };

    owner
        .children()
        .filter(|node| is_xs(node, "unique") || is_xs(node, "key"))
        .any(|constraint| {
            let (Some(selector), Some(field)) = (
                xpath(constraint, "selector"),
                xpath(constraint, "field"),
            ) else {
                return false;
            };

            let Some(selected) = selected_name(schema.namespaces(), selector) else {
                return false;
            };

            schema.element_named(selected) == Some(owner) && field_name(field) == Some(name)
        })
}

fn xpath<'a>(constraint: Node<'a, '_>, child: &str) -> Option<&'a str> {
    constraint
        .children()
        .find(|node| is_xs(node, child))
        .and_then(|node| node.attribute("xpath"))
}

/// The element name a selector picks, if it is in the target namespace.
fn selected_name<'x>(namespaces: &Namespaces, selector: &'x str) -> Option<&'x str> {
    match split_qname(selector.trim()) {
        (Some(prefix), local) if namespaces.is_target(prefix) => Some(local),
        (None, local) if namespaces.target_prefix().is_none() => Some(local),
        _ => None,
    }
}

/// The child element a field path names.
///
/// Only single-step paths, optionally prefixed with `./`, name a child of the
/// selected element.
fn field_name(path: &str) -> Option<&str> {
    let path = path.trim();
    let step = path.strip_prefix("./").unwrap_or(path);

    if step.is_empty() || step.contains(['/', '@', '[']) {
        return None;
    }

    Some(split_qname(step).1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field_declarations;

    const XSD: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
                                    xmlns:tns="urn:people" xmlns:other="urn:other"
                                    targetNamespace="urn:people">
      <xs:element name="Person">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="email" type="xs:string"/>
            <xs:element name="nickname" type="xs:string"/>
            <xs:element name="phone" type="xs:string"/>
            <xs:element name="street" type="xs:string"/>
          </xs:sequence>
        </xs:complexType>
        <xs:unique name="other-first">
          <xs:selector xpath="other:Person"/>
          <xs:field xpath="other:phone"/>
        </xs:unique>
        <xs:unique name="by-email">
          <xs:selector xpath="tns:Person"/>
          <xs:field xpath="tns:email"/>
        </xs:unique>
        <xs:unique name="by-address-street">
          <xs:selector xpath="tns:Person"/>
          <xs:field xpath="tns:address/tns:street"/>
        </xs:unique>
        <xs:key name="by-nickname">
          <xs:selector xpath="tns:Person"/>
          <xs:field xpath="./tns:nickname"/>
        </xs:key>
      </xs:element>
    </xs:schema>"#;

    #[test]
    fn unique_and_key_constraints() {
        let schema = Schema::parse(XSD).unwrap();
        let person = schema.top_level_declarations().next().unwrap();
        let fields = field_declarations(person);

        assert!(is_declared_unique(&schema, person, fields[0]));
        assert!(is_declared_unique(&schema, person, fields[1]));
        assert!(!is_declared_unique(&schema, person, fields[2]));
        assert!(!is_declared_unique(&schema, person, fields[3]));
    }

    #[test]
    fn field_paths() {
        assert_eq!(field_name("tns:email"), Some("email"));
        assert_eq!(field_name(" ./tns:nickname "), Some("nickname"));
        assert_eq!(field_name("name"), Some("name"));
        assert_eq!(field_name("tns:address/tns:street"), None);
        assert_eq!(field_name(".//tns:street"), None);
        assert_eq!(field_name("@id"), None);
        assert_eq!(field_name("./"), None);
    }
}
