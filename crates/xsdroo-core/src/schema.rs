mod namespace;
pub use namespace::{split_qname, Namespaces};

mod query;
pub use query::{descendants_until_element, facet_value, field_declarations, first_base};

use crate::{Error, Result};

use roxmltree::{Document, Node, ParsingOptions};

/// The XML Schema namespace.
pub const XS_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// A parsed XML Schema document.
///
/// The loader reads the whole document into a `roxmltree` tree and resolves
/// the two namespace prefixes the generator needs: the prefix bound to the
/// target namespace and the prefix bound to the XML Schema namespace.
#[derive(Debug)]
pub struct Schema<'input> {
    doc: Document<'input>,
    namespaces: Namespaces,
}

impl<'input> Schema<'input> {
    /// Parses a schema document held in memory.
    pub fn parse(text: &'input str) -> Result<Self> {
        let opts = ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = Document::parse_with_options(text, opts)?;

        let root = doc.root_element();
        if root.tag_name().name() != "schema" || root.tag_name().namespace() != Some(XS_NS) {
            return Err(Error::invalid_document(format!(
                "root element must be `schema` in the `{XS_NS}` namespace, found `{}`",
                root.tag_name().name()
            )));
        }

        let namespaces = Namespaces::from_root(&root)?;
        log::debug!(
            "loaded schema; target_namespace={} target_prefix={:?} schema_prefix={:?}",
            namespaces.target_namespace(),
            namespaces.target_prefix(),
            namespaces.schema_prefix()
        );

        Ok(Schema { doc, namespaces })
    }

    /// The `schema` element.
    pub fn root(&self) -> Node<'_, 'input> {
        self.doc.root_element()
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub fn target_namespace(&self) -> &str {
        self.namespaces.target_namespace()
    }

    /// Top-level `complexType` and `element` declarations, in document order.
    pub fn top_level_declarations(&self) -> impl Iterator<Item = Node<'_, 'input>> + '_ {
        self.root()
            .children()
            .filter(|node| is_xs(node, "complexType") || is_xs(node, "element"))
    }

    /// Names of every named `complexType` in the document, in document order.
    pub fn complex_type_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.root()
            .descendants()
            .filter(|node| is_xs(node, "complexType"))
            .filter_map(|node| node.attribute("name"))
    }

    /// The top-level `simpleType` named `name`, if declared.
    pub fn simple_type(&self, name: &str) -> Option<Node<'_, 'input>> {
        self.root()
            .children()
            .find(|node| is_xs(node, "simpleType") && node.attribute("name") == Some(name))
    }

    /// The first `element` declaration named `name`, at any depth.
    pub fn element_named(&self, name: &str) -> Option<Node<'_, 'input>> {
        self.root()
            .descendants()
            .find(|node| is_xs(node, "element") && node.attribute("name") == Some(name))
    }
}

/// Returns `true` if `node` is the XML Schema element `local`.
pub fn is_xs(node: &Node, local: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local
        && node.tag_name().namespace() == Some(XS_NS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std_util::{assert_err, assert_ok};

    const PEOPLE: &str = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:tns="http://www.example.com/people"
           targetNamespace="http://www.example.com/people">
  <xs:simpleType name="PostCode">
    <xs:restriction base="xs:string"/>
  </xs:simpleType>
  <xs:complexType name="Person">
    <xs:sequence>
      <xs:element name="name" type="xs:string"/>
      <xs:element name="address">
        <xs:complexType name="Nested"/>
      </xs:element>
    </xs:sequence>
  </xs:complexType>
  <xs:element name="Company" type="tns:CompanyType"/>
</xs:schema>"#;

    #[test]
    fn parse_resolves_prefixes() {
        let schema = assert_ok!(Schema::parse(PEOPLE));
        assert_eq!(schema.target_namespace(), "http://www.example.com/people");
        assert_eq!(schema.namespaces().target_prefix(), Some("tns"));
        assert_eq!(schema.namespaces().schema_prefix(), Some("xs"));
    }

    #[test]
    fn top_level_declarations_in_document_order() {
        let schema = assert_ok!(Schema::parse(PEOPLE));
        let names: Vec<_> = schema
            .top_level_declarations()
            .filter_map(|node| node.attribute("name"))
            .collect();
        assert_eq!(names, ["Person", "Company"]);
    }

    #[test]
    fn lookups() {
        let schema = assert_ok!(Schema::parse(PEOPLE));
        assert!(schema.simple_type("PostCode").is_some());
        assert!(schema.element_named("address").is_some());
        assert_eq!(
            schema.complex_type_names().collect::<Vec<_>>(),
            ["Person", "Nested"]
        );
    }

    #[test]
    fn rejects_non_schema_root() {
        let err = assert_err!(Schema::parse("<root/>"));
        assert!(err.is_invalid_document());
    }

    #[test]
    fn rejects_malformed_xml() {
        let err = assert_err!(Schema::parse("<xs:schema"));
        assert!(err.is_invalid_document());
    }
}
