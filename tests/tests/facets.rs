use tests::*;

const PRODUCT: &str = "com.example.catalog.Product";

fn product_field(rest: &str) -> String {
    format!("field {rest}")
        .replace("{class}", PRODUCT)
}

#[test]
fn named_simple_types_contribute_their_facets() {
    let generated = XsdrooTest::new().generate_fixture("catalog.xsd");

    // `sku` refers to a simple type in the target namespace, so it is
    // rendered with the relationships
    assert_line!(
        generated.full,
        product_field(
            "string --fieldName sku --class {class} --unique --notNull \
             --regexp [A-Z0-9]+ --sizeMin 3 --sizeMax 12"
        )
    );
}

#[test]
fn decimal_bounds() {
    let generated = XsdrooTest::new().generate_fixture("catalog.xsd");

    assert_line!(
        generated.full,
        product_field(
            "number --type java.math.BigDecimal --fieldName price --class {class} \
             --notNull --decimalMin 0.01 --decimalMax 9999.99"
        )
    );
}

#[test]
fn defaults_and_documentation_markers() {
    let generated = XsdrooTest::new().generate_fixture("catalog.xsd");
    let full = &generated.full;

    assert_line!(
        full,
        product_field("number --type int --fieldName rating --class {class} --min 0 --value 3")
    );
    assert_line!(
        full,
        product_field("string --fieldName description --class {class} --lob")
    );
    assert_line!(
        full,
        product_field("boolean --fieldName cached --class {class} --transient")
    );
    assert_line!(
        full,
        product_field("string --fieldName legacy --class {class} --nullRequired")
    );
}

#[test]
fn unique_constraints() {
    let generated = XsdrooTest::new().generate_fixture("catalog.xsd");

    assert_line!(
        generated.full,
        "field string --fieldName vatNumber --class com.example.catalog.Supplier --unique --notNull"
    );
}

const TASKS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:t="http://www.example.com/tasks"
           targetNamespace="http://www.example.com/tasks">
  <xs:complexType name="Task">
    <xs:sequence>
      <xs:element name="timeout">
        <xs:simpleType>
          <xs:restriction base="xs:duration">
            <xs:minInclusive value="PT1S"/>
          </xs:restriction>
        </xs:simpleType>
      </xs:element>
      <xs:element name="budget">
        <xs:simpleType>
          <xs:restriction base="xs:decimal">
            <xs:minInclusive value="99.50"/>
            <xs:maxInclusive value="12345678901234567.89"/>
          </xs:restriction>
        </xs:simpleType>
      </xs:element>
    </xs:sequence>
  </xs:complexType>
</xs:schema>"#;

#[test]
fn duration_bounds_do_not_abort() {
    let generated = XsdrooTest::new().generate(TASKS);

    assert_line!(
        generated.full,
        "field number --type long --fieldName timeout --class com.example.tasks.Task --notNull"
    );
}

#[test]
fn decimal_bounds_are_rendered_as_written() {
    let generated = XsdrooTest::new().generate(TASKS);

    assert_line!(
        generated.full,
        "field number --type java.math.BigDecimal --fieldName budget \
         --class com.example.tasks.Task --notNull --decimalMin 99.50 \
         --decimalMax 12345678901234567.89"
    );
}
