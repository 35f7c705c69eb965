use tests::*;

#[test]
fn person_with_mandatory_and_bounded_fields() {
    let generated = XsdrooTest::new().generate_fixture("person.xsd");
    let full = &generated.full;

    let entity = "entity jpa --class com.example.people.Person --activeRecord false --testAutomatically";
    let name = "field string --fieldName name --class com.example.people.Person --notNull";
    let age =
        "field number --type int --fieldName age --class com.example.people.Person --min 0 --max 200";

    assert_line!(full, entity);
    assert_line!(full, name);
    assert_line!(full, age);

    // The entity is declared before its fields, in declaration order
    let entity_at = assert_some!(full.line_index(entity));
    let name_at = assert_some!(full.line_index(name));
    let age_at = assert_some!(full.line_index(age));
    assert_eq!(name_at, entity_at + 1);
    assert_eq!(age_at, entity_at + 2);
}

#[test]
fn order_and_line_item_are_one_to_many_and_many_to_one() {
    let generated = XsdrooTest::new().generate_fixture("order.xsd");
    let full = &generated.full;

    // `Order` is a reserved word
    assert_line!(
        full,
        "entity jpa --class com.example.shop.Order1 --activeRecord false --testAutomatically"
    );

    assert_eq!(
        full.commands_starting_with("field set"),
        ["field set --fieldName items --type com.example.shop.LineItem \
          --class com.example.shop.Order1 --cardinality ONE_TO_MANY"]
    );
    assert_eq!(
        full.commands_starting_with("field reference"),
        ["field reference --fieldName order1 --type com.example.shop.Order1 \
          --class com.example.shop.LineItem --cardinality MANY_TO_ONE"]
    );
    assert!(!full.contains("MANY_TO_MANY"));

    assert_line!(full, "# Order to LineItem [One to Many]");
    assert_line!(full, "# LineItem to Order [Many to One]");
}

#[test]
fn mutual_unbounded_references_are_one_many_to_many() {
    let generated = XsdrooTest::new().generate_fixture("library.xsd");

    for script in [&generated.full, &generated.update] {
        let many_to_many: Vec<_> = script
            .commands()
            .into_iter()
            .filter(|line| line.contains("--cardinality MANY_TO_MANY"))
            .collect();

        assert_eq!(
            many_to_many,
            ["field set --fieldName books --type com.example.library.Book \
              --class com.example.library.Author --cardinality MANY_TO_MANY --mappedBy authors"]
        );
        assert_line!(script, "# Author to Book [Many to Many]");
        assert_no_line!(script, "# Book to Author [Many to Many]");
    }
}

#[test]
fn unsigned_byte_has_default_bounds() {
    let generated = XsdrooTest::new().generate_fixture("sensor.xsd");

    assert_line!(
        generated.full,
        "field number --type byte --fieldName brightness \
         --class com.example.telemetry.Reading --notNull --min 0 --max 255"
    );
}
