use tests::*;
use xsdroo::{Generator, GeneratorConfig, WebOptions};

#[test]
fn generation_is_idempotent() {
    for name in ["person.xsd", "order.xsd", "library.xsd", "catalog.xsd", "contacts.xsd"] {
        let first = XsdrooTest::new().generate_fixture(name);
        let second = XsdrooTest::new().generate_fixture(name);
        assert_eq!(first, second, "{name} generated different scripts");
    }
}

#[test]
fn written_files_are_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let generator = Generator::new(GeneratorConfig::new().web(WebOptions::full()));

    let first = assert_ok!(generator.run(fixture_path("library.xsd"), dir.path().join("a/build.roo")));
    let second = assert_ok!(generator.run(fixture_path("library.xsd"), dir.path().join("b/build.roo")));

    for (a, b) in [(&first.full, &second.full), (&first.update, &second.update)] {
        assert_eq!(
            std::fs::read(a).unwrap(),
            std::fs::read(b).unwrap(),
            "{} differs from {}",
            a.display(),
            b.display()
        );
    }
}

#[test]
fn unresolvable_references_fall_back() {
    let generated = XsdrooTest::new().generate_fixture("contacts.xsd");
    let full = &generated.full;

    // A complex type that is not an entity becomes a plain reference
    assert_line!(full, "# Contact to Address");
    assert_line!(
        full,
        "field reference --fieldName address --type com.example.contacts.Address \
         --class com.example.contacts.Contact"
    );

    // A simple type becomes a plain field, following its restriction
    assert_line!(
        full,
        "field string --fieldName postCode --class com.example.contacts.Contact --notNull --regexp [0-9]{5}"
    );

    // An undeclared type becomes a plain string field
    assert_line!(
        full,
        "field string --fieldName phone --class com.example.contacts.Contact"
    );

    // None of them is declared with the entity's own fields
    let relationships = assert_some!(full.line_index("# Entity Relationships #"));
    let post_code = assert_some!(full.line_index(
        "field string --fieldName postCode --class com.example.contacts.Contact --notNull --regexp [0-9]{5}"
    ));
    assert!(post_code > relationships);
}

#[test]
fn reserved_words_are_escaped() {
    let generated = XsdrooTest::new().generate_fixture("reserved.xsd");
    let full = &generated.full;

    assert_line!(full, "# Class");
    assert_line!(
        full,
        "entity jpa --class com.example.school.Class1 --activeRecord false --testAutomatically"
    );
    assert_line!(
        full,
        "field boolean --fieldName select1 --class com.example.school.Class1 --notNull"
    );
    assert_line!(
        full,
        "field string --fieldName first_name --class com.example.school.Class1"
    );
    assert_line!(
        full,
        "field string --fieldName Package1 --class com.example.school.Class1"
    );
    assert_line!(
        full,
        "repository jpa --interface com.example.school.Class1Repository \
         --entity com.example.school.Class1"
    );
    assert_line!(full, "selenium test --controller com.example.school.Class1Controller");
}
