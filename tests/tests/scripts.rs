use pretty_assertions::assert_eq;
use tests::*;
use xsdroo::{Database, Generator, GeneratorConfig, WebOptions};

#[test]
fn update_script_only_updates_the_model() {
    let generated = XsdrooTest::new().generate_fixture("person.xsd");

    assert_eq!(
        generated.update,
        "\
##########################################
# This script only contains the entities #
# and should be run against an existing  #
# roo projects to update any changes in  #
# the model                              #
##########################################
#######################
# Update the entities #
#######################

# Person
entity jpa --class com.example.people.Person --activeRecord false --testAutomatically
field string --fieldName name --class com.example.people.Person --notNull
field number --type int --fieldName age --class com.example.people.Person --min 0 --max 200
repository jpa --interface com.example.people.PersonRepository --entity com.example.people.Person

########################
# Entity Relationships #
########################

json all

"
    );
}

#[test]
fn full_script_sections_in_order() {
    let config = GeneratorConfig::new()
        .database(Database::Mysql)
        .web(WebOptions::full());
    let generated = XsdrooTest::with_config(config).generate_fixture("order.xsd");
    let full = &generated.full;

    let order = [
        "# Project Initialisation #",
        "project --topLevelPackage com.example.shop",
        "jpa setup --provider HIBERNATE --database MYSQL",
        "# Create the entities #",
        "# Order",
        "# LineItem",
        "# Entity Relationships #",
        "# Web Tier #",
        "json all",
        "web mvc json setup",
        "web mvc json all --package com.example.shop",
        "web mvc setup",
        "web mvc all --package com.example.shop",
        "# Add Selenium Tests #",
        "selenium test --controller com.example.shop.Order1Controller",
        "selenium test --controller com.example.shop.LineItemController",
    ];

    let indices: Vec<_> = order
        .iter()
        .map(|line| assert_some!(full.line_index(line), "missing `{line}`"))
        .collect();

    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);
    assert!(full.ends_with("LineItemController\n"));
}

#[test]
fn package_override_applies_everywhere() {
    let config = GeneratorConfig::new().package("org.acme.people");
    let generated = XsdrooTest::with_config(config).generate_fixture("person.xsd");

    for script in [&generated.full, &generated.update] {
        assert!(!script.contains("com.example.people"));
    }
    assert_line!(generated.full, "project --topLevelPackage org.acme.people");
}

#[test]
fn run_writes_update_script_beside_target() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("scripts/person.roo");

    let written = assert_ok!(Generator::default().run(fixture_path("person.xsd"), &target));

    assert_eq!(written.full, target);
    assert_eq!(written.update, dir.path().join("scripts/personUpdate.roo"));

    let expected = XsdrooTest::new().generate_fixture("person.xsd");
    assert_eq!(std::fs::read_to_string(&written.full).unwrap(), expected.full);
    assert_eq!(std::fs::read_to_string(&written.update).unwrap(), expected.update);
}
