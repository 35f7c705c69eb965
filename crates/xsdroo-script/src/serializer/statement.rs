use super::{Arg, Class, Formatter, ToScript};
use crate::stmt::{self, Statement, Web};

impl ToScript for &Statement {
    fn to_script(self, f: &mut Formatter<'_>) {
        match self {
            Statement::AddField(stmt) => stmt.to_script(f),
            Statement::AddRelation(stmt) => stmt.to_script(f),
            Statement::Banner(stmt) => stmt.to_script(f),
            Statement::Blank => {}
            Statement::Comment(text) => fmt!(f, "# ", text),
            Statement::CreateEntity(stmt) => stmt.to_script(f),
            Statement::CreateRepository(stmt) => stmt.to_script(f),
            Statement::JpaSetup(stmt) => stmt.to_script(f),
            Statement::Project(stmt) => stmt.to_script(f),
            Statement::SeleniumTest(stmt) => stmt.to_script(f),
            Statement::Web(stmt) => stmt.to_script(f),
        }
    }
}

impl ToScript for &stmt::Project {
    fn to_script(self, f: &mut Formatter<'_>) {
        let package = f.serializer.package.to_string();
        fmt!(f, "project --topLevelPackage ", &package);
    }
}

impl ToScript for &stmt::JpaSetup {
    fn to_script(self, f: &mut Formatter<'_>) {
        fmt!(f, "jpa setup --provider HIBERNATE --database ", self.database.as_str());
    }
}

impl ToScript for &stmt::CreateEntity {
    fn to_script(self, f: &mut Formatter<'_>) {
        let active_record = if self.active_record { "true" } else { "false" };
        let extends = self.extends.as_deref().map(Class);

        fmt!(
            f,
            "entity jpa --class ",
            Class(&self.class),
            " --activeRecord ",
            active_record,
            " --testAutomatically",
        );
        if extends.is_some() {
            fmt!(f, " --extends ", extends);
        }
    }
}

impl ToScript for &stmt::CreateRepository {
    fn to_script(self, f: &mut Formatter<'_>) {
        let interface = self.interface();
        fmt!(
            f,
            "repository jpa --interface ",
            Class(&interface),
            " --entity ",
            Class(&self.entity),
        );
    }
}

impl ToScript for &stmt::AddRelation {
    fn to_script(self, f: &mut Formatter<'_>) {
        let command = if self.kind.is_collection() {
            "field set"
        } else {
            "field reference"
        };

        fmt!(
            f,
            command,
            " --fieldName ",
            &self.name,
            " --type ",
            Class(&self.target),
            " --class ",
            Class(&self.class),
            Arg("cardinality", self.kind.cardinality()),
            Arg("mappedBy", self.mapped_by.as_ref()),
        );
    }
}

impl ToScript for &stmt::SeleniumTest {
    fn to_script(self, f: &mut Formatter<'_>) {
        let controller = self.controller();
        fmt!(f, "selenium test --controller ", Class(&controller));
    }
}

impl ToScript for &Web {
    fn to_script(self, f: &mut Formatter<'_>) {
        let package = f.serializer.package.to_string();

        match self {
            Web::JsonAll => fmt!(f, "json all"),
            Web::MvcJsonSetup => fmt!(f, "web mvc json setup"),
            Web::MvcJsonAll => fmt!(f, "web mvc json all --package ", &package),
            Web::MvcSetup => fmt!(f, "web mvc setup"),
            Web::MvcAll => fmt!(f, "web mvc all --package ", &package),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::stmt::{AddRelation, Banner, FieldClauses, Statement, Web};
    use crate::{Database, Serializer};
    use pretty_assertions::assert_eq;
    use xsdroo_core::resolve::RelationKind;
    use xsdroo_core::ty::{self, TargetType};
    use xsdroo_core::Package;

    fn serialize(stmt: impl Into<Statement>) -> String {
        let package = Package::new("com.example.model");
        Serializer::new(&package).serialize(&stmt.into())
    }

    fn relation(kind: RelationKind, mapped_by: Option<&str>) -> AddRelation {
        AddRelation {
            kind,
            name: "items".into(),
            target: "LineItem".into(),
            class: "Order".into(),
            mapped_by: mapped_by.map(String::from),
        }
    }

    #[test]
    fn banners_are_boxed() {
        assert_eq!(
            serialize(Statement::banner("Create the entities")),
            "#######################\n\
             # Create the entities #\n\
             #######################"
        );

        let banner = Banner {
            lines: vec!["ab".into(), "abcd".into()],
        };
        assert_eq!(serialize(banner), "########\n# ab   #\n# abcd #\n########");
    }

    #[test]
    fn project_setup() {
        assert_eq!(
            serialize(Statement::project()),
            "project --topLevelPackage com.example.model"
        );
        assert_eq!(
            serialize(Statement::jpa_setup(Database::Postgres)),
            "jpa setup --provider HIBERNATE --database POSTGRES"
        );
    }

    #[test]
    fn relations() {
        assert_eq!(
            serialize(relation(RelationKind::ManyToMany, Some("orders"))),
            "field set --fieldName items --type com.example.model.LineItem \
             --class com.example.model.Order --cardinality MANY_TO_MANY --mappedBy orders"
        );
        assert_eq!(
            serialize(relation(RelationKind::OneToMany, None)),
            "field set --fieldName items --type com.example.model.LineItem \
             --class com.example.model.Order --cardinality ONE_TO_MANY"
        );
        assert_eq!(
            serialize(relation(RelationKind::ManyToOne, None)),
            "field reference --fieldName items --type com.example.model.LineItem \
             --class com.example.model.Order --cardinality MANY_TO_ONE"
        );
        assert_eq!(
            serialize(relation(RelationKind::Reference, None)),
            "field reference --fieldName items --type com.example.model.LineItem \
             --class com.example.model.Order"
        );
    }

    #[test]
    fn field_clauses_in_order() {
        let stmt = crate::stmt::AddField {
            name: "code".into(),
            class: "Item".into(),
            ty: TargetType::string(),
            clauses: FieldClauses {
                lob: true,
                unique: true,
                not_null: true,
                regexp: Some("[A-Z]+".into()),
                size_max: Some(8),
                value: Some("AAA".into()),
                transient: true,
                ..FieldClauses::default()
            },
        };

        assert_eq!(
            serialize(stmt),
            "field string --fieldName code --class com.example.model.Item --unique --notNull \
             --regexp [A-Z]+ --sizeMax 8 --transient --value AAA --lob"
        );
    }

    #[test]
    fn typed_fields() {
        let stmt = crate::stmt::AddField {
            name: "price".into(),
            class: "Item".into(),
            ty: ty::map("decimal"),
            clauses: FieldClauses {
                decimal_min: Some("0.5".into()),
                decimal_max: Some("100.00".into()),
                ..FieldClauses::default()
            },
        };

        assert_eq!(
            serialize(stmt),
            "field number --type java.math.BigDecimal --fieldName price \
             --class com.example.model.Item --decimalMin 0.5 --decimalMax 100.00"
        );
    }

    #[test]
    fn web_tier() {
        assert_eq!(serialize(Web::JsonAll), "json all");
        assert_eq!(
            serialize(Web::MvcJsonAll),
            "web mvc json all --package com.example.model"
        );
        assert_eq!(serialize(Web::MvcAll), "web mvc all --package com.example.model");
    }
}
