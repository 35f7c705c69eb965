use super::reserved;

/// A declared name together with the identifier the scaffolding tool sees.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    /// The name exactly as declared in the schema.
    pub raw: String,

    /// The name with hyphens replaced and reserved words escaped.
    pub ident: String,
}

impl Name {
    pub fn new(raw: &str) -> Self {
        Name {
            raw: raw.to_string(),
            ident: escape(raw),
        }
    }
}

/// Turns a declared name into a usable identifier.
///
/// Hyphens become underscores. A name equal, ignoring case, to a Java or SQL
/// reserved word gets a `1` suffix, so `class` becomes `class1`.
pub fn escape(raw: &str) -> String {
    let name = raw.replace('-', "_");

    if reserved::is_reserved(&name) {
        log::warn!("found reserved word `{name}`; converting to `{name}1`");
        format!("{name}1")
    } else {
        name
    }
}
