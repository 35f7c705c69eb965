use std::fmt;

const UNBOUNDED: &str = "unbounded";

/// How often an element may occur inside its owning declaration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Occurrence bounds outside the recognized pairs.
    None,

    /// `minOccurs=0 maxOccurs=1`
    Optional,

    /// `minOccurs=1 maxOccurs=1`
    Mandatory,

    /// `minOccurs=1 maxOccurs=unbounded`
    OneOrMore,

    /// `minOccurs=0 maxOccurs=unbounded`
    Unbounded,
}

impl Cardinality {
    /// Classifies a `(minOccurs, maxOccurs)` pair. Absent bounds default to
    /// `"1"` and `unbounded` is matched without regard to case.
    pub fn from_occurs(min: Option<&str>, max: Option<&str>) -> Cardinality {
        let min = min.map(str::trim).unwrap_or("1");
        let max = max.map(str::trim).unwrap_or("1");
        let unbounded = max.eq_ignore_ascii_case(UNBOUNDED);

        match (min, max) {
            ("0", "1") => Cardinality::Optional,
            ("1", "1") => Cardinality::Mandatory,
            ("0", _) if unbounded => Cardinality::Unbounded,
            ("1", _) if unbounded => Cardinality::OneOrMore,
            _ => Cardinality::None,
        }
    }

    /// Returns `true` for `Unbounded` and `OneOrMore`.
    pub fn is_many(self) -> bool {
        matches!(self, Cardinality::Unbounded | Cardinality::OneOrMore)
    }

    pub fn is_mandatory(self) -> bool {
        matches!(self, Cardinality::Mandatory)
    }

    /// Whether a scalar field with this cardinality must not be null.
    pub fn not_null(self) -> bool {
        self.is_mandatory()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::None => "NONE",
            Cardinality::Optional => "OPTIONAL",
            Cardinality::Mandatory => "MANDATORY",
            Cardinality::OneOrMore => "ONE_OR_MORE",
            Cardinality::Unbounded => "UNBOUNDED",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
