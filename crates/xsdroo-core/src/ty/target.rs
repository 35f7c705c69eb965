use std::fmt;

/// A field type in the scaffolding tool's vocabulary, plus the bounds the
/// type implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetType {
    pub kind: TypeKind,

    /// The `--type` argument, for kinds that take one.
    pub java_type: Option<&'static str>,

    /// Bounds applied when the field declares none.
    pub min: Option<i128>,
    pub max: Option<i128>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    String,
    Boolean,
    Number,
    Date,
    Other,
}

impl TargetType {
    pub const fn new(kind: TypeKind, java_type: Option<&'static str>) -> TargetType {
        TargetType {
            kind,
            java_type,
            min: None,
            max: None,
        }
    }

    pub const fn string() -> TargetType {
        TargetType::new(TypeKind::String, None)
    }

    pub const fn bounded(self, min: Option<i128>, max: Option<i128>) -> TargetType {
        TargetType { min, max, ..self }
    }
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::String => "string",
            TypeKind::Boolean => "boolean",
            TypeKind::Number => "number",
            TypeKind::Date => "date",
            TypeKind::Other => "other",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
