/// Validation constraints collected for a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facets {
    pub unique: bool,
    pub not_null: bool,

    /// Set when the element is prohibited (`maxOccurs="0"`).
    pub null_required: bool,

    pub pattern: Option<String>,
    pub size_min: Option<u64>,
    pub size_max: Option<u64>,

    /// Integer bounds, used by integer-like target types.
    pub min: Option<i128>,
    pub max: Option<i128>,

    /// Decimal bounds as written, used by decimal-like target types.
    pub decimal_min: Option<String>,
    pub decimal_max: Option<String>,

    pub transient: bool,
    pub lob: bool,

    /// The element's `default` value.
    pub default_value: Option<String>,

    /// Trimmed `documentation` text.
    pub comment: Option<String>,
}
