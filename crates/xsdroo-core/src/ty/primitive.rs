use super::{TargetType, TypeKind};

/// XML Schema built-in types known to the mapper.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    AnyUri,
    Base64Binary,
    Boolean,
    Byte,
    Date,
    DateTime,
    Decimal,
    Double,
    Duration,
    Float,
    GDay,
    GMonth,
    GMonthDay,
    GYear,
    GYearMonth,
    HexBinary,
    Id,
    IdRef,
    IdRefs,
    Int,
    Integer,
    Language,
    Long,
    Name,
    NcName,
    NegativeInteger,
    NmToken,
    NmTokens,
    NonNegativeInteger,
    NonPositiveInteger,
    NormalizedString,
    PositiveInteger,
    QName,
    Short,
    String,
    Time,
    Token,
    UnsignedByte,
    UnsignedInt,
    UnsignedLong,
    UnsignedShort,
}

/// How numeric facet values of a type are read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Numeric {
    Integer,
    Decimal,
    None,
}

impl Primitive {
    pub const ALL: [Primitive; 41] = [
        Primitive::AnyUri,
        Primitive::Base64Binary,
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Date,
        Primitive::DateTime,
        Primitive::Decimal,
        Primitive::Double,
        Primitive::Duration,
        Primitive::Float,
        Primitive::GDay,
        Primitive::GMonth,
        Primitive::GMonthDay,
        Primitive::GYear,
        Primitive::GYearMonth,
        Primitive::HexBinary,
        Primitive::Id,
        Primitive::IdRef,
        Primitive::IdRefs,
        Primitive::Int,
        Primitive::Integer,
        Primitive::Language,
        Primitive::Long,
        Primitive::Name,
        Primitive::NcName,
        Primitive::NegativeInteger,
        Primitive::NmToken,
        Primitive::NmTokens,
        Primitive::NonNegativeInteger,
        Primitive::NonPositiveInteger,
        Primitive::NormalizedString,
        Primitive::PositiveInteger,
        Primitive::QName,
        Primitive::Short,
        Primitive::String,
        Primitive::Time,
        Primitive::Token,
        Primitive::UnsignedByte,
        Primitive::UnsignedInt,
        Primitive::UnsignedLong,
        Primitive::UnsignedShort,
    ];

    /// Looks up a built-in by its local name. Names are case sensitive.
    pub fn from_name(name: &str) -> Option<Primitive> {
        Primitive::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The type's name in the XML Schema namespace.
    pub fn name(self) -> &'static str {
        use Primitive::*;

        match self {
            AnyUri => "anyURI",
            Base64Binary => "base64Binary",
            Boolean => "boolean",
            Byte => "byte",
            Date => "date",
            DateTime => "dateTime",
            Decimal => "decimal",
            Double => "double",
            Duration => "duration",
            Float => "float",
            GDay => "gDay",
            GMonth => "gMonth",
            GMonthDay => "gMonthDay",
            GYear => "gYear",
            GYearMonth => "gYearMonth",
            HexBinary => "hexBinary",
            Id => "ID",
            IdRef => "IDREF",
            IdRefs => "IDREFS",
            Int => "int",
            Integer => "integer",
            Language => "language",
            Long => "long",
            Name => "Name",
            NcName => "NCName",
            NegativeInteger => "negativeInteger",
            NmToken => "NMTOKEN",
            NmTokens => "NMTOKENS",
            NonNegativeInteger => "nonNegativeInteger",
            NonPositiveInteger => "nonPositiveInteger",
            NormalizedString => "normalizedString",
            PositiveInteger => "positiveInteger",
            QName => "QName",
            Short => "short",
            String => "string",
            Time => "time",
            Token => "token",
            UnsignedByte => "unsignedByte",
            UnsignedInt => "unsignedInt",
            UnsignedLong => "unsignedLong",
            UnsignedShort => "unsignedShort",
        }
    }

    pub fn target_type(self) -> TargetType {
        use Primitive::*;

        let number = |java_type| TargetType::new(TypeKind::Number, Some(java_type));
        let calendar = TargetType::new(TypeKind::Date, Some("java.util.Calendar"));

        match self {
            AnyUri => TargetType::new(TypeKind::Other, Some("java.net.URI")),
            Base64Binary | GDay | GMonth | GMonthDay | GYear | GYearMonth | HexBinary | Id
            | IdRef | IdRefs | Language | Name | NcName | NmToken | NmTokens
            | NormalizedString | QName | String | Token => TargetType::string(),
            Boolean => TargetType::new(TypeKind::Boolean, None),
            Byte => number("byte"),
            Date | DateTime | Time => calendar,
            Decimal => number("java.math.BigDecimal"),
            Double => number("double"),
            Duration => number("long"),
            Float => number("float"),
            Int => number("int"),
            Integer => number("java.lang.Integer"),
            Long => number("long"),
            Short => number("short"),
            NegativeInteger => number("int").bounded(None, Some(-1)),
            NonNegativeInteger => number("int").bounded(Some(0), None),
            NonPositiveInteger => number("int").bounded(None, Some(0)),
            PositiveInteger => number("int").bounded(Some(1), None),
            UnsignedByte => number("byte").bounded(Some(0), Some(255)),
            UnsignedInt => number("int").bounded(Some(0), Some(2147483647)),
            UnsignedLong => number("long").bounded(Some(0), Some(18446744073709551615)),
            UnsignedShort => number("short").bounded(Some(0), Some(65535)),
        }
    }

    pub fn numeric(self) -> Numeric {
        use Primitive::*;

        match self {
            Byte | Int | Integer | Long | Short | NegativeInteger
            | NonNegativeInteger | NonPositiveInteger | PositiveInteger | UnsignedByte
            | UnsignedInt | UnsignedLong | UnsignedShort => Numeric::Integer,
            Decimal | Double | Float => Numeric::Decimal,
            _ => Numeric::None,
        }
    }
}
