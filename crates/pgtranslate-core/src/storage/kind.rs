use super::TypeMapping;

/// Selects the literal, parameter and comparison rules of a mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingKind {
    /// `boolean`
    Boolean,

    /// `smallint`, `integer`, `bigint`
    Integer,

    /// `real`, `double precision`
    Float,

    /// `numeric(p,s)`
    Numeric,

    /// `text`, `character varying(n)`
    Text,

    /// Fixed-width `character(n)`. Values are padded by the database, so
    /// trailing whitespace is not significant.
    Character,

    /// A text search configuration name, `regconfig`
    Regconfig,

    Uuid,

    /// `timestamp without time zone`
    Timestamp,

    /// `timestamp with time zone`
    TimestampTz,

    /// `date`, holding the date part of a timestamp
    Date,

    Interval,

    Bytea,

    Json,

    Jsonb,

    /// A user-defined PostgreSQL enum, carrying the enum type name
    Enum(String),

    /// An array of the element mapping
    Array(TypeMapping),

    /// A range over the element mapping
    Range(TypeMapping),

    /// A multirange over the range mapping, PostgreSQL 14 and later
    Multirange(TypeMapping),
}

impl MappingKind {
    /// The mapping of the elements for container kinds.
    pub fn element(&self) -> Option<&TypeMapping> {
        match self {
            Self::Array(element) | Self::Range(element) | Self::Multirange(element) => {
                Some(element)
            }
            _ => None,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::Jsonb)
    }

    pub fn is_text_like(&self) -> bool {
        matches!(self, Self::Text | Self::Character)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}
