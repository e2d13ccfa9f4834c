/// The semantic value type of an expression.
///
/// This is the type the host works with (what a column materializes to),
/// as opposed to the store type of a [`TypeMapping`](crate::TypeMapping),
/// which is how PostgreSQL stores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// A single character
    Char,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// Arbitrary precision decimal
    Decimal,

    /// String type
    String,

    /// 128-bit universally unique identifier
    Uuid,

    /// A date and time without an offset
    DateTime,

    /// A date and time with an offset from UTC
    DateTimeOffset,

    /// A duration
    TimeSpan,

    /// A byte array
    Bytes,

    /// A named enumeration. The name is the PostgreSQL enum type.
    Enum(String),

    /// An array of a single type
    Array(Box<Type>),

    /// A range over a single type
    Range(Box<Type>),

    /// A structured JSON document
    Json,

    /// A fixed-length tuple where each item can have a different type.
    Record(Vec<Type>),

    /// The type of an untyped null.
    Null,
}

impl Type {
    pub fn array(ty: impl Into<Self>) -> Self {
        Self::Array(Box::new(ty.into()))
    }

    pub fn range(ty: impl Into<Self>) -> Self {
        Self::Range(Box::new(ty.into()))
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    /// Returns the element type of an array or range.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Self::Array(element) | Self::Range(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    pub fn is_numeric(&self) -> bool {
        use Type::*;

        matches!(
            self,
            I8 | I16 | I32 | I64 | U8 | U16 | U32 | U64 | F32 | F64 | Decimal
        )
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}
