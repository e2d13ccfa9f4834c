use super::Type;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A constant value carried by an expression tree or bound as a parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// A single character
    Char(char),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// Decimal number in its canonical text form
    Decimal(String),

    /// String value
    String(String),

    /// UUID value
    Uuid(Uuid),

    /// A date and time without an offset
    DateTime(NaiveDateTime),

    /// A date and time with an offset from UTC
    DateTimeOffset(DateTime<FixedOffset>),

    /// A duration
    TimeSpan(TimeDelta),

    /// A byte array
    Bytes(Vec<u8>),

    /// The label of an enum value
    Enum(String),

    /// A list of values of the same type
    List(Vec<Value>),

    /// A tuple of values
    Record(Vec<Value>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Infers the semantic type of the value. Enum labels do not carry their
    /// enum type name, so their type is an unnamed enum.
    pub fn ty(&self) -> Type {
        match self {
            Self::Null => Type::Null,
            Self::Bool(_) => Type::Bool,
            Self::Char(_) => Type::Char,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::Decimal(_) => Type::Decimal,
            Self::String(_) => Type::String,
            Self::Uuid(_) => Type::Uuid,
            Self::DateTime(_) => Type::DateTime,
            Self::DateTimeOffset(_) => Type::DateTimeOffset,
            Self::TimeSpan(_) => Type::TimeSpan,
            Self::Bytes(_) => Type::Bytes,
            Self::Enum(_) => Type::Enum(String::new()),
            Self::List(items) => Type::array(
                items
                    .iter()
                    .find(|item| !item.is_null())
                    .map(Value::ty)
                    .unwrap_or(Type::Null),
            ),
            Self::Record(fields) => Type::Record(fields.iter().map(Value::ty).collect()),
        }
    }

    /// Feeds the value into `state`. Floats hash by their bit pattern, with
    /// `-0.0` folded into `0.0` so that equal values hash equally.
    pub fn hash_into<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::Null => {}
            Self::Bool(v) => v.hash(state),
            Self::Char(v) => v.hash(state),
            Self::I8(v) => v.hash(state),
            Self::I16(v) => v.hash(state),
            Self::I32(v) => v.hash(state),
            Self::I64(v) => v.hash(state),
            Self::U8(v) => v.hash(state),
            Self::U16(v) => v.hash(state),
            Self::U32(v) => v.hash(state),
            Self::U64(v) => v.hash(state),
            Self::F32(v) => (if *v == 0.0 { 0.0f32 } else { *v }).to_bits().hash(state),
            Self::F64(v) => (if *v == 0.0 { 0.0f64 } else { *v }).to_bits().hash(state),
            Self::Decimal(v) | Self::String(v) | Self::Enum(v) => v.hash(state),
            Self::Uuid(v) => v.hash(state),
            Self::DateTime(v) => v.hash(state),
            Self::DateTimeOffset(v) => v.hash(state),
            Self::TimeSpan(v) => v.hash(state),
            Self::Bytes(v) => v.hash(state),
            Self::List(items) | Self::Record(items) => {
                items.len().hash(state);
                for item in items {
                    item.hash_into(state);
                }
            }
        }
    }
}

macro_rules! impl_value_from {
    ( $( $t:ty => $variant:ident ),+ $(,)? ) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_value_from! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Uuid => Uuid,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeOffset,
    TimeDelta => TimeSpan,
    Vec<u8> => Bytes,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
