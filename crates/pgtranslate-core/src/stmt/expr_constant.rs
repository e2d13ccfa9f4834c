use super::{Expr, Type, Value};
use crate::storage::TypeMapping;

/// A constant value, rendered through its type mapping as a literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprConstant {
    pub value: Value,

    pub ty: Type,

    pub type_mapping: Option<TypeMapping>,
}

impl Expr {
    /// A constant whose type is inferred from the value and whose mapping is
    /// left for the host to infer.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        let ty = value.ty();

        ExprConstant {
            value,
            ty,
            type_mapping: None,
        }
        .into()
    }

    /// An untyped null constant.
    pub fn null() -> Self {
        Self::constant(Value::Null)
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

impl From<ExprConstant> for Expr {
    fn from(value: ExprConstant) -> Self {
        Self::Constant(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::constant(value)
    }
}
