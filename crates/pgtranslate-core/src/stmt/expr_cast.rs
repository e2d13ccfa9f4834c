use super::*;
use crate::storage::TypeMapping;

/// Converts an expression to a different type, `CAST(x AS text)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    /// Expression to cast
    pub expr: Box<Expr>,

    /// Type to cast to
    pub ty: Type,

    /// Mapping of the target type. The store type is what the cast names.
    pub type_mapping: Option<TypeMapping>,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: impl Into<Type>, type_mapping: Option<TypeMapping>) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            ty: ty.into(),
            type_mapping,
        }
        .into()
    }

    pub fn is_cast(&self) -> bool {
        matches!(self, Self::Cast(_))
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
