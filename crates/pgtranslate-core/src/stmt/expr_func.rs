use super::{Expr, Type};
use crate::storage::TypeMapping;

/// A scalar function call.
///
/// # Examples
///
/// ```text
/// reverse(name)
/// date_part('year', created_at)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: String,

    pub args: Vec<Expr>,

    /// Whether the function can return null.
    pub nullable: bool,

    /// For each argument, whether a null argument makes the result null.
    pub args_propagate_nullability: Vec<bool>,

    pub ty: Type,

    pub type_mapping: Option<TypeMapping>,
}

impl Expr {
    pub fn func(
        name: impl Into<String>,
        args: Vec<Expr>,
        nullable: bool,
        args_propagate_nullability: Vec<bool>,
        ty: impl Into<Type>,
        type_mapping: Option<TypeMapping>,
    ) -> Self {
        debug_assert_eq!(args.len(), args_propagate_nullability.len());

        ExprFunc {
            name: name.into(),
            args,
            nullable,
            args_propagate_nullability,
            ty: ty.into(),
            type_mapping,
        }
        .into()
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Self::Func(_))
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
