use super::*;
use crate::storage::TypeMapping;

/// Tests if the string expression matches `pattern`.
///
/// `ILIKE` is the PostgreSQL case-insensitive variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub expr: Box<Expr>,

    pub pattern: Box<Expr>,

    /// Single-character escape, `ESCAPE '\'`
    pub escape: Option<Box<Expr>>,

    pub case_insensitive: bool,

    pub type_mapping: Option<TypeMapping>,
}

impl Expr {
    pub fn like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            escape: None,
            case_insensitive: false,
            type_mapping: None,
        }
        .into()
    }

    pub fn ilike(
        expr: impl Into<Self>,
        pattern: impl Into<Self>,
        escape: Option<Expr>,
    ) -> Self {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            escape: escape.map(Box::new),
            case_insensitive: true,
            type_mapping: None,
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
