use super::{Expr, Type};
use crate::storage::TypeMapping;

/// Traverses into a JSON document along a path.
///
/// Each step renders with the `->` operator. When `returns_text` is set the
/// final step uses `->>` and extracts text rather than a JSON value.
///
/// # Examples
///
/// ```text
/// customer->>'name'
/// customer->'address'->>'city'
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprJsonTraversal {
    /// The JSON document
    pub expr: Box<Expr>,

    /// Property names or array indices
    pub path: Vec<Expr>,

    pub returns_text: bool,

    pub ty: Type,

    pub type_mapping: Option<TypeMapping>,
}

impl ExprJsonTraversal {
    /// Extends the path by one step, keeping the document.
    pub fn append(&self, step: Expr, returns_text: bool, ty: Type, type_mapping: Option<TypeMapping>) -> Self {
        let mut path = self.path.clone();
        path.push(step);

        Self {
            expr: self.expr.clone(),
            path,
            returns_text,
            ty,
            type_mapping,
        }
    }
}

impl Expr {
    pub fn json_traversal(
        expr: impl Into<Self>,
        path: Vec<Expr>,
        returns_text: bool,
        ty: impl Into<Type>,
        type_mapping: Option<TypeMapping>,
    ) -> Self {
        ExprJsonTraversal {
            expr: Box::new(expr.into()),
            path,
            returns_text,
            ty: ty.into(),
            type_mapping,
        }
        .into()
    }
}

impl From<ExprJsonTraversal> for Expr {
    fn from(value: ExprJsonTraversal) -> Self {
        Self::JsonTraversal(value)
    }
}
