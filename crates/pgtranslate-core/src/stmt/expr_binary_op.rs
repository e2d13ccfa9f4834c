use super::{BinaryOp, Expr, Type};
use crate::storage::TypeMapping;

/// A binary operation between two expressions.
///
/// # Examples
///
/// ```text
/// eq(a, b)        // a = b
/// coalesce(a, b)  // COALESCE(a, b)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    /// The left-hand side expression.
    pub lhs: Box<Expr>,

    /// The operator to apply.
    pub op: BinaryOp,

    /// The right-hand side expression.
    pub rhs: Box<Expr>,

    /// Result type. Comparisons and logical operators produce `Bool`, the
    /// others take the type of their operands.
    pub ty: Type,

    pub type_mapping: Option<TypeMapping>,
}

impl Expr {
    /// Builds a binary operation without resolving a type mapping. The
    /// result type is `Bool` for comparisons and the type of `lhs` (or `rhs`
    /// when `lhs` is an untyped null) otherwise.
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        let ty = if op.is_comparison() || op.is_logical() {
            Type::Bool
        } else if *lhs.ty() == Type::Null {
            rhs.ty().clone()
        } else {
            lhs.ty().clone()
        };

        ExprBinaryOp {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            ty,
            type_mapping: None,
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn coalesce(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Coalesce, rhs)
    }

    /// Returns true if the expression is a binary expression with the equality operator
    pub fn is_eq(&self) -> bool {
        matches!(
            self,
            Self::BinaryOp(ExprBinaryOp {
                op: BinaryOp::Eq,
                ..
            })
        )
    }

    pub fn is_coalesce(&self) -> bool {
        matches!(
            self,
            Self::BinaryOp(ExprBinaryOp {
                op: BinaryOp::Coalesce,
                ..
            })
        )
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
