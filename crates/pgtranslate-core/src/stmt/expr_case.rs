use super::{Expr, Type};
use crate::storage::TypeMapping;

/// A `CASE` expression.
///
/// With an operand, each `WHEN` is compared to the operand for equality.
/// Without one, each `WHEN` is a boolean test. When no clause matches, the
/// result is `else_result`, or null when there is none.
///
/// # Examples
///
/// ```text
/// CASE WHEN b = FALSE THEN 'False' ELSE 'True' END
/// CASE x WHEN 1 THEN 'one' END
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCase {
    pub operand: Option<Box<Expr>>,

    /// Clauses in evaluation order
    pub when_clauses: Vec<CaseWhen>,

    pub else_result: Option<Box<Expr>>,

    pub ty: Type,

    pub type_mapping: Option<TypeMapping>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseWhen {
    pub test: Expr,
    pub result: Expr,
}

impl CaseWhen {
    pub fn new(test: impl Into<Expr>, result: impl Into<Expr>) -> Self {
        Self {
            test: test.into(),
            result: result.into(),
        }
    }
}

impl ExprCase {
    /// Number of branches, counting the `ELSE` branch when present.
    pub fn branch_count(&self) -> usize {
        self.when_clauses.len() + usize::from(self.else_result.is_some())
    }
}

impl Expr {
    /// Builds a searched `CASE` without resolving a type mapping. The result
    /// type is that of the first result that is not an untyped null.
    pub fn case(when_clauses: Vec<CaseWhen>, else_result: Option<Expr>) -> Self {
        let ty = when_clauses
            .iter()
            .map(|when| &when.result)
            .chain(else_result.iter())
            .map(Expr::ty)
            .find(|ty| **ty != Type::Null)
            .cloned()
            .unwrap_or(Type::Null);

        ExprCase {
            operand: None,
            when_clauses,
            else_result: else_result.map(Box::new),
            ty,
            type_mapping: None,
        }
        .into()
    }

    pub fn is_case(&self) -> bool {
        matches!(self, Self::Case(_))
    }
}

impl From<ExprCase> for Expr {
    fn from(value: ExprCase) -> Self {
        Self::Case(value)
    }
}
