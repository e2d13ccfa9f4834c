use super::{Expr, Type};

use std::ops;

/// A row value, `(a, b)`.
///
/// Groups several expressions into one value. Row values compare
/// lexicographically and are how a two-column selector reaches an
/// aggregate such as `jsonb_object_agg(key, value)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprRowValue {
    /// The values in positional order.
    pub values: Vec<Expr>,

    /// Always a `Type::Record` of the value types.
    pub ty: Type,
}

impl Expr {
    pub fn row_value<T>(values: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        Self::RowValue(ExprRowValue::from_vec(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn is_row_value(&self) -> bool {
        matches!(self, Self::RowValue(_))
    }

    /// Number of values when the expression is a row value.
    pub fn row_value_len(&self) -> Option<usize> {
        match self {
            Self::RowValue(row) => Some(row.len()),
            _ => None,
        }
    }
}

impl ExprRowValue {
    pub fn from_vec(values: Vec<Expr>) -> Self {
        let ty = Type::Record(values.iter().map(|value| value.ty().clone()).collect());
        Self { values, ty }
    }
}

impl ops::Deref for ExprRowValue {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.values[..]
    }
}

impl ops::Index<usize> for ExprRowValue {
    type Output = Expr;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl IntoIterator for ExprRowValue {
    type Item = Expr;
    type IntoIter = std::vec::IntoIter<Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExprRowValue {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl From<ExprRowValue> for Expr {
    fn from(value: ExprRowValue) -> Self {
        Self::RowValue(value)
    }
}

impl<E1, E2> From<(E1, E2)> for ExprRowValue
where
    E1: Into<Expr>,
    E2: Into<Expr>,
{
    fn from(src: (E1, E2)) -> Self {
        Self::from_vec(vec![src.0.into(), src.1.into()])
    }
}
