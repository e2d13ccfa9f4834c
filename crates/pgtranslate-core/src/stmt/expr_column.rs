use super::{Expr, Type};
use crate::storage::TypeMapping;

/// A reference to a column of a table in the query.
///
/// The model decides nullability. Translators use it to skip null
/// compensation for columns that can never be null.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    /// Alias of the table the column belongs to
    pub table: String,

    /// Column name
    pub name: String,

    /// Semantic type of the column
    pub ty: Type,

    /// Store type of the column
    pub type_mapping: Option<TypeMapping>,

    /// Whether the model allows the column to be null
    pub nullable: bool,
}

impl Expr {
    pub fn column(
        table: impl Into<String>,
        name: impl Into<String>,
        ty: impl Into<Type>,
        type_mapping: Option<TypeMapping>,
        nullable: bool,
    ) -> Self {
        ExprColumn {
            table: table.into(),
            name: name.into(),
            ty: ty.into(),
            type_mapping,
            nullable,
        }
        .into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
