use super::{Expr, Type};
use crate::storage::TypeMapping;

/// An aggregate function call over the rows of a group.
///
/// Unlike [`ExprFunc`](super::ExprFunc), aggregates carry the shape of the
/// sequence they reduce: `DISTINCT`, a `FILTER (WHERE ...)` predicate and an
/// `ORDER BY` inside the call.
///
/// # Examples
///
/// ```text
/// string_agg(name, ', ' ORDER BY name)
/// array_agg(DISTINCT tag) FILTER (WHERE tag IS NOT NULL)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAggregate {
    pub name: String,

    pub args: Vec<Expr>,

    pub source: AggregateSource,

    /// Whether the aggregate can return null. Aggregates over zero rows
    /// return null, so this is almost always `true`.
    pub nullable: bool,

    /// For each argument, whether a null argument makes the result null.
    pub args_propagate_nullability: Vec<bool>,

    pub ty: Type,

    pub type_mapping: Option<TypeMapping>,
}

/// The sequence an aggregate reduces, as seen by the aggregate call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateSource {
    pub distinct: bool,

    /// Rows not satisfying the predicate are skipped.
    pub predicate: Option<Box<Expr>>,

    pub orderings: Vec<Ordering>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub expr: Expr,
    pub ascending: bool,
}

impl AggregateSource {
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn filter(mut self, predicate: impl Into<Expr>) -> Self {
        self.predicate = Some(Box::new(predicate.into()));
        self
    }

    pub fn order_by(mut self, expr: impl Into<Expr>, ascending: bool) -> Self {
        self.orderings.push(Ordering {
            expr: expr.into(),
            ascending,
        });
        self
    }
}

impl Expr {
    pub fn aggregate(
        name: impl Into<String>,
        args: Vec<Expr>,
        source: AggregateSource,
        nullable: bool,
        args_propagate_nullability: Vec<bool>,
        ty: impl Into<Type>,
        type_mapping: Option<TypeMapping>,
    ) -> Self {
        debug_assert_eq!(args.len(), args_propagate_nullability.len());

        ExprAggregate {
            name: name.into(),
            args,
            source,
            nullable,
            args_propagate_nullability,
            ty: ty.into(),
            type_mapping,
        }
        .into()
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }
}

impl From<ExprAggregate> for Expr {
    fn from(value: ExprAggregate) -> Self {
        Self::Aggregate(value)
    }
}
