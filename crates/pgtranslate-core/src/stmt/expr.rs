use super::*;
use crate::storage::TypeMapping;

const BOOL: &Type = &Type::Bool;

/// A fragment of generated SQL.
///
/// Nodes are immutable once built. Every node knows its semantic [`Type`]
/// and, once resolved, the [`TypeMapping`] describing how the value is
/// stored and rendered. Mappings are shared, so cloning a tree is cheap.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An aggregate function call, `string_agg(x, ',')`
    Aggregate(ExprAggregate),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// A `CASE` expression
    Case(ExprCase),

    /// Convert an expression to a different type
    Cast(ExprCast),

    /// References a column of a table in the query
    Column(ExprColumn),

    /// A constant value
    Constant(ExprConstant),

    /// Scalar function call
    Func(ExprFunc),

    /// Traverse into a JSON document
    JsonTraversal(ExprJsonTraversal),

    /// `LIKE` or `ILIKE` pattern match
    Like(ExprLike),

    /// Boolean negation
    Not(ExprNot),

    /// A tuple of expressions compared or aggregated as one value
    RowValue(ExprRowValue),
}

impl Expr {
    /// The semantic type of the value this expression evaluates to.
    pub fn ty(&self) -> &Type {
        match self {
            Self::Aggregate(e) => &e.ty,
            Self::BinaryOp(e) => &e.ty,
            Self::Case(e) => &e.ty,
            Self::Cast(e) => &e.ty,
            Self::Column(e) => &e.ty,
            Self::Constant(e) => &e.ty,
            Self::Func(e) => &e.ty,
            Self::JsonTraversal(e) => &e.ty,
            Self::Like(_) | Self::Not(_) => BOOL,
            Self::RowValue(e) => &e.ty,
        }
    }

    /// The type mapping of this expression, when one has been applied.
    pub fn type_mapping(&self) -> Option<&TypeMapping> {
        match self {
            Self::Aggregate(e) => e.type_mapping.as_ref(),
            Self::BinaryOp(e) => e.type_mapping.as_ref(),
            Self::Case(e) => e.type_mapping.as_ref(),
            Self::Cast(e) => e.type_mapping.as_ref(),
            Self::Column(e) => e.type_mapping.as_ref(),
            Self::Constant(e) => e.type_mapping.as_ref(),
            Self::Func(e) => e.type_mapping.as_ref(),
            Self::JsonTraversal(e) => e.type_mapping.as_ref(),
            Self::Like(e) => e.type_mapping.as_ref(),
            Self::Not(e) => e.type_mapping.as_ref(),
            Self::RowValue(_) => None,
        }
    }

    /// Returns a copy of the expression with `type_mapping` applied. Row
    /// values have no mapping of their own and are returned unchanged.
    pub fn with_type_mapping(self, type_mapping: Option<TypeMapping>) -> Self {
        match self {
            Self::Aggregate(e) => Self::Aggregate(ExprAggregate { type_mapping, ..e }),
            Self::BinaryOp(e) => Self::BinaryOp(ExprBinaryOp { type_mapping, ..e }),
            Self::Case(e) => Self::Case(ExprCase { type_mapping, ..e }),
            Self::Cast(e) => Self::Cast(ExprCast { type_mapping, ..e }),
            Self::Column(e) => Self::Column(ExprColumn { type_mapping, ..e }),
            Self::Constant(e) => Self::Constant(ExprConstant { type_mapping, ..e }),
            Self::Func(e) => Self::Func(ExprFunc { type_mapping, ..e }),
            Self::JsonTraversal(e) => Self::JsonTraversal(ExprJsonTraversal { type_mapping, ..e }),
            Self::Like(e) => Self::Like(ExprLike { type_mapping, ..e }),
            Self::Not(e) => Self::Not(ExprNot { type_mapping, ..e }),
            expr @ Self::RowValue(_) => expr,
        }
    }

    /// Returns true if the expression is a constant null.
    pub fn is_constant_null(&self) -> bool {
        matches!(self, Self::Constant(ExprConstant { value: Value::Null, .. }))
    }

    /// Returns true for a column the model declares nullable.
    pub fn is_nullable_column(&self) -> bool {
        matches!(self, Self::Column(ExprColumn { nullable: true, .. }))
    }

    /// Returns true for a column the model declares non-nullable. Anything
    /// else, including computed expressions, might be null.
    pub fn is_non_nullable_column(&self) -> bool {
        matches!(self, Self::Column(ExprColumn { nullable: false, .. }))
    }

    pub fn as_constant(&self) -> Option<&ExprConstant> {
        match self {
            Self::Constant(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_row_value(&self) -> Option<&ExprRowValue> {
        match self {
            Self::RowValue(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_aggregate(&self) -> Option<&ExprAggregate> {
        match self {
            Self::Aggregate(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_case(&self) -> Option<&ExprCase> {
        match self {
            Self::Case(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_binary_op(&self) -> Option<&ExprBinaryOp> {
        match self {
            Self::BinaryOp(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_func(&self) -> Option<&ExprFunc> {
        match self {
            Self::Func(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_cast(&self) -> Option<&ExprCast> {
        match self {
            Self::Cast(e) => Some(e),
            _ => None,
        }
    }

    #[track_caller]
    pub fn unwrap_aggregate(self) -> ExprAggregate {
        match self {
            Self::Aggregate(e) => e,
            v => panic!("expected `Aggregate`, found {v:#?}"),
        }
    }

    #[track_caller]
    pub fn unwrap_case(self) -> ExprCase {
        match self {
            Self::Case(e) => e,
            v => panic!("expected `Case`, found {v:#?}"),
        }
    }

    #[track_caller]
    pub fn unwrap_binary_op(self) -> ExprBinaryOp {
        match self {
            Self::BinaryOp(e) => e,
            v => panic!("expected `BinaryOp`, found {v:#?}"),
        }
    }
}

macro_rules! impl_expr_from_value {
    ( $( $t:ty ),+ $(,)? ) => {
        $(
            impl From<$t> for Expr {
                fn from(value: $t) -> Self {
                    Self::constant(value)
                }
            }
        )+
    };
}

impl_expr_from_value!(bool, char, i32, i64, String, &str);
