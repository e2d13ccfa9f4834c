mod expr;
pub use expr::Expr;

mod expr_aggregate;
pub use expr_aggregate::{AggregateSource, ExprAggregate, Ordering};

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_case;
pub use expr_case::{CaseWhen, ExprCase};

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_constant;
pub use expr_constant::ExprConstant;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_json_traversal;
pub use expr_json_traversal::ExprJsonTraversal;

mod expr_like;
pub use expr_like::ExprLike;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_row_value;
pub use expr_row_value::ExprRowValue;

mod op_binary;
pub use op_binary::BinaryOp;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
