use crate::{
    call::{DbFunction, Method, MethodCall},
    MethodCallTranslator, SqlExpressionFactory, Translation,
};

use pgtranslate_core::{
    diagnostics::Logger,
    stmt::{BinaryOp, Expr, ExprRowValue, Type, Value},
};

/// Translates the PostgreSQL database functions: `ILIKE`, `reverse` and
/// row value comparisons.
pub struct DbFunctionsTranslator {
    factory: SqlExpressionFactory,
}

impl DbFunctionsTranslator {
    pub fn new(factory: &SqlExpressionFactory) -> Self {
        DbFunctionsTranslator {
            factory: factory.clone(),
        }
    }

    fn translate_ilike(&self, args: &[Expr], logger: &Logger) -> Translation {
        match args {
            [expr, pattern] => self
                .factory
                .ilike(expr.clone(), pattern.clone(), None)
                .into(),
            [expr, pattern, escape] => {
                // The escape must be known up front and be exactly one
                // character.
                let is_single_char = escape
                    .as_constant()
                    .and_then(|constant| constant.value.as_str())
                    .is_some_and(|escape| escape.chars().count() == 1);

                if !is_single_char {
                    logger.trace(format_args!(
                        "ILike escape is not a single-character constant: {escape:?}"
                    ));
                    return Translation::NotApplicable;
                }

                self.factory
                    .ilike(expr.clone(), pattern.clone(), Some(escape.clone()))
                    .into()
            }
            _ => Translation::NotApplicable,
        }
    }

    fn translate_row_comparison(&self, op: BinaryOp, args: &[Expr], logger: &Logger) -> Translation {
        let [lhs, rhs] = args else {
            return Translation::NotApplicable;
        };

        let (Some(lhs), Some(rhs)) = (row_value(lhs), row_value(rhs)) else {
            return Translation::NotApplicable;
        };

        if lhs.is_empty() || lhs.len() != rhs.len() {
            logger.trace(format_args!(
                "row values of different lengths cannot be compared: {} and {}",
                lhs.len(),
                rhs.len()
            ));
            return Translation::NotApplicable;
        }

        self.factory.row_comparison(op, lhs, rhs).into()
    }
}

impl MethodCallTranslator for DbFunctionsTranslator {
    fn translate(&self, call: &MethodCall, logger: &Logger) -> Translation {
        let Method::DbFunction(function) = call.method else {
            return Translation::NotApplicable;
        };

        let args = &call.arguments[..];

        match function {
            DbFunction::ILike => self.translate_ilike(args, logger),
            DbFunction::Reverse => match args {
                [value] => self
                    .factory
                    .function(
                        "reverse",
                        vec![value.clone()],
                        true,
                        vec![true],
                        Type::String,
                        value
                            .type_mapping()
                            .cloned()
                            .or_else(|| self.factory.find_mapping(&Type::String)),
                    )
                    .into(),
                _ => Translation::NotApplicable,
            },
            DbFunction::GreaterThan => self.translate_row_comparison(BinaryOp::Gt, args, logger),
            DbFunction::LessThan => self.translate_row_comparison(BinaryOp::Lt, args, logger),
            DbFunction::GreaterThanOrEqual => {
                self.translate_row_comparison(BinaryOp::Ge, args, logger)
            }
            DbFunction::LessThanOrEqual => {
                self.translate_row_comparison(BinaryOp::Le, args, logger)
            }
        }
    }
}

/// A row value argument, either built as a row or passed as a constant
/// tuple.
fn row_value(expr: &Expr) -> Option<ExprRowValue> {
    match expr {
        Expr::RowValue(row) => Some(row.clone()),
        Expr::Constant(constant) => match &constant.value {
            Value::Record(fields) => Some(ExprRowValue::from_vec(
                fields.iter().cloned().map(Expr::constant).collect(),
            )),
            _ => None,
        },
        _ => None,
    }
}
