use super::{Comma, Formatter, Ident, ToSql};

use pgtranslate_core::{
    bail,
    stmt::{self, CaseWhen, Expr},
    Error, Result,
};

/// An operand of an operator. Operator expressions nested inside another
/// operator are parenthesized, as are JSON traversals since `::` binds
/// tighter than `->>`.
struct Operand<'a>(&'a Expr);

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            Aggregate(expr) => expr.to_sql(f)?,
            BinaryOp(expr) if expr.op == stmt::BinaryOp::Coalesce => {
                let (lhs, rhs) = (&*expr.lhs, &*expr.rhs);
                fmt!(f, "COALESCE(" lhs ", " rhs ")");
            }
            BinaryOp(expr) => {
                fmt!(f, Operand(&expr.lhs) " " expr.op " " Operand(&expr.rhs));
            }
            Case(expr) => {
                fmt!(f, "CASE");

                if let Some(operand) = &expr.operand {
                    fmt!(f, " " Operand(operand));
                }

                for when in &expr.when_clauses {
                    let (test, result) = (&when.test, &when.result);
                    fmt!(f, " WHEN " test " THEN " result);
                }

                if let Some(else_result) = &expr.else_result {
                    let else_result: &Expr = else_result;
                    fmt!(f, " ELSE " else_result);
                }

                fmt!(f, " END");
            }
            Cast(expr) => {
                let Some(mapping) = &expr.type_mapping else {
                    bail!("cannot cast to {:?} without a type mapping", expr.ty);
                };

                fmt!(f, Operand(&expr.expr) "::" mapping.store_type());
            }
            Column(expr) => {
                if !expr.table.is_empty() {
                    fmt!(f, Ident(&expr.table) ".");
                }

                fmt!(f, Ident(&expr.name));
            }
            Constant(expr) => expr.to_sql(f)?,
            Func(expr) => {
                fmt!(f, expr.name.as_str() "(" Comma(&expr.args) ")");
            }
            JsonTraversal(expr) => {
                fmt!(f, Operand(&expr.expr));

                for (i, step) in expr.path.iter().enumerate() {
                    let last = i + 1 == expr.path.len();
                    let op = if last && expr.returns_text { "->>" } else { "->" };
                    fmt!(f, op step);
                }
            }
            Like(expr) => {
                let op = if expr.case_insensitive { " ILIKE " } else { " LIKE " };
                fmt!(f, Operand(&expr.expr) op Operand(&expr.pattern));

                if let Some(escape) = &expr.escape {
                    let escape: &Expr = escape;
                    fmt!(f, " ESCAPE " escape);
                }
            }
            Not(expr) => {
                fmt!(f, "NOT " Operand(&expr.expr));
            }
            RowValue(expr) => {
                fmt!(f, "(" Comma(&expr.values) ")");
            }
        }

        Ok(())
    }
}

impl ToSql for &stmt::ExprAggregate {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let source = &self.source;

        fmt!(f, self.name.as_str() "(");

        if source.distinct {
            fmt!(f, "DISTINCT ");
        }

        match (&source.predicate, self.args.split_first()) {
            // Without a `FILTER` clause, rows failing the predicate are
            // turned into nulls, which aggregates skip.
            (Some(predicate), Some((first, rest))) if f.serializer.is_redshift() => {
                let first = Expr::case(
                    vec![CaseWhen::new((**predicate).clone(), first.clone())],
                    None,
                );
                fmt!(f, &first);

                for arg in rest {
                    fmt!(f, ", " arg);
                }
            }
            (Some(_), None) if f.serializer.is_redshift() => {
                return Err(Error::unsupported_feature(format!(
                    "`{}` with a filter and no arguments on Redshift",
                    self.name
                )));
            }
            _ => fmt!(f, Comma(&self.args)),
        }

        if !source.orderings.is_empty() {
            fmt!(f, " ORDER BY " Comma(&source.orderings));
        }

        fmt!(f, ")");

        if let Some(predicate) = &source.predicate {
            if !f.serializer.is_redshift() {
                let predicate: &Expr = predicate;
                fmt!(f, " FILTER (WHERE " predicate ")");
            }
        }

        Ok(())
    }
}

impl ToSql for &stmt::Ordering {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, &self.expr);

        if !self.ascending {
            fmt!(f, " DESC");
        }

        Ok(())
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, self.to_string());
        Ok(())
    }
}

impl ToSql for Operand<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let nested = match self.0 {
            Expr::BinaryOp(expr) => expr.op != stmt::BinaryOp::Coalesce,
            Expr::JsonTraversal(_) | Expr::Like(_) | Expr::Not(_) => true,
            // `-1::text` would cast before negating
            Expr::Constant(expr) => match &expr.type_mapping {
                Some(mapping) => mapping.generate_literal(&expr.value)?.starts_with('-'),
                None => false,
            },
            _ => false,
        };

        if nested {
            fmt!(f, "(" self.0 ")");
        } else {
            fmt!(f, self.0);
        }

        Ok(())
    }
}
