use crate::call::EnumerableSource;

use pgtranslate_core::{
    stmt::{BinaryOp, CaseWhen, Expr, ExprRowValue, Type, Value},
    TypeMapping, TypeMappingSource,
};
use std::sync::Arc;

/// Builds expression nodes with type mappings applied.
///
/// Constants and other nodes built without a mapping take the mapping of
/// the expression they are combined with, so that `flag = false` renders
/// `false` with the mapping of `flag`. When neither side has one, the
/// default mapping for the semantic type is used.
#[derive(Debug, Clone)]
pub struct SqlExpressionFactory {
    source: Arc<TypeMappingSource>,
}

impl SqlExpressionFactory {
    pub fn new(source: TypeMappingSource) -> SqlExpressionFactory {
        SqlExpressionFactory {
            source: Arc::new(source),
        }
    }

    pub fn type_mapping_source(&self) -> &TypeMappingSource {
        &self.source
    }

    /// The default mapping for a semantic type.
    pub fn find_mapping(&self, ty: &Type) -> Option<TypeMapping> {
        self.source.find_mapping(ty)
    }

    /// Gives `expr` the `mapping` when it has none of its own, falling back
    /// to the default mapping of its type.
    pub fn apply_type_mapping(&self, expr: Expr, mapping: Option<&TypeMapping>) -> Expr {
        if expr.type_mapping().is_some() {
            return expr;
        }

        match mapping {
            Some(mapping) => expr.with_type_mapping(Some(mapping.clone())),
            None => self.apply_default_type_mapping(expr),
        }
    }

    pub fn apply_default_type_mapping(&self, expr: Expr) -> Expr {
        if expr.type_mapping().is_some() || expr.is_row_value() {
            return expr;
        }

        let mapping = self.find_mapping(expr.ty());
        expr.with_type_mapping(mapping)
    }

    pub fn constant(&self, value: impl Into<Value>) -> Expr {
        self.apply_default_type_mapping(Expr::constant(value))
    }

    pub fn constant_with_mapping(&self, value: impl Into<Value>, mapping: Option<TypeMapping>) -> Expr {
        Expr::constant(value).with_type_mapping(mapping)
    }

    /// A binary operation, inferring a shared mapping for the operands.
    pub fn binary(&self, op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        let inferred = infer(&[&lhs, &rhs]);

        let lhs = self.apply_type_mapping(lhs, inferred.as_ref());
        let rhs = self.apply_type_mapping(rhs, inferred.as_ref());

        let mapping = if op.is_comparison() || op.is_logical() {
            self.find_mapping(&Type::Bool)
        } else {
            inferred.or_else(|| lhs.type_mapping().or(rhs.type_mapping()).cloned())
        };

        Expr::binary_op(lhs, op, rhs).with_type_mapping(mapping)
    }

    pub fn equal(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.binary(BinaryOp::Eq, lhs, rhs)
    }

    pub fn coalesce(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.binary(BinaryOp::Coalesce, lhs, rhs)
    }

    /// Compares two row values position by position, `(a, b) > (c, d)`.
    /// Each position infers its mapping from either side.
    pub fn row_comparison(&self, op: BinaryOp, lhs: ExprRowValue, rhs: ExprRowValue) -> Expr {
        debug_assert!(op.is_comparison());

        let (lhs, rhs): (Vec<_>, Vec<_>) = lhs
            .into_iter()
            .zip(rhs)
            .map(|(lhs, rhs)| {
                let inferred = infer(&[&lhs, &rhs]);
                (
                    self.apply_type_mapping(lhs, inferred.as_ref()),
                    self.apply_type_mapping(rhs, inferred.as_ref()),
                )
            })
            .unzip();

        Expr::binary_op(Expr::row_value(lhs), op, Expr::row_value(rhs))
            .with_type_mapping(self.find_mapping(&Type::Bool))
    }

    /// A searched `CASE`. Results share the first mapping found among them.
    pub fn case(&self, when_clauses: Vec<CaseWhen>, else_result: Option<Expr>) -> Expr {
        let results = when_clauses
            .iter()
            .map(|when| &when.result)
            .chain(else_result.iter())
            .collect::<Vec<_>>();
        let inferred = infer(&results);

        let when_clauses = when_clauses
            .into_iter()
            .map(|when| CaseWhen {
                test: self.apply_default_type_mapping(when.test),
                result: self.apply_type_mapping(when.result, inferred.as_ref()),
            })
            .collect();
        let else_result = else_result.map(|expr| self.apply_type_mapping(expr, inferred.as_ref()));

        let expr = Expr::case(when_clauses, else_result);
        let mapping = inferred.or_else(|| self.find_mapping(expr.ty()));
        expr.with_type_mapping(mapping)
    }

    /// Converts `expr` to another type, `expr::text`.
    pub fn convert(&self, expr: Expr, ty: Type, mapping: Option<TypeMapping>) -> Expr {
        let mapping = mapping.or_else(|| self.find_mapping(&ty));
        Expr::cast(self.apply_default_type_mapping(expr), ty, mapping)
    }

    pub fn function(
        &self,
        name: &str,
        args: Vec<Expr>,
        nullable: bool,
        args_propagate_nullability: Vec<bool>,
        ty: Type,
        mapping: Option<TypeMapping>,
    ) -> Expr {
        let args = args
            .into_iter()
            .map(|arg| self.apply_default_type_mapping(arg))
            .collect();

        Expr::func(name, args, nullable, args_propagate_nullability, ty, mapping)
    }

    /// An aggregate call carrying the distinct flag, filter and ordering of
    /// `source`.
    #[allow(clippy::too_many_arguments)]
    pub fn aggregate_function(
        &self,
        name: &str,
        args: Vec<Expr>,
        source: &EnumerableSource,
        nullable: bool,
        args_propagate_nullability: Vec<bool>,
        ty: Type,
        mapping: Option<TypeMapping>,
    ) -> Expr {
        let args = args
            .into_iter()
            .map(|arg| self.apply_default_type_mapping(arg))
            .collect();

        Expr::aggregate(
            name,
            args,
            source.aggregate_source(),
            nullable,
            args_propagate_nullability,
            ty,
            mapping,
        )
    }

    /// `expr ILIKE pattern [ESCAPE escape]`
    pub fn ilike(&self, expr: Expr, pattern: Expr, escape: Option<Expr>) -> Expr {
        let inferred = infer(&[&expr, &pattern]);

        let expr = self.apply_type_mapping(expr, inferred.as_ref());
        let pattern = self.apply_type_mapping(pattern, inferred.as_ref());
        let escape = escape.map(|escape| self.apply_type_mapping(escape, inferred.as_ref()));

        Expr::ilike(expr, pattern, escape).with_type_mapping(self.find_mapping(&Type::Bool))
    }

    /// Accesses a path inside a JSON document, `doc->'a'->>'b'`.
    pub fn json_traversal(
        &self,
        expr: Expr,
        path: Vec<Expr>,
        returns_text: bool,
        ty: Type,
        mapping: Option<TypeMapping>,
    ) -> Expr {
        let path = path
            .into_iter()
            .map(|step| self.apply_default_type_mapping(step))
            .collect();

        Expr::json_traversal(expr, path, returns_text, ty, mapping)
    }
}

/// The first mapping any of the expressions carries.
fn infer(exprs: &[&Expr]) -> Option<TypeMapping> {
    exprs.iter().find_map(|expr| expr.type_mapping()).cloned()
}
