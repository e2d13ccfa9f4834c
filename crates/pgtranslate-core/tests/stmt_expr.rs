use pgtranslate_core::stmt::{AggregateSource, BinaryOp, CaseWhen, Expr, Type, Value};
use pgtranslate_core::{Options, TypeMappingSource};
use pretty_assertions::assert_eq;

fn column(name: &str, ty: Type, nullable: bool) -> Expr {
    let mapping = TypeMappingSource::new(&Options::default()).find_mapping(&ty);
    Expr::column("t", name, ty, mapping, nullable)
}

#[test]
fn constant_infers_type() {
    assert_eq!(Expr::constant(1i64).ty(), &Type::I64);
    assert_eq!(Expr::constant("a").ty(), &Type::String);
    assert_eq!(Expr::null().ty(), &Type::Null);
    assert!(Expr::null().is_constant_null());
    assert!(Expr::constant(Value::List(vec![Value::Null, Value::I32(1)]))
        .ty()
        .is_array());
}

#[test]
fn comparisons_are_boolean() {
    let expr = Expr::eq(column("a", Type::I32, false), 1);
    assert_eq!(expr.ty(), &Type::Bool);
    assert!(expr.is_eq());

    let expr = Expr::binary_op(column("a", Type::I32, false), BinaryOp::Add, 1);
    assert_eq!(expr.ty(), &Type::I32);
}

#[test]
fn coalesce_takes_the_first_known_type() {
    let expr = Expr::coalesce(Expr::null(), "x");
    assert_eq!(expr.ty(), &Type::String);
    assert!(expr.is_coalesce());
}

#[test]
fn case_type_skips_null_branches() {
    let case = Expr::case(
        vec![CaseWhen::new(Expr::eq(column("b", Type::Bool, true), false), Expr::null())],
        Some(Expr::constant("True")),
    );

    assert_eq!(case.ty(), &Type::String);
    assert_eq!(case.unwrap_case().branch_count(), 2);
}

#[test]
fn nullability_is_only_known_for_columns() {
    let nullable = column("a", Type::String, true);
    let required = column("b", Type::String, false);
    let computed = Expr::coalesce(required.clone(), "");

    assert!(nullable.is_nullable_column());
    assert!(!nullable.is_non_nullable_column());
    assert!(required.is_non_nullable_column());
    assert!(!computed.is_nullable_column());
    assert!(!computed.is_non_nullable_column());
}

#[test]
fn with_type_mapping_builds_a_new_node() {
    let source = TypeMappingSource::new(&Options::default());
    let text = source.find_mapping(&Type::String);

    let original = Expr::constant("a");
    let mapped = original.clone().with_type_mapping(text.clone());

    assert_eq!(original.type_mapping(), None);
    assert_eq!(mapped.type_mapping(), text.as_ref());
}

#[test]
fn row_values_have_record_type() {
    let row = Expr::row_value([column("a", Type::I32, false), column("b", Type::String, true)]);

    assert_eq!(row.row_value_len(), Some(2));
    assert_eq!(row.ty(), &Type::Record(vec![Type::I32, Type::String]));
    assert_eq!(row.type_mapping(), None);
    assert_eq!(row.clone().with_type_mapping(None), row);
}

#[test]
fn aggregate_source_builders() {
    let source = AggregateSource::default()
        .distinct()
        .filter(Expr::eq(column("a", Type::I32, false), 1))
        .order_by(column("b", Type::String, false), false);

    assert!(source.distinct);
    assert!(source.predicate.is_some());
    assert_eq!(source.orderings.len(), 1);
    assert!(!source.orderings[0].ascending);
}
