use pgtranslate::{
    call::{DatePart, Member, MemberAccess, TimeSpanPart},
    diagnostics::Logger,
    stmt::{Expr, Type},
    translator::{
        ArrayTranslator, DateTimeMemberTranslator, JsonPocoTranslator, StringMemberTranslator,
        TimeSpanMemberTranslator,
    },
    MemberTranslator, Options, Serializer, SqlExpressionFactory, Translation, TypeMappingSource,
};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn factory() -> SqlExpressionFactory {
    SqlExpressionFactory::new(TypeMappingSource::new(&Options::default()))
}

fn column(factory: &SqlExpressionFactory, name: &str, ty: Type) -> Expr {
    let mapping = factory.find_mapping(&ty);
    Expr::column("t", name, ty, mapping, false)
}

fn access(instance: Expr, member: &str, return_type: Type) -> MemberAccess {
    MemberAccess::new(Some(instance), Member::resolve(member), return_type)
}

fn sql(translation: Translation) -> String {
    let expr = translation.unwrap_translated();
    assert_ok!(Serializer::postgresql().serialize(&expr))
}

#[test]
fn array_length_is_cardinality() {
    let factory = factory();
    let translator = ArrayTranslator::new(&factory, false);
    let tags = column(&factory, "tags", Type::array(Type::String));

    for member in ["Length", "Count"] {
        let expr = translator
            .translate(&access(tags.clone(), member, Type::I32), &Logger::query())
            .unwrap_translated();
        assert_eq!(expr.ty(), &Type::I32);
        assert_eq!(sql(Translation::Translated(expr)), "cardinality(t.tags)");
    }
}

#[test]
fn array_length_on_redshift() {
    let factory = factory();
    let translator = ArrayTranslator::new(&factory, true);
    let tags = column(&factory, "tags", Type::array(Type::String));

    let translation = translator.translate(&access(tags, "Length", Type::I32), &Logger::query());
    assert_eq!(sql(translation), "array_length(t.tags, 1)");
}

#[test]
fn array_translator_skips_strings_and_json() {
    let factory = factory();
    let translator = ArrayTranslator::new(&factory, false);

    let name = column(&factory, "name", Type::String);
    assert!(translator
        .translate(&access(name, "Length", Type::I32), &Logger::query())
        .is_not_applicable());

    // An array stored inside a JSON document
    let jsonb = factory.find_mapping(&Type::Json).map(|m| m.with_ty(Type::array(Type::I32)));
    let ids = Expr::column("t", "ids", Type::array(Type::I32), jsonb, false);
    assert!(translator
        .translate(&access(ids, "Count", Type::I32), &Logger::query())
        .is_not_applicable());
}

#[test]
fn string_length() {
    let factory = factory();
    let translator = StringMemberTranslator::new(&factory);
    let name = column(&factory, "name", Type::String);

    let expr = translator
        .translate(&access(name.clone(), "Length", Type::I32), &Logger::query())
        .unwrap_translated();
    assert_eq!(expr.ty(), &Type::I32);
    assert_eq!(sql(Translation::Translated(expr)), "length(t.name)");

    assert!(translator
        .translate(&access(name, "Count", Type::I32), &Logger::query())
        .is_not_applicable());
}

#[test]
fn date_parts() {
    let factory = factory();
    let translator = DateTimeMemberTranslator::new(&factory);

    for ty in [Type::DateTime, Type::DateTimeOffset] {
        let created_at = column(&factory, "created_at", ty);

        for (member, field) in [
            ("Year", "year"),
            ("Month", "month"),
            ("Day", "day"),
            ("Hour", "hour"),
            ("Minute", "minute"),
            ("DayOfYear", "doy"),
            ("DayOfWeek", "dow"),
        ] {
            let translation = translator.translate(
                &access(created_at.clone(), member, Type::I32),
                &Logger::query(),
            );
            assert_eq!(
                sql(translation),
                format!("date_part('{field}', t.created_at)::integer")
            );
        }
    }
}

#[test]
fn date_part_second_drops_fractions() {
    let factory = factory();
    let translator = DateTimeMemberTranslator::new(&factory);
    let created_at = column(&factory, "created_at", Type::DateTime);

    let expr = translator
        .translate(&access(created_at, "Second", Type::I32), &Logger::query())
        .unwrap_translated();
    assert_eq!(expr.ty(), &Type::I32);
    assert_eq!(
        sql(Translation::Translated(expr)),
        "floor(date_part('second', t.created_at))::integer"
    );
}

#[test]
fn date_truncates_to_midnight() {
    let factory = factory();
    let translator = DateTimeMemberTranslator::new(&factory);
    let created_at = column(&factory, "created_at", Type::DateTimeOffset);

    let expr = translator
        .translate(&access(created_at, "Date", Type::DateTimeOffset), &Logger::query())
        .unwrap_translated();
    assert_eq!(expr.ty(), &Type::DateTimeOffset);
    assert_eq!(
        assert_some!(expr.type_mapping()).store_type(),
        "timestamp with time zone"
    );
    assert_eq!(
        sql(Translation::Translated(expr)),
        "date_trunc('day', t.created_at)"
    );
}

#[test]
fn date_parts_need_a_date() {
    let factory = factory();
    let translator = DateTimeMemberTranslator::new(&factory);
    let duration = column(&factory, "duration", Type::TimeSpan);

    assert!(translator
        .translate(&access(duration, "Day", Type::I32), &Logger::query())
        .is_not_applicable());
}

#[test]
fn time_span_parts() {
    let factory = factory();
    let translator = TimeSpanMemberTranslator::new(&factory);
    let duration = column(&factory, "duration", Type::TimeSpan);

    for (part, field) in [
        (TimeSpanPart::Days, "day"),
        (TimeSpanPart::Hours, "hour"),
        (TimeSpanPart::Minutes, "minute"),
        (TimeSpanPart::Seconds, "second"),
    ] {
        let access = MemberAccess::new(Some(duration.clone()), Member::TimeSpanPart(part), Type::I32);
        let expr = translator.translate(&access, &Logger::query()).unwrap_translated();

        assert_eq!(expr.ty(), &Type::I32);
        assert_eq!(
            sql(Translation::Translated(expr)),
            format!("floor(date_part('{field}', t.duration))::integer")
        );
    }

    let created_at = column(&factory, "created_at", Type::DateTime);
    let access = MemberAccess::new(
        Some(created_at),
        Member::TimeSpanPart(TimeSpanPart::Days),
        Type::I32,
    );
    assert!(translator.translate(&access, &Logger::query()).is_not_applicable());
}

#[test]
fn json_string_property() {
    let factory = factory();
    let translator = JsonPocoTranslator::new(&factory);
    let customer = column(&factory, "customer", Type::Json);

    let expr = translator
        .translate(&access(customer, "Name", Type::String), &Logger::query())
        .unwrap_translated();
    assert_eq!(expr.ty(), &Type::String);
    assert_eq!(assert_some!(expr.type_mapping()).store_type(), "text");
    assert_eq!(sql(Translation::Translated(expr)), "t.customer->>'Name'");
}

#[test]
fn json_scalar_property_is_cast() {
    let factory = factory();
    let translator = JsonPocoTranslator::new(&factory);
    let customer = column(&factory, "customer", Type::Json);

    let translation = translator.translate(&access(customer, "Age", Type::I32), &Logger::query());
    assert_eq!(sql(translation), "(t.customer->>'Age')::integer");
}

#[test]
fn json_nested_properties_extend_the_path() {
    let factory = factory();
    let translator = JsonPocoTranslator::new(&factory);
    let customer = column(&factory, "customer", Type::Json);

    let address = translator
        .translate(&access(customer, "Address", Type::Json), &Logger::query())
        .unwrap_translated();
    assert_eq!(assert_some!(address.type_mapping()).store_type(), "jsonb");
    assert_eq!(sql(Translation::Translated(address.clone())), "t.customer->'Address'");

    let city = translator.translate(&access(address, "City", Type::String), &Logger::query());
    assert_eq!(sql(city), "t.customer->'Address'->>'City'");
}

#[test]
fn json_array_length() {
    let factory = factory();
    let translator = JsonPocoTranslator::new(&factory);
    let customer = column(&factory, "customer", Type::Json);

    let orders = translator
        .translate(&access(customer, "Orders", Type::array(Type::Json)), &Logger::query())
        .unwrap_translated();

    let translation = translator.translate(&access(orders, "Count", Type::I32), &Logger::query());
    assert_eq!(sql(translation), "jsonb_array_length(t.customer->'Orders')");

    let json = factory
        .type_mapping_source()
        .find_mapping_for(&Type::array(Type::I32), "json");
    let ids = Expr::column("t", "ids", Type::array(Type::I32), json, false);
    let translation = translator.translate(&access(ids, "Length", Type::I32), &Logger::query());
    assert_eq!(sql(translation), "json_array_length(t.ids)");
}

#[test]
fn json_string_length_extracts_text() {
    let factory = factory();
    let translator = JsonPocoTranslator::new(&factory);
    let customer = column(&factory, "customer", Type::Json);
    let name = Expr::json_traversal(
        customer.clone(),
        vec![factory.constant("Name")],
        false,
        Type::String,
        customer.type_mapping().cloned(),
    );

    let translation = translator.translate(&access(name, "Length", Type::I32), &Logger::query());
    assert_eq!(sql(translation), "length(t.customer->>'Name')");
}

#[test]
fn json_translator_needs_a_json_mapping() {
    let factory = factory();
    let translator = JsonPocoTranslator::new(&factory);
    let name = column(&factory, "name", Type::String);

    assert!(translator
        .translate(&access(name, "Length", Type::I32), &Logger::query())
        .is_not_applicable());
}

#[test]
fn resolving_members() {
    assert_eq!(Member::resolve("Length"), Member::Length);
    assert_eq!(Member::resolve("DayOfWeek"), Member::DatePart(DatePart::DayOfWeek));
    assert_eq!(Member::resolve("Hours"), Member::TimeSpanPart(TimeSpanPart::Hours));
    assert_eq!(Member::resolve("Street"), Member::Property("Street".to_string()));
    assert_eq!(Member::resolve("Street").name(), "Street");
    assert_eq!(DatePart::DayOfYear.field(), "doy");
}
