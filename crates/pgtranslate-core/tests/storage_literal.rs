use chrono::{NaiveDate, TimeDelta};
use pgtranslate_core::{
    stmt::{Type, Value},
    Options, TypeMapping, TypeMappingSource,
};
use pretty_assertions::assert_eq;
use std_util::assert_err;

fn source() -> TypeMappingSource {
    TypeMappingSource::new(&Options::default()).with_enum("mood")
}

fn mapping(ty: Type) -> TypeMapping {
    source().find_mapping(&ty).unwrap()
}

fn literal(ty: Type, value: impl Into<Value>) -> String {
    mapping(ty).generate_literal(&value.into()).unwrap()
}

#[test]
fn null_renders_null_for_every_mapping() {
    for ty in [Type::Bool, Type::String, Type::I32, Type::array(Type::I32)] {
        assert_eq!(literal(ty, Value::Null), "NULL");
    }
}

#[test]
fn text_doubles_single_quotes() {
    assert_eq!(literal(Type::String, "O'Brien"), "'O''Brien'");
    assert_eq!(literal(Type::String, "''"), "''''''");
}

#[test]
fn character_and_char() {
    let character = source().find_mapping_by_store_type("character(3)").unwrap();
    assert_eq!(
        character.generate_literal(&Value::from("it's")).unwrap(),
        "'it''s'"
    );
    assert_eq!(literal(Type::Char, '\''), "''''");
}

#[test]
fn regconfig_quotes_like_text() {
    let regconfig = source().find_mapping_by_store_type("regconfig").unwrap();
    assert_eq!(regconfig.ty(), &Type::U32);
    assert_eq!(
        regconfig.generate_literal(&Value::from("english")).unwrap(),
        "'english'"
    );
}

#[test]
fn booleans_and_integers() {
    assert_eq!(literal(Type::Bool, true), "TRUE");
    assert_eq!(literal(Type::Bool, false), "FALSE");
    assert_eq!(literal(Type::I32, -42), "-42");
    assert_eq!(literal(Type::I64, i64::MAX), "9223372036854775807");
    assert_eq!(literal(Type::U64, u64::MAX), "18446744073709551615");
}

#[test]
fn floats() {
    assert_eq!(literal(Type::F64, 1.5), "1.5");
    assert_eq!(literal(Type::F64, f64::NAN), "'NaN'");
    assert_eq!(literal(Type::F64, f64::INFINITY), "'Infinity'");
    assert_eq!(literal(Type::F64, f64::NEG_INFINITY), "'-Infinity'");
    assert_eq!(literal(Type::F32, 2.5f32), "2.5::real");
    assert_eq!(literal(Type::F32, f32::NAN), "'NaN'::real");
}

#[test]
fn numeric_renders_plain() {
    assert_eq!(
        literal(Type::Decimal, Value::Decimal("12.50".to_string())),
        "12.50"
    );
}

#[test]
fn uuid_is_cast() {
    let id = uuid::Uuid::nil();
    assert_eq!(
        literal(Type::Uuid, id),
        "'00000000-0000-0000-0000-000000000000'::uuid"
    );
}

#[test]
fn timestamps() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

    let value = date.and_hms_opt(13, 5, 9).unwrap();
    assert_eq!(
        literal(Type::DateTime, value),
        "TIMESTAMP '2024-02-29 13:05:09'"
    );

    let value = date.and_hms_milli_opt(13, 5, 9, 250).unwrap();
    assert_eq!(
        literal(Type::DateTime, value),
        "TIMESTAMP '2024-02-29 13:05:09.250'"
    );

    let value = date
        .and_hms_opt(13, 5, 9)
        .unwrap()
        .and_utc()
        .fixed_offset();
    assert_eq!(
        literal(Type::DateTimeOffset, value),
        "TIMESTAMPTZ '2024-02-29 13:05:09+00:00'"
    );
}

#[test]
fn intervals() {
    assert_eq!(
        literal(Type::TimeSpan, TimeDelta::seconds(3_725)),
        "INTERVAL '01:02:05'"
    );
    assert_eq!(
        literal(
            Type::TimeSpan,
            TimeDelta::days(2) + TimeDelta::milliseconds(1_500)
        ),
        "INTERVAL '2 00:00:01.5'"
    );
    assert_eq!(
        literal(Type::TimeSpan, -TimeDelta::minutes(90)),
        "INTERVAL '-01:30:00'"
    );
}

#[test]
fn bytea_is_hex_escaped() {
    assert_eq!(
        literal(Type::Bytes, vec![0xde_u8, 0xad, 0x01]),
        r"BYTEA E'\\xDEAD01'"
    );
}

#[test]
fn json_documents_are_cast() {
    let json = source().find_mapping_by_store_type("json").unwrap();
    assert_eq!(
        json.generate_literal(&Value::from(r#"{"a":"it's"}"#)).unwrap(),
        r#"'{"a":"it''s"}'::json"#
    );
    assert_eq!(literal(Type::Json, "[1,2]"), "'[1,2]'::jsonb");
}

#[test]
fn enums_are_cast_to_their_type() {
    assert_eq!(
        literal(Type::enumeration("mood"), Value::Enum("happy".to_string())),
        "'happy'::mood"
    );
}

#[test]
fn arrays_render_elements_with_element_rules() {
    assert_eq!(
        literal(
            Type::array(Type::I32),
            Value::List(vec![Value::I32(1), Value::Null, Value::I32(3)])
        ),
        "ARRAY[1,NULL,3]::integer[]"
    );
    assert_eq!(
        literal(
            Type::array(Type::String),
            Value::List(vec![Value::from("a'b")])
        ),
        "ARRAY['a''b']::text[]"
    );
}

#[test]
fn ranges_render_through_constructor() {
    assert_eq!(
        literal(
            Type::range(Type::I32),
            Value::Record(vec![Value::I32(1), Value::Null])
        ),
        "int4range(1, NULL)"
    );
}

#[test]
fn mismatched_value_is_an_error() {
    let err = assert_err!(mapping(Type::Bool).generate_literal(&Value::from("yes")));
    assert_eq!(
        err.to_string(),
        "cannot render String(\"yes\") as a literal of store type `boolean`"
    );

    assert_err!(mapping(Type::Uuid).generate_literal(&Value::I32(1)));
}
