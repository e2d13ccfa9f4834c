use pgtranslate_core::{
    stmt::{Type, Value},
    storage::{MappingKind, StoreTypePostfix, TypeMappingParameters},
    Options, TypeMapping, TypeMappingSource,
};
use pretty_assertions::assert_eq;
use std_util::{assert_err, assert_ok};

fn source() -> TypeMappingSource {
    TypeMappingSource::new(&Options::default())
}

#[test]
fn character_parameter_is_right_trimmed() {
    let character = source().find_mapping_by_store_type("character(8)").unwrap();

    assert_eq!(
        character.configure_parameter(Value::from("abc   ")),
        Value::from("abc")
    );
    assert_eq!(
        character.configure_parameter(Value::from("  abc")),
        Value::from("  abc")
    );
    assert_eq!(character.configure_parameter(Value::Null), Value::Null);
}

#[test]
fn other_parameters_pass_through() {
    let text = source().find_mapping(&Type::String).unwrap();
    assert_eq!(
        text.configure_parameter(Value::from("abc   ")),
        Value::from("abc   ")
    );

    let int = source().find_mapping(&Type::I32).unwrap();
    assert_eq!(int.configure_parameter(Value::I32(7)), Value::I32(7));
}

#[test]
fn derived_mapping_leaves_original_untouched() {
    let varchar = source()
        .find_mapping_by_store_type("character varying(20)")
        .unwrap();
    let before = varchar.clone();

    let wider = assert_ok!(varchar.with_size(255));

    assert_eq!(varchar, before);
    assert_eq!(varchar.store_type(), "character varying(20)");
    assert_eq!(wider.store_type(), "character varying(255)");
    assert_eq!(wider.kind(), varchar.kind());
    assert_ne!(wider, varchar);
}

#[test]
fn precision_and_scale() {
    let numeric = source().find_mapping(&Type::Decimal).unwrap();
    assert_eq!(numeric.store_type(), "numeric");

    let money = assert_ok!(numeric.with_precision_scale(10, Some(2)));
    assert_eq!(money.store_type(), "numeric(10,2)");
    assert_eq!(money.precision(), Some(10));
    assert_eq!(money.scale(), Some(2));

    let whole = assert_ok!(numeric.with_precision_scale(10, None));
    assert_eq!(whole.store_type(), "numeric(10)");

    let timestamp = source().find_mapping(&Type::DateTime).unwrap();
    let millis = assert_ok!(timestamp.with_precision_scale(3, None));
    assert_eq!(millis.store_type(), "timestamp(3) without time zone");
}

#[test]
fn time_zone_qualifier_follows_precision() {
    let timestamptz = source().find_mapping(&Type::DateTimeOffset).unwrap();
    let millis = assert_ok!(timestamptz.with_precision_scale(3, None));
    assert_eq!(millis.store_type(), "timestamp(3) with time zone");
    assert_eq!(millis.store_type_base(), "timestamp with time zone");

    let array = source().array_of(&millis);
    assert_eq!(array.store_type(), "timestamp(3) with time zone[]");

    let derived = assert_ok!(timestamptz.with_store_type("timestamp(6) with time zone"));
    assert_eq!(derived.precision(), Some(6));
    assert_eq!(derived.store_type(), "timestamp(6) with time zone");
}

#[test]
fn with_store_type_applies_facets() {
    let numeric = source().find_mapping(&Type::Decimal).unwrap();

    let derived = assert_ok!(numeric.with_store_type("decimal(12, 4)"));
    assert_eq!(derived.store_type(), "decimal(12,4)");
    assert_eq!(derived.kind(), &MappingKind::Numeric);

    let err = assert_err!(numeric.with_store_type("numeric(1,2,3)"));
    assert!(err.is_invalid_type_mapping());
}

#[test]
fn character_derivations_stay_sized() {
    let character = source().find_mapping_by_store_type("character").unwrap();
    let params = character.params().clone().postfix(StoreTypePostfix::None).size(4);

    let derived = assert_ok!(character.clone_with(params));
    assert_eq!(derived.params().postfix, StoreTypePostfix::Size);
    assert!(derived.is_fixed_length());
    assert_eq!(derived.store_type(), "character(4)");
}

#[test]
fn precision_on_unfaceted_type_is_rejected() {
    let boolean = source().find_mapping(&Type::Bool).unwrap();

    let err = assert_err!(boolean.with_precision_scale(4, None));
    assert!(err.is_invalid_type_mapping());
    assert_eq!(
        err.to_string(),
        "invalid type mapping for store type 'boolean': precision is not supported"
    );
}

#[test]
fn size_on_unsized_type_is_rejected() {
    let text = source().find_mapping(&Type::String).unwrap();

    let err = assert_err!(text.with_size(10));
    assert_eq!(
        err.to_string(),
        "invalid type mapping for store type 'text': size is not supported"
    );
}

#[test]
fn zero_width_character_is_rejected() {
    let character = source().find_mapping_by_store_type("character").unwrap();

    let err = assert_err!(character.with_size(0));
    assert_eq!(
        err.to_string(),
        "invalid type mapping for store type 'character(0)': size must be at least 1"
    );
}

#[test]
fn scale_requires_precision() {
    let params = TypeMappingParameters::new(Type::Decimal, "numeric")
        .postfix(StoreTypePostfix::PrecisionAndScale)
        .scale(2);

    let err = assert_err!(TypeMapping::new(MappingKind::Numeric, params));
    assert!(err.to_string().ends_with("scale requires a precision"));
}

#[test]
fn scale_on_precision_only_type_is_rejected() {
    let interval = source().find_mapping(&Type::TimeSpan).unwrap();
    let err = assert_err!(interval.with_precision_scale(3, Some(1)));
    assert!(err.to_string().ends_with("scale is not supported"));

    let err = assert_err!(interval.with_precision_scale(9, None));
    assert!(err.to_string().ends_with("precision must be between 0 and 6"));
}

#[test]
fn mappings_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<TypeMapping>();
    assert_send_sync::<TypeMappingSource>();
}
