use pgtranslate_core::{
    stmt::Type,
    storage::{MappingKind, StoreTypeName},
    Options, TypeMappingSource,
};
use pretty_assertions::assert_eq;
use std_util::{assert_none, assert_some};

fn source() -> TypeMappingSource {
    TypeMappingSource::new(&Options::default())
}

#[test]
fn default_mappings_by_type() {
    let source = source();

    for (ty, store_type) in [
        (Type::Bool, "boolean"),
        (Type::I8, "smallint"),
        (Type::I16, "smallint"),
        (Type::I32, "integer"),
        (Type::I64, "bigint"),
        (Type::U64, "numeric(20,0)"),
        (Type::F32, "real"),
        (Type::F64, "double precision"),
        (Type::Decimal, "numeric"),
        (Type::String, "text"),
        (Type::Uuid, "uuid"),
        (Type::DateTime, "timestamp without time zone"),
        (Type::DateTimeOffset, "timestamp with time zone"),
        (Type::TimeSpan, "interval"),
        (Type::Bytes, "bytea"),
        (Type::Json, "jsonb"),
    ] {
        let mapping = assert_some!(source.find_mapping(&ty));
        assert_eq!(mapping.store_type(), store_type);
        assert_eq!(mapping.ty(), &ty);
    }
}

#[test]
fn unknown_types_have_no_mapping() {
    let source = source();

    assert_none!(source.find_mapping(&Type::Null));
    assert_none!(source.find_mapping(&Type::Record(vec![Type::I32])));
    assert_none!(source.find_mapping(&Type::enumeration("mood")));
    assert_none!(source.find_mapping_by_store_type("geometry"));
    assert_none!(source.find_mapping_by_store_type("numeric(10"));
}

#[test]
fn store_type_names_and_aliases() {
    let source = source();

    for (name, store_type) in [
        ("int4", "integer"),
        ("INTEGER", "integer"),
        ("varchar(20)", "character varying(20)"),
        ("character   varying(20)", "character varying(20)"),
        ("bpchar(3)", "character(3)"),
        ("numeric(10,2)", "numeric(10,2)"),
        ("timestamptz", "timestamp with time zone"),
        ("text[]", "text[]"),
        ("character(10)[]", "character(10)[]"),
    ] {
        let mapping = assert_some!(source.find_mapping_by_store_type(name));
        assert_eq!(mapping.store_type(), store_type, "{name}");
    }
}

#[test]
fn timestamp_precision_before_time_zone() {
    let source = source();

    for (name, store_type) in [
        ("timestamp(3) with time zone", "timestamp(3) with time zone"),
        ("timestamp(3) without time zone", "timestamp(3) without time zone"),
        ("timestamptz(0)", "timestamp(0) with time zone"),
        ("timestamp(6) with time zone[]", "timestamp(6) with time zone[]"),
    ] {
        let mapping = assert_some!(source.find_mapping_by_store_type(name));
        assert_eq!(mapping.store_type(), store_type, "{name}");
    }

    let mapping = assert_some!(source.find_mapping_by_store_type("timestamp(3) with time zone"));
    assert_eq!(mapping.precision(), Some(3));
    assert_eq!(mapping.kind(), &MappingKind::TimestampTz);
    assert_eq!(
        source.find_mapping_by_store_type(&mapping.store_type()),
        Some(mapping)
    );
}

#[test]
fn store_type_name_facets_before_qualifier() {
    let name = StoreTypeName::parse("TIMESTAMP (3)  WITH TIME ZONE").unwrap();
    assert_eq!(name.base, "timestamp with time zone");
    assert_eq!(name.facets, vec![3]);
    assert!(!name.is_array);

    assert!(StoreTypeName::parse("timestamp(3) with time zone(4)").is_err());
    assert!(StoreTypeName::parse("timestamp)3( with time zone").is_err());
}

#[test]
fn invalid_facets_find_nothing() {
    assert_none!(source().find_mapping_by_store_type("boolean(4)"));
    assert_none!(source().find_mapping_by_store_type("text(10)"));
}

#[test]
fn arrays_widen_from_element() {
    let source = source();

    let ints = assert_some!(source.find_mapping(&Type::array(Type::I32)));
    assert_eq!(ints.store_type(), "integer[]");
    assert_eq!(ints.ty(), &Type::array(Type::I32));

    let element = assert_some!(ints.element());
    assert_eq!(element.store_type(), "integer");

    let character = assert_some!(source.find_mapping_by_store_type("character(4)"));
    let array = source.array_of(&character);
    assert_eq!(array.store_type(), "character(4)[]");
    assert!(matches!(array.kind(), MappingKind::Array(_)));
}

#[test]
fn ranges() {
    let source = source();

    for (element, store_type) in [
        (Type::I32, "int4range"),
        (Type::I64, "int8range"),
        (Type::Decimal, "numrange"),
        (Type::DateTime, "tsrange"),
        (Type::DateTimeOffset, "tstzrange"),
    ] {
        let range = assert_some!(source.find_mapping(&Type::range(element.clone())));
        assert_eq!(range.store_type(), store_type);
        assert_eq!(range.ty(), &Type::range(element));
    }

    let dates = assert_some!(source.find_mapping_by_store_type("daterange"));
    assert_eq!(assert_some!(dates.element()).store_type(), "date");
    assert_none!(source.find_mapping(&Type::range(Type::String)));
}

#[test]
fn range_arrays_are_multiranges_from_postgres_14() {
    let ty = Type::array(Type::range(Type::I32));

    let modern = TypeMappingSource::new(&Options::default());
    let mapping = assert_some!(modern.find_mapping(&ty));
    assert_eq!(mapping.store_type(), "int4multirange");
    assert!(matches!(mapping.kind(), MappingKind::Multirange(_)));

    let legacy = TypeMappingSource::new(&Options::default().postgres_version(13, 4));
    let mapping = assert_some!(legacy.find_mapping(&ty));
    assert_eq!(mapping.store_type(), "int4range[]");
}

#[test]
fn regconfig_is_unsigned() {
    let regconfig = assert_some!(source().find_mapping_by_store_type("regconfig"));
    assert_eq!(regconfig.ty(), &Type::U32);
    assert_eq!(regconfig.kind(), &MappingKind::Regconfig);
}

#[test]
fn registered_enums() {
    let source = source().with_enum("mood");

    let by_type = assert_some!(source.find_mapping(&Type::enumeration("mood")));
    let by_name = assert_some!(source.find_mapping_by_store_type("mood"));

    assert_eq!(by_type, by_name);
    assert_eq!(by_type.kind(), &MappingKind::Enum("mood".to_string()));

    let array = assert_some!(source.find_mapping_by_store_type("mood[]"));
    assert_eq!(array.store_type(), "mood[]");
}

#[test]
fn json_store_types_rebind_to_requested_type() {
    let source = source();
    let ty = Type::array(Type::I32);

    let json = assert_some!(source.find_mapping_for(&ty, "json"));
    assert_eq!(json.ty(), &ty);
    assert_eq!(json.kind(), &MappingKind::Json);

    let text = assert_some!(source.find_mapping_for(&Type::String, "text"));
    assert_eq!(text.store_type(), "text");

    assert_none!(source.find_mapping_for(&Type::I32, "text"));
}

#[test]
fn store_type_name_parsing() {
    let name = StoreTypeName::parse(" Character Varying ( 20 ) ").unwrap();
    assert_eq!(name.base, "character varying");
    assert_eq!(name.facets, vec![20]);
    assert!(!name.is_array);

    assert!(StoreTypeName::parse("").is_err());
    assert!(StoreTypeName::parse("numeric(a)").is_err());
}
