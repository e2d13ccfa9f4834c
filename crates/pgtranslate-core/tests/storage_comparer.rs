use pgtranslate_core::{
    stmt::{Type, Value},
    storage::ValueComparer,
    Options, TypeMappingSource,
};

fn character() -> pgtranslate_core::TypeMapping {
    TypeMappingSource::new(&Options::default())
        .find_mapping_by_store_type("character(10)")
        .unwrap()
}

#[test]
fn character_comparer_ignores_trailing_whitespace() {
    let comparer = character().comparer();

    for (a, b) in [
        ("abc", "abc   "),
        ("abc\t", "abc"),
        ("", "     "),
        ("a b", "a b \n"),
    ] {
        let (a, b) = (Value::from(a), Value::from(b));
        assert!(comparer.equals(&a, &b), "{a:?} != {b:?}");
        assert_eq!(comparer.hash_code(&a), comparer.hash_code(&b));
    }
}

#[test]
fn character_comparer_keeps_leading_whitespace() {
    let comparer = character().comparer();
    assert!(!comparer.equals(&Value::from("  abc"), &Value::from("abc")));
    assert!(!comparer.equals(&Value::from("abc"), &Value::from("abd")));
}

#[test]
fn null_only_equals_null() {
    for comparer in [ValueComparer::DEFAULT, ValueComparer::CHARACTER] {
        assert!(comparer.equals(&Value::Null, &Value::Null));
        assert!(!comparer.equals(&Value::Null, &Value::from("")));
        assert!(!comparer.equals(&Value::from("   "), &Value::Null));
        assert!(!comparer.equals(&Value::Null, &Value::I32(0)));
    }
}

#[test]
fn key_comparer_matches_comparer() {
    let mapping = character();
    assert_eq!(mapping.comparer(), mapping.key_comparer());
    assert_eq!(mapping.key_comparer(), ValueComparer::CHARACTER);
}

#[test]
fn character_over_char_uses_default_comparer() {
    let source = TypeMappingSource::new(&Options::default());
    let mapping = source.find_mapping(&Type::Char).unwrap();

    assert_eq!(mapping.store_type_base(), "character");
    assert_eq!(mapping.comparer(), ValueComparer::DEFAULT);
}

#[test]
fn default_comparer_is_exact() {
    let source = TypeMappingSource::new(&Options::default());
    let comparer = source.find_mapping(&Type::String).unwrap().comparer();

    assert!(!comparer.equals(&Value::from("abc"), &Value::from("abc ")));
    assert!(comparer.equals(&Value::F64(1.5), &Value::F64(1.5)));
    assert_eq!(
        comparer.hash_code(&Value::F64(1.5)),
        comparer.hash_code(&Value::F64(1.5))
    );
}

#[test]
fn default_comparer_hashes_signed_zeros_alike() {
    let comparer = ValueComparer::DEFAULT;

    for (a, b) in [
        (Value::F64(0.0), Value::F64(-0.0)),
        (Value::F32(0.0), Value::F32(-0.0)),
        (
            Value::List(vec![Value::F64(-0.0), Value::I32(1)]),
            Value::List(vec![Value::F64(0.0), Value::I32(1)]),
        ),
        (
            Value::Record(vec![Value::from("a"), Value::F32(-0.0)]),
            Value::Record(vec![Value::from("a"), Value::F32(0.0)]),
        ),
    ] {
        assert!(comparer.equals(&a, &b), "{a:?} != {b:?}");
        assert_eq!(comparer.hash_code(&a), comparer.hash_code(&b), "{a:?}");
    }

    assert_ne!(
        comparer.hash_code(&Value::F64(0.0)),
        comparer.hash_code(&Value::F64(1.0))
    );
}
