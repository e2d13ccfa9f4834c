use super::{MappingKind, StoreTypeName, StoreTypePostfix, TypeMapping, TypeMappingParameters};
use crate::{options::Version, stmt::Type, Options};

use indexmap::IndexMap;

/// Looks up type mappings by semantic type and by store type name.
///
/// The source is built once from [`Options`] and is read-only afterwards.
/// Lookups return `None` for anything the source does not know.
///
/// ```
/// # use pgtranslate_core::{stmt::Type, Options, TypeMappingSource};
/// let source = TypeMappingSource::new(&Options::default());
///
/// let ints = source.find_mapping(&Type::array(Type::I32)).unwrap();
/// assert_eq!(ints.store_type(), "integer[]");
///
/// let price = source.find_mapping_by_store_type("numeric(10,2)").unwrap();
/// assert_eq!(price.store_type(), "numeric(10,2)");
/// ```
#[derive(Debug, Clone)]
pub struct TypeMappingSource {
    /// Multiranges exist on PostgreSQL 14 and later
    multiranges: bool,

    /// Default mapping for each scalar semantic type
    by_type: IndexMap<Type, TypeMapping>,

    /// Mappings by unfaceted store type name, aliases included
    by_store_type: IndexMap<String, TypeMapping>,

    /// Ranges by element semantic type
    ranges: IndexMap<Type, TypeMapping>,

    /// User-registered enums by PostgreSQL type name
    enums: IndexMap<String, TypeMapping>,
}

const ALIASES: &[(&str, &str)] = &[
    ("bool", "boolean"),
    ("int2", "smallint"),
    ("int", "integer"),
    ("int4", "integer"),
    ("int8", "bigint"),
    ("float4", "real"),
    ("float8", "double precision"),
    ("decimal", "numeric"),
    ("varchar", "character varying"),
    ("char", "character"),
    ("bpchar", "character"),
    ("timestamp", "timestamp without time zone"),
    ("timestamptz", "timestamp with time zone"),
];

impl TypeMappingSource {
    pub fn new(options: &Options) -> TypeMappingSource {
        let mut source = TypeMappingSource {
            multiranges: options.supports(Version::new(14, 0)),
            by_type: IndexMap::new(),
            by_store_type: IndexMap::new(),
            ranges: IndexMap::new(),
            enums: IndexMap::new(),
        };

        let boolean = scalar(MappingKind::Boolean, Type::Bool, "boolean");
        let smallint = scalar(MappingKind::Integer, Type::I16, "smallint");
        let integer = scalar(MappingKind::Integer, Type::I32, "integer");
        let bigint = scalar(MappingKind::Integer, Type::I64, "bigint");
        let real = scalar(MappingKind::Float, Type::F32, "real");
        let double = scalar(MappingKind::Float, Type::F64, "double precision");
        let numeric = TypeMapping::new_unchecked(
            MappingKind::Numeric,
            TypeMappingParameters::new(Type::Decimal, "numeric")
                .postfix(StoreTypePostfix::PrecisionAndScale),
        );
        let text = scalar(MappingKind::Text, Type::String, "text");
        let varchar = TypeMapping::new_unchecked(
            MappingKind::Text,
            TypeMappingParameters::new(Type::String, "character varying")
                .postfix(StoreTypePostfix::Size),
        );
        let character = TypeMapping::new_unchecked(
            MappingKind::Character,
            TypeMappingParameters::new(Type::String, "character").unicode(false),
        );
        let regconfig = scalar(MappingKind::Regconfig, Type::U32, "regconfig");
        let uuid = scalar(MappingKind::Uuid, Type::Uuid, "uuid");
        let timestamp = precision(
            MappingKind::Timestamp,
            Type::DateTime,
            "timestamp without time zone",
        );
        let timestamptz = precision(
            MappingKind::TimestampTz,
            Type::DateTimeOffset,
            "timestamp with time zone",
        );
        let date = scalar(MappingKind::Date, Type::DateTime, "date");
        let interval = precision(MappingKind::Interval, Type::TimeSpan, "interval");
        let bytea = scalar(MappingKind::Bytea, Type::Bytes, "bytea");
        let json = scalar(MappingKind::Json, Type::Json, "json");
        let jsonb = scalar(MappingKind::Jsonb, Type::Json, "jsonb");

        for mapping in [
            &boolean,
            &smallint,
            &integer,
            &bigint,
            &real,
            &double,
            &numeric,
            &text,
            &varchar,
            &character,
            &regconfig,
            &uuid,
            &timestamp,
            &timestamptz,
            &date,
            &interval,
            &bytea,
            &json,
            &jsonb,
        ] {
            source
                .by_store_type
                .insert(mapping.store_type_base().to_string(), mapping.clone());
        }

        for (alias, name) in ALIASES {
            if let Some(mapping) = source.by_store_type.get(*name).cloned() {
                source.by_store_type.insert(alias.to_string(), mapping);
            }
        }

        // Unsigned and narrow integers widen to the next signed store type
        // that holds every value.
        source.by_type.extend([
            (Type::Bool, boolean),
            (Type::Char, character.with_ty(Type::Char)),
            (Type::I8, smallint.with_ty(Type::I8)),
            (Type::I16, smallint.clone()),
            (Type::I32, integer.clone()),
            (Type::I64, bigint.clone()),
            (Type::U8, smallint.with_ty(Type::U8)),
            (Type::U16, integer.with_ty(Type::U16)),
            (Type::U32, bigint.with_ty(Type::U32)),
            (
                Type::U64,
                TypeMapping::new_unchecked(
                    MappingKind::Numeric,
                    TypeMappingParameters::new(Type::U64, "numeric")
                        .postfix(StoreTypePostfix::PrecisionAndScale)
                        .precision(20)
                        .scale(0),
                ),
            ),
            (Type::F32, real),
            (Type::F64, double),
            (Type::Decimal, numeric.clone()),
            (Type::String, text),
            (Type::Uuid, uuid),
            (Type::DateTime, timestamp.clone()),
            (Type::DateTimeOffset, timestamptz.clone()),
            (Type::TimeSpan, interval),
            (Type::Bytes, bytea),
            (Type::Json, jsonb),
        ]);

        for (element, name) in [
            (integer, "int4range"),
            (bigint, "int8range"),
            (numeric, "numrange"),
            (timestamp, "tsrange"),
            (timestamptz, "tstzrange"),
        ] {
            let range = range_of(&element, name);
            source
                .by_store_type
                .insert(name.to_string(), range.clone());
            source.ranges.insert(element.ty().clone(), range);
        }

        // There is no date-only semantic type, so `date` and `daterange`
        // are only reachable by name.
        let daterange = range_of(&date, "daterange");
        source
            .by_store_type
            .insert("daterange".to_string(), daterange);

        source
    }

    /// Registers a PostgreSQL enum type. Values of `Type::Enum(name)` map to
    /// it and literals are cast to the enum type.
    pub fn with_enum(mut self, name: impl Into<String>) -> TypeMappingSource {
        let name = name.into();
        let mapping = scalar(
            MappingKind::Enum(name.clone()),
            Type::Enum(name.clone()),
            &name,
        );
        self.enums.insert(name, mapping);
        self
    }

    /// The default mapping for a semantic type. Arrays and ranges widen
    /// from the mapping of their element.
    pub fn find_mapping(&self, ty: &Type) -> Option<TypeMapping> {
        match ty {
            Type::Array(element) => match &**element {
                Type::Range(_) if self.multiranges => {
                    let range = self.find_mapping(element)?;
                    Some(self.multirange_of(&range))
                }
                _ => Some(self.array_of(&self.find_mapping(element)?)),
            },
            Type::Range(element) => self.ranges.get(&**element).cloned(),
            Type::Enum(name) => self.enums.get(name).cloned(),
            ty => self.by_type.get(ty).cloned(),
        }
    }

    /// Looks up a mapping by store type name, applying facets and array
    /// suffixes: `character(10)`, `numeric(10,2)`, `text[]`.
    pub fn find_mapping_by_store_type(&self, store_type: &str) -> Option<TypeMapping> {
        let name = StoreTypeName::parse(store_type).ok()?;

        let base = self
            .by_store_type
            .get(&name.base)
            .or_else(|| self.enums.get(&name.base))?;

        let mapping = match name.facets.as_slice() {
            [] => base.clone(),
            facets => {
                let facets = facets
                    .iter()
                    .map(|facet| facet.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                base.with_store_type(&format!("{}({facets})", base.store_type_base()))
                    .ok()?
            }
        };

        if name.is_array {
            Some(self.array_of(&mapping))
        } else {
            Some(mapping)
        }
    }

    /// Looks up a store type for values of a given semantic type.
    ///
    /// JSON store types hold any type, so the mapping is rebound to `ty`.
    /// Other store types must already map values of `ty`.
    pub fn find_mapping_for(&self, ty: &Type, store_type: &str) -> Option<TypeMapping> {
        let mapping = self.find_mapping_by_store_type(store_type)?;

        if mapping.ty() == ty {
            Some(mapping)
        } else if mapping.kind().is_json() {
            Some(mapping.with_ty(ty.clone()))
        } else {
            None
        }
    }

    /// Widens an element mapping to an array of that element.
    pub fn array_of(&self, element: &TypeMapping) -> TypeMapping {
        TypeMapping::new_unchecked(
            MappingKind::Array(element.clone()),
            TypeMappingParameters::new(
                Type::array(element.ty().clone()),
                format!("{}[]", element.store_type()),
            ),
        )
    }

    /// Widens a range mapping to a multirange, or to an array of ranges on
    /// servers without multiranges.
    pub fn multirange_of(&self, range: &TypeMapping) -> TypeMapping {
        let name = range
            .store_type_base()
            .strip_suffix("range")
            .filter(|_| self.multiranges);

        match name {
            Some(prefix) => TypeMapping::new_unchecked(
                MappingKind::Multirange(range.clone()),
                TypeMappingParameters::new(
                    Type::array(range.ty().clone()),
                    format!("{prefix}multirange"),
                ),
            ),
            None => self.array_of(range),
        }
    }
}

fn scalar(kind: MappingKind, ty: Type, store_type: &str) -> TypeMapping {
    TypeMapping::new_unchecked(kind, TypeMappingParameters::new(ty, store_type))
}

fn precision(kind: MappingKind, ty: Type, store_type: &str) -> TypeMapping {
    TypeMapping::new_unchecked(
        kind,
        TypeMappingParameters::new(ty, store_type).postfix(StoreTypePostfix::Precision),
    )
}

fn range_of(element: &TypeMapping, store_type: &str) -> TypeMapping {
    TypeMapping::new_unchecked(
        MappingKind::Range(element.clone()),
        TypeMappingParameters::new(Type::range(element.ty().clone()), store_type),
    )
}
