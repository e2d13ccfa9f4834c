use crate::{
    call::{Method, MethodCall},
    MethodCallTranslator, SqlExpressionFactory, Translation,
};

use indexmap::IndexSet;
use pgtranslate_core::{
    diagnostics::Logger,
    stmt::{CaseWhen, Expr, Type},
    storage::MappingKind,
    TypeMapping,
};

/// Translates `ToString()` on a value.
///
/// Booleans become a `CASE` producing `'False'` or `'True'`. Types in the
/// castable table, and enums stored as PostgreSQL enums, are cast to
/// `text`. Everything else is left to the client.
pub struct ObjectToStringTranslator {
    factory: SqlExpressionFactory,
    text: Option<TypeMapping>,
    castable: CastableTypes,
}

/// Semantic types whose PostgreSQL text cast matches the host's string
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastableTypes {
    types: IndexSet<Type>,
}

impl ObjectToStringTranslator {
    pub fn new(factory: &SqlExpressionFactory, castable: CastableTypes) -> Self {
        ObjectToStringTranslator {
            text: factory.type_mapping_source().find_mapping_by_store_type("text"),
            factory: factory.clone(),
            castable,
        }
    }

    fn translate_bool(&self, instance: &Expr) -> Expr {
        let factory = &self.factory;
        let when_false = CaseWhen::new(
            factory.equal(instance.clone(), factory.constant(false)),
            factory.constant("False"),
        );

        // A nullable column must map null to null rather than fall through
        // to the default branch.
        if instance.is_nullable_column() {
            let when_true = CaseWhen::new(
                factory.equal(instance.clone(), factory.constant(true)),
                factory.constant("True"),
            );

            factory.case(vec![when_false, when_true], Some(Expr::null()))
        } else {
            factory.case(vec![when_false], Some(factory.constant("True")))
        }
    }

    fn is_castable(&self, instance: &Expr) -> bool {
        if self.castable.contains(instance.ty()) {
            return true;
        }

        instance.ty().is_enum()
            && instance
                .type_mapping()
                .is_some_and(|mapping| matches!(mapping.kind(), MappingKind::Enum(_)))
    }
}

impl MethodCallTranslator for ObjectToStringTranslator {
    fn translate(&self, call: &MethodCall, _logger: &Logger) -> Translation {
        let Some(instance) = &call.instance else {
            return Translation::NotApplicable;
        };

        if call.method != Method::ToString || !call.arguments.is_empty() {
            return Translation::NotApplicable;
        }

        if instance.ty().is_bool() {
            return self.translate_bool(instance).into();
        }

        if self.is_castable(instance) {
            return self
                .factory
                .convert(instance.clone(), Type::String, self.text.clone())
                .into();
        }

        Translation::NotApplicable
    }
}

impl CastableTypes {
    pub fn new(types: impl IntoIterator<Item = Type>) -> CastableTypes {
        CastableTypes {
            types: types.into_iter().collect(),
        }
    }

    /// Returns a copy of the table that also holds `ty`.
    pub fn with(&self, ty: Type) -> CastableTypes {
        let mut types = self.types.clone();
        types.insert(ty);
        CastableTypes { types }
    }

    pub fn contains(&self, ty: &Type) -> bool {
        self.types.contains(ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.iter()
    }
}

impl Default for CastableTypes {
    fn default() -> Self {
        CastableTypes::new([
            Type::I32,
            Type::I64,
            Type::DateTime,
            Type::Uuid,
            Type::Bool,
            Type::U8,
            Type::F64,
            Type::DateTimeOffset,
            Type::Char,
            Type::I16,
            Type::F32,
            Type::Decimal,
            Type::TimeSpan,
            Type::U32,
            Type::U16,
            Type::U64,
            Type::I8,
        ])
    }
}
