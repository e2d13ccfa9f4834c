use crate::{
    call::{Member, MemberAccess},
    MemberTranslator, SqlExpressionFactory, Translation,
};

use pgtranslate_core::{
    diagnostics::Logger,
    stmt::{Expr, Type},
    storage::MappingKind,
};

/// Translates the length of a PostgreSQL array.
pub struct ArrayTranslator {
    factory: SqlExpressionFactory,

    /// Redshift has no `cardinality`
    use_redshift: bool,
}

impl ArrayTranslator {
    pub fn new(factory: &SqlExpressionFactory, use_redshift: bool) -> Self {
        ArrayTranslator {
            factory: factory.clone(),
            use_redshift,
        }
    }
}

/// Arrays stored as PostgreSQL arrays. Arrays inside JSON documents are
/// handled by the JSON translator.
fn is_array(expr: &Expr) -> bool {
    match expr.type_mapping() {
        Some(mapping) => matches!(mapping.kind(), MappingKind::Array(_)),
        None => expr.ty().is_array(),
    }
}

impl MemberTranslator for ArrayTranslator {
    fn translate(&self, access: &MemberAccess, _logger: &Logger) -> Translation {
        let Some(instance) = &access.instance else {
            return Translation::NotApplicable;
        };

        if !matches!(access.member, Member::Length | Member::Count) || !is_array(instance) {
            return Translation::NotApplicable;
        }

        let int = self.factory.find_mapping(&Type::I32);

        if self.use_redshift {
            self.factory
                .function(
                    "array_length",
                    vec![instance.clone(), self.factory.constant(1)],
                    true,
                    vec![true, false],
                    Type::I32,
                    int,
                )
                .into()
        } else {
            self.factory
                .function(
                    "cardinality",
                    vec![instance.clone()],
                    true,
                    vec![true],
                    Type::I32,
                    int,
                )
                .into()
        }
    }
}
