use crate::{
    call::{Member, MemberAccess},
    MemberTranslator, SqlExpressionFactory, Translation,
};

use pgtranslate_core::{diagnostics::Logger, stmt::Type};

/// Translates `Length` of a string to `length(s)`.
pub struct StringMemberTranslator {
    factory: SqlExpressionFactory,
}

impl StringMemberTranslator {
    pub fn new(factory: &SqlExpressionFactory) -> Self {
        StringMemberTranslator {
            factory: factory.clone(),
        }
    }
}

impl MemberTranslator for StringMemberTranslator {
    fn translate(&self, access: &MemberAccess, _logger: &Logger) -> Translation {
        let Some(instance) = &access.instance else {
            return Translation::NotApplicable;
        };

        if access.member != Member::Length || !instance.ty().is_string() {
            return Translation::NotApplicable;
        }

        self.factory
            .function(
                "length",
                vec![instance.clone()],
                true,
                vec![true],
                Type::I32,
                self.factory.find_mapping(&Type::I32),
            )
            .into()
    }
}
