use crate::{
    call::{DatePart, Member, MemberAccess},
    MemberTranslator, SqlExpressionFactory, Translation,
};

use pgtranslate_core::{
    diagnostics::Logger,
    stmt::{Expr, Type},
};

/// Translates date and time components of timestamps.
pub struct DateTimeMemberTranslator {
    factory: SqlExpressionFactory,
}

impl DateTimeMemberTranslator {
    pub fn new(factory: &SqlExpressionFactory) -> Self {
        DateTimeMemberTranslator {
            factory: factory.clone(),
        }
    }

    /// `date_part('field', x)::int`. Seconds are floored since `date_part`
    /// includes the fractional part.
    fn date_part(&self, instance: &Expr, part: DatePart) -> Expr {
        let factory = &self.factory;

        let mut date_part = factory.function(
            "date_part",
            vec![factory.constant(part.field()), instance.clone()],
            true,
            vec![false, true],
            Type::F64,
            factory.find_mapping(&Type::F64),
        );

        if part == DatePart::Second {
            date_part = factory.function(
                "floor",
                vec![date_part],
                true,
                vec![true],
                Type::F64,
                factory.find_mapping(&Type::F64),
            );
        }

        factory.convert(date_part, Type::I32, None)
    }
}

impl MemberTranslator for DateTimeMemberTranslator {
    fn translate(&self, access: &MemberAccess, _logger: &Logger) -> Translation {
        let Some(instance) = &access.instance else {
            return Translation::NotApplicable;
        };

        if !matches!(instance.ty(), Type::DateTime | Type::DateTimeOffset) {
            return Translation::NotApplicable;
        }

        match &access.member {
            Member::DatePart(part) => self.date_part(instance, *part).into(),
            Member::Date => self
                .factory
                .function(
                    "date_trunc",
                    vec![self.factory.constant("day"), instance.clone()],
                    true,
                    vec![false, true],
                    instance.ty().clone(),
                    instance.type_mapping().cloned(),
                )
                .into(),
            _ => Translation::NotApplicable,
        }
    }
}
