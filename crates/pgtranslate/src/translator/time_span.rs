use crate::{
    call::{Member, MemberAccess},
    MemberTranslator, SqlExpressionFactory, Translation,
};

use pgtranslate_core::{diagnostics::Logger, stmt::Type};

/// Translates components of an interval, `floor(date_part('day', x))::int`.
pub struct TimeSpanMemberTranslator {
    factory: SqlExpressionFactory,
}

impl TimeSpanMemberTranslator {
    pub fn new(factory: &SqlExpressionFactory) -> Self {
        TimeSpanMemberTranslator {
            factory: factory.clone(),
        }
    }
}

impl MemberTranslator for TimeSpanMemberTranslator {
    fn translate(&self, access: &MemberAccess, _logger: &Logger) -> Translation {
        let factory = &self.factory;

        let (Some(instance), Member::TimeSpanPart(part)) = (&access.instance, &access.member) else {
            return Translation::NotApplicable;
        };

        if *instance.ty() != Type::TimeSpan {
            return Translation::NotApplicable;
        }

        let double = factory.find_mapping(&Type::F64);

        let date_part = factory.function(
            "date_part",
            vec![factory.constant(part.field()), instance.clone()],
            true,
            vec![false, true],
            Type::F64,
            double.clone(),
        );

        let floor = factory.function("floor", vec![date_part], true, vec![true], Type::F64, double);

        factory.convert(floor, Type::I32, None).into()
    }
}
