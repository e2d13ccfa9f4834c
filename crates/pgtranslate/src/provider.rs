use crate::{
    call::{AggregateCall, MemberAccess, MethodCall},
    translator::{
        ArrayTranslator, CastableTypes, DateTimeMemberTranslator, DbFunctionsTranslator,
        JsonPocoTranslator, MiscAggregateMethodTranslator, ObjectToStringTranslator,
        StringMemberTranslator, TimeSpanMemberTranslator,
    },
    AggregateMethodCallTranslator, MemberTranslator, MethodCallTranslator, SqlExpressionFactory,
    Translation,
};

use pgtranslate_core::{diagnostics::Logger, Options};
use pgtranslate_sql::Serializer;

/// Offers method calls to each registered translator in order. The first
/// translator to produce an expression wins.
pub struct MethodCallTranslatorProvider {
    translators: Vec<Box<dyn MethodCallTranslator>>,
}

/// Offers member accesses to each registered translator in order.
pub struct MemberTranslatorProvider {
    translators: Vec<Box<dyn MemberTranslator>>,
}

/// Offers aggregate calls to each registered translator in order.
pub struct AggregateMethodCallTranslatorProvider {
    translators: Vec<Box<dyn AggregateMethodCallTranslator>>,
}

impl MethodCallTranslatorProvider {
    pub fn new(factory: &SqlExpressionFactory, _options: &Options) -> Self {
        Self::from_translators(vec![
            Box::new(ObjectToStringTranslator::new(factory, CastableTypes::default())),
            Box::new(DbFunctionsTranslator::new(factory)),
        ])
    }

    pub fn from_translators(translators: Vec<Box<dyn MethodCallTranslator>>) -> Self {
        Self { translators }
    }

    /// Registers translators ahead of the existing ones, so plugins get the
    /// first chance at every call.
    pub fn add_translators(
        mut self,
        translators: impl IntoIterator<Item = Box<dyn MethodCallTranslator>>,
    ) -> Self {
        self.translators.splice(0..0, translators);
        self
    }

    pub fn translators(&self) -> impl ExactSizeIterator<Item = &Box<dyn MethodCallTranslator>> {
        self.translators.iter()
    }

    pub fn translate(&self, call: &MethodCall, logger: &Logger) -> Translation {
        for translator in &self.translators {
            let translation = translator.translate(call, logger);

            if translation.is_translated() {
                log_translated(logger, translator.name(), &call.method, &translation);
                return translation;
            }
        }

        logger.trace(format_args!("no translator for method call {:?}", call.method));
        Translation::NotApplicable
    }
}

impl MemberTranslatorProvider {
    /// The JSON translator runs before the string one: a string property
    /// inside a document needs its text extracted before `length` applies.
    pub fn new(factory: &SqlExpressionFactory, options: &Options) -> Self {
        Self::from_translators(vec![
            Box::new(ArrayTranslator::new(factory, options.use_redshift)),
            Box::new(DateTimeMemberTranslator::new(factory)),
            Box::new(JsonPocoTranslator::new(factory)),
            Box::new(StringMemberTranslator::new(factory)),
            Box::new(TimeSpanMemberTranslator::new(factory)),
        ])
    }

    pub fn from_translators(translators: Vec<Box<dyn MemberTranslator>>) -> Self {
        Self { translators }
    }

    /// Registers translators ahead of the existing ones.
    pub fn add_translators(
        mut self,
        translators: impl IntoIterator<Item = Box<dyn MemberTranslator>>,
    ) -> Self {
        self.translators.splice(0..0, translators);
        self
    }

    pub fn translators(&self) -> impl ExactSizeIterator<Item = &Box<dyn MemberTranslator>> {
        self.translators.iter()
    }

    pub fn translate(&self, access: &MemberAccess, logger: &Logger) -> Translation {
        for translator in &self.translators {
            let translation = translator.translate(access, logger);

            if translation.is_translated() {
                log_translated(logger, translator.name(), access.member.name(), &translation);
                return translation;
            }
        }

        logger.trace(format_args!(
            "no translator for member `{}`",
            access.member.name()
        ));
        Translation::NotApplicable
    }
}

impl AggregateMethodCallTranslatorProvider {
    pub fn new(factory: &SqlExpressionFactory, options: &Options) -> Self {
        Self::from_translators(vec![Box::new(MiscAggregateMethodTranslator::new(
            factory, options,
        ))])
    }

    pub fn from_translators(translators: Vec<Box<dyn AggregateMethodCallTranslator>>) -> Self {
        Self { translators }
    }

    /// Registers translators ahead of the existing ones.
    pub fn add_translators(
        mut self,
        translators: impl IntoIterator<Item = Box<dyn AggregateMethodCallTranslator>>,
    ) -> Self {
        self.translators.splice(0..0, translators);
        self
    }

    pub fn translators(
        &self,
    ) -> impl ExactSizeIterator<Item = &Box<dyn AggregateMethodCallTranslator>> {
        self.translators.iter()
    }

    pub fn translate(&self, call: &AggregateCall, logger: &Logger) -> Translation {
        for translator in &self.translators {
            let translation = translator.translate(call, logger);

            if translation.is_translated() {
                log_translated(logger, translator.name(), &call.method, &translation);
                return translation;
            }
        }

        logger.trace(format_args!(
            "no translator for aggregate call {:?}",
            call.method
        ));
        Translation::NotApplicable
    }
}

fn log_translated(
    logger: &Logger,
    translator: &str,
    call: impl std::fmt::Debug,
    translation: &Translation,
) {
    if !logger.is_debug_enabled() {
        return;
    }

    let Some(expr) = translation.as_expr() else {
        return;
    };

    match Serializer::postgresql().serialize(expr) {
        Ok(sql) => logger.debug(format_args!("{translator} translated {call:?} to `{sql}`")),
        Err(err) => logger.warn(format_args!(
            "{translator} translated {call:?} to an expression that cannot be rendered: {err}"
        )),
    }
}
