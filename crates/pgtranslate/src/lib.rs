//! Query translation for PostgreSQL.
//!
//! The host walks its query tree and offers each method call, member access
//! and aggregate call to the providers here. A provider asks its
//! translators in order; the first one to recognize the call-site returns
//! an SQL expression tree, and when none does the host evaluates the call
//! on the client.

pub mod call;

mod db_functions;
pub use db_functions::DbFunctions;

mod factory;
pub use factory::SqlExpressionFactory;

mod provider;
pub use provider::{
    AggregateMethodCallTranslatorProvider, MemberTranslatorProvider, MethodCallTranslatorProvider,
};

mod translate;
pub use translate::{
    AggregateMethodCallTranslator, MemberTranslator, MethodCallTranslator, Translation,
};

pub mod translator;

pub use pgtranslate_core::{
    bail, diagnostics, err, stmt, storage, Error, Options, Result, TypeMapping, TypeMappingSource,
};
pub use pgtranslate_sql::Serializer;
