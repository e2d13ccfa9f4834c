//! The PostgreSQL translators registered by the providers.

mod array;
pub use array::ArrayTranslator;

mod date_time;
pub use date_time::DateTimeMemberTranslator;

mod db_functions;
pub use db_functions::DbFunctionsTranslator;

mod json_poco;
pub use json_poco::JsonPocoTranslator;

mod misc_aggregate;
pub use misc_aggregate::MiscAggregateMethodTranslator;

mod object_to_string;
pub use object_to_string::{CastableTypes, ObjectToStringTranslator};

mod string_member;
pub use string_member::StringMemberTranslator;

mod time_span;
pub use time_span::TimeSpanMemberTranslator;
