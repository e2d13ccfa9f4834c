//! Call-site descriptors handed to translators.
//!
//! The host resolves each method or member it meets into one of the
//! enumerations here once, while visiting the query. Translators match on
//! the resolved shape instead of comparing names.

mod aggregate;
pub use aggregate::{AggregateCall, AggregateMethod, EnumerableSource};

mod member;
pub use member::{DatePart, Member, MemberAccess, TimeSpanPart};

mod method;
pub use method::{DbFunction, Method, MethodCall};

/// The type a method or member is declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaringType {
    /// Methods every value has, such as `ToString`
    Object,

    /// Static string helpers, `String.Join` and `String.Concat`
    String,

    /// Database functions usable inside queries, see [`DbFunctions`](crate::DbFunctions)
    DbFunctions,

    /// Aggregate database functions usable inside queries
    AggregateDbFunctions,

    /// Any other type
    Other,
}
