use super::DeclaringType;

use pgtranslate_core::stmt::{AggregateSource, Expr, Ordering, Type};

/// An aggregate method applied to a grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateCall {
    pub method: AggregateMethod,

    /// The rows being aggregated
    pub source: EnumerableSource,

    /// Translated arguments besides the source, such as a separator
    pub arguments: Vec<Expr>,

    /// The semantic type the call evaluates to
    pub return_type: Type,
}

/// The rows an aggregate runs over: a selector per row plus the distinct
/// flag, filter and ordering applied to the grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumerableSource {
    /// The translated selector. `None` when the selector could not be
    /// translated to SQL.
    pub selector: Option<Expr>,

    pub distinct: bool,

    pub predicate: Option<Expr>,

    pub orderings: Vec<Ordering>,
}

/// Recognized aggregate methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateMethod {
    /// `String.Join(separator, values)`
    StringJoin,

    /// `String.Concat(values)`
    StringConcat,

    ArrayAgg,
    JsonAgg,
    JsonbAgg,
    RangeAgg,
    RangeIntersectAgg,
    Sum,
    Average,

    /// Aggregates `(key, value)` pairs into a JSON object
    JsonObjectAgg,
    JsonbObjectAgg,

    Other,
}

impl AggregateCall {
    pub fn new(
        method: AggregateMethod,
        source: EnumerableSource,
        arguments: Vec<Expr>,
        return_type: impl Into<Type>,
    ) -> AggregateCall {
        AggregateCall {
            method,
            source,
            arguments,
            return_type: return_type.into(),
        }
    }
}

impl EnumerableSource {
    pub fn new(selector: impl Into<Expr>) -> EnumerableSource {
        EnumerableSource {
            selector: Some(selector.into()),
            ..EnumerableSource::default()
        }
    }

    /// A source whose selector stayed on the client.
    pub fn untranslated() -> EnumerableSource {
        EnumerableSource::default()
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn filter(mut self, predicate: impl Into<Expr>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<Expr>, ascending: bool) -> Self {
        self.orderings.push(Ordering {
            expr: expr.into(),
            ascending,
        });
        self
    }

    /// The distinct flag, filter and ordering to carry onto an aggregate
    /// function call.
    pub fn aggregate_source(&self) -> AggregateSource {
        AggregateSource {
            distinct: self.distinct,
            predicate: self.predicate.clone().map(Box::new),
            orderings: self.orderings.clone(),
        }
    }
}

impl AggregateMethod {
    /// Resolves an aggregate method by where it is declared, its name and
    /// how many arguments it takes besides the source.
    pub fn resolve(declaring_type: DeclaringType, name: &str, arity: usize) -> AggregateMethod {
        use AggregateMethod::*;

        match (declaring_type, name, arity) {
            (DeclaringType::String, "Join", 1) => StringJoin,
            (DeclaringType::String, "Concat", 0) => StringConcat,
            (DeclaringType::AggregateDbFunctions, name, 0) => match name {
                "ArrayAgg" => ArrayAgg,
                "JsonAgg" => JsonAgg,
                "JsonbAgg" => JsonbAgg,
                "RangeAgg" => RangeAgg,
                "RangeIntersectAgg" => RangeIntersectAgg,
                "Sum" => Sum,
                "Average" => Average,
                "JsonObjectAgg" => JsonObjectAgg,
                "JsonbObjectAgg" => JsonbObjectAgg,
                _ => Other,
            },
            _ => Other,
        }
    }
}
