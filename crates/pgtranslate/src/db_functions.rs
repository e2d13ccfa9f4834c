use crate::call::DbFunction;

use pgtranslate_core::{Error, Result};

/// PostgreSQL functions a query can call through the `DbFunctions` type.
///
/// These only have meaning inside a translated query, where
/// [`DbFunctionsTranslator`](crate::translator::DbFunctionsTranslator) and
/// [`MiscAggregateMethodTranslator`](crate::translator::MiscAggregateMethodTranslator)
/// turn them into SQL. Evaluating one on the client always fails with
/// [`Error::function_on_client`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DbFunctions {
    _p: (),
}

impl DbFunctions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `match_expression ILIKE pattern`
    pub fn ilike(&self, _match_expression: &str, _pattern: &str) -> Result<bool> {
        Err(Error::function_on_client(DbFunction::ILike.name()))
    }

    /// `match_expression ILIKE pattern ESCAPE escape_character`
    pub fn ilike_with_escape(
        &self,
        _match_expression: &str,
        _pattern: &str,
        _escape_character: &str,
    ) -> Result<bool> {
        Err(Error::function_on_client(DbFunction::ILike.name()))
    }

    pub fn reverse(&self, _value: &str) -> Result<String> {
        Err(Error::function_on_client(DbFunction::Reverse.name()))
    }

    /// Row value comparison, `(a, b) > (c, d)`.
    pub fn greater_than<T>(&self, _a: &T, _b: &T) -> Result<bool> {
        Err(Error::function_on_client(DbFunction::GreaterThan.name()))
    }

    pub fn less_than<T>(&self, _a: &T, _b: &T) -> Result<bool> {
        Err(Error::function_on_client(DbFunction::LessThan.name()))
    }

    pub fn greater_than_or_equal<T>(&self, _a: &T, _b: &T) -> Result<bool> {
        Err(Error::function_on_client(DbFunction::GreaterThanOrEqual.name()))
    }

    pub fn less_than_or_equal<T>(&self, _a: &T, _b: &T) -> Result<bool> {
        Err(Error::function_on_client(DbFunction::LessThanOrEqual.name()))
    }

    pub fn array_agg<T>(&self, _input: impl IntoIterator<Item = T>) -> Result<Vec<T>> {
        Err(Error::function_on_client("ArrayAgg"))
    }

    pub fn json_agg<T>(&self, _input: impl IntoIterator<Item = T>) -> Result<String> {
        Err(Error::function_on_client("JsonAgg"))
    }

    pub fn jsonb_agg<T>(&self, _input: impl IntoIterator<Item = T>) -> Result<String> {
        Err(Error::function_on_client("JsonbAgg"))
    }

    pub fn range_agg<T>(&self, _input: impl IntoIterator<Item = T>) -> Result<Vec<T>> {
        Err(Error::function_on_client("RangeAgg"))
    }

    pub fn range_intersect_agg<T>(&self, _input: impl IntoIterator<Item = T>) -> Result<T> {
        Err(Error::function_on_client("RangeIntersectAgg"))
    }

    pub fn sum<T>(&self, _input: impl IntoIterator<Item = T>) -> Result<T> {
        Err(Error::function_on_client("Sum"))
    }

    pub fn average<T>(&self, _input: impl IntoIterator<Item = T>) -> Result<T> {
        Err(Error::function_on_client("Average"))
    }

    pub fn json_object_agg<K, V>(&self, _input: impl IntoIterator<Item = (K, V)>) -> Result<String> {
        Err(Error::function_on_client("JsonObjectAgg"))
    }

    pub fn jsonb_object_agg<K, V>(
        &self,
        _input: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String> {
        Err(Error::function_on_client("JsonbObjectAgg"))
    }
}
