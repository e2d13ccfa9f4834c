use crate::{
    call::{AggregateCall, AggregateMethod},
    AggregateMethodCallTranslator, SqlExpressionFactory, Translation,
};

use pgtranslate_core::{
    diagnostics::Logger,
    options::Version,
    stmt::{Expr, Type},
    Options, TypeMapping,
};

/// Translates string joins and the PostgreSQL aggregate helpers.
///
/// See <https://www.postgresql.org/docs/current/functions-aggregate.html>.
/// Every aggregate here returns null over zero rows, so all results are
/// nullable; null arguments never make the result null on their own.
pub struct MiscAggregateMethodTranslator {
    factory: SqlExpressionFactory,
    text: Option<TypeMapping>,
    supports_range_agg: bool,
}

impl MiscAggregateMethodTranslator {
    pub fn new(factory: &SqlExpressionFactory, options: &Options) -> Self {
        MiscAggregateMethodTranslator {
            text: factory.type_mapping_source().find_mapping_by_store_type("text"),
            factory: factory.clone(),
            supports_range_agg: options.supports(Version::new(14, 0)),
        }
    }

    /// `string_agg` skips nulls and returns null over zero rows, while a
    /// string join treats null as empty and returns an empty string.
    fn translate_string_agg(&self, call: &AggregateCall, selector: &Expr) -> Translation {
        let factory = &self.factory;

        let separator = match call.method {
            AggregateMethod::StringJoin => match call.arguments.first() {
                Some(separator) => separator.clone(),
                None => return Translation::NotApplicable,
            },
            _ => factory.constant(""),
        };

        let selector = if selector.is_non_nullable_column() {
            selector.clone()
        } else {
            factory.coalesce(selector.clone(), factory.constant(""))
        };

        // string_agg returns text even over varchar(n) input
        let string_agg = factory.aggregate_function(
            "string_agg",
            vec![selector, separator],
            &call.source,
            true,
            vec![false, true],
            Type::String,
            self.text.clone(),
        );

        factory.coalesce(string_agg, factory.constant("")).into()
    }

    fn aggregate(
        &self,
        name: &str,
        call: &AggregateCall,
        selector: &Expr,
        ty: Type,
        mapping: Option<TypeMapping>,
    ) -> Translation {
        self.factory
            .aggregate_function(
                name,
                vec![selector.clone()],
                &call.source,
                true,
                vec![false],
                ty,
                mapping,
            )
            .into()
    }

    /// `json_object_agg(key, value)` takes the key and value from a
    /// two-element row value selector.
    fn translate_object_agg(&self, call: &AggregateCall, selector: &Expr, jsonb: bool) -> Translation {
        let Some(row) = selector.as_row_value() else {
            return Translation::NotApplicable;
        };

        let [keys, values] = &row.values[..] else {
            return Translation::NotApplicable;
        };

        let (name, store_type) = if jsonb {
            ("jsonb_object_agg", "jsonb")
        } else {
            ("json_object_agg", "json")
        };

        let mapping = self
            .factory
            .type_mapping_source()
            .find_mapping_for(&call.return_type, store_type);

        self.factory
            .aggregate_function(
                name,
                vec![keys.clone(), values.clone()],
                &call.source,
                true,
                vec![false, false],
                call.return_type.clone(),
                mapping,
            )
            .into()
    }
}

impl AggregateMethodCallTranslator for MiscAggregateMethodTranslator {
    fn translate(&self, call: &AggregateCall, logger: &Logger) -> Translation {
        use AggregateMethod::*;

        let Some(selector) = &call.source.selector else {
            return Translation::NotApplicable;
        };

        let source = self.factory.type_mapping_source();

        match call.method {
            StringJoin | StringConcat => self.translate_string_agg(call, selector),
            ArrayAgg => {
                let ty = Type::array(selector.ty().clone());
                let mapping = selector
                    .type_mapping()
                    .map(|element| source.array_of(element));
                self.aggregate("array_agg", call, selector, ty, mapping)
            }
            JsonAgg | JsonbAgg => {
                let ty = Type::array(selector.ty().clone());
                let (name, store_type) = if call.method == JsonbAgg {
                    ("jsonb_agg", "jsonb")
                } else {
                    ("json_agg", "json")
                };
                let mapping = source.find_mapping_for(&ty, store_type);
                self.aggregate(name, call, selector, ty, mapping)
            }
            RangeAgg if !self.supports_range_agg => {
                logger.trace(format_args!(
                    "range_agg requires PostgreSQL 14; leaving the aggregate to the client"
                ));
                Translation::NotApplicable
            }
            RangeAgg => {
                let ty = Type::array(selector.ty().clone());
                let mapping = source.find_mapping(&ty);
                self.aggregate("range_agg", call, selector, ty, mapping)
            }
            RangeIntersectAgg | Sum | Average => {
                let name = match call.method {
                    RangeIntersectAgg => "range_intersect_agg",
                    Sum => "sum",
                    _ => "avg",
                };
                let mapping = selector.type_mapping().cloned();
                self.aggregate(name, call, selector, selector.ty().clone(), mapping)
            }
            JsonObjectAgg => self.translate_object_agg(call, selector, false),
            JsonbObjectAgg => self.translate_object_agg(call, selector, true),
            Other => Translation::NotApplicable,
        }
    }
}
