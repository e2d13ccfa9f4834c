use super::DeclaringType;

use pgtranslate_core::stmt::Expr;

/// A method call with translated arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// The instance the method is called on, `None` for static methods
    pub instance: Option<Expr>,

    pub method: Method,

    /// Translated arguments, excluding the instance
    pub arguments: Vec<Expr>,
}

/// Recognized methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `ToString()` on any instance
    ToString,

    DbFunction(DbFunction),

    /// Anything no translator recognizes
    Other,
}

/// Database functions that only exist inside translated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbFunction {
    /// `ILike(match, pattern)` or `ILike(match, pattern, escape)`
    ILike,

    Reverse,

    /// Row value comparisons, `(a, b) > (c, d)`
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl MethodCall {
    pub fn new(instance: Option<Expr>, method: Method, arguments: Vec<Expr>) -> MethodCall {
        MethodCall {
            instance,
            method,
            arguments,
        }
    }

    /// A static call, with no instance.
    pub fn function(method: Method, arguments: Vec<Expr>) -> MethodCall {
        MethodCall::new(None, method, arguments)
    }
}

impl Method {
    /// Resolves a method by where it is declared, its name and how many
    /// arguments it takes, not counting the instance.
    pub fn resolve(declaring_type: DeclaringType, name: &str, arity: usize) -> Method {
        use DbFunction::*;

        match (declaring_type, name, arity) {
            (_, "ToString", 0) => Method::ToString,
            (DeclaringType::DbFunctions, "ILike", 2 | 3) => Method::DbFunction(ILike),
            (DeclaringType::DbFunctions, "Reverse", 1) => Method::DbFunction(Reverse),
            (DeclaringType::DbFunctions, "GreaterThan", 2) => Method::DbFunction(GreaterThan),
            (DeclaringType::DbFunctions, "LessThan", 2) => Method::DbFunction(LessThan),
            (DeclaringType::DbFunctions, "GreaterThanOrEqual", 2) => {
                Method::DbFunction(GreaterThanOrEqual)
            }
            (DeclaringType::DbFunctions, "LessThanOrEqual", 2) => {
                Method::DbFunction(LessThanOrEqual)
            }
            _ => Method::Other,
        }
    }
}

impl DbFunction {
    /// The method name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::ILike => "ILike",
            Self::Reverse => "Reverse",
            Self::GreaterThan => "GreaterThan",
            Self::LessThan => "LessThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThanOrEqual => "LessThanOrEqual",
        }
    }
}
