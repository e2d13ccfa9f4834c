use crate::call::{AggregateCall, MemberAccess, MethodCall};

use pgtranslate_core::{diagnostics::Logger, stmt::Expr};

/// The outcome of offering a call-site to a translator.
///
/// Declining is not an error: it tells the provider to try the next
/// translator, and the host to evaluate on the client when nobody claims
/// the call.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    Translated(Expr),
    NotApplicable,
}

impl Translation {
    pub fn is_translated(&self) -> bool {
        matches!(self, Self::Translated(_))
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    pub fn into_expr(self) -> Option<Expr> {
        match self {
            Self::Translated(expr) => Some(expr),
            Self::NotApplicable => None,
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Self::Translated(expr) => Some(expr),
            Self::NotApplicable => None,
        }
    }

    #[track_caller]
    pub fn unwrap_translated(self) -> Expr {
        match self {
            Self::Translated(expr) => expr,
            Self::NotApplicable => panic!("expected `Translated`, found `NotApplicable`"),
        }
    }
}

impl From<Option<Expr>> for Translation {
    fn from(value: Option<Expr>) -> Self {
        match value {
            Some(expr) => Self::Translated(expr),
            None => Self::NotApplicable,
        }
    }
}

impl From<Expr> for Translation {
    fn from(value: Expr) -> Self {
        Self::Translated(value)
    }
}

/// Translates method calls.
pub trait MethodCallTranslator: Send + Sync {
    fn translate(&self, call: &MethodCall, logger: &Logger) -> Translation;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Translates member accesses.
pub trait MemberTranslator: Send + Sync {
    fn translate(&self, access: &MemberAccess, logger: &Logger) -> Translation;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Translates aggregate method calls over a grouping.
pub trait AggregateMethodCallTranslator: Send + Sync {
    fn translate(&self, call: &AggregateCall, logger: &Logger) -> Translation;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
