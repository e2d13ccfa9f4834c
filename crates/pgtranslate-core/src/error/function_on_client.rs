use super::Error;

/// Error when a database function is evaluated in memory.
///
/// Functions on `DbFunctions` only have a server-side meaning. They are
/// recognized by the translators when they appear inside a query; calling
/// them directly always fails with this error.
#[derive(Debug)]
pub(super) struct FunctionOnClient {
    function: Box<str>,
}

impl std::error::Error for FunctionOnClient {}

impl core::fmt::Display for FunctionOnClient {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "the '{}' method is not supported because the query has switched to client-evaluation; \
             database functions can only be used inside translated queries",
            self.function
        )
    }
}

impl Error {
    /// Creates the error returned when the database function `function` is
    /// evaluated outside of a translated query.
    pub fn function_on_client(function: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FunctionOnClient(FunctionOnClient {
            function: function.into().into(),
        }))
    }

    /// Returns `true` if this error is a client-evaluated database function error.
    pub fn is_function_on_client(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FunctionOnClient(_))
    }
}
