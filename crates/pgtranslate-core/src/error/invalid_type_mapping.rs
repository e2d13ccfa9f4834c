use super::Error;

/// Error when a type mapping is configured with parameters its store type
/// cannot represent.
///
/// This occurs when:
/// - Precision or scale is given for a store type that takes neither (`boolean(4)`)
/// - A size is given for a store type that is not sized
/// - A scale is given without a precision
/// - A fixed-width type is declared with a zero width
///
/// These errors are raised while the model is built, never while a query is
/// being translated.
#[derive(Debug)]
pub(super) struct InvalidTypeMapping {
    store_type: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidTypeMapping {}

impl core::fmt::Display for InvalidTypeMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid type mapping for store type '{}': {}",
            self.store_type, self.message
        )
    }
}

impl Error {
    /// Creates an invalid type mapping error for the given store type.
    pub fn invalid_type_mapping(
        store_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidTypeMapping(InvalidTypeMapping {
            store_type: store_type.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid type mapping error.
    pub fn is_invalid_type_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTypeMapping(_))
    }
}
