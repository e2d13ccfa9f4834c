pub mod diagnostics;

mod error;
pub use error::{Error, IntoError};

pub mod options;
pub use options::Options;

pub mod stmt;

pub mod storage;
pub use storage::{TypeMapping, TypeMappingSource};

/// A Result type alias that uses pgtranslate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
