#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod expr;
mod value;

use pgtranslate_core::{stmt::Expr, Result};

/// Renders expression fragments to SQL text.
///
/// Only expressions are serialized; statements are assembled by the host.
/// Constants render as literals through their type mapping, so the output
/// has no bind parameters and is suitable for diagnostics.
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn serialize(&self, expr: &Expr) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        expr.to_sql(&mut fmt)?;

        Ok(ret)
    }
}
