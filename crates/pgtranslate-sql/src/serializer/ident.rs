use super::{Formatter, ToSql};

use pgtranslate_core::Result;

/// An identifier, double-quoted unless it is a plain lowercase name that is
/// not a reserved keyword.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let name = self.0.as_ref();

        if is_plain(name) {
            f.dst.push_str(name);
        } else {
            f.dst.push('"');
            f.dst.push_str(&name.replace('"', "\"\""));
            f.dst.push('"');
        }

        Ok(())
    }
}

fn is_plain(name: &str) -> bool {
    let mut chars = name.chars();

    matches!(chars.next(), Some('a'..='z' | '_'))
        && chars.all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
        && RESERVED.binary_search(&name).is_err()
}

/// PostgreSQL keywords that cannot be used as a bare column or table name.
/// Sorted.
const RESERVED: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "asymmetric",
    "authorization", "binary", "both", "case", "cast", "check", "collate", "collation", "column",
    "concurrently", "constraint", "create", "cross", "current_catalog", "current_date",
    "current_role", "current_schema", "current_time", "current_timestamp", "current_user",
    "default", "deferrable", "desc", "distinct", "do", "else", "end", "except", "false", "fetch",
    "for", "foreign", "freeze", "from", "full", "grant", "group", "having", "ilike", "in",
    "initially", "inner", "intersect", "into", "is", "isnull", "join", "lateral", "leading",
    "left", "like", "limit", "localtime", "localtimestamp", "natural", "not", "notnull", "null",
    "offset", "on", "only", "or", "order", "outer", "overlaps", "placing", "primary",
    "references", "returning", "right", "select", "session_user", "similar", "some", "symmetric",
    "system_user", "table", "tablesample", "then", "to", "trailing", "true", "union", "unique",
    "user", "using", "variadic", "verbose", "when", "where", "window", "with",
];
