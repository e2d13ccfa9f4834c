use super::{Formatter, ToSql};

use pgtranslate_core::{bail, stmt, Result};

impl ToSql for &stmt::ExprConstant {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let literal = match &self.type_mapping {
            Some(mapping) => mapping.generate_literal(&self.value)?,
            None if self.value.is_null() => "NULL".to_string(),
            None => bail!("constant {:?} has no type mapping", self.value),
        };

        fmt!(f, literal);
        Ok(())
    }
}
