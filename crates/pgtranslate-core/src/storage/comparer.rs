use crate::stmt::Value;

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Equality and hashing rules used for change tracking and key lookups.
///
/// Values the comparer considers equal always produce the same hash code.
/// Null is equal to null and to nothing else.
#[derive(Clone, Copy)]
pub struct ValueComparer {
    name: &'static str,
    equals: fn(&str, &str) -> bool,
    hash: fn(&str, &mut DefaultHasher),
}

impl ValueComparer {
    /// Structural equality over all values.
    pub const DEFAULT: ValueComparer = ValueComparer {
        name: "default",
        equals: |a, b| a == b,
        hash: |a, state| a.hash(state),
    };

    /// Equality for fixed-width `character` data: strings compare and hash
    /// after trailing whitespace is removed, matching how PostgreSQL pads
    /// and compares `character(n)` values.
    pub const CHARACTER: ValueComparer = ValueComparer {
        name: "character",
        equals: |a, b| a.trim_end() == b.trim_end(),
        hash: |a, state| a.trim_end().hash(state),
    };

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::String(a), Value::String(b)) => (self.equals)(a, b),
            (a, b) => a == b,
        }
    }

    pub fn hash_code(&self, value: &Value) -> u64 {
        let mut state = DefaultHasher::new();

        match value {
            Value::String(value) => (self.hash)(value, &mut state),
            value => value.hash_into(&mut state),
        }

        state.finish()
    }
}

impl PartialEq for ValueComparer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for ValueComparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueComparer").field(&self.name).finish()
    }
}

impl Default for ValueComparer {
    fn default() -> Self {
        Self::DEFAULT
    }
}
