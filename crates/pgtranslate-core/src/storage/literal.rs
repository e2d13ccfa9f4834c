use super::{MappingKind, TypeMapping};
use crate::{stmt::Value, Result};

use chrono::TimeDelta;
use std::fmt::Write;

pub(super) fn generate(mapping: &TypeMapping, value: &Value) -> Result<String> {
    if value.is_null() {
        return Ok("NULL".to_string());
    }

    if let (MappingKind::Integer | MappingKind::Numeric, Some(literal)) =
        (mapping.kind(), integer(value))
    {
        return Ok(literal);
    }

    let literal = match (mapping.kind(), value) {
        (MappingKind::Boolean, Value::Bool(v)) => (if *v { "TRUE" } else { "FALSE" }).to_string(),
        (MappingKind::Numeric, Value::Decimal(v)) => v.clone(),
        (MappingKind::Float, Value::F32(v)) => format!("{}::real", float(f64::from(*v))),
        (MappingKind::Float, Value::F64(v)) => float(*v),
        (MappingKind::Text | MappingKind::Character, Value::Char(v)) => quote(&v.to_string()),
        (MappingKind::Text | MappingKind::Character | MappingKind::Regconfig, Value::String(v)) => {
            quote(v)
        }
        (MappingKind::Uuid, Value::Uuid(v)) => format!("'{v}'::uuid"),
        (MappingKind::Timestamp, Value::DateTime(v)) => {
            format!("TIMESTAMP '{}'", v.format("%Y-%m-%d %H:%M:%S%.f"))
        }
        (MappingKind::TimestampTz, Value::DateTimeOffset(v)) => {
            format!("TIMESTAMPTZ '{}'", v.format("%Y-%m-%d %H:%M:%S%.f%:z"))
        }
        (MappingKind::Date, Value::DateTime(v)) => format!("DATE '{}'", v.format("%Y-%m-%d")),
        (MappingKind::Interval, Value::TimeSpan(v)) => format!("INTERVAL '{}'", interval(*v)),
        (MappingKind::Bytea, Value::Bytes(v)) => {
            let mut hex = String::with_capacity(v.len() * 2);
            for byte in v {
                write!(hex, "{byte:02X}")?;
            }
            format!("BYTEA E'\\\\x{hex}'")
        }
        (MappingKind::Json, Value::String(v)) => format!("{}::json", quote(v)),
        (MappingKind::Jsonb, Value::String(v)) => format!("{}::jsonb", quote(v)),
        (MappingKind::Enum(name), Value::Enum(label) | Value::String(label)) => {
            format!("{}::{name}", quote(label))
        }
        (MappingKind::Array(element), Value::List(items)) => {
            let items = items
                .iter()
                .map(|item| element.generate_literal(item))
                .collect::<Result<Vec<_>>>()?;
            format!("ARRAY[{}]::{}", items.join(","), mapping.store_type())
        }
        // Ranges render through their constructor function so that bounds
        // keep their own literal rules. A null bound is unbounded.
        (MappingKind::Range(element), Value::Record(bounds)) if bounds.len() == 2 => {
            format!(
                "{}({}, {})",
                mapping.store_type(),
                element.generate_literal(&bounds[0])?,
                element.generate_literal(&bounds[1])?
            )
        }
        (MappingKind::Multirange(range), Value::List(ranges)) => {
            let ranges = ranges
                .iter()
                .map(|item| range.generate_literal(item))
                .collect::<Result<Vec<_>>>()?;
            format!("{}({})", mapping.store_type(), ranges.join(", "))
        }
        (_, value) => crate::bail!(
            "cannot render {value:?} as a literal of store type `{}`",
            mapping.store_type()
        ),
    };

    Ok(literal)
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn integer(value: &Value) -> Option<String> {
    Some(match value {
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        _ => return None,
    })
}

fn float(v: f64) -> String {
    if v.is_nan() {
        "'NaN'".to_string()
    } else if v == f64::INFINITY {
        "'Infinity'".to_string()
    } else if v == f64::NEG_INFINITY {
        "'-Infinity'".to_string()
    } else {
        v.to_string()
    }
}

/// `[-][d ]hh:mm:ss[.ffffff]`
fn interval(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let delta = delta.abs();

    let seconds = delta.num_seconds();
    let days = seconds / 86_400;
    let hours = seconds % 86_400 / 3_600;
    let minutes = seconds % 3_600 / 60;
    let seconds = seconds % 60;
    let micros = delta.subsec_nanos() / 1_000;

    let mut out = sign.to_string();

    if days != 0 {
        out.push_str(&format!("{days} "));
    }

    out.push_str(&format!("{hours:02}:{minutes:02}:{seconds:02}"));

    if micros != 0 {
        let fraction = format!("{micros:06}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    out
}
