//! Tolerant decoding of gram amounts.
//!
//! Stored records may be hand-edited or written by older versions, so numeric
//! fields are not trusted to be well-typed. Anything that is not a
//! non-negative number reads as zero instead of failing the whole collection.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces a JSON value to whole grams.
///
/// Non-negative numbers are truncated, numeric strings are parsed, and
/// everything else (null, negative, non-numeric) becomes zero.
pub fn coerce_grams(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).unwrap_or(u32::MAX)
            } else {
                n.as_f64().map(float_to_grams).unwrap_or(0)
            }
        }
        Value::String(s) => s.trim().parse::<f64>().map(float_to_grams).unwrap_or(0),
        _ => 0,
    }
}

fn float_to_grams(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        // `as` saturates at u32::MAX
        v.trunc() as u32
    } else {
        0
    }
}

pub(crate) fn grams<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_grams(&value))
}

/// Like [`grams`], but keeps "unset" distinct from zero: null and
/// non-numeric values read as `None`.
pub(crate) fn optional_grams<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let target = match &value {
        Value::Number(_) => Some(coerce_grams(&value)),
        Value::String(s) if s.trim().parse::<f64>().is_ok() => Some(coerce_grams(&value)),
        _ => None,
    };
    Ok(target)
}
