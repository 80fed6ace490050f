//! Delivery-days sanitization.

use crate::types::Value;

/// Delivery estimates outside `0..=30` days are data-entry errors, not legitimate outliers.
const MAX_DELIVERY_DAYS: f64 = 30.0;

/// Normalize one `delivery_days` cell to a typed [`Value::Float64`].
///
/// Two textual special cases are rewritten before numeric parsing: `"Same Day"` → `0` and
/// `"1-2 days"` → `1.5` (the midpoint of the range). Unparsable values degrade to
/// [`Value::Null`], as do values below `0` or above `30`.
pub fn normalize_delivery_days(value: Value) -> Value {
    match value {
        Value::Float64(v) => bounded(v),
        Value::Utf8(s) => match s.trim() {
            "Same Day" => Value::Float64(0.0),
            "1-2 days" => Value::Float64(1.5),
            other => match other.parse::<f64>() {
                Ok(v) if v.is_finite() => bounded(v),
                _ => Value::Null,
            },
        },
        _ => Value::Null,
    }
}

fn bounded(v: f64) -> Value {
    if (0.0..=MAX_DELIVERY_DAYS).contains(&v) {
        Value::Float64(v)
    } else {
        Value::Null
    }
}
