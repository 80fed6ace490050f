//! Customer-rating normalization onto a fixed 1.0–5.0 scale.

use crate::types::Value;

const SCALE_MAX: f64 = 5.0;
const SCALE_MIN: f64 = 1.0;

/// Normalize one `customer_rating` cell to a typed [`Value::Float64`] in `[1.0, 5.0]`.
///
/// Accepted shapes, after lower-casing:
///
/// - `x/y` fractions (`"3/5"`, `"2.5/5.0"`) rescaled via `x / y * 5.0`; a non-numeric part, a
///   zero denominator or a non-finite result degrades to [`Value::Null`]
/// - anything else is stripped down to ASCII digits and `.` (`"4 stars"` → `"4"`) and parsed;
///   an empty or unparsable remainder degrades to `Null`
///
/// Parsed values are clamped into the scale: `"6/5"` comes out as `5.0`, `"0.5"` as `1.0`.
/// Missing cells stay missing and are unaffected by clamping.
pub fn normalize_rating(value: Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Float64(v) => Value::Float64(v.clamp(SCALE_MIN, SCALE_MAX)),
        Value::Utf8(s) => parse_rating(&s.to_lowercase())
            .map(|v| Value::Float64(v.clamp(SCALE_MIN, SCALE_MAX)))
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn parse_rating(s: &str) -> Option<f64> {
    if s.contains('/') {
        let mut parts = s.splitn(2, '/');
        let numerator: f64 = parts.next()?.trim().parse().ok()?;
        let denominator: f64 = parts.next()?.trim().parse().ok()?;
        let rescaled = numerator / denominator * SCALE_MAX;
        return rescaled.is_finite().then_some(rescaled);
    }

    let digits: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    let parsed: f64 = digits.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}
