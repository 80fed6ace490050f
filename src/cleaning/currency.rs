//! Currency/numeric normalization for the price column.

use crate::types::Value;

/// Normalize one `original_price_inr` cell to a typed [`Value::Float64`].
///
/// The rupee glyph and comma thousands separators are stripped before parsing, so both
/// `₹1,234.50` and `1,00,000` (Indian digit grouping) parse. Any residual non-numeric content
/// degrades the cell to [`Value::Null`] rather than raising. Rust's float parser accepts
/// `nan`/`inf` spellings, so non-finite results are degraded as well.
pub fn normalize_price(value: Value) -> Value {
    match value {
        Value::Float64(v) => Value::Float64(v),
        Value::Utf8(s) => {
            let stripped = s.replace('₹', "").replace(',', "");
            match stripped.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Value::Float64(v),
                _ => Value::Null,
            }
        }
        _ => Value::Null,
    }
}
