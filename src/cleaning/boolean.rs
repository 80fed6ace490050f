//! Boolean coercion for the prime/festival flag columns.

use crate::types::Value;

/// Normalize one flag cell to a typed [`Value::Bool`].
///
/// Case-insensitive token table: `yes`/`y`/`1`/`true` map to `true`, `no`/`n`/`0`/`false` map to
/// `false`. A token outside the table degrades to [`Value::Null`]. The mapping is lossy on
/// purpose: an unrecognized token carries no usable truth value, and inventing one would be
/// worse than recording the cell as missing.
pub fn normalize_flag(value: Value) -> Value {
    match value {
        Value::Bool(b) => Value::Bool(b),
        Value::Utf8(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "1" | "true" => Value::Bool(true),
            "no" | "n" | "0" | "false" => Value::Bool(false),
            _ => Value::Null,
        },
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_flag;
    use crate::types::Value;

    fn flag(s: &str) -> Value {
        normalize_flag(Value::Utf8(s.to_string()))
    }

    #[test]
    fn truthy_tokens_map_to_true() {
        assert_eq!(flag("Y"), Value::Bool(true));
        assert_eq!(flag("yes"), Value::Bool(true));
        assert_eq!(flag("1"), Value::Bool(true));
        assert_eq!(flag("TRUE"), Value::Bool(true));
    }

    #[test]
    fn falsy_tokens_map_to_false() {
        assert_eq!(flag("0"), Value::Bool(false));
        assert_eq!(flag("No"), Value::Bool(false));
        assert_eq!(flag("n"), Value::Bool(false));
        assert_eq!(flag("false"), Value::Bool(false));
    }

    #[test]
    fn unrecognized_tokens_become_null() {
        assert_eq!(flag("maybe"), Value::Null);
        assert_eq!(flag("2"), Value::Null);
        assert_eq!(flag(""), Value::Null);
    }

    #[test]
    fn null_and_typed_bools_pass_through() {
        assert_eq!(normalize_flag(Value::Null), Value::Null);
        assert_eq!(normalize_flag(Value::Bool(true)), Value::Bool(true));
    }
}
