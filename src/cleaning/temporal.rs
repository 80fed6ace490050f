//! Order-date normalization.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::Value;

/// Candidate formats, tried in order. Day-before-month renderings come first so that an
/// ambiguous string like `05/01/2025` resolves to 5 January; ISO, month-name and month-first
/// renderings follow as fallbacks for strings a day-first read cannot satisfy.
const DATE_FORMATS: &[&str] = &[
    // Two-digit-year formats sit before their four-digit twins: %y rejects a four-digit year
    // outright, while %Y would swallow a two-digit one as year 25 AD.
    "%d/%m/%y",
    "%d-%m-%y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%m/%d/%Y",
    "%m-%d-%Y",
];

/// Formats carrying a time component; the time is discarded after parsing.
const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Normalize one `order_date` cell to a typed [`Value::Date`].
///
/// Already-typed dates pass through; any string that no candidate format accepts degrades to
/// [`Value::Null`]. This is a per-value recoverable failure and never aborts the column.
pub fn normalize_order_date(value: Value) -> Value {
    match value {
        Value::Date(d) => Value::Date(d),
        Value::Utf8(s) => parse_date(&s).map(Value::Date).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::normalize_order_date;
    use crate::types::Value;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Value {
        Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn ambiguous_strings_parse_day_first() {
        assert_eq!(
            normalize_order_date(Value::Utf8("05/01/2025".to_string())),
            date(2025, 1, 5)
        );
        assert_eq!(
            normalize_order_date(Value::Utf8("02-03-2024".to_string())),
            date(2024, 3, 2)
        );
        assert_eq!(
            normalize_order_date(Value::Utf8("05/01/25".to_string())),
            date(2025, 1, 5)
        );
    }

    #[test]
    fn unambiguous_month_first_still_parses() {
        // Day-first cannot read month 25, so the month-first fallback applies.
        assert_eq!(
            normalize_order_date(Value::Utf8("05/25/2025".to_string())),
            date(2025, 5, 25)
        );
    }

    #[test]
    fn iso_and_month_name_formats_parse() {
        assert_eq!(
            normalize_order_date(Value::Utf8("2025-03-15".to_string())),
            date(2025, 3, 15)
        );
        assert_eq!(
            normalize_order_date(Value::Utf8("15 Mar 2025".to_string())),
            date(2025, 3, 15)
        );
        assert_eq!(
            normalize_order_date(Value::Utf8("March 15, 2025".to_string())),
            date(2025, 3, 15)
        );
    }

    #[test]
    fn datetime_strings_keep_only_the_date() {
        assert_eq!(
            normalize_order_date(Value::Utf8("2025-03-15 10:30:00".to_string())),
            date(2025, 3, 15)
        );
    }

    #[test]
    fn unparsable_strings_become_null() {
        assert_eq!(
            normalize_order_date(Value::Utf8("not a date".to_string())),
            Value::Null
        );
        assert_eq!(
            normalize_order_date(Value::Utf8("32/13/2025".to_string())),
            Value::Null
        );
    }

    #[test]
    fn null_and_typed_dates_pass_through() {
        assert_eq!(normalize_order_date(Value::Null), Value::Null);
        assert_eq!(normalize_order_date(date(2024, 12, 31)), date(2024, 12, 31));
    }
}
