//! Categorical canonicalization for city, category and payment-method columns.
//!
//! All three columns share one algorithm: coerce the cell to its string form, lower-case it,
//! look it up in the column's synonym table, and title-case unmapped values. The synonym data
//! lives in static tables, separate from the lookup/apply logic, so new spellings are a
//! one-line addition.

use crate::types::Value;

/// An immutable mapping from lower-cased synonym to canonical spelling.
#[derive(Debug, Clone, Copy)]
pub struct SynonymTable {
    entries: &'static [(&'static str, &'static str)],
}

impl SynonymTable {
    /// Look up the canonical spelling for a lower-cased key.
    pub fn canonical(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(synonym, _)| *synonym == key)
            .map(|(_, canonical)| *canonical)
    }
}

/// Synonyms for `customer_city`.
pub static CITY_SYNONYMS: SynonymTable = SynonymTable {
    entries: &[
        ("bangalore", "Bengaluru"),
        ("bengaluru", "Bengaluru"),
        ("mumbai", "Mumbai"),
        ("bombay", "Mumbai"),
        ("delhi", "Delhi"),
        ("new delhi", "Delhi"),
    ],
};

/// Synonyms for `category`.
pub static CATEGORY_SYNONYMS: SynonymTable = SynonymTable {
    entries: &[
        ("electronics", "Electronics"),
        ("electronic", "Electronics"),
        ("electronics & accessories", "Electronics"),
        ("electronicss", "Electronics"),
    ],
};

/// Synonyms for `payment_method`.
pub static PAYMENT_SYNONYMS: SynonymTable = SynonymTable {
    entries: &[
        ("upi", "UPI"),
        ("phonepe", "UPI"),
        ("googlepay", "UPI"),
        ("credit card", "Credit Card"),
        ("credit_card", "Credit Card"),
        ("cc", "Credit Card"),
        ("cash on delivery", "Cash on Delivery"),
        ("cod", "Cash on Delivery"),
        ("c.o.d", "Cash on Delivery"),
    ],
};

/// Canonicalize one `customer_city` cell.
pub fn canonicalize_city(value: Value) -> Value {
    canonicalize(value, &CITY_SYNONYMS, false)
}

/// Canonicalize one `category` cell. Surrounding whitespace is trimmed before mapping.
pub fn canonicalize_category(value: Value) -> Value {
    canonicalize(value, &CATEGORY_SYNONYMS, true)
}

/// Canonicalize one `payment_method` cell.
pub fn canonicalize_payment_method(value: Value) -> Value {
    canonicalize(value, &PAYMENT_SYNONYMS, false)
}

/// The shared algorithm. String coercion is unconditional, so a missing cell passes through as
/// the `"Nan"` bucket instead of staying missing. Mapped synonyms keep their canonical spelling
/// verbatim (`UPI`, `Cash on Delivery`); unmapped values pass through title-cased rather than
/// being treated as errors.
fn canonicalize(value: Value, table: &SynonymTable, trim: bool) -> Value {
    let mut lowered = value.coerce_to_string().to_lowercase();
    if trim {
        lowered = lowered.trim().to_string();
    }
    match table.canonical(&lowered) {
        Some(canonical) => Value::Utf8(canonical.to_string()),
        None => Value::Utf8(title_case(&lowered)),
    }
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        canonicalize_category, canonicalize_city, canonicalize_payment_method, title_case,
    };
    use crate::types::Value;

    fn utf8(s: &str) -> Value {
        Value::Utf8(s.to_string())
    }

    #[test]
    fn city_synonyms_map_case_insensitively() {
        assert_eq!(canonicalize_city(utf8("BANGALORE")), utf8("Bengaluru"));
        assert_eq!(canonicalize_city(utf8("bombay")), utf8("Mumbai"));
        assert_eq!(canonicalize_city(utf8("new delhi")), utf8("Delhi"));
    }

    #[test]
    fn unmapped_cities_pass_through_title_cased() {
        assert_eq!(canonicalize_city(utf8("Chennai")), utf8("Chennai"));
        assert_eq!(canonicalize_city(utf8("navi mumbai")), utf8("Navi Mumbai"));
    }

    #[test]
    fn category_trims_before_mapping() {
        assert_eq!(
            canonicalize_category(utf8("  Electronics & Accessories ")),
            utf8("Electronics")
        );
        assert_eq!(canonicalize_category(utf8("electronicss")), utf8("Electronics"));
        assert_eq!(canonicalize_category(utf8("home decor")), utf8("Home Decor"));
    }

    #[test]
    fn payment_synonyms_keep_canonical_spelling_verbatim() {
        assert_eq!(canonicalize_payment_method(utf8("PhonePe")), utf8("UPI"));
        assert_eq!(canonicalize_payment_method(utf8("cc")), utf8("Credit Card"));
        assert_eq!(
            canonicalize_payment_method(utf8("C.O.D")),
            utf8("Cash on Delivery")
        );
        assert_eq!(canonicalize_payment_method(utf8("emi")), utf8("Emi"));
    }

    #[test]
    fn missing_cells_surface_as_the_nan_bucket() {
        assert_eq!(canonicalize_city(Value::Null), utf8("Nan"));
        assert_eq!(canonicalize_payment_method(Value::Null), utf8("Nan"));
    }

    #[test]
    fn canonical_output_is_a_fixed_point() {
        let once = canonicalize_city(utf8("bangalore"));
        assert_eq!(canonicalize_city(once.clone()), once);
        let bucket = canonicalize_city(Value::Null);
        assert_eq!(canonicalize_city(bucket.clone()), bucket);
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("cash on delivery"), "Cash On Delivery");
        assert_eq!(title_case("delhi"), "Delhi");
        assert_eq!(title_case(""), "");
    }
}
