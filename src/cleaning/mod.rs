//! Column cleaning rules and table-wide passes.
//!
//! Each column rule is a pure, per-cell total function `fn(Value) -> Value`: it either produces
//! the column's one canonical representation or degrades the cell to [`crate::types::Value::Null`].
//! No rule raises for a bad value, and no rule reads any column other than its own. Already-clean
//! cells pass through unchanged (range clips and domain bounds re-apply), which is what makes the
//! full pipeline idempotent on its own output.
//!
//! Per-cell rules:
//!
//! - [`temporal::normalize_order_date`]: mixed-format, day-first date parsing
//! - [`currency::normalize_price`]: `₹`/comma stripping and numeric parsing
//! - [`rating::normalize_rating`]: `x/y` and `"N stars"` forms onto a 1.0–5.0 scale
//! - [`categorical`]: synonym-table canonicalization for city, category and payment method
//! - [`boolean::normalize_flag`]: truthy/falsy token coercion
//! - [`delivery::normalize_delivery_days`]: special-case rewrites plus 0..=30 domain bounds
//!
//! Table-wide passes, run by the pipeline after the rules that feed them:
//!
//! - [`dedup::drop_duplicates`]: composite-key duplicate elimination, keep-first
//! - [`outliers::cap_upper_outliers`]: IQR upper-fence capping
//!
//! ## Example
//!
//! ```rust
//! use order_cleaning::cleaning::rating::normalize_rating;
//! use order_cleaning::types::Value;
//!
//! assert_eq!(
//!     normalize_rating(Value::Utf8("4 stars".to_string())),
//!     Value::Float64(4.0)
//! );
//! assert_eq!(normalize_rating(Value::Utf8("abc".to_string())), Value::Null);
//! ```

pub mod boolean;
pub mod categorical;
pub mod currency;
pub mod dedup;
pub mod delivery;
pub mod outliers;
pub mod rating;
pub mod temporal;
