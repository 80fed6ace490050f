//! Duplicate-transaction elimination.

use std::collections::HashSet;

use chrono::Datelike;

use crate::error::{CleaningError, CleaningResult};
use crate::types::{DataSet, Value};

/// Hashable stand-in for one key cell. Floats are keyed by bit pattern (with `-0.0` normalized
/// to `0.0`); missing cells compare equal to each other, so rows whose key cells are all missing
/// collapse like any other duplicates.
#[derive(Debug, PartialEq, Eq, Hash)]
enum KeyPart {
    Missing,
    Day(i32),
    Bits(u64),
    Flag(bool),
    Text(String),
}

impl KeyPart {
    fn of(value: &Value) -> Self {
        match value {
            Value::Null => KeyPart::Missing,
            Value::Date(d) => KeyPart::Day(d.num_days_from_ce()),
            Value::Float64(v) => {
                let v = if *v == 0.0 { 0.0 } else { *v };
                KeyPart::Bits(v.to_bits())
            }
            Value::Bool(b) => KeyPart::Flag(*b),
            Value::Utf8(s) => KeyPart::Text(s.clone()),
        }
    }
}

/// Remove rows that repeat an earlier row's composite key, keeping the first occurrence in row
/// order. Returns the number of rows removed.
///
/// Two rows are duplicates iff every `key_columns` cell compares equal. Non-key columns are not
/// consulted, so the surviving row keeps its own values everywhere else.
pub fn drop_duplicates(ds: &mut DataSet, key_columns: &[&str]) -> CleaningResult<usize> {
    let mut idxs = Vec::with_capacity(key_columns.len());
    for name in key_columns {
        let idx = ds
            .schema
            .index_of(name)
            .ok_or_else(|| CleaningError::SchemaMismatch {
                message: format!("missing duplicate-key column '{name}'"),
            })?;
        idxs.push(idx);
    }

    let before = ds.rows.len();
    let mut seen: HashSet<Vec<KeyPart>> = HashSet::with_capacity(before);
    ds.rows
        .retain(|row| seen.insert(idxs.iter().map(|&i| KeyPart::of(&row[i])).collect()));
    Ok(before - ds.rows.len())
}
