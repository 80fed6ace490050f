//! CSV load adapter.
//!
//! Ingestion is deliberately untyped: every cell arrives as a raw trimmed string (or
//! [`Value::Null`] for an empty field) and all typing decisions belong to the cleaning rules
//! downstream. The only validation performed here is the column contract: the input must carry
//! every column in [`REQUIRED_COLUMNS`]. A missing or unreadable file is a fatal error: nothing
//! is cleaned and nothing is written.

use std::path::Path;

use crate::error::{CleaningError, CleaningResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Input columns the cleaning contract requires. Extra columns are preserved untouched.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "order_date",
    "original_price_inr",
    "customer_rating",
    "customer_city",
    "is_prime_member",
    "is_prime_eligible",
    "is_festival_sale",
    "category",
    "delivery_days",
    "customer_id",
    "product_id",
    "final_amount_inr",
    "payment_method",
];

/// Ingest a raw CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers; the schema is derived from the header row with every column typed
///   [`DataType::Utf8`] (raw, pre-cleaning).
/// - Headers must contain all [`REQUIRED_COLUMNS`] (order can differ, extra columns are kept).
/// - Cells are trimmed; an empty field becomes [`Value::Null`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> CleaningResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest raw CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> CleaningResult<DataSet> {
    let headers = rdr.headers()?.clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !headers.iter().any(|h| h == *name))
        .collect();
    if !missing.is_empty() {
        return Err(CleaningError::SchemaMismatch {
            message: format!(
                "missing required column(s) {missing:?}. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        });
    }

    let schema = Schema::new(
        headers
            .iter()
            .map(|name| Field::new(name, DataType::Utf8))
            .collect(),
    );

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = schema
            .fields
            .iter()
            .enumerate()
            .map(|(idx, _)| raw_cell(record.get(idx).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(DataSet::new(schema, rows))
}

fn raw_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Value::Null
    } else {
        Value::Utf8(trimmed.to_owned())
    }
}
