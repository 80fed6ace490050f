//! CSV save adapter.
//!
//! Persists a [`DataSet`] as delimited text: a header row of column names, one record per table
//! row, missing values serialized as an empty field. A failed write surfaces as an error for the
//! caller to report; no partial-write recovery or retry is attempted.

use std::path::Path;

use crate::error::CleaningResult;
use crate::types::DataSet;

/// Write a dataset to a CSV file at `path`.
pub fn write_csv_to_path(ds: &DataSet, path: impl AsRef<Path>) -> CleaningResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_csv_to_writer(ds, &mut wtr)
}

/// Write a dataset to an existing CSV writer.
pub fn write_csv_to_writer<W: std::io::Write>(
    ds: &DataSet,
    wtr: &mut csv::Writer<W>,
) -> CleaningResult<()> {
    wtr.write_record(ds.schema.field_names())?;
    for row in &ds.rows {
        wtr.write_record(row.iter().map(|v| v.to_field()))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_csv_to_writer;
    use crate::types::{DataSet, DataType, Field, Schema, Value};
    use chrono::NaiveDate;

    #[test]
    fn writes_header_and_serialized_cells() {
        let schema = Schema::new(vec![
            Field::new("order_date", DataType::Date),
            Field::new("original_price_inr", DataType::Float64),
            Field::new("is_prime_member", DataType::Bool),
            Field::new("customer_city", DataType::Utf8),
        ]);
        let ds = DataSet::new(
            schema,
            vec![
                vec![
                    Value::Date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()),
                    Value::Float64(1234.5),
                    Value::Bool(true),
                    Value::Utf8("Bengaluru".to_string()),
                ],
                vec![Value::Null, Value::Null, Value::Null, Value::Utf8("Nan".to_string())],
            ],
        );

        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_csv_to_writer(&ds, &mut wtr).unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        assert_eq!(
            out,
            "order_date,original_price_inr,is_prime_member,customer_city\n\
             2025-01-05,1234.5,true,Bengaluru\n\
             ,,,Nan\n"
        );
    }
}
