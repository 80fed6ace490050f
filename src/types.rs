//! Core data model types for the cleaning pipeline.
//!
//! The crate ingests a raw CSV export into an in-memory [`DataSet`] whose cells start out as
//! untyped strings, then the cleaning rules rewrite each column into its one canonical
//! representation ([`DataType`]).

use chrono::NaiveDate;

/// Logical data type of a column after cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// Calendar date (no time component).
    Date,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// An ordered list of fields describing the columns of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single cell value in a [`DataSet`].
///
/// [`Value::Null`] is the first-class "missing" marker: every cleaning rule degrades a cell it
/// cannot parse to `Null` instead of raising, and the table-wide passes (deduplication, outlier
/// capping) treat `Null` as absent rather than as a domain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// Calendar date.
    Date(NaiveDate),
    /// 64-bit float. Cleaning rules never store non-finite floats.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// True if this cell is the missing marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The display form written by the CSV export adapter.
    ///
    /// `Null` serializes as the empty field; dates as `YYYY-MM-DD`; bools as `true`/`false`
    /// (which round-trips through the boolean rule's token table).
    pub fn to_field(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::Float64(v) => v.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Utf8(s) => s.clone(),
        }
    }

    /// Unconditional string coercion used by the categorical rules.
    ///
    /// Unlike [`Value::to_field`], a missing cell coerces to the literal `"nan"` placeholder, so
    /// categorical columns surface missing entries as a visible `"Nan"` bucket instead of an
    /// empty field.
    pub fn coerce_to_string(&self) -> String {
        match self {
            Value::Null => "nan".to_string(),
            other => other.to_field(),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields. Cleaning
/// rules mutate a single column in place; row order and cross-column alignment are preserved by
/// every pass, and only duplicate elimination changes the row count.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the cells of one column, by column index.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }
}
