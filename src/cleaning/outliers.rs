//! IQR-based capping of extreme values in a numeric column.

use crate::error::{CleaningError, CleaningResult};
use crate::types::{DataSet, Value};

/// Multiplier for the IQR upper fence.
const IQR_FENCE: f64 = 1.5;

/// Cap the upper tail of one numeric column in place. Returns the number of values capped.
///
/// Q1 and Q3 are estimated over the column's non-missing values with linear interpolation
/// (rank `q * (n - 1)` over the sorted values); any value strictly greater than `Q3 + 1.5 * IQR` is
/// replaced by that limit. Values below the limit are untouched (a low price reads as a
/// genuine discount, not a data error) and missing cells are excluded from the estimate and
/// left unchanged. A column with no non-missing values is a no-op.
pub fn cap_upper_outliers(ds: &mut DataSet, column: &str) -> CleaningResult<usize> {
    let idx = ds
        .schema
        .index_of(column)
        .ok_or_else(|| CleaningError::SchemaMismatch {
            message: format!("missing outlier column '{column}'"),
        })?;

    let mut values: Vec<f64> = ds
        .column_values(idx)
        .filter_map(|v| match v {
            Value::Float64(f) => Some(*f),
            _ => None,
        })
        .collect();
    if values.is_empty() {
        return Ok(0);
    }
    values.sort_by(f64::total_cmp);

    let q1 = quantile(&values, 0.25);
    let q3 = quantile(&values, 0.75);
    let upper_limit = q3 + IQR_FENCE * (q3 - q1);

    let mut capped = 0;
    for row in &mut ds.rows {
        if let Value::Float64(v) = &mut row[idx] {
            if *v > upper_limit {
                *v = upper_limit;
                capped += 1;
            }
        }
    }
    Ok(capped)
}

/// Linear-interpolation quantile over an already-sorted slice. `q` in `[0, 1]`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}
