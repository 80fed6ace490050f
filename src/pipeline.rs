//! The cleaning pipeline orchestrator.
//!
//! [`clean`] applies the per-column rules in a fixed stage order, then the two table-wide
//! passes (duplicate elimination and price-outlier capping), which must run after the column
//! rules that feed their key/value columns. Column rules are independent of one another, so
//! their relative order carries no meaning; the fixed order exists for stable narration.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use crate::cleaning::{boolean, categorical, currency, dedup, delivery, outliers, rating, temporal};
use crate::error::{CleaningError, CleaningResult};
use crate::ingestion::REQUIRED_COLUMNS;
use crate::observability::{CleaningObserver, CleaningStage, StageStats};
use crate::types::{DataSet, DataType, Value};

/// Composite key identifying one underlying transaction.
const DEDUP_KEY_COLUMNS: [&str; 4] = [
    "customer_id",
    "product_id",
    "order_date",
    "final_amount_inr",
];

/// Options controlling pipeline behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct CleaningOptions {
    /// Optional observer for per-stage progress narration.
    pub observer: Option<Arc<dyn CleaningObserver>>,
    /// Row count at which a stage switches from sequential to rayon-parallel cell application.
    /// The rules are pure and per-cell, so this is an optimization knob only.
    pub parallel_row_threshold: usize,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            observer: None,
            parallel_row_threshold: 8_192,
        }
    }
}

impl fmt::Debug for CleaningOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleaningOptions")
            .field("observer_set", &self.observer.is_some())
            .field("parallel_row_threshold", &self.parallel_row_threshold)
            .finish()
    }
}

/// Run the full cleaning pipeline over a dataset and return the cleaned copy.
///
/// All 13 contract columns must be present ([`CleaningError::SchemaMismatch`] otherwise);
/// columns outside the contract pass through untouched. Row order is preserved throughout and
/// only duplicate elimination changes the row count. Per-value parse failures degrade the cell
/// to [`Value::Null`] and never abort the run.
///
/// Re-running the pipeline on its own output is a no-op: every rule passes already-clean cells
/// through, and the two table-wide passes are fixed points.
pub fn clean(dataset: &DataSet, options: &CleaningOptions) -> CleaningResult<DataSet> {
    for name in REQUIRED_COLUMNS {
        if dataset.schema.index_of(name).is_none() {
            return Err(CleaningError::SchemaMismatch {
                message: format!("missing required column '{name}'"),
            });
        }
    }

    let mut ds = dataset.clone();

    cell_stage(&mut ds, options, CleaningStage::OrderDate, &["order_date"], DataType::Date, temporal::normalize_order_date)?;
    cell_stage(&mut ds, options, CleaningStage::OriginalPrice, &["original_price_inr"], DataType::Float64, currency::normalize_price)?;
    cell_stage(&mut ds, options, CleaningStage::CustomerRating, &["customer_rating"], DataType::Float64, rating::normalize_rating)?;
    cell_stage(&mut ds, options, CleaningStage::CustomerCity, &["customer_city"], DataType::Utf8, categorical::canonicalize_city)?;
    cell_stage(
        &mut ds,
        options,
        CleaningStage::BooleanFlags,
        &["is_prime_member", "is_prime_eligible", "is_festival_sale"],
        DataType::Bool,
        boolean::normalize_flag,
    )?;
    cell_stage(&mut ds, options, CleaningStage::Category, &["category"], DataType::Utf8, categorical::canonicalize_category)?;
    cell_stage(&mut ds, options, CleaningStage::DeliveryDays, &["delivery_days"], DataType::Float64, delivery::normalize_delivery_days)?;
    cell_stage(&mut ds, options, CleaningStage::PaymentMethod, &["payment_method"], DataType::Utf8, categorical::canonicalize_payment_method)?;

    let obs = options.observer.as_deref();

    if let Some(o) = obs {
        o.on_stage_start(CleaningStage::Duplicates, ds.row_count());
    }
    let removed = dedup::drop_duplicates(&mut ds, &DEDUP_KEY_COLUMNS)?;
    if let Some(o) = obs {
        o.on_stage_end(
            CleaningStage::Duplicates,
            StageStats {
                rows: ds.row_count(),
                affected: removed,
            },
        );
    }

    if let Some(o) = obs {
        o.on_stage_start(CleaningStage::PriceOutliers, ds.row_count());
    }
    let capped = outliers::cap_upper_outliers(&mut ds, "original_price_inr")?;
    if let Some(o) = obs {
        o.on_stage_end(
            CleaningStage::PriceOutliers,
            StageStats {
                rows: ds.row_count(),
                affected: capped,
            },
        );
    }

    Ok(ds)
}

/// Apply one per-cell rule to each listed column under a single stage notification, updating the
/// fields' post-cleaning data type.
fn cell_stage(
    ds: &mut DataSet,
    options: &CleaningOptions,
    stage: CleaningStage,
    columns: &[&str],
    out_type: DataType,
    rule: fn(Value) -> Value,
) -> CleaningResult<()> {
    let rows = ds.row_count();
    if let Some(o) = options.observer.as_deref() {
        o.on_stage_start(stage, rows);
    }

    let mut affected = 0;
    for name in columns {
        let idx = ds
            .schema
            .index_of(name)
            .ok_or_else(|| CleaningError::SchemaMismatch {
                message: format!("missing required column '{name}'"),
            })?;
        affected += map_cells(&mut ds.rows, idx, options.parallel_row_threshold, rule);
        ds.schema.fields[idx].data_type = out_type.clone();
    }

    if let Some(o) = options.observer.as_deref() {
        o.on_stage_end(stage, StageStats { rows, affected });
    }
    Ok(())
}

/// Rewrite one column cell-by-cell, returning how many cells changed. Dispatches to rayon once
/// the row count reaches `threshold`.
fn map_cells(rows: &mut [Vec<Value>], idx: usize, threshold: usize, rule: fn(Value) -> Value) -> usize {
    let apply = |row: &mut Vec<Value>| -> usize {
        let old = std::mem::replace(&mut row[idx], Value::Null);
        let new = rule(old.clone());
        let changed = usize::from(new != old);
        row[idx] = new;
        changed
    };

    if rows.len() >= threshold {
        rows.par_iter_mut().map(apply).sum()
    } else {
        rows.iter_mut().map(apply).sum()
    }
}
