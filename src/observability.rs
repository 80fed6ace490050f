//! Progress narration for pipeline runs.
//!
//! Stage events are informational only: observers are optional, carry no contract, and cannot
//! influence the cleaning result.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::CleaningError;

/// One stage of the cleaning pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningStage {
    /// Day-first date parsing of `order_date`.
    OrderDate,
    /// Currency stripping and numeric parsing of `original_price_inr`.
    OriginalPrice,
    /// Rating-scale unification of `customer_rating`.
    CustomerRating,
    /// City canonicalization of `customer_city`.
    CustomerCity,
    /// Boolean coercion of the three flag columns.
    BooleanFlags,
    /// Category canonicalization of `category`.
    Category,
    /// Delivery-day sanitization of `delivery_days`.
    DeliveryDays,
    /// Payment-method canonicalization of `payment_method`.
    PaymentMethod,
    /// Composite-key duplicate elimination.
    Duplicates,
    /// IQR capping of `original_price_inr`.
    PriceOutliers,
}

impl CleaningStage {
    /// Stable snake_case name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            CleaningStage::OrderDate => "order_date",
            CleaningStage::OriginalPrice => "original_price_inr",
            CleaningStage::CustomerRating => "customer_rating",
            CleaningStage::CustomerCity => "customer_city",
            CleaningStage::BooleanFlags => "boolean_flags",
            CleaningStage::Category => "category",
            CleaningStage::DeliveryDays => "delivery_days",
            CleaningStage::PaymentMethod => "payment_method",
            CleaningStage::Duplicates => "duplicate_transactions",
            CleaningStage::PriceOutliers => "price_outliers",
        }
    }
}

/// Minimal stats reported when a stage finishes.
///
/// `affected` counts cells rewritten for the per-column stages, rows removed for
/// [`CleaningStage::Duplicates`], and values capped for [`CleaningStage::PriceOutliers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageStats {
    /// Row count when the stage finished.
    pub rows: usize,
    /// Stage-specific count of cells/rows touched.
    pub affected: usize,
}

/// Observer interface for pipeline progress and save failures.
///
/// Implementors can record metrics, logs, or both; all hooks default to no-ops.
pub trait CleaningObserver: Send + Sync {
    /// Called when a stage begins, with the current row count.
    fn on_stage_start(&self, _stage: CleaningStage, _rows: usize) {}

    /// Called when a stage finishes.
    fn on_stage_end(&self, _stage: CleaningStage, _stats: StageStats) {}

    /// Called when writing the cleaned output fails. The failure is reported, not fatal: the
    /// cleaned table is still returned to the caller.
    fn on_save_error(&self, _path: &Path, _error: &CleaningError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn CleaningObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn CleaningObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl CleaningObserver for CompositeObserver {
    fn on_stage_start(&self, stage: CleaningStage, rows: usize) {
        for o in &self.observers {
            o.on_stage_start(stage, rows);
        }
    }

    fn on_stage_end(&self, stage: CleaningStage, stats: StageStats) {
        for o in &self.observers {
            o.on_stage_end(stage, stats);
        }
    }

    fn on_save_error(&self, path: &Path, error: &CleaningError) {
        for o in &self.observers {
            o.on_save_error(path, error);
        }
    }
}

/// Logs cleaning events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl CleaningObserver for StdErrObserver {
    fn on_stage_start(&self, stage: CleaningStage, rows: usize) {
        eprintln!("[clean][start] stage={} rows={rows}", stage.name());
    }

    fn on_stage_end(&self, stage: CleaningStage, stats: StageStats) {
        eprintln!(
            "[clean][done] stage={} rows={} affected={}",
            stage.name(),
            stats.rows,
            stats.affected
        );
    }

    fn on_save_error(&self, path: &Path, error: &CleaningError) {
        eprintln!("[clean][save-error] path={} err={error}", path.display());
    }
}

/// Appends cleaning events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl CleaningObserver for FileObserver {
    fn on_stage_start(&self, stage: CleaningStage, rows: usize) {
        self.append_line(&format!("{} start stage={} rows={rows}", unix_ts(), stage.name()));
    }

    fn on_stage_end(&self, stage: CleaningStage, stats: StageStats) {
        self.append_line(&format!(
            "{} done stage={} rows={} affected={}",
            unix_ts(),
            stage.name(),
            stats.rows,
            stats.affected
        ));
    }

    fn on_save_error(&self, path: &Path, error: &CleaningError) {
        self.append_line(&format!(
            "{} save-error path={} err={error}",
            unix_ts(),
            path.display()
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
