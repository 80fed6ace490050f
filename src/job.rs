//! End-to-end cleaning job: load → clean → save.

use std::path::PathBuf;

use crate::error::{CleaningError, CleaningResult};
use crate::export::write_csv_to_path;
use crate::ingestion::ingest_csv_from_path;
use crate::pipeline::{CleaningOptions, clean};
use crate::types::DataSet;

/// An owned description of one cleaning run.
///
/// Failure handling is two-tier: a load failure is fatal ([`CleaningJob::run`] returns the error
/// and nothing is cleaned or written), while a save failure is reported through
/// [`CleaningOutcome::save_error`] and
/// [`crate::observability::CleaningObserver::on_save_error`], and the cleaned table is still
/// returned in memory for the caller to act on.
#[derive(Debug, Clone)]
pub struct CleaningJob {
    /// Path to the raw input CSV.
    pub input: PathBuf,
    /// Path the cleaned CSV is written to.
    pub output: PathBuf,
    /// Options controlling the pipeline.
    pub options: CleaningOptions,
}

impl CleaningJob {
    /// Create a job with default options.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options: CleaningOptions::default(),
        }
    }

    /// Replace the job's pipeline options.
    pub fn with_options(mut self, options: CleaningOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the job.
    pub fn run(&self) -> CleaningResult<CleaningOutcome> {
        let raw = ingest_csv_from_path(&self.input)?;
        let rows_read = raw.row_count();

        let dataset = clean(&raw, &self.options)?;
        let rows_written = dataset.row_count();

        let save_error = match write_csv_to_path(&dataset, &self.output) {
            Ok(()) => None,
            Err(e) => {
                if let Some(obs) = self.options.observer.as_deref() {
                    obs.on_save_error(&self.output, &e);
                }
                Some(e)
            }
        };

        Ok(CleaningOutcome {
            dataset,
            rows_read,
            rows_written,
            save_error,
        })
    }
}

/// Result of a [`CleaningJob`] run.
#[derive(Debug)]
pub struct CleaningOutcome {
    /// The cleaned table, kept in memory even when the save step failed.
    pub dataset: DataSet,
    /// Rows ingested from the raw input.
    pub rows_read: usize,
    /// Rows in the cleaned table (differs from `rows_read` only through deduplication).
    pub rows_written: usize,
    /// The save failure, if writing the output did not succeed.
    pub save_error: Option<CleaningError>,
}
