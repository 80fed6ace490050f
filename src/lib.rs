//! `order-cleaning` is a small library for normalizing raw e-commerce order exports into clean,
//! typed tables that downstream analytics can rely on.
//!
//! One CSV export is ingested into an in-memory [`types::DataSet`], a fixed sequence of
//! per-column cleaning rules rewrites each column into its one canonical representation,
//! duplicate transactions are dropped, extreme price outliers are capped, and the cleaned table
//! is written back out as CSV.
//!
//! ## What the pipeline does
//!
//! Per-column rules (each pure and per-cell; a value that fails to parse degrades to
//! [`types::Value::Null`], never aborts the run):
//!
//! - `order_date`: mixed-format date strings parsed day-first into typed dates
//! - `original_price_inr`: `₹` glyphs and comma separators stripped, parsed to floats
//! - `customer_rating`: `"3/5"`, `"4 stars"`, `"2.5/5.0"` unified onto a 1.0–5.0 scale
//! - `customer_city`, `category`, `payment_method`: case-insensitive synonym tables map known
//!   spellings to canonical forms; unknown values pass through title-cased
//! - `is_prime_member`, `is_prime_eligible`, `is_festival_sale`: truthy/falsy tokens coerced to
//!   booleans
//! - `delivery_days`: `"Same Day"`/`"1-2 days"` rewritten, then bounded to `0..=30`
//!
//! Table-wide passes, after the column rules:
//!
//! - duplicate transactions (same customer, product, date and final amount) collapse to their
//!   first occurrence
//! - prices beyond the IQR upper fence (`Q3 + 1.5·IQR`) are capped at the fence, not removed
//!
//! ## Quick example: clean an in-memory table
//!
//! ```rust
//! use order_cleaning::ingestion::ingest_csv_from_reader;
//! use order_cleaning::pipeline::{CleaningOptions, clean};
//! use order_cleaning::types::Value;
//!
//! # fn main() -> Result<(), order_cleaning::CleaningError> {
//! let input = "\
//! order_date,original_price_inr,customer_rating,customer_city,is_prime_member,\
//! is_prime_eligible,is_festival_sale,category,delivery_days,customer_id,product_id,\
//! final_amount_inr,payment_method
//! 05/01/2025,\"₹1,234.50\",4 stars,BANGALORE,Y,no,1,electronicss,Same Day,c1,p1,999,phonepe
//! ";
//! let mut rdr = csv::ReaderBuilder::new().from_reader(input.as_bytes());
//! let raw = ingest_csv_from_reader(&mut rdr)?;
//!
//! let cleaned = clean(&raw, &CleaningOptions::default())?;
//! let city = cleaned.schema.index_of("customer_city").unwrap();
//! assert_eq!(cleaned.rows[0][city], Value::Utf8("Bengaluru".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Quick example: file-to-file job
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use order_cleaning::job::CleaningJob;
//! use order_cleaning::observability::StdErrObserver;
//! use order_cleaning::pipeline::CleaningOptions;
//!
//! # fn main() -> Result<(), order_cleaning::CleaningError> {
//! let options = CleaningOptions {
//!     observer: Some(Arc::new(StdErrObserver)),
//!     ..Default::default()
//! };
//! let outcome = CleaningJob::new("orders_raw.csv", "orders_clean.csv")
//!     .with_options(options)
//!     .run()?;
//!
//! println!("read={} written={}", outcome.rows_read, outcome.rows_written);
//! if let Some(err) = &outcome.save_error {
//!     eprintln!("output not persisted: {err}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A missing or unreadable input is the only fatal failure: the job returns the error and nothing
//! is cleaned or written. A failed save is reported through the outcome (and any configured
//! [`observability::CleaningObserver`]) while the cleaned table stays available in memory.
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV load adapter producing a raw, untyped [`types::DataSet`]
//! - [`cleaning`]: the per-column rules plus deduplication and outlier capping
//! - [`pipeline`]: the orchestrator applying every rule in a fixed order
//! - [`export`]: CSV save adapter
//! - [`job`]: load → clean → save in one call
//! - [`observability`]: optional per-stage progress narration
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: error types shared across the crate

pub mod cleaning;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod job;
pub mod observability;
pub mod pipeline;
pub mod types;

pub use error::{CleaningError, CleaningResult};
