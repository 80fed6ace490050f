use std::fs;
use std::sync::Arc;

use order_cleaning::CleaningError;
use order_cleaning::job::CleaningJob;
use order_cleaning::observability::CleaningObserver;
use order_cleaning::pipeline::CleaningOptions;
use order_cleaning::types::Value;

#[test]
fn job_cleans_fixture_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cleaned.csv");

    let outcome = CleaningJob::new("tests/fixtures/orders.csv", &output)
        .run()
        .unwrap();

    assert_eq!(outcome.rows_read, 5);
    // One duplicate transaction collapses.
    assert_eq!(outcome.rows_written, 4);
    assert!(outcome.save_error.is_none());
    assert_eq!(outcome.dataset.row_count(), 4);

    let city = outcome.dataset.schema.index_of("customer_city").unwrap();
    assert_eq!(
        outcome.dataset.rows[0][city],
        Value::Utf8("Bengaluru".to_string())
    );

    let written = fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next().unwrap(),
        "order_date,original_price_inr,customer_rating,customer_city,is_prime_member,\
         is_prime_eligible,is_festival_sale,category,delivery_days,customer_id,product_id,\
         final_amount_inr,payment_method"
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with("2025-01-05,1234.5,3,Bengaluru,true,false,true,Electronics,0,"));
    // Four data rows survive.
    assert_eq!(written.lines().count(), 5);
}

#[test]
fn job_with_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cleaned.csv");

    let err = CleaningJob::new(dir.path().join("absent.csv"), &output)
        .run()
        .unwrap_err();
    // Load failures abort before any cleaning or saving happens.
    assert!(matches!(err, CleaningError::Io(_) | CleaningError::Csv(_)));
    assert!(!output.exists());
}

#[derive(Default)]
struct SaveErrorProbe {
    reported: std::sync::Mutex<Vec<String>>,
}

impl CleaningObserver for SaveErrorProbe {
    fn on_save_error(&self, path: &std::path::Path, _error: &CleaningError) {
        self.reported.lock().unwrap().push(path.display().to_string());
    }
}

#[test]
fn job_reports_save_failure_but_keeps_the_cleaned_table() {
    let dir = tempfile::tempdir().unwrap();
    let probe = Arc::new(SaveErrorProbe::default());
    let options = CleaningOptions {
        observer: Some(probe.clone()),
        ..Default::default()
    };

    // Writing to the directory itself cannot succeed.
    let outcome = CleaningJob::new("tests/fixtures/orders.csv", dir.path())
        .with_options(options)
        .run()
        .unwrap();

    assert!(outcome.save_error.is_some());
    assert_eq!(outcome.dataset.row_count(), 4);
    assert_eq!(probe.reported.lock().unwrap().len(), 1);
}
