use std::sync::{Arc, Mutex};

use people_records::ingestion::{
    ingest_from_path, IngestionContext, IngestionFormat, IngestionObserver, IngestionOptions,
    IngestionSeverity, IngestionStats,
};
use people_records::RecordError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<IngestionStats>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, _ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &RecordError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &RecordError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options(obs: &Arc<RecordingObserver>, alert_at_or_above: IngestionSeverity) -> IngestionOptions {
    IngestionOptions {
        observer: Some(obs.clone()),
        alert_at_or_above,
        ..Default::default()
    }
}

#[test]
fn observer_receives_stats_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let people = ingest_from_path("tests/fixtures/people.json", &options(&obs, IngestionSeverity::Critical)).unwrap();

    assert_eq!(people.len(), 12);
    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![IngestionStats {
            rows: 12,
            missing_birth_dates: 1
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());

    // Missing file -> Io error -> Critical
    let err = ingest_from_path("tests/fixtures/does_not_exist.json", &options(&obs, IngestionSeverity::Critical))
        .unwrap_err();
    assert!(matches!(err, RecordError::Io(_)));

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Critical]);
    assert_eq!(alerts, vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        // people.json is not CSV; the header row lacks the required columns.
        format: Some(IngestionFormat::Csv),
        ..options(&obs, IngestionSeverity::Critical)
    };

    let _ = ingest_from_path("tests/fixtures/people.json", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_alert_threshold_alerts_on_errors() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        format: Some(IngestionFormat::Csv),
        ..options(&obs, IngestionSeverity::Error)
    };
    let _ = ingest_from_path("tests/fixtures/people.json", &opts).unwrap_err();

    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![IngestionSeverity::Error]);
}

#[test]
fn unknown_extension_fails_before_loading() {
    let obs = Arc::new(RecordingObserver::default());
    let err = ingest_from_path("tests/fixtures/people.txt", &options(&obs, IngestionSeverity::Error)).unwrap_err();

    assert!(err.to_string().contains("cannot infer format"));
    assert!(obs.failures.lock().unwrap().is_empty());
}
